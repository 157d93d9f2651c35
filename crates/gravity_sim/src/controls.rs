//! Live parameter binding.
//!
//! Each control maps to one [`gravity_core::SimConfig`] field. Changes are validated, applied to the
//! [`SimulationState`], echoed back to the UI, and a frame-rate change restarts the
//! [`FrameClock`]. The windowed app delivers changes as events; headless callers use
//! [`apply_change`] directly.

use std::collections::HashMap;
use std::time::Duration;

use bevy::prelude::*;
use gravity_core::ConfigError;
use gravity_core::config::{
    validate_frames_per_second, validate_gravitational_parameter, validate_simulation_speed,
};

use crate::clock::FrameClock;
use crate::simulation::SimulationState;

/// The four live controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    FrameRate,
    SimulationSpeed,
    GravitationalParameter,
    RandomSpawn,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::FrameRate,
        Control::SimulationSpeed,
        Control::GravitationalParameter,
        Control::RandomSpawn,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::FrameRate => "fps",
            Self::SimulationSpeed => "simulation-speed",
            Self::GravitationalParameter => "GM",
            Self::RandomSpawn => "spawn-randomly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FrameRate => "Frame rate",
            Self::SimulationSpeed => "Simulation speed",
            Self::GravitationalParameter => "GM",
            Self::RandomSpawn => "Spawn randomly",
        }
    }

    /// Slider range as (min, max, step); `None` for the toggle
    pub fn range(&self) -> Option<(f32, f32, f32)> {
        match self {
            Self::FrameRate => Some((1.0, 120.0, 5.0)),
            Self::SimulationSpeed => Some((0.5, 20.0, 0.5)),
            Self::GravitationalParameter => Some((0.0, 1e6, 1e4)),
            Self::RandomSpawn => None,
        }
    }

    /// Current value of this control as a change, so it can be nudged or echoed
    pub fn current(&self, state: &SimulationState) -> ParameterChange {
        let config = &state.config;
        match self {
            Self::FrameRate => ParameterChange::FrameRate(config.frames_per_second),
            Self::SimulationSpeed => ParameterChange::SimulationSpeed(config.simulation_speed),
            Self::GravitationalParameter => {
                ParameterChange::GravitationalParameter(config.gravitational_parameter)
            }
            Self::RandomSpawn => ParameterChange::RandomSpawn(config.spawn_randomly),
        }
    }

    /// Move the control one step up or down (clamped to its range); the toggle flips
    pub fn nudge(&self, state: &SimulationState, up: bool) -> ParameterChange {
        match (self.current(state), self.range()) {
            (ParameterChange::RandomSpawn(on), _) => ParameterChange::RandomSpawn(!on),
            (change, Some((min, max, step))) => {
                let value = change.value().unwrap_or(min);
                let next = if up { value + step } else { value - step };
                change.with_value(next.clamp(min, max))
            }
            (change, None) => change,
        }
    }
}

/// A new value for one control
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum ParameterChange {
    FrameRate(f32),
    SimulationSpeed(f32),
    GravitationalParameter(f32),
    RandomSpawn(bool),
}

impl ParameterChange {
    pub fn control(&self) -> Control {
        match self {
            Self::FrameRate(_) => Control::FrameRate,
            Self::SimulationSpeed(_) => Control::SimulationSpeed,
            Self::GravitationalParameter(_) => Control::GravitationalParameter,
            Self::RandomSpawn(_) => Control::RandomSpawn,
        }
    }

    fn value(&self) -> Option<f32> {
        match *self {
            Self::FrameRate(v) | Self::SimulationSpeed(v) | Self::GravitationalParameter(v) => {
                Some(v)
            }
            Self::RandomSpawn(_) => None,
        }
    }

    fn with_value(&self, value: f32) -> Self {
        match self {
            Self::FrameRate(_) => Self::FrameRate(value),
            Self::SimulationSpeed(_) => Self::SimulationSpeed(value),
            Self::GravitationalParameter(_) => Self::GravitationalParameter(value),
            Self::RandomSpawn(on) => Self::RandomSpawn(*on),
        }
    }

    /// Text shown next to the control
    pub fn display_value(&self) -> String {
        match *self {
            Self::FrameRate(v) => format!("{}", v),
            Self::SimulationSpeed(v) => format!("{}", v),
            Self::GravitationalParameter(v) => format!("{}", v),
            Self::RandomSpawn(true) => "on".to_string(),
            Self::RandomSpawn(false) => "off".to_string(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::FrameRate(v) => validate_frames_per_second(v),
            Self::SimulationSpeed(v) => validate_simulation_speed(v),
            Self::GravitationalParameter(v) => validate_gravitational_parameter(v),
            Self::RandomSpawn(_) => Ok(()),
        }
    }
}

/// Sink that shows a control's value to the user
pub trait ValueEcho {
    fn echo(&mut self, control: Control, value: &str);
}

/// Echo sink that discards everything (headless runs)
impl ValueEcho for () {
    fn echo(&mut self, _control: Control, _value: &str) {}
}

/// Latest echoed text per control, read by the UI
#[derive(Resource, Debug, Default)]
pub struct ControlEcho {
    values: HashMap<Control, String>,
}

impl ControlEcho {
    pub fn get(&self, control: Control) -> Option<&str> {
        self.values.get(&control).map(String::as_str)
    }
}

impl ValueEcho for ControlEcho {
    fn echo(&mut self, control: Control, value: &str) {
        self.values.insert(control, value.to_string());
    }
}

/// What applying a change did beyond updating the config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingEffect {
    None,
    TimerRestarted { period: Duration },
}

/// Validate and apply one change. Rejected changes leave the state untouched.
pub fn apply_change(
    state: &mut SimulationState,
    clock: &mut FrameClock,
    echo: &mut impl ValueEcho,
    change: ParameterChange,
) -> Result<BindingEffect, ConfigError> {
    change.validate()?;

    let config = &mut state.config;
    let effect = match change {
        ParameterChange::FrameRate(fps) => {
            config.frames_per_second = fps;
            let handle = clock.restart(fps);
            BindingEffect::TimerRestarted {
                period: handle.period,
            }
        }
        ParameterChange::SimulationSpeed(speed) => {
            config.simulation_speed = speed;
            BindingEffect::None
        }
        ParameterChange::GravitationalParameter(gm) => {
            config.gravitational_parameter = gm;
            BindingEffect::None
        }
        ParameterChange::RandomSpawn(on) => {
            config.spawn_randomly = on;
            BindingEffect::None
        }
    };

    debug!(
        "{} = {} (time step {})",
        change.control().id(),
        change.display_value(),
        config.time_step()
    );
    echo.echo(change.control(), &change.display_value());
    Ok(effect)
}

/// Echo every control's current value (initial display)
pub fn echo_all(state: &SimulationState, echo: &mut impl ValueEcho) {
    for control in Control::ALL {
        echo.echo(control, &control.current(state).display_value());
    }
}
