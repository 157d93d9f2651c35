use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Simulation configuration.
/// The time step is derived on demand, never stored, so it can't drift from its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Tick frequency in Hz
    pub frames_per_second: f32,
    /// Simulated time per real second
    pub simulation_speed: f32,
    /// GM of the cursor in the inverse-square law
    pub gravitational_parameter: f32,
    /// Spawn at a uniformly random point instead of the centre
    pub spawn_randomly: bool,
    /// Exclusive upper bound of spawned radii
    pub max_radius: f32,
    /// Ring-buffer capacity; `None` keeps every particle forever
    pub max_particles: Option<usize>,
    /// Random seed for deterministic simulation
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frames_per_second: DEFAULT_FRAMES_PER_SECOND,
            simulation_speed: DEFAULT_SIMULATION_SPEED,
            gravitational_parameter: DEFAULT_GRAVITATIONAL_PARAMETER,
            spawn_randomly: false,
            max_radius: DEFAULT_MAX_RADIUS,
            max_particles: None,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimConfig {
    /// Simulated time elapsed per tick
    pub fn time_step(&self) -> f32 {
        self.simulation_speed / self.frames_per_second
    }

    /// Real time between ticks (1000 / fps milliseconds)
    pub fn tick_period(&self) -> Duration {
        tick_period(self.frames_per_second)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_frames_per_second(self.frames_per_second)?;
        validate_simulation_speed(self.simulation_speed)?;
        validate_gravitational_parameter(self.gravitational_parameter)?;
        if !(self.max_radius.is_finite() && self.max_radius > 0.0) {
            return Err(ConfigError::MaxRadius(self.max_radius));
        }
        if self.max_particles == Some(0) {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}

/// Period of a timer firing `frames_per_second` times a second
pub fn tick_period(frames_per_second: f32) -> Duration {
    Duration::from_secs_f64(1.0 / frames_per_second as f64)
}

pub fn validate_frames_per_second(fps: f32) -> Result<(), ConfigError> {
    if fps.is_finite() && fps > 0.0 && fps <= MAX_FRAMES_PER_SECOND {
        Ok(())
    } else {
        Err(ConfigError::FramesPerSecond(fps))
    }
}

pub fn validate_simulation_speed(speed: f32) -> Result<(), ConfigError> {
    if speed.is_finite() && speed > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::SimulationSpeed(speed))
    }
}

pub fn validate_gravitational_parameter(gm: f32) -> Result<(), ConfigError> {
    if gm.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::GravitationalParameter(gm))
    }
}

/// A configuration value outside its accepted range
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    FramesPerSecond(f32),
    SimulationSpeed(f32),
    GravitationalParameter(f32),
    MaxRadius(f32),
    ZeroCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FramesPerSecond(v) => write!(
                f,
                "frames per second must be in (0, {}], got {}",
                MAX_FRAMES_PER_SECOND, v
            ),
            ConfigError::SimulationSpeed(v) => {
                write!(f, "simulation speed must be positive and finite, got {}", v)
            }
            ConfigError::GravitationalParameter(v) => {
                write!(f, "gravitational parameter must be finite, got {}", v)
            }
            ConfigError::MaxRadius(v) => {
                write!(f, "max radius must be positive and finite, got {}", v)
            }
            ConfigError::ZeroCapacity => write!(f, "max particles must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.frames_per_second, 60.0);
        assert_eq!(config.simulation_speed, 5.0);
        assert_eq!(config.gravitational_parameter, 1e5);
        assert!(!config.spawn_randomly);
    }

    #[test]
    fn test_time_step_follows_inputs() {
        let mut config = SimConfig::default();
        assert!((config.time_step() - 5.0 / 60.0).abs() < 1e-7);

        config.frames_per_second = 30.0;
        assert!((config.time_step() - 5.0 / 30.0).abs() < 1e-7);

        config.simulation_speed = 1.5;
        assert!((config.time_step() - 0.05).abs() < 1e-7);
    }

    #[test]
    fn test_tick_period() {
        assert_eq!(tick_period(10.0), Duration::from_millis(100));
        assert_eq!(tick_period(4.0), Duration::from_millis(250));
        let period = tick_period(60.0).as_secs_f64() * 1000.0;
        assert!((period - 1000.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad_fps = SimConfig {
            frames_per_second: 0.0,
            ..SimConfig::default()
        };
        assert_eq!(bad_fps.validate(), Err(ConfigError::FramesPerSecond(0.0)));

        let bad_speed = SimConfig {
            simulation_speed: -1.0,
            ..SimConfig::default()
        };
        assert_eq!(bad_speed.validate(), Err(ConfigError::SimulationSpeed(-1.0)));

        let bad_gm = SimConfig {
            gravitational_parameter: f32::INFINITY,
            ..SimConfig::default()
        };
        assert!(matches!(
            bad_gm.validate(),
            Err(ConfigError::GravitationalParameter(_))
        ));

        let bad_capacity = SimConfig {
            max_particles: Some(0),
            ..SimConfig::default()
        };
        assert_eq!(bad_capacity.validate(), Err(ConfigError::ZeroCapacity));

        assert!(validate_frames_per_second(f32::NAN).is_err());
        assert!(validate_frames_per_second(MAX_FRAMES_PER_SECOND + 1.0).is_err());
    }

    #[test]
    fn test_negative_gm_allowed() {
        // Negative GM turns attraction into repulsion; still a valid setting
        assert!(validate_gravitational_parameter(-1e4).is_ok());
    }
}
