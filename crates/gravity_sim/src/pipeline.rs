use bevy::prelude::*;
use gravity_core::DisplayList;

use super::clock::FrameClock;
use super::controls::{self, ControlEcho, ParameterChange};
use super::simulation::SimulationState;

/// Bevy plugin for the simulation pipeline.
/// Expects [`SimulationState`] and [`FrameClock`] to be inserted by the app.
pub struct SimulationPlugin;

/// Systems that mutate or report the simulation, in both Startup and Update;
/// input belongs before it, drawing after it
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimulationSet;

/// The most recently rendered frame
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct FrameDisplay(pub DisplayList);

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ParameterChange>()
            .init_resource::<FrameDisplay>()
            .init_resource::<ControlEcho>()
            .add_systems(Startup, log_simulation_start.in_set(SimulationSet))
            .add_systems(
                Update,
                (apply_parameter_changes, simulation_tick)
                    .chain()
                    .in_set(SimulationSet),
            );
    }
}

fn log_simulation_start(state: Res<SimulationState>, mut echo: ResMut<ControlEcho>) {
    let config = &state.config;
    info!(
        "Simulation started: {} fps, speed {}, GM {}, dt {:.4}, seed {}, surface {}x{}",
        config.frames_per_second,
        config.simulation_speed,
        config.gravitational_parameter,
        config.time_step(),
        config.seed,
        state.bounds.width,
        state.bounds.height
    );
    controls::echo_all(&state, &mut *echo);
}

/// Apply pending control changes before the tick that reads them
fn apply_parameter_changes(
    mut events: EventReader<ParameterChange>,
    mut state: ResMut<SimulationState>,
    mut clock: ResMut<FrameClock>,
    mut echo: ResMut<ControlEcho>,
) {
    for change in events.read() {
        match controls::apply_change(&mut state, &mut clock, &mut *echo, *change) {
            Ok(effect) => info!("Applied {:?} ({:?})", change, effect),
            Err(e) => warn!("Rejected {:?}: {}", change, e),
        }
    }
}

/// Run every tick that fell due this frame
fn simulation_tick(
    mut state: ResMut<SimulationState>,
    mut clock: ResMut<FrameClock>,
    mut display: ResMut<FrameDisplay>,
    time: Res<Time>,
) {
    let due = clock.advance(time.delta());
    if due == 0 {
        return;
    }

    for _ in 0..due {
        let stats = state.tick(&mut display.0);
        debug!(
            "Tick {}: {} particles, spawned at ({:.1}, {:.1})",
            stats.tick, stats.particle_count, stats.spawned_at[0], stats.spawned_at[1]
        );
    }
}
