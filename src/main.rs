use bevy::prelude::*;
use gravity_core::{Bounds, SimConfig};
use gravity_render::plugin::GravityRenderPlugin;
use gravity_sim::{FrameClock, SimulationPlugin, SimulationState};

fn main() {
    let config = SimConfig::default();
    let bounds = Bounds::default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Gravity".into(),
                resolution: (bounds.width, bounds.height).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(FrameClock::new(config.frames_per_second))
        .insert_resource(SimulationState::new(config, bounds))
        .add_plugins(SimulationPlugin)
        .add_plugins(GravityRenderPlugin)
        .run();
}
