use bevy::prelude::*;
use gravity_sim::SimulationSet;

use super::camera;
use super::input;
use super::particles::{self, CirclePool};
use super::ui;

/// Windowed front end: camera, pointer and resize input, controls, and circle drawing
pub struct GravityRenderPlugin;

impl Plugin for GravityRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CirclePool>()
            .init_resource::<ui::HudThrottle>()
            .add_systems(
                Startup,
                (
                    camera::spawn_camera,
                    ui::spawn_control_panel,
                    particles::init_circle_assets,
                    input::init_surface_bounds.before(SimulationSet),
                ),
            )
            .add_systems(
                Update,
                (
                    input::track_cursor,
                    input::sync_surface_bounds,
                    input::reset_on_key,
                    ui::control_button_system,
                )
                    .before(SimulationSet),
            )
            .add_systems(
                Update,
                (
                    particles::draw_display_list,
                    ui::update_value_echo,
                    ui::update_hud,
                )
                    .after(SimulationSet),
            );
    }
}
