use bevy::prelude::*;
use gravity_core::Bounds;

/// Marker for the single 2D view of the drawing surface
#[derive(Component)]
pub struct SurfaceCamera;

/// Spawn the 2D camera; one world unit is one logical pixel with the origin at the window centre
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, SurfaceCamera));
    info!("Camera spawned");
}

/// Map surface coordinates (origin top-left, y down) to world coordinates (origin centre, y up)
pub fn surface_to_world(point: [f32; 2], bounds: &Bounds) -> Vec2 {
    Vec2::new(
        point[0] - bounds.width / 2.0,
        bounds.height / 2.0 - point[1],
    )
}
