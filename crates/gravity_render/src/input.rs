use bevy::prelude::*;
use bevy::window::{CursorMoved, PrimaryWindow, WindowResized};
use gravity_core::Bounds;
use gravity_sim::SimulationState;

/// Match the surface to the window size at startup and put the cursor in its centre
pub fn init_surface_bounds(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut state: ResMut<SimulationState>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    state.resize(Bounds::new(window.width(), window.height()));
    let [x, y] = state.bounds.center();
    state.set_cursor(x, y);
}

/// Follow the pointer; only the latest position this frame matters
pub fn track_cursor(mut moves: EventReader<CursorMoved>, mut state: ResMut<SimulationState>) {
    if let Some(moved) = moves.read().last() {
        state.set_cursor(moved.position.x, moved.position.y);
    }
}

/// Resynchronise the surface bounds with the displayed window size
pub fn sync_surface_bounds(
    mut resizes: EventReader<WindowResized>,
    mut state: ResMut<SimulationState>,
) {
    for resized in resizes.read() {
        info!("Window resized to {}x{}", resized.width, resized.height);
        state.resize(Bounds::new(resized.width, resized.height));
    }
}

/// [R] drops every particle and restarts the seeded RNG
pub fn reset_on_key(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<SimulationState>) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::window::WindowResolution;
    use gravity_core::SimConfig;
    use gravity_sim::{FrameClock, SimulationPlugin, SimulationSet};

    fn test_app() -> App {
        let mut app = App::new();
        app.add_event::<CursorMoved>()
            .add_event::<WindowResized>()
            .insert_resource(SimulationState::new(
                SimConfig::default(),
                Bounds::new(300.0, 150.0),
            ))
            .add_systems(Update, (track_cursor, sync_surface_bounds));
        app
    }

    #[test]
    fn test_cursor_takes_last_position() {
        let mut app = test_app();
        for x in [10.0, 20.0, 30.0] {
            app.world_mut().send_event(CursorMoved {
                window: Entity::PLACEHOLDER,
                position: Vec2::new(x, 5.0),
                delta: None,
            });
        }
        app.update();

        let state = app.world().resource::<SimulationState>();
        assert_eq!(state.cursor, [30.0, 5.0]);
    }

    #[derive(Resource, Default)]
    struct StartBounds(Option<Bounds>);

    fn record_start_bounds(state: Res<SimulationState>, mut seen: ResMut<StartBounds>) {
        seen.0 = Some(state.bounds);
    }

    #[test]
    fn test_startup_sync_precedes_simulation_start() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(FrameClock::new(60.0))
            .insert_resource(SimulationState::new(SimConfig::default(), Bounds::default()))
            .init_resource::<StartBounds>()
            .add_plugins(SimulationPlugin)
            .add_systems(
                Startup,
                (
                    init_surface_bounds.before(SimulationSet),
                    record_start_bounds.in_set(SimulationSet),
                ),
            );
        app.world_mut().spawn((
            Window {
                resolution: WindowResolution::new(800.0, 600.0),
                ..default()
            },
            PrimaryWindow,
        ));
        app.update();

        let seen = app.world().resource::<StartBounds>();
        assert_eq!(seen.0, Some(Bounds::new(800.0, 600.0)));
        let state = app.world().resource::<SimulationState>();
        assert_eq!(state.cursor, [400.0, 300.0]);
    }

    #[test]
    fn test_resize_updates_bounds() {
        let mut app = test_app();
        app.world_mut().send_event(WindowResized {
            window: Entity::PLACEHOLDER,
            width: 1024.0,
            height: 512.0,
        });
        app.update();

        let state = app.world().resource::<SimulationState>();
        assert_eq!(state.bounds, Bounds::new(1024.0, 512.0));
        assert_eq!(state.bounds.center(), [512.0, 256.0]);
    }
}
