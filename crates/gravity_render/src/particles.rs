use std::collections::HashMap;

use bevy::prelude::*;
use gravity_core::{Bounds, CircleCommand, ParticleColor};
use gravity_sim::FrameDisplay;

use crate::camera::surface_to_world;

/// Depth added per draw-order index so later circles land on top
const Z_STEP: f32 = 1e-3;

/// Stay inside the default 2D camera's far plane
const MAX_Z: f32 = 999.0;

/// Unit circle mesh plus one shared material per color
#[derive(Resource)]
pub struct CircleAssets {
    mesh: Handle<Mesh>,
    materials: HashMap<ParticleColor, Handle<ColorMaterial>>,
}

impl CircleAssets {
    fn material(
        &mut self,
        color: ParticleColor,
        materials: &mut Assets<ColorMaterial>,
    ) -> Handle<ColorMaterial> {
        self.materials
            .entry(color)
            .or_insert_with(|| {
                materials.add(ColorMaterial::from(Color::srgb_u8(color.r, color.g, color.b)))
            })
            .clone()
    }
}

/// Marker for a pooled circle entity, tagged with its draw-order slot
#[derive(Component)]
pub struct CircleSlot(pub usize);

/// Circle entities reused frame to frame; slot `i` shows the `i`-th circle of the frame
#[derive(Resource, Default)]
pub struct CirclePool {
    slots: Vec<(Entity, ParticleColor)>,
}

pub fn init_circle_assets(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    commands.insert_resource(CircleAssets {
        mesh: meshes.add(Circle::new(1.0)),
        materials: HashMap::new(),
    });
}

/// Transform placing a unit circle as `circle`, stacked by draw order
pub fn circle_transform(circle: &CircleCommand, bounds: &Bounds, order: usize) -> Transform {
    let center = surface_to_world(circle.center, bounds);
    let z = (order as f32 * Z_STEP).min(MAX_Z);
    Transform::from_xyz(center.x, center.y, z).with_scale(Vec3::new(circle.radius, circle.radius, 1.0))
}

/// Show the latest frame: reposition pooled circles, grow the pool, hide the surplus
pub fn draw_display_list(
    mut commands: Commands,
    display: Res<FrameDisplay>,
    mut assets: ResMut<CircleAssets>,
    mut pool: ResMut<CirclePool>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut slots: Query<(&mut Transform, &mut Visibility), With<CircleSlot>>,
) {
    if !display.is_changed() {
        return;
    }

    let bounds = display.bounds;
    for (i, circle) in display.circles.iter().enumerate() {
        let transform = circle_transform(circle, &bounds, i);

        if let Some((entity, color)) = pool.slots.get_mut(i) {
            if let Ok((mut slot_transform, mut visibility)) = slots.get_mut(*entity) {
                *slot_transform = transform;
                *visibility = Visibility::Visible;
            }
            if *color != circle.color {
                let material = assets.material(circle.color, &mut materials);
                commands.entity(*entity).insert(MeshMaterial2d(material));
                *color = circle.color;
            }
        } else {
            let material = assets.material(circle.color, &mut materials);
            let entity = commands
                .spawn((
                    Mesh2d(assets.mesh.clone()),
                    MeshMaterial2d(material),
                    transform,
                    Visibility::Visible,
                    CircleSlot(i),
                ))
                .id();
            pool.slots.push((entity, circle.color));
        }
    }

    for (entity, _) in pool.slots.iter().skip(display.circles.len()) {
        if let Ok((_, mut visibility)) = slots.get_mut(*entity) {
            *visibility = Visibility::Hidden;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gravity_core::Canvas;

    #[test]
    fn test_circle_transform() {
        let bounds = Bounds::new(200.0, 100.0);
        let circle = CircleCommand {
            center: [150.0, 25.0],
            radius: 4.0,
            color: ParticleColor::new(0, 0, 0),
        };
        let t = circle_transform(&circle, &bounds, 10);
        assert_eq!(t.translation.x, 50.0);
        assert_eq!(t.translation.y, 25.0);
        assert!((t.translation.z - 0.01).abs() < 1e-6);
        assert_eq!(t.scale, Vec3::new(4.0, 4.0, 1.0));
    }

    #[test]
    fn test_depth_is_capped() {
        let bounds = Bounds::new(200.0, 100.0);
        let circle = CircleCommand {
            center: [0.0, 0.0],
            radius: 1.0,
            color: ParticleColor::new(0, 0, 0),
        };
        let t = circle_transform(&circle, &bounds, 10_000_000);
        assert_eq!(t.translation.z, MAX_Z);
    }

    fn frame_with(count: usize) -> FrameDisplay {
        let mut display = FrameDisplay::default();
        display.clear(Bounds::new(200.0, 100.0));
        for i in 0..count {
            let color = ParticleColor::new(i as u8, 0, 0);
            display.fill_circle([10.0 * i as f32, 20.0], 2.0, color);
        }
        display
    }

    fn pool_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(Assets::<Mesh>::default())
            .insert_resource(Assets::<ColorMaterial>::default())
            .init_resource::<CirclePool>()
            .insert_resource(frame_with(3))
            .add_systems(Startup, init_circle_assets)
            .add_systems(Update, draw_display_list);
        app
    }

    fn slot_visibility(app: &App) -> Vec<Visibility> {
        let entities: Vec<Entity> = app
            .world()
            .resource::<CirclePool>()
            .slots
            .iter()
            .map(|(entity, _)| *entity)
            .collect();
        entities
            .into_iter()
            .map(|entity| *app.world().get::<Visibility>(entity).unwrap())
            .collect()
    }

    #[test]
    fn test_pool_grows_then_hides_surplus() {
        let mut app = pool_app();
        app.update();
        assert_eq!(app.world().resource::<CirclePool>().slots.len(), 3);
        assert_eq!(slot_visibility(&app), vec![Visibility::Visible; 3]);

        // A reset leaves a one-circle frame behind
        app.insert_resource(frame_with(1));
        app.update();

        let pool = app.world().resource::<CirclePool>();
        assert_eq!(pool.slots.len(), 3);
        assert_eq!(
            slot_visibility(&app),
            vec![Visibility::Visible, Visibility::Hidden, Visibility::Hidden]
        );
    }

    #[test]
    fn test_pool_reuses_slots_and_follows_frame() {
        let mut app = pool_app();
        app.update();
        let first: Vec<Entity> = app
            .world()
            .resource::<CirclePool>()
            .slots
            .iter()
            .map(|(entity, _)| *entity)
            .collect();

        let mut next = frame_with(2);
        next.circles[1].color = ParticleColor::new(9, 9, 9);
        next.circles[1].center = [150.0, 25.0];
        app.insert_resource(next);
        app.update();

        let pool = app.world().resource::<CirclePool>();
        let second: Vec<Entity> = pool.slots.iter().map(|(entity, _)| *entity).collect();
        assert_eq!(first, second);
        assert_eq!(pool.slots[1].1, ParticleColor::new(9, 9, 9));

        let transform = app.world().get::<Transform>(second[1]).unwrap();
        assert_eq!(transform.translation.x, 50.0);
        assert_eq!(transform.translation.y, 25.0);
    }
}
