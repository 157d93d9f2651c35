use gravity_core::{Bounds, ParticleColor, SimConfig};
use rand::Rng;

use crate::particle::Particle;

/// Where the next particle appears: the centre, or anywhere on the surface
pub fn spawn_point(bounds: &Bounds, randomly: bool, rng: &mut impl Rng) -> [f32; 2] {
    if randomly {
        bounds.random_point(rng)
    } else {
        bounds.center()
    }
}

/// Uniform radius in [0, max_radius)
pub fn random_radius(max_radius: f32, rng: &mut impl Rng) -> f32 {
    rng.gen_range(0.0..max_radius)
}

/// Create a resting particle with a random radius and color at the configured spawn point.
/// The spawn point is drawn before radius and color, which keeps a seeded run reproducible.
pub fn spawn_particle(config: &SimConfig, bounds: &Bounds, rng: &mut impl Rng) -> Particle {
    let position = spawn_point(bounds, config.spawn_randomly, rng);
    let color = ParticleColor::random(rng);
    let radius = random_radius(config.max_radius, rng);

    Particle::new(position, radius, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_center_spawn_ignores_rng() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let bounds = Bounds::new(800.0, 600.0);
        for _ in 0..100 {
            assert_eq!(spawn_point(&bounds, false, &mut rng), [400.0, 300.0]);
        }
    }

    #[test]
    fn test_random_spawn_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let bounds = Bounds::new(800.0, 600.0);
        let mut off_center = 0;
        for _ in 0..1000 {
            let p = spawn_point(&bounds, true, &mut rng);
            assert!(bounds.contains(p));
            if p != bounds.center() {
                off_center += 1;
            }
        }
        assert!(off_center > 990);
    }

    #[test]
    fn test_radius_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut max_seen = 0.0f32;
        for _ in 0..10_000 {
            let r = random_radius(10.0, &mut rng);
            assert!((0.0..10.0).contains(&r));
            max_seen = max_seen.max(r);
        }
        assert!(max_seen > 9.9);
    }

    #[test]
    fn test_spawned_particle_at_rest() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let config = SimConfig::default();
        let bounds = Bounds::new(300.0, 150.0);
        let p = spawn_particle(&config, &bounds, &mut rng);

        assert_eq!(p.position, [150.0, 75.0]);
        assert_eq!(p.velocity, [0.0, 0.0]);
        assert_eq!(p.acceleration, [0.0, 0.0]);
        assert!(p.radius < config.max_radius);
    }

    #[test]
    fn test_same_seed_same_particle() {
        let config = SimConfig {
            spawn_randomly: true,
            ..SimConfig::default()
        };
        let bounds = Bounds::default();
        let a = spawn_particle(&config, &bounds, &mut ChaCha8Rng::seed_from_u64(9));
        let b = spawn_particle(&config, &bounds, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
