use std::collections::VecDeque;

use bevy::prelude::*;
use gravity_core::{Bounds, Canvas, ParticleColor, SimConfig};
use gravity_physics::Particle;
use gravity_physics::spawn;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The whole simulation: config, cursor, surface bounds and particles.
/// Every entry point (tick, input, parameter changes) goes through this one value.
#[derive(Resource)]
pub struct SimulationState {
    pub config: SimConfig,
    /// Pointer position in surface coordinates
    pub cursor: [f32; 2],
    /// Current logical size of the drawing surface
    pub bounds: Bounds,
    /// Particles in insertion order, which is also draw order
    pub particles: VecDeque<Particle>,
    /// Ticks run since creation or the last reset
    pub ticks: u64,
    /// Particles evicted by the capacity bound
    pub recycled: u64,
    rng: ChaCha8Rng,
}

/// Summary of a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickStats {
    pub tick: u64,
    pub particle_count: usize,
    pub spawned_at: [f32; 2],
}

impl SimulationState {
    /// Empty simulation with the cursor at the centre of `bounds`
    pub fn new(config: SimConfig, bounds: Bounds) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            config,
            cursor: bounds.center(),
            bounds,
            particles: VecDeque::new(),
            ticks: 0,
            recycled: 0,
            rng,
        }
    }

    /// One tick: clear the surface, spawn one particle, then update and draw every particle in order
    pub fn tick(&mut self, canvas: &mut impl Canvas) -> TickStats {
        canvas.clear(self.bounds);

        let spawned_at = self.spawn();

        let cursor = self.cursor;
        let gm = self.config.gravitational_parameter;
        let dt = self.config.time_step();
        for particle in self.particles.iter_mut() {
            particle.update(cursor, gm, dt, canvas);
        }

        self.ticks += 1;
        TickStats {
            tick: self.ticks,
            particle_count: self.particles.len(),
            spawned_at,
        }
    }

    /// Spawn one particle with random color and radius; returns its position
    pub fn spawn(&mut self) -> [f32; 2] {
        let particle = spawn::spawn_particle(&self.config, &self.bounds, &mut self.rng);
        self.push(particle)
    }

    /// Spawn one particle with an explicit color and radius
    pub fn spawn_with(&mut self, color: ParticleColor, radius: f32) -> [f32; 2] {
        let position = spawn::spawn_point(&self.bounds, self.config.spawn_randomly, &mut self.rng);
        self.push(Particle::new(position, radius, color))
    }

    fn push(&mut self, particle: Particle) -> [f32; 2] {
        if let Some(capacity) = self.config.max_particles {
            while self.particles.len() >= capacity {
                self.particles.pop_front();
                if self.recycled == 0 {
                    info!("Particle capacity {} reached, recycling oldest particles", capacity);
                }
                self.recycled += 1;
            }
        }
        let position = particle.position;
        self.particles.push_back(particle);
        position
    }

    pub fn set_cursor(&mut self, x: f32, y: f32) {
        self.cursor = [x, y];
    }

    /// Resynchronise with the displayed surface size
    pub fn resize(&mut self, bounds: Bounds) {
        if bounds != self.bounds {
            debug!(
                "Surface resized: {}x{} -> {}x{}",
                self.bounds.width, self.bounds.height, bounds.width, bounds.height
            );
            self.bounds = bounds;
        }
    }

    /// Drop every particle and restart the RNG from the configured seed
    pub fn reset(&mut self) {
        info!("Simulation reset ({} particles dropped)", self.particles.len());
        self.particles.clear();
        self.ticks = 0;
        self.recycled = 0;
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Mean speed of all particles, 0 when empty
    pub fn mean_speed(&self) -> f32 {
        if self.particles.is_empty() {
            return 0.0;
        }
        let total: f32 = self.particles.iter().map(|p| p.speed()).sum();
        total / self.particles.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gravity_core::DisplayList;

    #[test]
    fn test_new_cursor_at_center() {
        let state = SimulationState::new(SimConfig::default(), Bounds::new(300.0, 150.0));
        assert_eq!(state.cursor, [150.0, 75.0]);
        assert_eq!(state.particle_count(), 0);
        assert_eq!(state.mean_speed(), 0.0);
    }

    #[test]
    fn test_tick_order() {
        let mut state = SimulationState::new(SimConfig::default(), Bounds::new(200.0, 100.0));
        state.set_cursor(0.0, 0.0);
        let mut canvas = DisplayList::new();

        let stats = state.tick(&mut canvas);
        assert_eq!(stats.tick, 1);
        assert_eq!(stats.particle_count, 1);
        assert_eq!(stats.spawned_at, [100.0, 50.0]);

        // The new particle is updated in its spawn tick, so it already moved toward the cursor
        assert_eq!(canvas.frames, 1);
        assert_eq!(canvas.len(), 1);
        let drawn = canvas.circles[0].center;
        assert!(drawn[0] < 100.0 && drawn[1] < 50.0);
    }

    #[test]
    fn test_spawn_with_explicit_values() {
        let mut state = SimulationState::new(SimConfig::default(), Bounds::new(10.0, 10.0));
        let color = ParticleColor::new(1, 2, 3);
        let at = state.spawn_with(color, 4.0);
        assert_eq!(at, [5.0, 5.0]);
        assert_eq!(state.particles[0].color, color);
        assert_eq!(state.particles[0].radius, 4.0);
    }

    #[test]
    fn test_reset_reseeds() {
        let config = SimConfig {
            spawn_randomly: true,
            ..SimConfig::default()
        };
        let mut state = SimulationState::new(config, Bounds::default());
        let first = state.spawn();
        state.spawn();
        state.reset();

        assert_eq!(state.particle_count(), 0);
        assert_eq!(state.ticks, 0);
        assert_eq!(state.spawn(), first);
    }

    #[test]
    fn test_resize_keeps_cursor() {
        let mut state = SimulationState::new(SimConfig::default(), Bounds::new(100.0, 100.0));
        state.set_cursor(10.0, 20.0);
        state.resize(Bounds::new(400.0, 300.0));
        assert_eq!(state.bounds, Bounds::new(400.0, 300.0));
        assert_eq!(state.cursor, [10.0, 20.0]);
    }
}
