//! A single particle falling toward the cursor

use gravity_core::{Canvas, ParticleColor};

use crate::forces::{distance_squared, inverse_square_magnitude};

/// Particle state in drawing-surface units.
/// Particles carry no identity; their index in the collection is only their draw order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    pub acceleration: [f32; 2],
    pub radius: f32,
    pub color: ParticleColor,
}

impl Particle {
    /// A particle at rest
    pub fn new(position: [f32; 2], radius: f32, color: ParticleColor) -> Self {
        Self {
            position,
            velocity: [0.0; 2],
            acceleration: [0.0; 2],
            radius,
            color,
        }
    }

    /// Fill a circle of this particle's radius and color at its position
    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.fill_circle(self.position, self.radius, self.color);
    }

    /// Semi-implicit Euler: the velocity is updated first, then the new velocity moves the position
    pub fn step(&mut self, dt: f32) {
        self.velocity[0] += self.acceleration[0] * dt;
        self.velocity[1] += self.acceleration[1] * dt;

        self.position[0] += self.velocity[0] * dt;
        self.position[1] += self.velocity[1] * dt;
    }

    /// Point the acceleration at `target` with length `magnitude`.
    /// When `target` equals the position the angle falls back to 0, giving `(magnitude, 0)`.
    pub fn accelerate_to(&mut self, target: [f32; 2], magnitude: f32) {
        let angle = (target[1] - self.position[1]).atan2(target[0] - self.position[0]);

        self.acceleration[0] = magnitude * angle.cos();
        self.acceleration[1] = magnitude * angle.sin();
    }

    /// Accelerate toward the cursor under GM / r², integrate, then draw.
    /// A particle exactly on the cursor, or close enough that GM / r² overflows,
    /// gets zero acceleration and coasts.
    pub fn update(
        &mut self,
        cursor: [f32; 2],
        gravitational_parameter: f32,
        dt: f32,
        canvas: &mut impl Canvas,
    ) {
        let r2 = distance_squared(self.position, cursor);

        self.accelerate_to(cursor, inverse_square_magnitude(gravitational_parameter, r2));
        self.step(dt);
        self.draw(canvas);
    }

    pub fn speed(&self) -> f32 {
        (self.velocity[0] * self.velocity[0] + self.velocity[1] * self.velocity[1]).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|v| v.is_finite())
            && self.velocity.iter().all(|v| v.is_finite())
            && self.acceleration.iter().all(|v| v.is_finite())
    }
}
