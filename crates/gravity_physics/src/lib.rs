pub mod forces;
pub mod particle;
pub mod spawn;

pub use particle::Particle;
