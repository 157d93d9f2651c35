use std::fmt;

use rand::Rng;

use crate::constants::{DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH};

/// Logical size of the drawing surface, in surface units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Centre point, the default spawn point
    pub fn center(&self) -> [f32; 2] {
        [self.width / 2.0, self.height / 2.0]
    }

    /// Uniformly random point in [0, width) x [0, height).
    /// A zero-sized axis (minimised window) collapses to 0.
    pub fn random_point(&self, rng: &mut impl Rng) -> [f32; 2] {
        [sample_axis(self.width, rng), sample_axis(self.height, rng)]
    }

    pub fn contains(&self, point: [f32; 2]) -> bool {
        (0.0..self.width).contains(&point[0]) && (0.0..self.height).contains(&point[1])
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(DEFAULT_SURFACE_WIDTH, DEFAULT_SURFACE_HEIGHT)
    }
}

fn sample_axis(extent: f32, rng: &mut impl Rng) -> f32 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

/// 24-bit particle color, rendered as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticleColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ParticleColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Each channel sampled independently and uniformly over 0..=255
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            r: rng.gen_range(0..=u8::MAX),
            g: rng.gen_range(0..=u8::MAX),
            b: rng.gen_range(0..=u8::MAX),
        }
    }

    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ParticleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
