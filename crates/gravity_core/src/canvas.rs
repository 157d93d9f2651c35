use crate::types::{Bounds, ParticleColor};

/// Drawing surface the simulation renders into
pub trait Canvas {
    /// Erase everything inside `bounds`
    fn clear(&mut self, bounds: Bounds);

    /// Draw a filled circle centred at `center`
    fn fill_circle(&mut self, center: [f32; 2], radius: f32, color: ParticleColor);
}

/// One filled circle recorded by a [`DisplayList`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleCommand {
    pub center: [f32; 2],
    pub radius: f32,
    pub color: ParticleColor,
}

/// Canvas that records the current frame instead of rasterising it.
/// The renderer turns the recorded circles into entities; headless runs inspect them directly.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    /// Bounds passed to the most recent clear
    pub bounds: Bounds,
    /// Circles drawn since the most recent clear, in draw order
    pub circles: Vec<CircleCommand>,
    /// Number of clears seen so far (one per frame)
    pub frames: u64,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}

impl Canvas for DisplayList {
    fn clear(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.circles.clear();
        self.frames += 1;
    }

    fn fill_circle(&mut self, center: [f32; 2], radius: f32, color: ParticleColor) {
        self.circles.push(CircleCommand {
            center,
            radius,
            color,
        });
    }
}
