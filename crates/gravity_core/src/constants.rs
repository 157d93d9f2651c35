// Units follow the drawing surface:
// - Distance: 1 unit = 1 logical pixel, origin at the top-left corner, y down
// - Time: 1 unit = one simulation step at speed 1 and 1 frame per second
// GM is therefore expressed in pixels^3 per squared simulation time.

/// Default tick frequency in Hz
pub const DEFAULT_FRAMES_PER_SECOND: f32 = 60.0;

/// Upper bound on tick frequency (keeps the tick period above one nanosecond by a wide margin)
pub const MAX_FRAMES_PER_SECOND: f32 = 1000.0;

/// Default simulated time passing per real second
pub const DEFAULT_SIMULATION_SPEED: f32 = 5.0;

/// Default gravitational parameter of the cursor
pub const DEFAULT_GRAVITATIONAL_PARAMETER: f32 = 1e5;

/// Spawned radii are drawn uniformly from [0, DEFAULT_MAX_RADIUS)
pub const DEFAULT_MAX_RADIUS: f32 = 10.0;

/// Seed for the simulation RNG
pub const DEFAULT_SEED: u64 = 42;

/// Initial drawing-surface size, before the first resize is observed
pub const DEFAULT_SURFACE_WIDTH: f32 = 1280.0;
pub const DEFAULT_SURFACE_HEIGHT: f32 = 720.0;
