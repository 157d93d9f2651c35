/// Squared distance between two points
pub fn distance_squared(a: [f32; 2], b: [f32; 2]) -> f32 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx * dx + dy * dy
}

/// Inverse-square acceleration magnitude: GM / r².
///
/// A particle sitting exactly on the attractor has no direction to fall in,
/// so `distance_squared == 0` yields 0 rather than infinity. Small distances
/// are not softened, but a quotient that overflows f32 is treated the same way
/// as a coincident point: the result is always finite.
pub fn inverse_square_magnitude(gravitational_parameter: f32, distance_squared: f32) -> f32 {
    if distance_squared == 0.0 {
        return 0.0;
    }
    let magnitude = gravitational_parameter / distance_squared;
    if !magnitude.is_finite() {
        return 0.0;
    }
    magnitude
}
