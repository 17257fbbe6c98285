use std::f64::consts::TAU;

/// Reduce an angle in degrees to [0, 360).
/// Works for any sign and magnitude; reapplying it is a no-op.
pub fn revolution_reduction_degrees(angle: f64) -> f64 {
    let reduced = angle - (angle / 360.0).floor() * 360.0;
    // Tiny negative inputs can round up to exactly 360.
    if reduced >= 360.0 {
        0.0
    } else {
        reduced
    }
}

/// Reduce an angle in radians to [0, 2π).
pub fn revolution_reduction_radians(angle: f64) -> f64 {
    let reduced = angle - (angle / TAU).floor() * TAU;
    if reduced >= TAU {
        0.0
    } else {
        reduced
    }
}

/// Sine of an angle given in degrees.
pub fn sin_degrees(angle: f64) -> f64 {
    angle.to_radians().sin()
}

/// Cosine of an angle given in degrees.
pub fn cos_degrees(angle: f64) -> f64 {
    angle.to_radians().cos()
}

/// Two-argument arctangent returning degrees.
pub fn atan2_degrees(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/// Squared Euclidean distance between two points in the plane.
pub fn squared_distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    dx * dx + dy * dy
}

/// Euclidean distance between two points in the plane.
pub fn distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    squared_distance(x1, y1, x2, y2).sqrt()
}

/// Linear interpolation from `a` to `b` by `t` (unclamped).
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
