//! Degree-valued angle helpers.
//!
//! Angles use the mathematical convention, zero points along the positive
//! x axis and values increase counterclockwise.

use glam::{vec2, Vec2};

/// Angle of a direction vector in degrees, in the range `[0, 360)`.
///
/// Returns `None` for zero-length or non-finite vectors, which have no
/// direction.
pub fn angle_from_vector(v: Vec2) -> Option<f32> {
    let v = v.try_normalize()?;
    let deg = v.y.atan2(v.x).to_degrees();
    // Rounding can push a tiny negative value up to exactly 360.0.
    Some(if deg < 0.0 { (deg + 360.0) % 360.0 } else { deg })
}

/// Unit vector pointing at the given angle in degrees.
pub fn vector_from_angle(deg: f32) -> Vec2 {
    let (sin, cos) = deg.to_radians().sin_cos();
    vec2(cos, sin)
}

/// Signed shortest rotation in degrees from `b` to `a`, in `[-180, 180)`.
pub fn angular_offset(a: f32, b: f32) -> f32 {
    (a - b + 180.0).rem_euclid(360.0) - 180.0
}
