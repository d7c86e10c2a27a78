//! Joint angle calculation using the dot product.
//!
//! All math is 2D; the landmark depth estimate is too noisy to use.

/// Rays shorter than this are treated as degenerate.
const MIN_RAY_LENGTH: f32 = 1e-6;

/// Angle in degrees at `vertex` between the rays `vertex→a` and `vertex→c`.
///
/// Uses cos(θ) = (v1 · v2) / (|v1| × |v2|), so the result is always in
/// `[0, 180]`:
/// - 180° = the three points are collinear with `vertex` between them
/// - 90° = the rays are perpendicular
///
/// Returns exactly `0.0` when either ray has zero length.
pub fn angle_between_points(a: (f32, f32), vertex: (f32, f32), c: (f32, f32)) -> f32 {
    let v1 = (a.0 - vertex.0, a.1 - vertex.1);
    let v2 = (c.0 - vertex.0, c.1 - vertex.1);

    let dot = v1.0 * v2.0 + v1.1 * v2.1;
    let mag1 = (v1.0 * v1.0 + v1.1 * v1.1).sqrt();
    let mag2 = (v2.0 * v2.0 + v2.1 * v2.1).sqrt();

    // Also rejects NaN magnitudes from non-finite input
    if !(mag1 > MIN_RAY_LENGTH && mag2 > MIN_RAY_LENGTH) {
        return 0.0;
    }

    let cos_angle = (dot / (mag1 * mag2)).clamp(-1.0, 1.0);
    cos_angle.acos().to_degrees()
}

/// Midpoint of two 2D points.
pub fn midpoint(a: (f32, f32), b: (f32, f32)) -> (f32, f32) {
    ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)
}
