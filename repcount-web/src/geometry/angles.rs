//! Joint angle calculation
//!
//! Two conventions are kept side by side because different exercises are
//! calibrated against different ones:
//! - magnitude: unsigned angle at the vertex via the dot product, [0, 180]
//! - directional: signed atan2 difference folded into [0, 360)

use nalgebra::Vector2;

/// 2D point in the pose estimator's coordinate space
pub type Point = (f32, f32);

/// Vectors shorter than this are treated as zero-length
const MIN_VECTOR_LENGTH: f32 = 1e-6;

/// Angle at `vertex` between the rays to `first` and `last`, in degrees
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// Returns 0 when either ray has zero length (or coordinates are not finite).
pub fn magnitude_angle(first: Point, vertex: Point, last: Point) -> f32 {
    let v1 = Vector2::new(first.0 - vertex.0, first.1 - vertex.1);
    let v2 = Vector2::new(last.0 - vertex.0, last.1 - vertex.1);

    let mag1 = v1.norm();
    let mag2 = v2.norm();

    if !(mag1 >= MIN_VECTOR_LENGTH && mag2 >= MIN_VECTOR_LENGTH) {
        return 0.0;
    }

    // Clamp before acos: rounding can push the ratio just outside [-1, 1]
    let cos_angle = (v1.dot(&v2) / (mag1 * mag2)).clamp(-1.0, 1.0);

    cos_angle.acos().to_degrees()
}

/// Rotation from the `vertex→first` ray to the `vertex→last` ray, in degrees
///
/// Keeps the rotational sense, so 30° and 330° are different answers
/// (under- vs over-extension). Result is in [0, 360); non-finite
/// coordinates give 0.
pub fn directional_angle(first: Point, vertex: Point, last: Point) -> f32 {
    let coords = [first.0, first.1, vertex.0, vertex.1, last.0, last.1];
    if !coords.iter().all(|c| c.is_finite()) {
        return 0.0;
    }

    let to_last = (last.1 - vertex.1).atan2(last.0 - vertex.0);
    let to_first = (first.1 - vertex.1).atan2(first.0 - vertex.0);

    let angle = (to_last - to_first).to_degrees().rem_euclid(360.0);
    if angle >= 360.0 {
        // A difference just below 0 (or 360) rounds up to exactly 360 in f32
        return 0.0;
    }
    angle
}
