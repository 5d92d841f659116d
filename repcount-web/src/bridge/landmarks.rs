//! Landmark decoding for the JS bridge
//!
//! JavaScript passes each MediaPipe result as a flat Float32Array with four
//! values per landmark: x, y, z, visibility. NaN in z or visibility means the
//! estimator did not supply it.

use crate::pose::Landmark;

pub const FLOATS_PER_LANDMARK: usize = 4;

/// Decode a flat landmark array
///
/// Returns `None` (a "no pose" frame) for empty input or a length that is not
/// a whole number of landmarks. Short but well-formed arrays are returned as
/// is; the counter rejects them itself.
pub fn decode_frame(data: &[f32]) -> Option<Vec<Landmark>> {
    if data.is_empty() {
        return None;
    }

    if data.len() % FLOATS_PER_LANDMARK != 0 {
        log::warn!(
            "Invalid landmark data length: {} (expected a multiple of {})",
            data.len(),
            FLOATS_PER_LANDMARK
        );
        return None;
    }

    let landmarks = data
        .chunks_exact(FLOATS_PER_LANDMARK)
        .map(|chunk| Landmark {
            x: chunk[0],
            y: chunk[1],
            z: finite(chunk[2]),
            visibility: finite(chunk[3]),
        })
        .collect();

    Some(landmarks)
}

fn finite(value: f32) -> Option<f32> {
    value.is_finite().then_some(value)
}
