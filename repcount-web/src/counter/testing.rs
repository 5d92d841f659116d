//! Frame builders for tests

use super::config::JointTriplet;
use crate::pose::{Landmark, LANDMARK_COUNT};

const BONE: f32 = 0.2;

/// Full-body frame where each triplet bends to the requested angle
///
/// The first joint sits straight above the vertex; the last joint is rotated
/// clockwise by `angle` degrees, so both angle conventions read back `angle`.
pub(crate) fn posed_frame(joints: &[(JointTriplet, f32)]) -> Vec<Landmark> {
    let mut frame = vec![Landmark::new(0.5, 0.5).with_visibility(1.0); LANDMARK_COUNT];

    for (slot, (triplet, angle)) in joints.iter().enumerate() {
        let vertex = (0.3 + 0.4 * slot as f32, 0.5);
        let theta = angle.to_radians();
        frame[triplet.vertex] = Landmark::new(vertex.0, vertex.1).with_visibility(1.0);
        frame[triplet.first] = Landmark::new(vertex.0, vertex.1 - BONE).with_visibility(1.0);
        frame[triplet.last] =
            Landmark::new(vertex.0 + BONE * theta.sin(), vertex.1 - BONE * theta.cos()).with_visibility(1.0);
    }

    frame
}
