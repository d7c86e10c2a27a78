//! Landmark confidence gating.
//!
//! Every analyzer asks the same question before trusting a frame: are the
//! joints it measures visible enough? The answer is the mean visibility of
//! those joints compared against a threshold.

use super::landmarks::{Pose, PoseLandmark};

/// Mean visibility of the given body parts.
///
/// Returns `0.0` for an empty set and treats non-finite scores as zero.
pub fn mean_visibility(pose: &Pose, parts: &[PoseLandmark]) -> f32 {
    if parts.is_empty() {
        return 0.0;
    }

    let sum: f32 = parts
        .iter()
        .map(|part| {
            let v = pose[*part].visibility;
            if v.is_finite() {
                v.clamp(0.0, 1.0)
            } else {
                0.0
            }
        })
        .sum();

    sum / parts.len() as f32
}

/// Whether the given body parts are visible enough to analyze.
pub fn is_reliable(pose: &Pose, parts: &[PoseLandmark], min_visibility: f32) -> bool {
    let visibility = mean_visibility(pose, parts);
    if visibility < min_visibility {
        tracing::trace!(
            "Pose below confidence gate: visibility {:.2} < {:.2}",
            visibility,
            min_visibility
        );
        return false;
    }
    true
}
