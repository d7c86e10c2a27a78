//! Analysis error types.

use thiserror::Error;

/// Errors from the frame entry point.
///
/// Degenerate geometry and low-confidence frames are not errors; they come
/// back as an unreliable [`AnalysisResult`](super::types::AnalysisResult).
/// Only caller-contract violations end up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoseError {
    /// The pose model returned the wrong number of landmarks.
    #[error("Invalid pose: expected {expected} landmarks, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
