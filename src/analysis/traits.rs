//! Exercise analyzer abstraction.

use super::registry::ExerciseFamily;
use super::types::AnalysisResult;
use crate::pose::Pose;

/// Turns one pose snapshot into feedback, a rep metric and a phase.
///
/// Implementations are stateless: the same pose always yields the same
/// result, and a bad frame degrades to an unreliable result instead of
/// failing.
pub trait ExerciseAnalyzer: Send + Sync {
    /// Analyze a single frame.
    fn analyze(&self, pose: &Pose) -> AnalysisResult;

    /// Exercise family this analyzer handles.
    fn family(&self) -> ExerciseFamily;

    /// Get the name of this analyzer (for logging)
    fn name(&self) -> &'static str {
        self.family().label()
    }
}
