//! LiftForm - Resistance Training Form Analysis
//!
//! Turns per-frame body landmarks from a pose-estimation model into coaching
//! cues, a normalized rep metric and a debounced repetition count. Capture,
//! pose inference and rendering stay with the caller; everything here is
//! synchronous and side-effect free apart from logging.

pub mod analysis;
pub mod metrics;
pub mod pose;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use analysis::{
    analyze_frame, get_analyzer_for_exercise, AnalysisResult, AnalyzerRegistry, ExerciseAnalyzer,
    ExerciseFamily, FeedbackCue, Phase, PoseError, Severity,
};
pub use metrics::{create_rep_counter, update_rep_counter, RepCounterState};
pub use pose::{angle_between_points, Landmark, Pose, PoseLandmark};
pub use session::{SetSummary, SetTracker};
pub use storage::config::AnalysisConfig;
