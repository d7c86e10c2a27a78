//! Exercise form analysis.
//!
//! One analyzer per exercise family, all behind the [`ExerciseAnalyzer`]
//! trait. The registry maps free-text exercise names onto them.

pub mod bench;
pub mod deadlift;
pub mod error;
pub mod generic;
pub mod joints;
pub mod overhead_press;
pub mod registry;
pub mod squat;
pub mod traits;
pub mod types;

pub use bench::BenchAnalyzer;
pub use deadlift::DeadliftAnalyzer;
pub use error::PoseError;
pub use generic::GenericAnalyzer;
pub use overhead_press::OverheadPressAnalyzer;
pub use registry::{analyze_frame, get_analyzer_for_exercise, AnalyzerRegistry, ExerciseFamily};
pub use squat::SquatAnalyzer;
pub use traits::ExerciseAnalyzer;
pub use types::{AnalysisResult, FeedbackCue, Phase, Severity};
