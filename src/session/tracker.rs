//! Set tracking for a per-frame loop.
//!
//! The analysis core is pure: analyzers are stateless and the rep counter
//! state is a value. `SetTracker` is the thin owner a video loop can hold
//! instead: it resolves the analyzer once, threads the counter state, and
//! keeps enough bookkeeping to summarize the set afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::analysis::{
    get_analyzer_for_exercise, AnalysisResult, AnalyzerRegistry, ExerciseAnalyzer,
    ExerciseFamily, PoseError,
};
use crate::metrics::{create_rep_counter, update_rep_counter_with, RepCounterState};
use crate::pose::{Landmark, Pose};
use crate::storage::config::RepCounterConfig;

/// What one processed frame produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    /// Analyzer output for the frame
    pub analysis: AnalysisResult,
    /// Reps completed so far
    pub reps: u32,
    /// Whether this frame completed a rep
    pub rep_completed: bool,
    /// Smoothed rep metric after this frame
    pub smoothed_metric: Option<f32>,
}

/// Summary of a finished (or in-progress) set, for the storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetSummary {
    pub session_id: Uuid,
    /// Exercise name as given by the caller
    pub exercise: Option<String>,
    pub family: ExerciseFamily,
    pub reps: u32,
    /// Frame timestamp of each counted rep
    pub rep_timestamps_ms: Vec<u64>,
    /// Frames that reached an analyzer
    pub frames_processed: u32,
    /// Frames whose pose was not visible enough to measure
    pub unreliable_frames: u32,
    /// Frames rejected for having the wrong landmark count
    pub rejected_frames: u32,
    /// Number of frames each cue message appeared on
    pub cue_frames: BTreeMap<String, u32>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Drives one analyzer and one rep counter across a set.
pub struct SetTracker<'a> {
    session_id: Uuid,
    exercise: Option<String>,
    analyzer: &'a dyn ExerciseAnalyzer,
    rep_config: RepCounterConfig,
    state: RepCounterState,
    rep_timestamps_ms: Vec<u64>,
    frames_processed: u32,
    unreliable_frames: u32,
    rejected_frames: u32,
    cue_frames: BTreeMap<String, u32>,
    started_at: DateTime<Utc>,
}

impl SetTracker<'static> {
    /// Tracker using the default analyzers and rep counter tuning.
    pub fn new(exercise: Option<&str>) -> Self {
        SetTracker::with_analyzer(
            exercise,
            get_analyzer_for_exercise(exercise),
            RepCounterConfig::DEFAULT,
        )
    }
}

impl<'a> SetTracker<'a> {
    /// Tracker resolving its analyzer from a configured registry.
    pub fn with_registry(
        exercise: Option<&str>,
        registry: &'a AnalyzerRegistry,
        rep_config: RepCounterConfig,
    ) -> Self {
        Self::with_analyzer(exercise, registry.resolve(exercise), rep_config)
    }

    /// Tracker for a specific analyzer.
    pub fn with_analyzer(
        exercise: Option<&str>,
        analyzer: &'a dyn ExerciseAnalyzer,
        rep_config: RepCounterConfig,
    ) -> Self {
        tracing::info!(
            "Tracking set of {:?} with {} analyzer",
            exercise.unwrap_or("unnamed exercise"),
            analyzer.name()
        );

        Self {
            session_id: Uuid::new_v4(),
            exercise: exercise.map(str::to_string),
            analyzer,
            rep_config,
            state: create_rep_counter(),
            rep_timestamps_ms: Vec::new(),
            frames_processed: 0,
            unreliable_frames: 0,
            rejected_frames: 0,
            cue_frames: BTreeMap::new(),
            started_at: Utc::now(),
        }
    }

    /// Validate and process raw landmarks from the pose model.
    ///
    /// A wrong landmark count is counted and returned as an error; the
    /// tracker state is otherwise untouched so the loop can carry on.
    pub fn process_landmarks(
        &mut self,
        landmarks: &[Landmark],
        timestamp_ms: u64,
    ) -> Result<FrameReport, PoseError> {
        match Pose::from_slice(landmarks) {
            Ok(pose) => Ok(self.process_pose(&pose, timestamp_ms)),
            Err(e) => {
                self.rejected_frames += 1;
                tracing::warn!("Skipping frame at {}ms: {}", timestamp_ms, e);
                Err(e)
            }
        }
    }

    /// Process one validated pose.
    pub fn process_pose(&mut self, pose: &Pose, timestamp_ms: u64) -> FrameReport {
        let analysis = self.analyzer.analyze(pose);
        self.frames_processed += 1;

        if !analysis.is_reliable() {
            self.unreliable_frames += 1;
        }
        for cue in &analysis.feedback {
            *self.cue_frames.entry(cue.message.clone()).or_insert(0) += 1;
        }

        let previous = self.state.count;
        self.state = update_rep_counter_with(
            &self.rep_config,
            self.state,
            analysis.rep_metric,
            analysis.phase,
            timestamp_ms,
        );

        let rep_completed = self.state.count > previous;
        if rep_completed {
            self.rep_timestamps_ms.push(timestamp_ms);
            tracing::info!("Rep {} completed at {}ms", self.state.count, timestamp_ms);
        }

        FrameReport {
            analysis,
            reps: self.state.count,
            rep_completed,
            smoothed_metric: self.state.smoothed_metric,
        }
    }

    /// Current counter state.
    pub fn state(&self) -> RepCounterState {
        self.state
    }

    /// Reps completed so far.
    pub fn reps(&self) -> u32 {
        self.state.count
    }

    /// Family of the analyzer in use.
    pub fn family(&self) -> ExerciseFamily {
        self.analyzer.family()
    }

    /// Start a new set with the same exercise.
    pub fn reset(&mut self) {
        self.session_id = Uuid::new_v4();
        self.state = create_rep_counter();
        self.rep_timestamps_ms.clear();
        self.frames_processed = 0;
        self.unreliable_frames = 0;
        self.rejected_frames = 0;
        self.cue_frames.clear();
        self.started_at = Utc::now();
        tracing::debug!("Set tracker reset");
    }

    /// Summarize the set so far.
    pub fn summary(&self) -> SetSummary {
        SetSummary {
            session_id: self.session_id,
            exercise: self.exercise.clone(),
            family: self.analyzer.family(),
            reps: self.state.count,
            rep_timestamps_ms: self.rep_timestamps_ms.clone(),
            frames_processed: self.frames_processed,
            unreliable_frames: self.unreliable_frames,
            rejected_frames: self.rejected_frames,
            cue_frames: self.cue_frames.clone(),
            started_at: self.started_at,
            finished_at: Utc::now(),
        }
    }
}
