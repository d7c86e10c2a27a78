//! Bench press analysis.
//!
//! Elbow flare is the angle between the upper arm and the torso, measured at
//! the shoulder. The rep metric follows elbow extension.

use super::joints::{self, LEFT_ELBOW, LEFT_FLARE, RIGHT_ELBOW, RIGHT_FLARE};
use super::registry::ExerciseFamily;
use super::traits::ExerciseAnalyzer;
use super::types::{normalize_angle, AnalysisResult, FeedbackCue};
use crate::pose::{is_reliable, Pose};
use crate::storage::config::{BenchThresholds, ConfidenceSettings};

/// Bench press form analyzer.
#[derive(Debug, Clone, Copy)]
pub struct BenchAnalyzer {
    thresholds: BenchThresholds,
    min_visibility: f32,
}

impl BenchAnalyzer {
    pub const DEFAULT: Self = Self::new(
        BenchThresholds::DEFAULT,
        ConfidenceSettings::DEFAULT.min_visibility,
    );

    pub const fn new(thresholds: BenchThresholds, min_visibility: f32) -> Self {
        Self {
            thresholds,
            min_visibility,
        }
    }
}

impl Default for BenchAnalyzer {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ExerciseAnalyzer for BenchAnalyzer {
    fn analyze(&self, pose: &Pose) -> AnalysisResult {
        if !is_reliable(pose, &joints::UPPER_BODY_JOINTS, self.min_visibility) {
            return AnalysisResult::unreliable();
        }

        let t = &self.thresholds;
        let mut feedback = Vec::new();

        // Worst side decides
        let flare = joints::chain_angle(pose, LEFT_FLARE)
            .max(joints::chain_angle(pose, RIGHT_FLARE));
        if flare > t.max_elbow_flare_deg {
            feedback.push(FeedbackCue::warning("Tuck your elbows closer to your torso"));
        }

        let elbow_angle = joints::bilateral_angle(pose, LEFT_ELBOW, RIGHT_ELBOW);
        if elbow_angle >= t.lockout_elbow_deg {
            feedback.push(FeedbackCue::good("Full lockout at the top"));
        }

        let metric = normalize_angle(elbow_angle, t.bottom_elbow_deg, t.top_elbow_deg);
        AnalysisResult::measured(feedback, metric, t.up_threshold)
    }

    fn family(&self) -> ExerciseFamily {
        ExerciseFamily::BenchPress
    }
}
