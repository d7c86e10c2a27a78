//! Squat analysis.
//!
//! The rep metric follows knee extension: standing tall reads close to 1.0,
//! a deep squat close to 0.0. Form checks cover depth and torso position.

use super::joints::{self, LEFT_KNEE, RIGHT_KNEE};
use super::registry::ExerciseFamily;
use super::traits::ExerciseAnalyzer;
use super::types::{normalize_angle, AnalysisResult, FeedbackCue};
use crate::pose::{is_reliable, Pose};
use crate::storage::config::{ConfidenceSettings, SquatThresholds};

/// Squat form analyzer.
#[derive(Debug, Clone, Copy)]
pub struct SquatAnalyzer {
    thresholds: SquatThresholds,
    min_visibility: f32,
}

impl SquatAnalyzer {
    pub const DEFAULT: Self = Self::new(
        SquatThresholds::DEFAULT,
        ConfidenceSettings::DEFAULT.min_visibility,
    );

    pub const fn new(thresholds: SquatThresholds, min_visibility: f32) -> Self {
        Self {
            thresholds,
            min_visibility,
        }
    }
}

impl Default for SquatAnalyzer {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ExerciseAnalyzer for SquatAnalyzer {
    fn analyze(&self, pose: &Pose) -> AnalysisResult {
        if !is_reliable(pose, &joints::LOWER_BODY_JOINTS, self.min_visibility) {
            return AnalysisResult::unreliable();
        }

        let t = &self.thresholds;
        let knee_angle = joints::bilateral_angle(pose, LEFT_KNEE, RIGHT_KNEE);
        let mut feedback = Vec::new();

        if knee_angle > t.depth_knee_deg {
            feedback.push(FeedbackCue::warning(
                "Squat deeper: aim for thighs parallel to the floor",
            ));
        } else {
            feedback.push(FeedbackCue::good("Good depth"));
        }

        if joints::torso_horizontal_offset(pose) > t.max_back_offset {
            feedback.push(FeedbackCue::error(
                "Keep your back straight and chest over your hips",
            ));
        }

        let metric = normalize_angle(knee_angle, t.bottom_knee_deg, t.standing_knee_deg);
        AnalysisResult::measured(feedback, metric, t.up_threshold)
    }

    fn family(&self) -> ExerciseFamily {
        ExerciseFamily::Squat
    }
}
