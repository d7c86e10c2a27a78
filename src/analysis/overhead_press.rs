//! Overhead press analysis.

use super::joints::{self, LEFT_ELBOW, RIGHT_ELBOW};
use super::registry::ExerciseFamily;
use super::traits::ExerciseAnalyzer;
use super::types::{normalize_angle, AnalysisResult, FeedbackCue};
use crate::pose::{is_reliable, Pose, PoseLandmark};
use crate::storage::config::{ConfidenceSettings, OverheadPressThresholds};

/// Overhead press form analyzer.
///
/// The shoulder-elbow-wrist chain drives both the rep metric and the lockout
/// check. Lockout cues only apply once both wrists are above the shoulders.
#[derive(Debug, Clone, Copy)]
pub struct OverheadPressAnalyzer {
    thresholds: OverheadPressThresholds,
    min_visibility: f32,
}

impl OverheadPressAnalyzer {
    pub const DEFAULT: Self = Self::new(
        OverheadPressThresholds::DEFAULT,
        ConfidenceSettings::DEFAULT.min_visibility,
    );

    pub const fn new(thresholds: OverheadPressThresholds, min_visibility: f32) -> Self {
        Self {
            thresholds,
            min_visibility,
        }
    }
}

impl Default for OverheadPressAnalyzer {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn wrists_overhead(pose: &Pose) -> bool {
    pose[PoseLandmark::LeftWrist].y < pose[PoseLandmark::LeftShoulder].y
        && pose[PoseLandmark::RightWrist].y < pose[PoseLandmark::RightShoulder].y
}

impl ExerciseAnalyzer for OverheadPressAnalyzer {
    fn analyze(&self, pose: &Pose) -> AnalysisResult {
        if !is_reliable(pose, &joints::UPPER_BODY_JOINTS, self.min_visibility) {
            return AnalysisResult::unreliable();
        }

        let t = &self.thresholds;
        let elbow_angle = joints::bilateral_angle(pose, LEFT_ELBOW, RIGHT_ELBOW);
        let mut feedback = Vec::new();

        if wrists_overhead(pose) {
            if elbow_angle >= t.lockout_elbow_deg {
                feedback.push(FeedbackCue::good("Strong lockout overhead"));
            } else {
                feedback.push(FeedbackCue::warning("Press all the way to lockout overhead"));
            }
        }

        if joints::torso_horizontal_offset(pose) > t.max_lean_offset {
            feedback.push(FeedbackCue::warning("Avoid leaning back: brace your core"));
        }

        let metric = normalize_angle(elbow_angle, t.bottom_elbow_deg, t.top_elbow_deg);
        AnalysisResult::measured(feedback, metric, t.up_threshold)
    }

    fn family(&self) -> ExerciseFamily {
        ExerciseFamily::OverheadPress
    }
}
