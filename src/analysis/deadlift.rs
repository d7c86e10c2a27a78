//! Deadlift analysis.
//!
//! Lockout and chest position are checked independently, so a frame can
//! earn both cues, one, or neither.

use super::joints::{self, LEFT_HIP, LEFT_KNEE, RIGHT_HIP, RIGHT_KNEE};
use super::registry::ExerciseFamily;
use super::traits::ExerciseAnalyzer;
use super::types::{normalize_angle, AnalysisResult, FeedbackCue};
use crate::pose::{is_reliable, Pose};
use crate::storage::config::{ConfidenceSettings, DeadliftThresholds};

/// Deadlift form analyzer.
#[derive(Debug, Clone, Copy)]
pub struct DeadliftAnalyzer {
    thresholds: DeadliftThresholds,
    min_visibility: f32,
}

impl DeadliftAnalyzer {
    pub const DEFAULT: Self = Self::new(
        DeadliftThresholds::DEFAULT,
        ConfidenceSettings::DEFAULT.min_visibility,
    );

    pub const fn new(thresholds: DeadliftThresholds, min_visibility: f32) -> Self {
        Self {
            thresholds,
            min_visibility,
        }
    }

    fn is_locked_out(&self, pose: &Pose, hip_angle: f32) -> bool {
        let t = &self.thresholds;
        hip_angle >= t.lockout_hip_deg
            && joints::bilateral_angle(pose, LEFT_KNEE, RIGHT_KNEE) >= t.lockout_knee_deg
            && joints::torso_horizontal_offset(pose) <= t.lockout_max_offset
    }

    fn chest_dropped(&self, pose: &Pose) -> bool {
        // Image y grows downward: larger y means lower in the frame
        let shoulder_y = joints::shoulder_midpoint(pose).1;
        let hip_y = joints::hip_midpoint(pose).1;
        shoulder_y > hip_y + self.thresholds.chest_drop_margin
    }
}

impl Default for DeadliftAnalyzer {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ExerciseAnalyzer for DeadliftAnalyzer {
    fn analyze(&self, pose: &Pose) -> AnalysisResult {
        if !is_reliable(pose, &joints::LOWER_BODY_JOINTS, self.min_visibility) {
            return AnalysisResult::unreliable();
        }

        let t = &self.thresholds;
        let hip_angle = joints::bilateral_angle(pose, LEFT_HIP, RIGHT_HIP);
        let mut feedback = Vec::new();

        if self.is_locked_out(pose, hip_angle) {
            feedback.push(FeedbackCue::good("Strong lockout: hips fully extended"));
        }

        if self.chest_dropped(pose) {
            feedback.push(FeedbackCue::error(
                "Keep your chest up: shoulders dropped below your hips",
            ));
        }

        let metric = normalize_angle(hip_angle, t.bottom_hip_deg, t.top_hip_deg);
        AnalysisResult::measured(feedback, metric, t.up_threshold)
    }

    fn family(&self) -> ExerciseFamily {
        ExerciseFamily::Deadlift
    }
}
