//! Fallback analysis for exercises without a dedicated analyzer.
//!
//! Only checks that hold for almost any standing movement: left/right
//! symmetry of the shoulders and hips. The rep metric tracks knee extension.

use super::joints::{self, LEFT_KNEE, RIGHT_KNEE};
use super::registry::ExerciseFamily;
use super::traits::ExerciseAnalyzer;
use super::types::{normalize_angle, AnalysisResult, FeedbackCue};
use crate::pose::{is_reliable, Pose, PoseLandmark};
use crate::storage::config::{ConfidenceSettings, GenericThresholds};

/// Generic symmetry analyzer.
#[derive(Debug, Clone, Copy)]
pub struct GenericAnalyzer {
    thresholds: GenericThresholds,
    min_visibility: f32,
}

impl GenericAnalyzer {
    pub const DEFAULT: Self = Self::new(
        GenericThresholds::DEFAULT,
        ConfidenceSettings::DEFAULT.min_visibility,
    );

    pub const fn new(thresholds: GenericThresholds, min_visibility: f32) -> Self {
        Self {
            thresholds,
            min_visibility,
        }
    }
}

impl Default for GenericAnalyzer {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn height_difference(pose: &Pose, left: PoseLandmark, right: PoseLandmark) -> f32 {
    (pose[left].y - pose[right].y).abs()
}

impl ExerciseAnalyzer for GenericAnalyzer {
    fn analyze(&self, pose: &Pose) -> AnalysisResult {
        if !is_reliable(pose, &joints::LOWER_BODY_JOINTS, self.min_visibility) {
            return AnalysisResult::unreliable();
        }

        let t = &self.thresholds;
        let mut feedback = Vec::new();

        if height_difference(pose, PoseLandmark::LeftShoulder, PoseLandmark::RightShoulder)
            > t.max_shoulder_tilt
        {
            feedback.push(FeedbackCue::warning("Level your shoulders"));
        }

        if height_difference(pose, PoseLandmark::LeftHip, PoseLandmark::RightHip) > t.max_hip_tilt {
            feedback.push(FeedbackCue::warning("Level your hips"));
        }

        let knee_angle = joints::bilateral_angle(pose, LEFT_KNEE, RIGHT_KNEE);
        let metric = normalize_angle(knee_angle, t.bottom_knee_deg, t.top_knee_deg);
        AnalysisResult::measured(feedback, metric, t.up_threshold)
    }

    fn family(&self) -> ExerciseFamily {
        ExerciseFamily::Generic
    }
}
