//! Per-frame analysis output types.

use serde::{Deserialize, Serialize};

/// How a feedback cue should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Positive reinforcement
    Good,
    /// Something to adjust
    Warning,
    /// Form breakdown worth stopping for
    Error,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Good => "good",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A short coaching message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeedbackCue {
    pub message: String,
    pub severity: Severity,
}

impl FeedbackCue {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn good(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Good)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }
}

/// Coarse position within a repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Extended / top of the movement
    Up,
    /// Flexed / bottom of the movement
    Down,
}

impl Phase {
    /// Classify a rep metric against the up/down midpoint.
    pub fn from_metric(metric: f32, up_threshold: f32) -> Self {
        if metric >= up_threshold {
            Phase::Up
        } else {
            Phase::Down
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Up => write!(f, "up"),
            Phase::Down => write!(f, "down"),
        }
    }
}

/// Result of analyzing one pose snapshot.
///
/// `rep_metric` is `None` only when the pose was not visible enough to
/// trust. When present it lies in `[0, 1]` and `phase` is set as well.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub feedback: Vec<FeedbackCue>,
    pub rep_metric: Option<f32>,
    pub phase: Option<Phase>,
}

impl AnalysisResult {
    /// A frame that could not be trusted: no cues, no metric, no phase.
    pub fn unreliable() -> Self {
        Self::default()
    }

    /// Build a result from a raw metric, clamping it and deriving the phase.
    pub fn measured(feedback: Vec<FeedbackCue>, metric: f32, up_threshold: f32) -> Self {
        let metric = if metric.is_finite() {
            metric.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            feedback,
            rep_metric: Some(metric),
            phase: Some(Phase::from_metric(metric, up_threshold)),
        }
    }

    /// Whether the pose was trusted.
    pub fn is_reliable(&self) -> bool {
        self.rep_metric.is_some()
    }

    /// Whether any cue message contains the given text (case-insensitive).
    pub fn has_cue(&self, needle: &str) -> bool {
        self.find_cue(needle).is_some()
    }

    /// First cue whose message contains the given text (case-insensitive).
    pub fn find_cue(&self, needle: &str) -> Option<&FeedbackCue> {
        let needle = needle.to_lowercase();
        self.feedback
            .iter()
            .find(|cue| cue.message.to_lowercase().contains(&needle))
    }
}

/// Map a joint angle linearly onto `[0, 1]` between `low_deg` and `high_deg`.
pub fn normalize_angle(angle_deg: f32, low_deg: f32, high_deg: f32) -> f32 {
    if high_deg <= low_deg {
        return 0.0;
    }
    ((angle_deg - low_deg) / (high_deg - low_deg)).clamp(0.0, 1.0)
}
