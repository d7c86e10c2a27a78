//! Analysis thresholds and application configuration.
//!
//! Every tunable number the analyzers and the rep counter use lives here,
//! grouped per exercise. Each group has a `const DEFAULT` so analyzers can be
//! built as statics, and `#[serde(default)]` so a config file only needs to
//! mention the values it overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Confidence gating shared by all analyzers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceSettings {
    /// Minimum mean visibility of the joints an analyzer measures (0.0-1.0)
    pub min_visibility: f32,
}

impl ConfidenceSettings {
    pub const DEFAULT: Self = Self {
        min_visibility: 0.5,
    };
}

impl Default for ConfidenceSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Squat thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquatThresholds {
    /// Knee angle mapped to metric 1.0 (standing)
    pub standing_knee_deg: f32,
    /// Knee angle mapped to metric 0.0 (deep squat)
    pub bottom_knee_deg: f32,
    /// Knee angle at or below which the squat counts as deep enough
    pub depth_knee_deg: f32,
    /// Max horizontal shoulder-to-hip midpoint offset before flagging the back
    pub max_back_offset: f32,
    /// Metric at or above which the phase is "up"
    pub up_threshold: f32,
}

impl SquatThresholds {
    pub const DEFAULT: Self = Self {
        standing_knee_deg: 180.0,
        bottom_knee_deg: 70.0,
        depth_knee_deg: 100.0,
        max_back_offset: 0.15,
        up_threshold: 0.5,
    };
}

impl Default for SquatThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Bench press thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchThresholds {
    /// Largest acceptable upper-arm to torso angle
    pub max_elbow_flare_deg: f32,
    /// Elbow angle mapped to metric 1.0 (arms extended)
    pub top_elbow_deg: f32,
    /// Elbow angle mapped to metric 0.0 (bar at chest)
    pub bottom_elbow_deg: f32,
    /// Elbow angle counted as a full lockout
    pub lockout_elbow_deg: f32,
    /// Metric at or above which the phase is "up"
    pub up_threshold: f32,
}

impl BenchThresholds {
    pub const DEFAULT: Self = Self {
        max_elbow_flare_deg: 75.0,
        top_elbow_deg: 170.0,
        bottom_elbow_deg: 70.0,
        lockout_elbow_deg: 165.0,
        up_threshold: 0.5,
    };
}

impl Default for BenchThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Deadlift thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeadliftThresholds {
    /// Minimum shoulder-hip-knee angle for lockout
    pub lockout_hip_deg: f32,
    /// Minimum hip-knee-ankle angle for lockout
    pub lockout_knee_deg: f32,
    /// Max horizontal shoulder-to-hip midpoint offset at lockout
    pub lockout_max_offset: f32,
    /// How far (image y) shoulders may sit below hips before flagging
    pub chest_drop_margin: f32,
    /// Hip angle mapped to metric 1.0
    pub top_hip_deg: f32,
    /// Hip angle mapped to metric 0.0
    pub bottom_hip_deg: f32,
    /// Metric at or above which the phase is "up"
    pub up_threshold: f32,
}

impl DeadliftThresholds {
    pub const DEFAULT: Self = Self {
        lockout_hip_deg: 165.0,
        lockout_knee_deg: 165.0,
        lockout_max_offset: 0.05,
        chest_drop_margin: 0.02,
        top_hip_deg: 180.0,
        bottom_hip_deg: 90.0,
        up_threshold: 0.5,
    };
}

impl Default for DeadliftThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Overhead press thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverheadPressThresholds {
    /// Elbow angle counted as a full lockout
    pub lockout_elbow_deg: f32,
    /// Elbow angle mapped to metric 1.0
    pub top_elbow_deg: f32,
    /// Elbow angle mapped to metric 0.0 (bar at the shoulders)
    pub bottom_elbow_deg: f32,
    /// Max horizontal shoulder-to-hip midpoint offset before flagging a lean
    pub max_lean_offset: f32,
    /// Metric at or above which the phase is "up"
    pub up_threshold: f32,
}

impl OverheadPressThresholds {
    pub const DEFAULT: Self = Self {
        lockout_elbow_deg: 165.0,
        top_elbow_deg: 175.0,
        bottom_elbow_deg: 60.0,
        max_lean_offset: 0.1,
        up_threshold: 0.5,
    };
}

impl Default for OverheadPressThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Thresholds for exercises without a dedicated analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenericThresholds {
    /// Max left/right shoulder height difference (image y)
    pub max_shoulder_tilt: f32,
    /// Max left/right hip height difference (image y)
    pub max_hip_tilt: f32,
    /// Knee angle mapped to metric 1.0
    pub top_knee_deg: f32,
    /// Knee angle mapped to metric 0.0
    pub bottom_knee_deg: f32,
    /// Metric at or above which the phase is "up"
    pub up_threshold: f32,
}

impl GenericThresholds {
    pub const DEFAULT: Self = Self {
        max_shoulder_tilt: 0.05,
        max_hip_tilt: 0.05,
        top_knee_deg: 180.0,
        bottom_knee_deg: 70.0,
        up_threshold: 0.5,
    };
}

impl Default for GenericThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Rep counter tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepCounterConfig {
    /// EMA weight of the newest reading (0.0-1.0)
    pub smoothing_alpha: f32,
    /// Minimum time between two counted reps in milliseconds
    pub min_rep_interval_ms: u64,
}

impl RepCounterConfig {
    pub const DEFAULT: Self = Self {
        smoothing_alpha: 0.4,
        min_rep_interval_ms: 600,
    };
}

impl Default for RepCounterConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Application version
    pub version: String,
    pub confidence: ConfidenceSettings,
    pub squat: SquatThresholds,
    pub bench: BenchThresholds,
    pub deadlift: DeadliftThresholds,
    pub overhead_press: OverheadPressThresholds,
    pub generic: GenericThresholds,
    pub rep_counter: RepCounterConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            confidence: ConfidenceSettings::DEFAULT,
            squat: SquatThresholds::DEFAULT,
            bench: BenchThresholds::DEFAULT,
            deadlift: DeadliftThresholds::DEFAULT,
            overhead_press: OverheadPressThresholds::DEFAULT,
            generic: GenericThresholds::DEFAULT,
            rep_counter: RepCounterConfig::DEFAULT,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "liftform", "LiftForm")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load configuration from the default location.
pub fn load_config() -> Result<AnalysisConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load configuration from a file, falling back to defaults if it does not exist.
pub fn load_config_from(path: &Path) -> Result<AnalysisConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {:?}, using defaults", path);
        return Ok(AnalysisConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let config: AnalysisConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    tracing::info!("Loaded analysis config from {:?}", path);
    Ok(config)
}

/// Save configuration to the default location.
pub fn save_config(config: &AnalysisConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save configuration to a file.
pub fn save_config_to(config: &AnalysisConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
