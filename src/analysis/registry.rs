//! Exercise name resolution.
//!
//! Exercise names come from the caller as free text ("Barbell Back Squat",
//! "seated DB shoulder press"). They are matched case-insensitively against an
//! ordered keyword table; the first family with a matching keyword wins and
//! anything unmatched falls back to the generic analyzer.

use serde::{Deserialize, Serialize};

use super::bench::BenchAnalyzer;
use super::deadlift::DeadliftAnalyzer;
use super::error::PoseError;
use super::generic::GenericAnalyzer;
use super::overhead_press::OverheadPressAnalyzer;
use super::squat::SquatAnalyzer;
use super::traits::ExerciseAnalyzer;
use super::types::AnalysisResult;
use crate::pose::{Landmark, Pose};
use crate::storage::config::AnalysisConfig;

/// Exercise families with a dedicated analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseFamily {
    Squat,
    BenchPress,
    Deadlift,
    OverheadPress,
    /// Anything not recognized
    Generic,
}

/// Keyword table, checked in order. "press" alone is too broad (leg press,
/// chest press), so the overhead family only matches shoulder-context names.
const KEYWORDS: &[(ExerciseFamily, &[&str])] = &[
    (ExerciseFamily::Squat, &["squat"]),
    (ExerciseFamily::BenchPress, &["bench"]),
    (ExerciseFamily::Deadlift, &["deadlift", "romanian"]),
    (
        ExerciseFamily::OverheadPress,
        &[
            "overhead",
            "ohp",
            "military",
            "shoulder press",
            "push press",
            "strict press",
        ],
    ),
];

impl ExerciseFamily {
    /// Resolve a free-text exercise name. Never fails.
    pub fn from_name(name: Option<&str>) -> Self {
        let Some(name) = name else {
            return ExerciseFamily::Generic;
        };
        let name = name.to_lowercase();

        KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| name.contains(kw)))
            .map(|(family, _)| *family)
            .unwrap_or(ExerciseFamily::Generic)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExerciseFamily::Squat => "Squat",
            ExerciseFamily::BenchPress => "Bench Press",
            ExerciseFamily::Deadlift => "Deadlift",
            ExerciseFamily::OverheadPress => "Overhead Press",
            ExerciseFamily::Generic => "Generic",
        }
    }
}

impl std::fmt::Display for ExerciseFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

static SQUAT: SquatAnalyzer = SquatAnalyzer::DEFAULT;
static BENCH: BenchAnalyzer = BenchAnalyzer::DEFAULT;
static DEADLIFT: DeadliftAnalyzer = DeadliftAnalyzer::DEFAULT;
static OVERHEAD_PRESS: OverheadPressAnalyzer = OverheadPressAnalyzer::DEFAULT;
static GENERIC: GenericAnalyzer = GenericAnalyzer::DEFAULT;

/// Analyzer for an exercise name, using the default thresholds.
pub fn get_analyzer_for_exercise(name: Option<&str>) -> &'static dyn ExerciseAnalyzer {
    let family = ExerciseFamily::from_name(name);
    tracing::trace!("Resolved exercise {:?} to {}", name, family);

    match family {
        ExerciseFamily::Squat => &SQUAT,
        ExerciseFamily::BenchPress => &BENCH,
        ExerciseFamily::Deadlift => &DEADLIFT,
        ExerciseFamily::OverheadPress => &OVERHEAD_PRESS,
        ExerciseFamily::Generic => &GENERIC,
    }
}

/// Validate raw landmarks and analyze them with the default thresholds.
pub fn analyze_frame(
    name: Option<&str>,
    landmarks: &[Landmark],
) -> Result<AnalysisResult, PoseError> {
    let pose = Pose::from_slice(landmarks)?;
    Ok(get_analyzer_for_exercise(name).analyze(&pose))
}

/// Analyzer table built from a loaded configuration.
pub struct AnalyzerRegistry {
    analyzers: Vec<Box<dyn ExerciseAnalyzer>>,
    fallback: Box<dyn ExerciseAnalyzer>,
}

impl AnalyzerRegistry {
    /// Registry with every built-in analyzer tuned from `config`.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        let gate = config.confidence.min_visibility;
        Self {
            analyzers: vec![
                Box::new(SquatAnalyzer::new(config.squat, gate)),
                Box::new(BenchAnalyzer::new(config.bench, gate)),
                Box::new(DeadliftAnalyzer::new(config.deadlift, gate)),
                Box::new(OverheadPressAnalyzer::new(config.overhead_press, gate)),
            ],
            fallback: Box::new(GenericAnalyzer::new(config.generic, gate)),
        }
    }

    /// Add an analyzer, replacing any existing one for the same family.
    pub fn register(&mut self, analyzer: Box<dyn ExerciseAnalyzer>) {
        let family = analyzer.family();
        if family == ExerciseFamily::Generic {
            self.fallback = analyzer;
            return;
        }
        self.analyzers.retain(|a| a.family() != family);
        self.analyzers.push(analyzer);
    }

    /// Analyzer for an exercise name.
    pub fn resolve(&self, name: Option<&str>) -> &dyn ExerciseAnalyzer {
        let family = ExerciseFamily::from_name(name);
        self.analyzers
            .iter()
            .find(|a| a.family() == family)
            .map(|a| a.as_ref())
            .unwrap_or(self.fallback.as_ref())
    }

    /// Validate raw landmarks and analyze them.
    pub fn analyze_frame(
        &self,
        name: Option<&str>,
        landmarks: &[Landmark],
    ) -> Result<AnalysisResult, PoseError> {
        let pose = Pose::from_slice(landmarks)?;
        Ok(self.resolve(name).analyze(&pose))
    }
}

impl Default for AnalyzerRegistry {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}
