//! LiftForm - Resistance Training Form Analysis
//!
//! Replays recorded pose landmarks through the analyzers and rep counter.
//!
//! Usage: `liftform <frames.jsonl> [exercise name...]`
//!
//! Each input line is one frame:
//! `{"timestamp_ms": 0, "landmarks": [{"x": 0.5, "y": 0.3, "z": 0.0, "visibility": 0.9}, ...]}`
//! Logs go to stderr; the set summary is printed to stdout as JSON.

use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use liftform::storage::config::load_config;
use liftform::{AnalyzerRegistry, Landmark, SetTracker};

/// One recorded frame.
#[derive(Debug, Deserialize)]
struct FrameRecord {
    timestamp_ms: u64,
    landmarks: Vec<Landmark>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting LiftForm v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: liftform <frames.jsonl> [exercise name...]");
    };
    let words: Vec<String> = args.collect();
    let exercise = (!words.is_empty()).then(|| words.join(" "));

    let config = load_config().context("Failed to load analysis config")?;
    let registry = AnalyzerRegistry::from_config(&config);
    let mut tracker = SetTracker::with_registry(exercise.as_deref(), &registry, config.rep_counter);

    let file = File::open(&path).with_context(|| format!("Failed to open {}", path))?;

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read {}", path))?;
        if line.trim().is_empty() {
            continue;
        }

        let frame: FrameRecord = match serde_json::from_str(&line) {
            Ok(frame) => frame,
            Err(e) => {
                tracing::warn!("Skipping malformed frame on line {}: {}", index + 1, e);
                continue;
            }
        };

        // Wrong-length frames are logged and counted by the tracker
        if let Ok(report) = tracker.process_landmarks(&frame.landmarks, frame.timestamp_ms) {
            tracing::debug!(
                "t={}ms metric={:?} phase={:?} reps={} cues={:?}",
                frame.timestamp_ms,
                report.analysis.rep_metric,
                report.analysis.phase,
                report.reps,
                report
                    .analysis
                    .feedback
                    .iter()
                    .map(|cue| cue.message.as_str())
                    .collect::<Vec<_>>()
            );
        }
    }

    let summary = tracker.summary();
    tracing::info!(
        "Finished: {} reps over {} frames ({} unreliable, {} rejected)",
        summary.reps,
        summary.frames_processed,
        summary.unreliable_frames,
        summary.rejected_frames
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
