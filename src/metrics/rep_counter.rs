//! Repetition counting.
//!
//! The counter is a pure state transition over an immutable value: the
//! caller owns the [`RepCounterState`], passes it in with each frame's
//! analysis, and keeps the returned state for the next frame. Resetting for a
//! new set is just [`create_rep_counter`].
//!
//! A rep is a `Down → Up` phase change. Phase noise near the midpoint can
//! flip back and forth within a few frames, so a rep only counts if at least
//! `min_rep_interval_ms` have passed since the previous counted rep.

use serde::{Deserialize, Serialize};

use super::smoothing::ema_step;
use crate::analysis::types::Phase;
use crate::storage::config::RepCounterConfig;

/// Rep counter state threaded across frames.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RepCounterState {
    /// Completed reps; never decreases
    pub count: u32,
    /// Phase seen on the last frame with a metric
    pub last_phase: Option<Phase>,
    /// Exponential moving average of the rep metric
    pub smoothed_metric: Option<f32>,
    /// Timestamp of the last counted rep
    pub last_rep_timestamp_ms: Option<u64>,
}

/// Fresh counter for a new set or exercise.
pub fn create_rep_counter() -> RepCounterState {
    RepCounterState::default()
}

/// Advance the counter by one frame using the default tuning.
pub fn update_rep_counter(
    state: RepCounterState,
    metric: Option<f32>,
    phase: Option<Phase>,
    timestamp_ms: u64,
) -> RepCounterState {
    update_rep_counter_with(&RepCounterConfig::DEFAULT, state, metric, phase, timestamp_ms)
}

/// Advance the counter by one frame.
///
/// A frame without a metric (unreliable pose) leaves the state untouched.
/// Otherwise the metric is smoothed, the phase recorded, and a rep counted
/// on a debounced `Down → Up` transition. `Up → Down` never counts.
pub fn update_rep_counter_with(
    config: &RepCounterConfig,
    state: RepCounterState,
    metric: Option<f32>,
    phase: Option<Phase>,
    timestamp_ms: u64,
) -> RepCounterState {
    let Some(metric) = metric else {
        return state;
    };

    let smoothed_metric = Some(ema_step(state.smoothed_metric, metric, config.smoothing_alpha));

    let completes_rep = state.last_phase == Some(Phase::Down) && phase == Some(Phase::Up);
    let debounced = match state.last_rep_timestamp_ms {
        None => true,
        // Out-of-order timestamps saturate to zero elapsed
        Some(last) => timestamp_ms.saturating_sub(last) >= config.min_rep_interval_ms,
    };

    let mut next = RepCounterState {
        last_phase: phase,
        smoothed_metric,
        ..state
    };

    if completes_rep {
        if debounced {
            next.count = state.count.saturating_add(1);
            next.last_rep_timestamp_ms = Some(timestamp_ms);
            tracing::debug!("Rep {} counted at {}ms", next.count, timestamp_ms);
        } else {
            tracing::trace!("Rep rejected by debounce at {}ms", timestamp_ms);
        }
    }

    next
}
