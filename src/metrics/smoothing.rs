//! Rep metric smoothing.
//!
//! Pose estimates jitter from frame to frame. An exponential moving average
//! keeps the displayed metric steady without holding a window of samples.

/// One exponential moving average step.
///
/// The first reading (no previous value) seeds the average directly.
/// `alpha` is the weight of the new reading and is clamped to `[0, 1]`.
pub fn ema_step(previous: Option<f32>, value: f32, alpha: f32) -> f32 {
    match previous {
        None => value,
        Some(prev) => {
            let alpha = alpha.clamp(0.0, 1.0);
            alpha * value + (1.0 - alpha) * prev
        }
    }
}
