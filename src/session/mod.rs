//! Per-set bookkeeping on top of the pure analysis core.

pub mod tracker;

pub use tracker::{FrameReport, SetSummary, SetTracker};
