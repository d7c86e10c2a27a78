//! Rep metric smoothing and repetition counting.

pub mod rep_counter;
pub mod smoothing;

pub use rep_counter::{
    create_rep_counter, update_rep_counter, update_rep_counter_with, RepCounterState,
};
