//! Value-to-pattern encoders
//!
//! Turn a single application value into a vector of control states. These
//! bypass the pending buffer: their inputs are already low-frequency.

mod bar;
mod progress;

pub use bar::{MAX_BAR_SEGMENTS, BarPattern, encode_bar, fill_bar, parse_fill};
pub use progress::{MAX_PROGRESS_SLOTS, ProgressVector, encode_progress};
