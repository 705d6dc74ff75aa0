//! Gazeplot Gaze Core
//!
//! Turns detector output into a plottable signal:
//! - **Extractor:** derive `(gaze_x, gaze_y)` from one frame's landmarks
//! - **Series:** fixed-capacity, oldest-evicted sample windows
//! - **Stats:** running range/mean of a sample sequence
//!
//! This crate is pure computation: no I/O, no rendering.
//! All inputs are data; all outputs are data.

pub mod extractor;
pub mod series;
pub mod stats;

pub use extractor::{extract_gaze, sample_from_results};
pub use series::{SlidingSeries, MAX_POINTS};
pub use stats::{AxisStats, GazeStats};
