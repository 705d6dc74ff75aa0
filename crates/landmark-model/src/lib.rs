//! Gazeplot Landmark Model
//!
//! Defines the data contracts between the landmark detector and the gaze
//! pipeline:
//! - **Landmarks:** per-frame facial keypoints and the named roles the gaze
//!   computation reads
//! - **Samples:** derived `(gaze_x, gaze_y)` pairs
//! - **Streams:** detector output per frame, and its JSONL recording format
//!
//! Landmark coordinates are normalized to the frame, as produced by face
//! mesh detectors: `(0.0, 0.0)` is top-left, `(1.0, 1.0)` bottom-right.

pub mod landmark;
pub mod sample;
pub mod stream;

pub use landmark::*;
pub use sample::*;
pub use stream::*;
