//! Gazeplot Session Engine
//!
//! Runs the per-frame pipeline for one viewing session.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                 GazeSession                   │
//! │  ┌─────────────┐  ┌──────────────────┐        │
//! │  │ FrameSource │─▶│ LandmarkDetector │        │
//! │  └─────────────┘  └────────┬─────────┘        │
//! │                            ▼                  │
//! │                  extract_gaze (gaze-core)     │
//! │                            │                  │
//! │                            ▼                  │
//! │                ChartRenderer (chart-render)   │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! Frames are processed strictly one at a time: the next frame is only
//! requested once the previous frame's charts have been redrawn.

pub mod detector;
pub mod session;
pub mod source;

pub use detector::{LandmarkDetector, ReplayDetector};
pub use session::*;
pub use source::{CameraFrame, FrameSource, ReplaySource};
