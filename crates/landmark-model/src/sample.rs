//! Derived gaze samples.

use serde::{Deserialize, Serialize};

/// One frame's gaze signal. Both components are nominally in `[-1.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GazeSample {
    /// Horizontal iris displacement relative to the eye corners.
    pub gaze_x: f64,
    /// Mean vertical iris position.
    pub gaze_y: f64,
}

impl GazeSample {
    pub fn new(gaze_x: f64, gaze_y: f64) -> Self {
        Self { gaze_x, gaze_y }
    }

    /// The sample as an `(x, y)` pair, the shape the direction chart plots.
    pub fn as_pair(&self) -> (f64, f64) {
        (self.gaze_x, self.gaze_y)
    }
}
