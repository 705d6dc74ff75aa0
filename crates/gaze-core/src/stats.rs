//! Running statistics over gaze samples.

use gazeplot_landmark_model::GazeSample;
use serde::Serialize;

/// Min/max/mean of one gaze component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Accumulates per-axis statistics over a sequence of samples.
#[derive(Debug, Clone, Default)]
pub struct GazeStats {
    count: u64,
    sum_x: f64,
    sum_y: f64,
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl GazeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, sample: GazeSample) {
        if self.count == 0 {
            self.min_x = sample.gaze_x;
            self.max_x = sample.gaze_x;
            self.min_y = sample.gaze_y;
            self.max_y = sample.gaze_y;
        } else {
            self.min_x = self.min_x.min(sample.gaze_x);
            self.max_x = self.max_x.max(sample.gaze_x);
            self.min_y = self.min_y.min(sample.gaze_y);
            self.max_y = self.max_y.max(sample.gaze_y);
        }
        self.sum_x += sample.gaze_x;
        self.sum_y += sample.gaze_y;
        self.count += 1;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn x(&self) -> Option<AxisStats> {
        (self.count > 0).then(|| AxisStats {
            min: self.min_x,
            max: self.max_x,
            mean: self.sum_x / self.count as f64,
        })
    }

    pub fn y(&self) -> Option<AxisStats> {
        (self.count > 0).then(|| AxisStats {
            min: self.min_y,
            max: self.max_y,
            mean: self.sum_y / self.count as f64,
        })
    }

    /// Whether every recorded sample stayed inside the charts' `[-1, 1]` domain.
    pub fn within_chart_domain(&self) -> bool {
        self.count == 0
            || (self.min_x >= -1.0 && self.max_x <= 1.0 && self.min_y >= -1.0 && self.max_y <= 1.0)
    }
}

impl FromIterator<GazeSample> for GazeStats {
    fn from_iter<I: IntoIterator<Item = GazeSample>>(iter: I) -> Self {
        let mut stats = Self::new();
        for sample in iter {
            stats.record(sample);
        }
        stats
    }
}
