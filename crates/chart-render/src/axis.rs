//! Axis geometry.
//!
//! An [`Axis`] knows where its ticks land and what they read; turning that
//! into drawing commands is the surface's job.

use crate::scale::LinearScale;

/// Which side of the plot the axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    /// Horizontal axis, ticks pointing down.
    Bottom,
    /// Vertical axis, ticks pointing left.
    Left,
}

/// One tick mark.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    /// Offset along the axis in pixels.
    pub position: f64,
    pub label: String,
}

/// A scale rendered as an axis, placed by a translation.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub orient: AxisOrient,
    pub scale: LinearScale,
    /// CSS class of the axis group, e.g. `x-axis`.
    pub class: String,
    pub translate: (f64, f64),
    pub tick_count: usize,
    pub tick_size: f64,
    pub tick_padding: f64,
}

impl Axis {
    fn new(orient: AxisOrient, scale: LinearScale, class: &str) -> Self {
        Self {
            orient,
            scale,
            class: class.to_string(),
            translate: (0.0, 0.0),
            tick_count: 10,
            tick_size: 6.0,
            tick_padding: 3.0,
        }
    }

    pub fn bottom(scale: LinearScale) -> Self {
        Self::new(AxisOrient::Bottom, scale, "x-axis")
    }

    pub fn left(scale: LinearScale) -> Self {
        Self::new(AxisOrient::Left, scale, "y-axis")
    }

    pub fn translated(mut self, dx: f64, dy: f64) -> Self {
        self.translate = (dx, dy);
        self
    }

    pub fn ticks(&self) -> Vec<AxisTick> {
        self.scale
            .ticks(self.tick_count)
            .into_iter()
            .map(|value| AxisTick {
                value,
                position: self.scale.map(value),
                label: self.scale.format_tick(value, self.tick_count),
            })
            .collect()
    }

    /// Pixel extent covered by the axis line, smaller end first.
    pub fn extent(&self) -> (f64, f64) {
        let (r0, r1) = self.scale.range;
        (r0.min(r1), r0.max(r1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_index_axis_ticks() {
        let axis = Axis::bottom(LinearScale::new((0.0, 99.0), (0.0, 640.0))).translated(0.0, 460.0);
        let ticks = axis.ticks();
        assert_eq!(ticks.len(), 10);
        assert_eq!(ticks[0].label, "0");
        assert_eq!(ticks[0].position, 0.0);
        assert_eq!(ticks[9].label, "90");
        assert_eq!(axis.translate, (0.0, 460.0));
        assert_eq!(axis.class, "x-axis");
    }

    #[test]
    fn left_value_axis_positions_flip() {
        let axis = Axis::left(LinearScale::new((-1.0, 1.0), (480.0, 0.0)));
        let ticks = axis.ticks();
        assert_eq!(ticks.first().unwrap().label, "-1.0");
        assert_eq!(ticks.first().unwrap().position, 480.0);
        assert_eq!(ticks.last().unwrap().position, 0.0);
        assert_eq!(axis.extent(), (0.0, 480.0));
    }
}
