//! Chart buffer and renderer.
//!
//! Owns one sliding window per chart and the chart handles drawing them.
//! Every update appends to a window and redraws that chart's whole line, so
//! the drawn path always matches the current window exactly.

use gazeplot_common::error::{GazeplotError, GazeplotResult};
use gazeplot_gaze_core::series::SlidingSeries;
use gazeplot_landmark_model::GazeSample;

use crate::chart::{ChartHandle, ChartKind, ChartStyle};
use crate::surface::DrawSurface;
use crate::svg::SvgSurface;

/// Lifecycle of a renderer between resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererState {
    /// No chart exists.
    Uninitialized,
    /// At least one chart exists and every existing window is empty.
    Created,
    /// Some existing chart has a non-empty window.
    Updating,
}

#[derive(Debug)]
struct ChartSlot<T: Copy, S: DrawSurface> {
    handle: Option<ChartHandle<S>>,
    series: SlidingSeries<T>,
}

impl<T: Copy, S: DrawSurface> ChartSlot<T, S> {
    fn new(capacity: usize) -> Self {
        Self {
            handle: None,
            series: SlidingSeries::new(capacity),
        }
    }

    fn create(&mut self, kind: ChartKind, style: &ChartStyle) {
        if self.handle.is_some() {
            tracing::warn!(chart = kind.name(), "Chart created twice; replacing surface");
        }
        let surface = S::with_size(style.width, style.height);
        self.handle = Some(ChartHandle::create(kind, surface, style));
    }

    fn is_plotted(&self) -> bool {
        self.handle.is_some() && !self.series.is_empty()
    }

    fn reset(&mut self) -> bool {
        self.series.clear();
        self.handle.take().is_some()
    }
}

/// Renders the gaze X, gaze Y and direction charts.
#[derive(Debug)]
pub struct ChartRenderer<S: DrawSurface = SvgSurface> {
    style: ChartStyle,
    gaze_x: ChartSlot<f64, S>,
    gaze_y: ChartSlot<f64, S>,
    direction: ChartSlot<(f64, f64), S>,
}

impl<S: DrawSurface> ChartRenderer<S> {
    pub fn new(style: ChartStyle) -> Self {
        let capacity = style.max_points;
        Self {
            style,
            gaze_x: ChartSlot::new(capacity),
            gaze_y: ChartSlot::new(capacity),
            direction: ChartSlot::new(capacity),
        }
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Allocate a surface for `kind` and draw its static elements.
    ///
    /// Creating a chart that already exists replaces its surface; the
    /// sliding window is kept.
    pub fn create(&mut self, kind: ChartKind) {
        match kind {
            ChartKind::GazeX => self.gaze_x.create(kind, &self.style),
            ChartKind::GazeY => self.gaze_y.create(kind, &self.style),
            ChartKind::Direction => self.direction.create(kind, &self.style),
        }
    }

    pub fn create_x_chart(&mut self) {
        self.create(ChartKind::GazeX);
    }

    pub fn create_y_chart(&mut self) {
        self.create(ChartKind::GazeY);
    }

    pub fn create_direction_chart(&mut self) {
        self.create(ChartKind::Direction);
    }

    /// Append a horizontal gaze value and redraw the X chart.
    ///
    /// Fails with [`GazeplotError::ChartNotCreated`] before the chart
    /// exists; the window is left untouched in that case.
    pub fn update_x(&mut self, value: f64) -> GazeplotResult<()> {
        let slot = &mut self.gaze_x;
        let handle = slot
            .handle
            .as_mut()
            .ok_or_else(|| GazeplotError::chart_not_created(ChartKind::GazeX.name()))?;
        slot.series.push(value);
        handle.redraw_values(&slot.series)
    }

    /// Append a vertical gaze value and redraw the Y chart.
    pub fn update_y(&mut self, value: f64) -> GazeplotResult<()> {
        let slot = &mut self.gaze_y;
        let handle = slot
            .handle
            .as_mut()
            .ok_or_else(|| GazeplotError::chart_not_created(ChartKind::GazeY.name()))?;
        slot.series.push(value);
        handle.redraw_values(&slot.series)
    }

    /// Append a sample to the direction trace and redraw it.
    pub fn update_direction(&mut self, sample: GazeSample) -> GazeplotResult<()> {
        let slot = &mut self.direction;
        let handle = slot
            .handle
            .as_mut()
            .ok_or_else(|| GazeplotError::chart_not_created(ChartKind::Direction.name()))?;
        slot.series.push(sample.as_pair());
        handle.redraw_pairs(&slot.series)
    }

    /// Plot one sample on every chart that exists.
    ///
    /// The X and Y charts are required; the direction chart is optional.
    /// Nothing is appended unless both required charts exist.
    pub fn update(&mut self, sample: GazeSample) -> GazeplotResult<()> {
        for kind in [ChartKind::GazeX, ChartKind::GazeY] {
            if !self.is_created(kind) {
                return Err(GazeplotError::chart_not_created(kind.name()));
            }
        }
        self.update_x(sample.gaze_x)?;
        self.update_y(sample.gaze_y)?;
        if self.is_created(ChartKind::Direction) {
            self.update_direction(sample)?;
        }
        Ok(())
    }

    /// Empty every window and destroy every chart. Safe when nothing exists.
    pub fn reset(&mut self) {
        let removed = [
            self.gaze_x.reset(),
            self.gaze_y.reset(),
            self.direction.reset(),
        ]
        .into_iter()
        .filter(|removed| *removed)
        .count();

        if removed > 0 {
            tracing::info!(charts = removed, "Charts have been reset and removed");
        }
    }

    pub fn is_created(&self, kind: ChartKind) -> bool {
        match kind {
            ChartKind::GazeX => self.gaze_x.handle.is_some(),
            ChartKind::GazeY => self.gaze_y.handle.is_some(),
            ChartKind::Direction => self.direction.handle.is_some(),
        }
    }

    pub fn state(&self) -> RendererState {
        if !ChartKind::ALL.iter().any(|kind| self.is_created(*kind)) {
            RendererState::Uninitialized
        } else if self.gaze_x.is_plotted()
            || self.gaze_y.is_plotted()
            || self.direction.is_plotted()
        {
            RendererState::Updating
        } else {
            RendererState::Created
        }
    }

    pub fn x_series(&self) -> &SlidingSeries<f64> {
        &self.gaze_x.series
    }

    pub fn y_series(&self) -> &SlidingSeries<f64> {
        &self.gaze_y.series
    }

    pub fn direction_series(&self) -> &SlidingSeries<(f64, f64)> {
        &self.direction.series
    }

    pub fn handle(&self, kind: ChartKind) -> Option<&ChartHandle<S>> {
        match kind {
            ChartKind::GazeX => self.gaze_x.handle.as_ref(),
            ChartKind::GazeY => self.gaze_y.handle.as_ref(),
            ChartKind::Direction => self.direction.handle.as_ref(),
        }
    }

    /// Serialized surface of a chart, `None` if it does not exist.
    pub fn snapshot(&self, kind: ChartKind) -> Option<String> {
        self.handle(kind).map(ChartHandle::render)
    }

    /// Snapshots of every existing chart.
    pub fn snapshots(&self) -> Vec<(ChartKind, String)> {
        ChartKind::ALL
            .iter()
            .filter_map(|kind| self.snapshot(*kind).map(|svg| (*kind, svg)))
            .collect()
    }
}

impl<S: DrawSurface> Default for ChartRenderer<S> {
    fn default() -> Self {
        Self::new(ChartStyle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> ChartRenderer {
        ChartRenderer::default()
    }

    #[test]
    fn update_before_create_is_rejected_without_side_effects() {
        let mut r = renderer();
        let err = r.update_x(0.5).unwrap_err();
        assert!(matches!(err, GazeplotError::ChartNotCreated { ref chart } if chart == "gaze-x"));
        assert!(r.x_series().is_empty());
        assert!(r.update_direction(GazeSample::new(0.1, 0.2)).is_err());
        assert!(r.direction_series().is_empty());
        assert_eq!(r.state(), RendererState::Uninitialized);
    }

    #[test]
    fn lifecycle_walks_through_states() {
        let mut r = renderer();
        r.create_x_chart();
        r.create_y_chart();
        assert_eq!(r.state(), RendererState::Created);

        r.update(GazeSample::new(0.1, 0.4)).unwrap();
        assert_eq!(r.state(), RendererState::Updating);
        assert_eq!(r.x_series().to_vec(), vec![0.1]);
        assert_eq!(r.y_series().to_vec(), vec![0.4]);
        assert!(r.direction_series().is_empty());

        r.reset();
        assert_eq!(r.state(), RendererState::Uninitialized);
        assert!(r.x_series().is_empty());
        assert!(r.snapshot(ChartKind::GazeX).is_none());
    }

    #[test]
    fn reset_without_charts_is_a_noop() {
        let mut r = renderer();
        r.reset();
        r.reset();
        assert_eq!(r.state(), RendererState::Uninitialized);
    }

    #[test]
    fn recreate_after_reset_starts_empty() {
        let mut r = renderer();
        r.create_x_chart();
        for i in 0..10 {
            r.update_x(i as f64 / 10.0).unwrap();
        }
        r.reset();
        r.create_x_chart();
        assert!(r.x_series().is_empty());
        assert_eq!(r.handle(ChartKind::GazeX).unwrap().path_data(), Some(""));
    }

    #[test]
    fn window_slides_past_capacity() {
        let mut r = renderer();
        r.create_y_chart();
        for i in 1..=105 {
            r.update_y(0.01 * i as f64).unwrap();
        }
        assert_eq!(r.y_series().len(), 100);
        assert_eq!(r.y_series().iter().next(), Some(0.01 * 6.0));

        let d = r.handle(ChartKind::GazeY).unwrap().path_data().unwrap().to_string();
        assert_eq!(d.matches('L').count(), 99);
        assert!(d.starts_with("M0,"));
    }

    #[test]
    fn direction_chart_follows_samples_when_created() {
        let mut r = renderer();
        r.create_x_chart();
        r.create_y_chart();
        r.create_direction_chart();
        r.update(GazeSample::new(0.0, 0.0)).unwrap();
        r.update(GazeSample::new(0.5, 0.5)).unwrap();
        assert_eq!(r.direction_series().to_vec(), vec![(0.0, 0.0), (0.5, 0.5)]);
        assert_eq!(r.snapshots().len(), 3);
    }

    #[test]
    fn creating_twice_keeps_the_window() {
        let mut r = renderer();
        r.create_x_chart();
        r.update_x(0.3).unwrap();
        r.create_x_chart();
        assert_eq!(r.x_series().to_vec(), vec![0.3]);
        assert_eq!(r.state(), RendererState::Updating);
    }

    #[test]
    fn adding_a_chart_keeps_updating_state() {
        let mut r = renderer();
        r.create_x_chart();
        r.create_y_chart();
        r.update(GazeSample::new(0.2, 0.4)).unwrap();
        r.create_direction_chart();
        assert_eq!(r.x_series().len(), 1);
        assert_eq!(r.state(), RendererState::Updating);
    }

    #[test]
    fn combined_update_needs_both_axis_charts() {
        let mut r = renderer();
        r.create_x_chart();
        let err = r.update(GazeSample::new(0.3, 0.4)).unwrap_err();
        assert!(matches!(err, GazeplotError::ChartNotCreated { ref chart } if chart == "gaze-y"));
        assert!(r.x_series().is_empty());
        assert!(r.y_series().is_empty());
        assert_eq!(r.handle(ChartKind::GazeX).unwrap().path_data(), Some(""));
        assert_eq!(r.state(), RendererState::Created);
    }
}
