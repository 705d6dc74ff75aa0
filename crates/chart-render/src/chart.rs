//! A single chart bound to a drawing surface.

use gazeplot_common::config::ChartDefaults;
use gazeplot_common::error::GazeplotResult;
use gazeplot_gaze_core::series::{SlidingSeries, MAX_POINTS};

use crate::axis::Axis;
use crate::line::{index_points, line_path, pair_points};
use crate::scale::LinearScale;
use crate::surface::{DrawSurface, ElementId, PathStyle, TextElement};

/// The charts a session can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Horizontal gaze over the last N samples.
    GazeX,
    /// Vertical gaze over the last N samples.
    GazeY,
    /// Gaze X against gaze Y.
    Direction,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::GazeX, ChartKind::GazeY, ChartKind::Direction];

    pub fn name(self) -> &'static str {
        match self {
            ChartKind::GazeX => "gaze-x",
            ChartKind::GazeY => "gaze-y",
            ChartKind::Direction => "gaze-direction",
        }
    }

    /// File stem used when charts are written to disk.
    pub fn file_stem(self) -> &'static str {
        match self {
            ChartKind::GazeX => "gaze_x",
            ChartKind::GazeY => "gaze_y",
            ChartKind::Direction => "gaze_direction",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::GazeX => "Horizontal Gaze Movement (X)",
            ChartKind::GazeY => "Vertical Gaze Movement (Y)",
            ChartKind::Direction => "Gaze Direction",
        }
    }

    /// Rotated label beside the value axis. The direction chart has none.
    pub fn value_label(self) -> Option<&'static str> {
        match self {
            ChartKind::GazeX => Some("Gaze Position (X)"),
            ChartKind::GazeY => Some("Gaze Position (Y)"),
            ChartKind::Direction => None,
        }
    }

    /// Time-series charts plot values against their window index.
    pub fn is_time_series(self) -> bool {
        !matches!(self, ChartKind::Direction)
    }
}

/// Geometry and colours shared by all charts of a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub max_points: usize,
    pub label_color: String,
    pub x_color: String,
    pub y_color: String,
    pub direction_color: String,
}

impl ChartStyle {
    pub fn stroke(&self, kind: ChartKind) -> &str {
        match kind {
            ChartKind::GazeX => &self.x_color,
            ChartKind::GazeY => &self.y_color,
            ChartKind::Direction => &self.direction_color,
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::from(&ChartDefaults::default())
    }
}

impl From<&ChartDefaults> for ChartStyle {
    fn from(defaults: &ChartDefaults) -> Self {
        Self {
            width: defaults.width,
            height: defaults.height,
            max_points: if defaults.max_points == 0 {
                MAX_POINTS
            } else {
                defaults.max_points
            },
            label_color: defaults.label_color.clone(),
            x_color: defaults.x_color.clone(),
            y_color: defaults.y_color.clone(),
            direction_color: defaults.direction_color.clone(),
        }
    }
}

/// A drawn chart: its surface, scale pair, and the line path it redraws.
#[derive(Debug)]
pub struct ChartHandle<S: DrawSurface> {
    kind: ChartKind,
    surface: S,
    x_scale: LinearScale,
    y_scale: LinearScale,
    line: ElementId,
}

impl<S: DrawSurface> ChartHandle<S> {
    /// Draw the static parts of a chart (title, axes, label) and an empty
    /// line onto `surface`.
    pub fn create(kind: ChartKind, mut surface: S, style: &ChartStyle) -> Self {
        let (width, height) = surface.size();
        let (width, height) = (width as f64, height as f64);

        let x_scale = if kind.is_time_series() {
            let last_index = style.max_points.saturating_sub(1).max(1) as f64;
            LinearScale::new((0.0, last_index), (0.0, width))
        } else {
            LinearScale::new((-1.0, 1.0), (0.0, width))
        };
        let y_scale = LinearScale::new((-1.0, 1.0), (height, 0.0));

        surface.append_text(
            TextElement::new(width / 2.0, 20.0, kind.title())
                .sized(16)
                .bold()
                .filled(style.label_color.as_str()),
        );
        surface.append_axis(&Axis::bottom(x_scale).translated(0.0, height - 20.0));
        surface.append_axis(&Axis::left(y_scale).translated(40.0, 0.0));
        if let Some(label) = kind.value_label() {
            surface.append_text(
                TextElement::new(-height / 2.0, 20.0, label)
                    .rotated(-90.0)
                    .sized(14)
                    .bold()
                    .filled(style.label_color.as_str()),
            );
        }
        let line = surface.append_path(PathStyle::line(style.stroke(kind), 2.0));

        tracing::debug!(chart = kind.name(), width, height, "Chart created");

        Self {
            kind,
            surface,
            x_scale,
            y_scale,
            line,
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn x_scale(&self) -> &LinearScale {
        &self.x_scale
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y_scale
    }

    /// Current line path data.
    pub fn path_data(&self) -> Option<&str> {
        self.surface.path_data(self.line)
    }

    /// Rebuild the line from a window of values plotted by index.
    pub fn redraw_values(&mut self, series: &SlidingSeries<f64>) -> GazeplotResult<()> {
        let d = line_path(index_points(series.iter(), &self.x_scale, &self.y_scale));
        self.surface.set_path_data(self.line, &d)
    }

    /// Rebuild the line from a window of `(x, y)` pairs.
    pub fn redraw_pairs(&mut self, series: &SlidingSeries<(f64, f64)>) -> GazeplotResult<()> {
        let d = line_path(pair_points(series.iter(), &self.x_scale, &self.y_scale));
        self.surface.set_path_data(self.line, &d)
    }

    pub fn render(&self) -> String {
        self.surface.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::SvgSurface;

    fn create(kind: ChartKind) -> ChartHandle<SvgSurface> {
        ChartHandle::create(kind, SvgSurface::new(640, 480), &ChartStyle::default())
    }

    #[test]
    fn value_axis_label_names_its_own_component() {
        let x = create(ChartKind::GazeX);
        assert!(x.surface().texts().contains(&"Gaze Position (X)"));
        assert!(!x.surface().texts().contains(&"Gaze Position (Y)"));
        assert!(create(ChartKind::GazeY).surface().texts().contains(&"Gaze Position (Y)"));
    }

    #[test]
    fn time_series_chart_has_fixed_index_domain() {
        let chart = create(ChartKind::GazeY);
        assert_eq!(chart.x_scale().domain, (0.0, 99.0));
        assert_eq!(chart.x_scale().range, (0.0, 640.0));
        assert_eq!(chart.y_scale().domain, (-1.0, 1.0));
        assert_eq!(chart.y_scale().range, (480.0, 0.0));
    }

    #[test]
    fn direction_chart_uses_value_domain_on_both_axes() {
        let chart = create(ChartKind::Direction);
        assert_eq!(chart.x_scale().domain, (-1.0, 1.0));
        assert!(chart.surface().texts().contains(&"Gaze Direction"));
        assert_eq!(chart.surface().texts().len(), 1);
    }

    #[test]
    fn created_chart_has_title_label_and_empty_line() {
        let chart = create(ChartKind::GazeX);
        assert_eq!(
            chart.surface().texts(),
            vec!["Horizontal Gaze Movement (X)", "Gaze Position (X)"]
        );
        assert_eq!(chart.path_data(), Some(""));
        let svg = chart.render();
        assert!(svg.contains(r#"stroke="blue""#));
        assert!(svg.contains(r#"translate(0, 460)"#));
        assert!(svg.contains(r#"translate(40, 0)"#));
    }

    #[test]
    fn redraw_reflects_whole_window() {
        let mut chart = create(ChartKind::GazeY);
        let mut series = SlidingSeries::new(100);
        series.extend([0.0, 1.0, -1.0]);
        chart.redraw_values(&series).unwrap();
        let d = chart.path_data().unwrap();
        assert!(d.starts_with("M0,240L6.465,0L12.929,480"));
        assert_eq!(d.matches('M').count(), 1);
        assert_eq!(d.matches('L').count(), 2);
    }

    #[test]
    fn direction_redraw_maps_pairs() {
        let mut chart = create(ChartKind::Direction);
        let mut series = SlidingSeries::new(100);
        series.push((0.0, 0.0));
        series.push((0.5, 0.5));
        chart.redraw_pairs(&series).unwrap();
        assert_eq!(chart.path_data(), Some("M320,240L480,120"));
    }
}
