//! Drawing surface contract.
//!
//! Charts never talk to an output format directly. They issue a small set
//! of draw calls against a [`DrawSurface`]; [`crate::svg::SvgSurface`] is
//! the implementation shipped in-tree.

use gazeplot_common::error::GazeplotResult;

use crate::axis::Axis;

/// Handle to an element previously appended to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub usize);

/// A text label, centered on `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub font_size_px: u32,
    pub bold: bool,
    pub fill: String,
    /// Rotation in degrees about the origin, applied before `x`/`y`.
    pub rotate_deg: Option<f64>,
}

impl TextElement {
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            font_size_px: 16,
            bold: false,
            fill: "black".to_string(),
            rotate_deg: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn sized(mut self, px: u32) -> Self {
        self.font_size_px = px;
        self
    }

    pub fn filled(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotate_deg = Some(degrees);
        self
    }
}

/// Stroke styling for a line path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathStyle {
    pub class: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub fill: Option<String>,
}

impl PathStyle {
    /// An unfilled line.
    pub fn line(stroke: impl Into<String>, stroke_width: f64) -> Self {
        Self {
            class: "line".to_string(),
            stroke: stroke.into(),
            stroke_width,
            fill: None,
        }
    }
}

/// A filled circular marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub color: String,
    pub stroke_width: f64,
}

/// Abstract 2D drawing target for charts and overlays.
pub trait DrawSurface {
    /// Allocate an empty surface of the given pixel size.
    fn with_size(width: u32, height: u32) -> Self
    where
        Self: Sized;

    fn size(&self) -> (u32, u32);

    fn append_text(&mut self, text: TextElement) -> ElementId;

    fn append_axis(&mut self, axis: &Axis) -> ElementId;

    fn append_marker(&mut self, marker: Marker) -> ElementId;

    /// Append a path element with no data yet.
    fn append_path(&mut self, style: PathStyle) -> ElementId;

    /// Replace a path's data. An empty string clears it.
    fn set_path_data(&mut self, id: ElementId, d: &str) -> GazeplotResult<()>;

    /// Current path data of a path element.
    fn path_data(&self, id: ElementId) -> Option<&str>;

    /// Serialize the surface in its native format.
    fn render(&self) -> String;
}
