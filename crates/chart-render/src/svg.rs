//! SVG implementation of [`DrawSurface`].

use std::fmt::Write as _;

use gazeplot_common::error::{GazeplotError, GazeplotResult};

use crate::axis::{Axis, AxisOrient};
use crate::line::format_coord;
use crate::surface::{DrawSurface, ElementId, Marker, PathStyle, TextElement};

#[derive(Debug, Clone, PartialEq)]
enum SvgNode {
    Text(TextElement),
    /// Axes are static once drawn, so their markup is built on append.
    Axis(String),
    Marker(Marker),
    Path { style: PathStyle, d: String },
}

/// An in-memory SVG document.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    nodes: Vec<SvgNode>,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            nodes: Vec::new(),
        }
    }

    /// Number of appended elements.
    pub fn element_count(&self) -> usize {
        self.nodes.len()
    }

    /// Text content of every text element, in append order.
    pub fn texts(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                SvgNode::Text(text) => Some(text.content.as_str()),
                _ => None,
            })
            .collect()
    }

    fn push(&mut self, node: SvgNode) -> ElementId {
        self.nodes.push(node);
        ElementId(self.nodes.len() - 1)
    }
}

impl DrawSurface for SvgSurface {
    fn with_size(width: u32, height: u32) -> Self {
        Self::new(width, height)
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn append_text(&mut self, text: TextElement) -> ElementId {
        self.push(SvgNode::Text(text))
    }

    fn append_axis(&mut self, axis: &Axis) -> ElementId {
        self.push(SvgNode::Axis(axis_markup(axis)))
    }

    fn append_marker(&mut self, marker: Marker) -> ElementId {
        self.push(SvgNode::Marker(marker))
    }

    fn append_path(&mut self, style: PathStyle) -> ElementId {
        self.push(SvgNode::Path {
            style,
            d: String::new(),
        })
    }

    fn set_path_data(&mut self, id: ElementId, data: &str) -> GazeplotResult<()> {
        match self.nodes.get_mut(id.0) {
            Some(SvgNode::Path { d, .. }) => {
                d.clear();
                d.push_str(data);
                Ok(())
            }
            Some(_) => Err(GazeplotError::render(format!(
                "element {} is not a path",
                id.0
            ))),
            None => Err(GazeplotError::render(format!("no element {}", id.0))),
        }
    }

    fn path_data(&self, id: ElementId) -> Option<&str> {
        match self.nodes.get(id.0) {
            Some(SvgNode::Path { d, .. }) => Some(d.as_str()),
            _ => None,
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        for node in &self.nodes {
            match node {
                SvgNode::Text(text) => write_text(&mut out, text),
                SvgNode::Axis(markup) => out.push_str(markup),
                SvgNode::Marker(marker) => {
                    let _ = writeln!(
                        out,
                        r#"  <circle cx="{}" cy="{}" r="{}" fill="{color}" stroke="{color}" stroke-width="{}"/>"#,
                        format_coord(marker.cx),
                        format_coord(marker.cy),
                        format_coord(marker.radius),
                        format_coord(marker.stroke_width),
                        color = escape(&marker.color),
                    );
                }
                SvgNode::Path { style, d } => {
                    let _ = write!(
                        out,
                        r#"  <path class="{}" fill="{}" stroke="{}" stroke-width="{}""#,
                        escape(&style.class),
                        escape(style.fill.as_deref().unwrap_or("none")),
                        escape(&style.stroke),
                        format_coord(style.stroke_width),
                    );
                    if !d.is_empty() {
                        let _ = write!(out, r#" d="{}""#, d);
                    }
                    out.push_str("/>\n");
                }
            }
        }
        out.push_str("</svg>\n");
        out
    }
}

fn write_text(out: &mut String, text: &TextElement) {
    let _ = write!(out, "  <text");
    if let Some(degrees) = text.rotate_deg {
        let _ = write!(out, r#" transform="rotate({})""#, format_coord(degrees));
    }
    let _ = write!(
        out,
        r#" x="{}" y="{}" text-anchor="middle" font-size="{}px""#,
        format_coord(text.x),
        format_coord(text.y),
        text.font_size_px
    );
    if text.bold {
        out.push_str(r#" font-weight="bold""#);
    }
    let _ = writeln!(
        out,
        r#" fill="{}">{}</text>"#,
        escape(&text.fill),
        escape(&text.content)
    );
}

/// Axis group: a domain line plus one `<g class="tick">` per tick.
fn axis_markup(axis: &Axis) -> String {
    let mut out = String::new();
    let (tx, ty) = axis.translate;
    let anchor = match axis.orient {
        AxisOrient::Bottom => "middle",
        AxisOrient::Left => "end",
    };
    let _ = writeln!(
        out,
        r#"  <g class="{}" transform="translate({}, {})" fill="none" font-size="10" font-family="sans-serif" text-anchor="{}">"#,
        escape(&axis.class),
        format_coord(tx),
        format_coord(ty),
        anchor
    );

    let (lo, hi) = axis.extent();
    let k = axis.tick_size;
    let domain = match axis.orient {
        AxisOrient::Bottom => format!(
            "M{},{}V0.5H{}V{}",
            format_coord(lo + 0.5),
            format_coord(k),
            format_coord(hi + 0.5),
            format_coord(k)
        ),
        AxisOrient::Left => format!(
            "M{},{}H0.5V{}H{}",
            format_coord(-k),
            format_coord(hi + 0.5),
            format_coord(lo + 0.5),
            format_coord(-k)
        ),
    };
    let _ = writeln!(
        out,
        r#"    <path class="domain" stroke="currentColor" d="{}"/>"#,
        domain
    );

    let offset = k + axis.tick_padding;
    for tick in axis.ticks() {
        let position = format_coord(tick.position + 0.5);
        let _ = match axis.orient {
            AxisOrient::Bottom => writeln!(
                out,
                r#"    <g class="tick" transform="translate({},0)"><line stroke="currentColor" y2="{}"/><text fill="currentColor" y="{}" dy="0.71em">{}</text></g>"#,
                position,
                format_coord(k),
                format_coord(offset),
                escape(&tick.label)
            ),
            AxisOrient::Left => writeln!(
                out,
                r#"    <g class="tick" transform="translate(0,{})"><line stroke="currentColor" x2="{}"/><text fill="currentColor" x="{}" dy="0.32em">{}</text></g>"#,
                position,
                format_coord(-k),
                format_coord(-offset),
                escape(&tick.label)
            ),
        };
    }
    out.push_str("  </g>\n");
    out
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
