//! Gazeplot Chart Render
//!
//! Draws the scrolling gaze charts.
//!
//! # Pipeline Architecture
//!
//! ```text
//! GazeSample ──┐
//!              ├── SlidingSeries (last N values per chart)
//!              │         │
//!              │         ├── LinearScale pair ── line path ("M..L..")
//!              │         │                           │
//!              │         ▼                           ▼
//!              └──── ChartHandle ──────────── DrawSurface (SVG)
//! ```
//!
//! [`renderer::ChartRenderer`] owns the windows and handles;
//! [`surface::DrawSurface`] is the seam to the output format.

pub mod axis;
pub mod chart;
pub mod line;
pub mod overlay;
pub mod renderer;
pub mod scale;
pub mod surface;
pub mod svg;

pub use chart::{ChartHandle, ChartKind, ChartStyle};
pub use renderer::{ChartRenderer, RendererState};
pub use surface::DrawSurface;
pub use svg::SvgSurface;
