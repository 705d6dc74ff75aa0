//! Show landmark stream information.

use std::path::PathBuf;

use gazeplot_gaze_core::extractor::extract_gaze;
use gazeplot_gaze_core::{AxisStats, GazeStats};
use gazeplot_landmark_model::{load_stream, GazeLandmarks, StreamHeader};
use serde::Serialize;

use super::render::print_axis;

#[derive(Debug, Serialize)]
struct StreamReport {
    header: Option<StreamHeader>,
    frames: usize,
    frames_with_face: usize,
    frames_rejected: usize,
    duration_secs: f64,
    monotonic: bool,
    gaze_x: Option<AxisStats>,
    gaze_y: Option<AxisStats>,
    within_chart_domain: bool,
}

pub fn run(path: PathBuf, json: bool) -> anyhow::Result<()> {
    let stream =
        load_stream(&path).map_err(|e| anyhow::anyhow!("Failed to load landmark stream: {e}"))?;

    let mut stats = GazeStats::new();
    let mut rejected = 0;
    for mesh in stream.frames.iter().filter_map(|f| f.faces.first()) {
        match GazeLandmarks::from_mesh(mesh) {
            Ok(landmarks) => stats.record(extract_gaze(&landmarks)),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping malformed face mesh");
                rejected += 1;
            }
        }
    }

    let report = StreamReport {
        header: stream.header.clone(),
        frames: stream.len(),
        frames_with_face: stream.frames_with_face(),
        frames_rejected: rejected,
        duration_secs: stream.duration_secs(),
        monotonic: stream.is_monotonic(),
        gaze_x: stats.x(),
        gaze_y: stats.y(),
        within_chart_domain: stats.within_chart_domain(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Stream: {}", path.display());
    match &report.header {
        Some(h) => {
            println!("  Schema: {}", h.schema_version);
            println!("  Recorded: {}", h.epoch_wall);
            println!("  Frame size: {}x{} @ {}fps", h.frame_width, h.frame_height, h.fps);
        }
        None => println!("  Header: none"),
    }
    println!();

    println!("Frames:");
    println!("  Total: {}", report.frames);
    let coverage = if report.frames > 0 {
        100.0 * report.frames_with_face as f64 / report.frames as f64
    } else {
        0.0
    };
    println!("  With face: {} ({coverage:.1}%)", report.frames_with_face);
    println!("  Malformed meshes: {}", report.frames_rejected);
    println!("  Duration: {:.2}s", report.duration_secs);
    if !report.monotonic {
        println!("  Warning: timestamps go backwards");
    }
    println!();

    println!("Gaze:");
    print_axis("Gaze X", report.gaze_x.as_ref());
    print_axis("Gaze Y", report.gaze_y.as_ref());
    if stats.count() > 0 && !report.within_chart_domain {
        println!("  Note: some samples fall outside the [-1, 1] chart domain");
    }

    Ok(())
}
