//! Replay a landmark stream and write the gaze charts.

use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;

use gazeplot_chart_render::{DrawSurface, SvgSurface};
use gazeplot_common::config::AppConfig;
use gazeplot_gaze_core::AxisStats;
use gazeplot_landmark_model::load_stream;
use gazeplot_session_engine::{
    GazeSession, ReplayDetector, ReplaySource, SessionConfig, SessionSummary,
};

pub async fn run(
    config: &AppConfig,
    stream_path: PathBuf,
    output: PathBuf,
    direction: bool,
    realtime: bool,
    overlay: bool,
) -> anyhow::Result<()> {
    let stream = load_stream(&stream_path)
        .map_err(|e| anyhow::anyhow!("Failed to load landmark stream: {e}"))?;

    println!("Replaying: {}", stream_path.display());
    println!("  Frames: {}", stream.len());
    println!("  Output: {}", output.display());
    println!("  Direction chart: {}", direction || config.charts.direction_chart);
    println!("  Realtime: {realtime}");
    println!();

    let mut source = ReplaySource::new(&stream, config.capture.width, config.capture.height);
    if realtime {
        let fps = stream
            .header
            .as_ref()
            .map(|h| h.fps)
            .filter(|fps| *fps > 0)
            .unwrap_or(config.capture.fps);
        source = source.paced(fps);
    }
    let mut detector = ReplayDetector::new(stream, &config.detector);

    let mut session_config = SessionConfig::from_app_config(config);
    session_config.direction_chart |= direction;
    let mut session: GazeSession<SvgSurface> = GazeSession::new(session_config);

    session.start();

    let stop_flag = session.stop_flag();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            stop_flag.store(true, Ordering::SeqCst);
        }
    });

    let result = session.run(&mut source, &mut detector).await;
    ctrl_c.abort();
    result?;

    std::fs::create_dir_all(&output)?;
    for (kind, svg) in session.renderer().snapshots() {
        let path = output.join(format!("{}.svg", kind.file_stem()));
        write_svg(&path, &svg)?;
    }
    if overlay {
        match session.overlay() {
            Some(surface) => write_svg(&output.join("landmarks.svg"), &surface.render())?,
            None => println!("No face was plotted, skipping landmark overlay"),
        }
    }

    if let Some(summary) = session.stop() {
        print_summary(&summary);
    }

    Ok(())
}

fn write_svg(path: &Path, svg: &str) -> anyhow::Result<()> {
    std::fs::write(path, svg)?;
    println!("Wrote {}", path.display());
    tracing::debug!(path = %path.display(), bytes = svg.len(), "Chart written");
    Ok(())
}

fn print_summary(summary: &SessionSummary) {
    println!();
    println!("Session summary:");
    println!("  Frames seen: {}", summary.frames_seen);
    println!("  Samples plotted: {}", summary.samples_plotted);
    println!("  Frames without face: {}", summary.frames_without_face);
    println!("  Frames rejected: {}", summary.frames_rejected);
    println!("  Elapsed: {:.2}s", summary.elapsed_secs);
    print_axis("Gaze X", summary.gaze_x.as_ref());
    print_axis("Gaze Y", summary.gaze_y.as_ref());
}

pub(crate) fn print_axis(label: &str, stats: Option<&AxisStats>) {
    if let Some(stats) = stats {
        println!(
            "  {label}: min {:.4}, max {:.4}, mean {:.4}",
            stats.min, stats.max, stats.mean
        );
    }
}
