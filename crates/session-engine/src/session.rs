//! Gaze session management.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gazeplot_chart_render::overlay::render_overlay;
use gazeplot_chart_render::{ChartKind, ChartRenderer, ChartStyle, DrawSurface, SvgSurface};
use gazeplot_common::clock::SessionClock;
use gazeplot_common::config::AppConfig;
use gazeplot_common::error::{GazeplotError, GazeplotResult};
use gazeplot_gaze_core::extractor::extract_gaze;
use gazeplot_gaze_core::stats::{AxisStats, GazeStats};
use gazeplot_landmark_model::{DetectorResults, FrameInfo, GazeLandmarks, GazeSample};
use serde::Serialize;

use crate::detector::LandmarkDetector;
use crate::source::FrameSource;

/// Configuration for a gaze session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Chart geometry and colours.
    pub charts: ChartStyle,

    /// Whether to draw the combined XY direction chart.
    pub direction_chart: bool,
}

impl SessionConfig {
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            charts: ChartStyle::from(&config.charts),
            direction_chart: config.charts.direction_chart,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from_app_config(&AppConfig::default())
    }
}

/// State of a gaze session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No charts; frames are ignored.
    Idle,
    /// Charts exist and frames are plotted.
    Running,
}

/// What happened to one frame's detector results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// The session was not running.
    Ignored,
    /// The detector found no face.
    NoFace,
    /// A sample was derived and plotted.
    Plotted(GazeSample),
}

/// Counters reported when a session stops.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionSummary {
    pub frames_seen: u64,
    pub samples_plotted: u64,
    pub frames_without_face: u64,
    pub frames_rejected: u64,
    pub elapsed_secs: f64,
    pub gaze_x: Option<AxisStats>,
    pub gaze_y: Option<AxisStats>,
}

/// A viewing session: owns the charts and turns detector results into
/// chart updates.
pub struct GazeSession<S: DrawSurface = SvgSurface> {
    config: SessionConfig,
    state: SessionState,
    renderer: ChartRenderer<S>,
    clock: Option<SessionClock>,
    stop_flag: Arc<AtomicBool>,
    last_face: Option<(FrameInfo, GazeLandmarks)>,
    stats: GazeStats,
    frames_seen: u64,
    frames_without_face: u64,
    frames_rejected: u64,
}

impl<S: DrawSurface> GazeSession<S> {
    pub fn new(config: SessionConfig) -> Self {
        let renderer = ChartRenderer::new(config.charts.clone());
        Self {
            config,
            state: SessionState::Idle,
            renderer,
            clock: None,
            stop_flag: Arc::new(AtomicBool::new(false)),
            last_face: None,
            stats: GazeStats::new(),
            frames_seen: 0,
            frames_without_face: 0,
            frames_rejected: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn renderer(&self) -> &ChartRenderer<S> {
        &self.renderer
    }

    /// Flag observed by [`GazeSession::run`] between frames.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        self.stop_flag.clone()
    }

    /// Create the charts and begin accepting frames. No-op when running.
    pub fn start(&mut self) {
        if self.is_running() {
            tracing::debug!("Session already running");
            return;
        }

        self.renderer.create_x_chart();
        self.renderer.create_y_chart();
        if self.config.direction_chart {
            self.renderer.create_direction_chart();
        }

        self.stop_flag.store(false, Ordering::SeqCst);
        let clock = SessionClock::start();
        self.stats = GazeStats::new();
        self.last_face = None;
        self.frames_seen = 0;
        self.frames_without_face = 0;
        self.frames_rejected = 0;
        self.state = SessionState::Running;

        tracing::info!(
            epoch = clock.epoch_wall(),
            direction_chart = self.config.direction_chart,
            max_points = self.config.charts.max_points,
            "Gaze session started"
        );
        self.clock = Some(clock);
    }

    /// Destroy the charts and stop accepting frames.
    ///
    /// Returns the session summary, or `None` when the session was not running.
    pub fn stop(&mut self) -> Option<SessionSummary> {
        if !self.is_running() {
            tracing::debug!("Session already stopped");
            return None;
        }

        self.stop_flag.store(true, Ordering::SeqCst);
        let summary = self.summary();
        self.renderer.reset();
        self.clock = None;
        self.last_face = None;
        self.state = SessionState::Idle;

        tracing::info!(
            frames = summary.frames_seen,
            samples = summary.samples_plotted,
            duration_secs = summary.elapsed_secs,
            "Gaze session stopped"
        );
        Some(summary)
    }

    /// Per-frame callback: derive a gaze sample and plot it.
    ///
    /// A frame whose face mesh lacks a required landmark is counted as
    /// rejected and returned as an error; the charts are left unchanged.
    pub fn on_results(&mut self, results: &DetectorResults) -> GazeplotResult<FrameOutcome> {
        if !self.is_running() {
            tracing::trace!(frame = results.frame.index, "Frame ignored, session idle");
            return Ok(FrameOutcome::Ignored);
        }
        self.frames_seen += 1;

        let Some(mesh) = results.first_face() else {
            self.frames_without_face += 1;
            return Ok(FrameOutcome::NoFace);
        };

        let landmarks = match GazeLandmarks::from_mesh(mesh) {
            Ok(landmarks) => landmarks,
            Err(e) => {
                self.frames_rejected += 1;
                return Err(e);
            }
        };

        let sample = extract_gaze(&landmarks);
        self.renderer.update(sample)?;
        self.stats.record(sample);
        self.last_face = Some((results.frame, landmarks));

        tracing::trace!(
            frame = results.frame.index,
            gaze_x = sample.gaze_x,
            gaze_y = sample.gaze_y,
            "Sample plotted"
        );
        Ok(FrameOutcome::Plotted(sample))
    }

    /// Pump frames from `source` through `detector` until the source runs
    /// dry or the stop flag is raised.
    ///
    /// Each frame is fully handled before the next one is requested.
    /// Detector results that arrive after the stop flag is raised are
    /// dropped.
    pub async fn run(
        &mut self,
        source: &mut dyn FrameSource,
        detector: &mut dyn LandmarkDetector,
    ) -> GazeplotResult<()> {
        if !self.is_running() {
            return Err(GazeplotError::session("Session must be started before run"));
        }

        tracing::info!(
            source = source.name(),
            detector = detector.name(),
            "Frame pump started"
        );
        source.start().await?;

        let outcome = self.pump(source, detector).await;
        let stopped = source.stop().await;
        if let Err(e) = outcome {
            if let Err(stop_err) = stopped {
                tracing::warn!(error = %stop_err, "Frame source failed to stop");
            }
            return Err(e);
        }
        stopped?;

        tracing::info!(frames = self.frames_seen, "Frame pump finished");
        Ok(())
    }

    async fn pump(
        &mut self,
        source: &mut dyn FrameSource,
        detector: &mut dyn LandmarkDetector,
    ) -> GazeplotResult<()> {
        while !self.stop_flag.load(Ordering::SeqCst) {
            let Some(frame) = source.next_frame().await? else {
                break;
            };
            let results = detector.detect(&frame).await?;
            if self.stop_flag.load(Ordering::SeqCst) {
                tracing::debug!(frame = frame.info.index, "Dropping result after stop");
                break;
            }

            match self.on_results(&results) {
                Ok(_) => {}
                Err(
                    e @ (GazeplotError::LandmarkIndexOutOfRange { .. }
                    | GazeplotError::Landmarks { .. }),
                ) => {
                    tracing::warn!(frame = frame.info.index, error = %e, "Frame rejected");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Serialized chart surface, `None` when the chart does not exist.
    pub fn snapshot(&self, kind: ChartKind) -> Option<String> {
        self.renderer.snapshot(kind)
    }

    /// Landmark markers of the most recently plotted face, sized to its frame.
    pub fn overlay(&self) -> Option<S> {
        self.last_face
            .as_ref()
            .map(|(frame, landmarks)| render_overlay(landmarks, frame.width, frame.height))
    }

    /// Counters so far.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            frames_seen: self.frames_seen,
            samples_plotted: self.stats.count(),
            frames_without_face: self.frames_without_face,
            frames_rejected: self.frames_rejected,
            elapsed_secs: self
                .clock
                .as_ref()
                .map(SessionClock::elapsed_secs)
                .unwrap_or(0.0),
            gaze_x: self.stats.x(),
            gaze_y: self.stats.y(),
        }
    }
}

impl<S: DrawSurface> Default for GazeSession<S> {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
