//! Frame sources (the capture driver seam).

use gazeplot_common::clock::{RateController, SessionClock};
use gazeplot_common::error::{GazeplotError, GazeplotResult};
use gazeplot_landmark_model::{FrameInfo, LandmarkStream, TimestampNs};

/// A captured camera frame. Pixel data stays with the capture backend; the
/// pipeline only needs to know which frame it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraFrame {
    pub info: FrameInfo,
}

/// Abstract interface for a camera frame pump.
#[async_trait::async_trait]
pub trait FrameSource: Send {
    /// Begin delivering frames.
    async fn start(&mut self) -> GazeplotResult<()>;

    /// Wait for the next frame. `None` once the source is exhausted or stopped.
    async fn next_frame(&mut self) -> GazeplotResult<Option<CameraFrame>>;

    /// Stop delivering frames. Stopping twice is a no-op.
    async fn stop(&mut self) -> GazeplotResult<()>;

    /// Source name for logging.
    fn name(&self) -> &str;
}

/// Replays the frame timing of a recorded landmark stream.
pub struct ReplaySource {
    timestamps: Vec<TimestampNs>,
    width: u32,
    height: u32,
    cursor: usize,
    running: bool,
    pacing: Option<(RateController, SessionClock)>,
    fps: u32,
}

impl ReplaySource {
    /// Frames are delivered as fast as they are consumed.
    pub fn new(stream: &LandmarkStream, width: u32, height: u32) -> Self {
        let (width, height, fps) = match &stream.header {
            Some(header) => (header.frame_width, header.frame_height, header.fps),
            None => (width, height, 30),
        };
        Self {
            timestamps: stream.frames.iter().map(|f| f.timestamp_ns).collect(),
            width,
            height,
            cursor: 0,
            running: false,
            pacing: None,
            fps,
        }
    }

    /// Deliver frames no faster than `fps`, like a live camera would.
    pub fn paced(mut self, fps: u32) -> Self {
        self.fps = fps;
        self.pacing = Some((RateController::new(fps), SessionClock::start()));
        self
    }

    pub fn frame_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Frames not yet delivered.
    pub fn remaining(&self) -> usize {
        self.timestamps.len().saturating_sub(self.cursor)
    }

    async fn wait_for_tick(&mut self) {
        let Some((rate, clock)) = self.pacing.as_mut() else {
            return;
        };
        loop {
            let now = clock.elapsed_ns();
            if rate.should_tick(now) {
                return;
            }
            tokio::time::sleep(rate.wait_hint(now)).await;
        }
    }
}

#[async_trait::async_trait]
impl FrameSource for ReplaySource {
    async fn start(&mut self) -> GazeplotResult<()> {
        if self.running {
            return Ok(());
        }
        self.running = true;
        if let Some((rate, clock)) = self.pacing.as_mut() {
            *rate = RateController::new(self.fps);
            *clock = SessionClock::start();
        }
        tracing::info!(
            frames = self.remaining(),
            width = self.width,
            height = self.height,
            paced = self.pacing.is_some(),
            "Replay source started"
        );
        Ok(())
    }

    async fn next_frame(&mut self) -> GazeplotResult<Option<CameraFrame>> {
        if !self.running {
            return Err(GazeplotError::capture("Replay source is not started"));
        }
        let Some(&timestamp_ns) = self.timestamps.get(self.cursor) else {
            return Ok(None);
        };
        self.wait_for_tick().await;

        let info = FrameInfo {
            index: self.cursor as u64,
            timestamp_ns,
            width: self.width,
            height: self.height,
        };
        self.cursor += 1;
        Ok(Some(CameraFrame { info }))
    }

    async fn stop(&mut self) -> GazeplotResult<()> {
        if self.running {
            self.running = false;
            tracing::info!(remaining = self.remaining(), "Replay source stopped");
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "replay"
    }
}
