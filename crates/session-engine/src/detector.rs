//! Landmark detectors (the face mesh seam).

use gazeplot_common::config::DetectorOptions;
use gazeplot_common::error::{GazeplotError, GazeplotResult};
use gazeplot_landmark_model::{DetectorResults, LandmarkFrame, LandmarkStream};

use crate::source::CameraFrame;

/// Abstract interface for a per-frame face landmark detector.
#[async_trait::async_trait]
pub trait LandmarkDetector: Send {
    /// Analyze one frame. A frame without faces is a normal result, not an error.
    async fn detect(&mut self, frame: &CameraFrame) -> GazeplotResult<DetectorResults>;

    /// Detector name for logging.
    fn name(&self) -> &str;
}

/// Returns the landmarks recorded for each frame of a stream.
pub struct ReplayDetector {
    frames: Vec<LandmarkFrame>,
    max_num_faces: usize,
}

impl ReplayDetector {
    pub fn new(stream: LandmarkStream, options: &DetectorOptions) -> Self {
        Self {
            frames: stream.frames,
            max_num_faces: options.max_num_faces.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[async_trait::async_trait]
impl LandmarkDetector for ReplayDetector {
    async fn detect(&mut self, frame: &CameraFrame) -> GazeplotResult<DetectorResults> {
        let index = frame.info.index as usize;
        let recorded = self.frames.get(index).ok_or_else(|| {
            GazeplotError::detector(format!("No recorded landmarks for frame {index}"))
        })?;

        let faces = recorded
            .faces
            .iter()
            .take(self.max_num_faces)
            .cloned()
            .collect();
        Ok(DetectorResults::new(frame.info, faces))
    }

    fn name(&self) -> &str {
        "replay"
    }
}

#[cfg(test)]
mod tests {
    use gazeplot_landmark_model::{FrameInfo, Landmark};

    use super::*;

    fn frame(index: u64) -> CameraFrame {
        CameraFrame {
            info: FrameInfo {
                index,
                timestamp_ns: index * 10,
                width: 640,
                height: 480,
            },
        }
    }

    fn two_face_stream() -> LandmarkStream {
        LandmarkStream {
            header: None,
            frames: vec![LandmarkFrame::new(
                0,
                vec![vec![Landmark::new(0.1, 0.1)], vec![Landmark::new(0.9, 0.9)]],
            )],
        }
    }

    #[tokio::test]
    async fn keeps_only_max_faces() {
        let mut detector = ReplayDetector::new(two_face_stream(), &DetectorOptions::default());
        let results = detector.detect(&frame(0)).await.unwrap();
        assert_eq!(results.multi_face_landmarks.len(), 1);
        assert_eq!(results.first_face().unwrap()[0].x, 0.1);
        assert_eq!(results.frame.index, 0);
    }

    #[tokio::test]
    async fn more_faces_when_allowed() {
        let options = DetectorOptions {
            max_num_faces: 4,
            ..DetectorOptions::default()
        };
        let mut detector = ReplayDetector::new(two_face_stream(), &options);
        let results = detector.detect(&frame(0)).await.unwrap();
        assert_eq!(results.multi_face_landmarks.len(), 2);
    }

    #[tokio::test]
    async fn unknown_frame_is_an_error() {
        let mut detector = ReplayDetector::new(two_face_stream(), &DetectorOptions::default());
        assert!(matches!(
            detector.detect(&frame(5)).await,
            Err(GazeplotError::Detector { .. })
        ));
    }
}
