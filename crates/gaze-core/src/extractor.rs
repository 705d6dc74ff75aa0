//! Gaze extraction.
//!
//! Horizontal gaze is the iris center's offset from the eye corner,
//! averaged over both eyes. Vertical gaze is the mean absolute iris height,
//! not relative to any corner.

use gazeplot_common::error::GazeplotResult;
use gazeplot_landmark_model::{DetectorResults, GazeLandmarks, GazeSample, LandmarkRole};

/// Compute the gaze sample for one face.
pub fn extract_gaze(landmarks: &GazeLandmarks) -> GazeSample {
    let left_iris = landmarks[LandmarkRole::LeftIrisCenter];
    let right_iris = landmarks[LandmarkRole::RightIrisCenter];
    let left_corner = landmarks[LandmarkRole::LeftEyeCorner];
    let right_corner = landmarks[LandmarkRole::RightEyeCorner];

    let left_dx = left_iris.x - left_corner.x;
    let right_dx = right_iris.x - right_corner.x;

    GazeSample {
        gaze_x: (left_dx + right_dx) / 2.0,
        gaze_y: (left_iris.y + right_iris.y) / 2.0,
    }
}

/// Compute the gaze sample for a frame's first detected face.
///
/// Returns `Ok(None)` when the frame has no face. A face mesh that does not
/// contain every [`LandmarkRole`] index is an error.
pub fn sample_from_results(results: &DetectorResults) -> GazeplotResult<Option<GazeSample>> {
    let Some(mesh) = results.first_face() else {
        tracing::trace!(frame = results.frame.index, "No face in frame");
        return Ok(None);
    };

    let landmarks = GazeLandmarks::from_mesh(mesh)?;
    Ok(Some(extract_gaze(&landmarks)))
}

#[cfg(test)]
mod tests {
    use gazeplot_common::error::GazeplotError;
    use gazeplot_landmark_model::{synthetic_mesh, FrameInfo, Landmark};

    use super::*;

    fn eyes(left_iris: (f64, f64), right_iris: (f64, f64)) -> GazeLandmarks {
        GazeLandmarks::from_roles(
            Landmark::new(left_iris.0, left_iris.1),
            Landmark::new(right_iris.0, right_iris.1),
            Landmark::new(0.50, 0.40),
            Landmark::new(0.50, 0.40),
            Landmark::new(0.50, 0.60),
        )
    }

    fn frame() -> FrameInfo {
        FrameInfo {
            index: 7,
            timestamp_ns: 0,
            width: 640,
            height: 480,
        }
    }

    #[test]
    fn opposite_iris_offsets_cancel() {
        let sample = extract_gaze(&eyes((0.52, 0.40), (0.48, 0.44)));
        assert!(sample.gaze_x.abs() < 1e-12);
    }

    #[test]
    fn vertical_is_mean_iris_height() {
        let sample = extract_gaze(&eyes((0.52, 0.40), (0.48, 0.44)));
        assert!((sample.gaze_y - 0.42).abs() < 1e-12);
    }

    #[test]
    fn looking_right_is_positive() {
        let sample = extract_gaze(&eyes((0.53, 0.4), (0.55, 0.4)));
        assert!((sample.gaze_x - 0.04).abs() < 1e-12);
    }

    #[test]
    fn nose_tip_does_not_affect_sample() {
        let mut a = eyes((0.51, 0.4), (0.49, 0.42));
        let b = extract_gaze(&a);
        a = GazeLandmarks::from_roles(
            a[LandmarkRole::LeftIrisCenter],
            a[LandmarkRole::RightIrisCenter],
            a[LandmarkRole::LeftEyeCorner],
            a[LandmarkRole::RightEyeCorner],
            Landmark::new(0.9, 0.1),
        );
        assert_eq!(extract_gaze(&a), b);
    }

    #[test]
    fn frame_without_face_yields_nothing() {
        let results = DetectorResults::new(frame(), Vec::new());
        assert_eq!(sample_from_results(&results).unwrap(), None);
    }

    #[test]
    fn first_face_is_used() {
        let first = synthetic_mesh(
            Landmark::new(0.5, 0.5),
            &[
                (LandmarkRole::LeftIrisCenter, Landmark::new(0.52, 0.40)),
                (LandmarkRole::RightIrisCenter, Landmark::new(0.48, 0.44)),
                (LandmarkRole::LeftEyeCorner, Landmark::new(0.50, 0.40)),
                (LandmarkRole::RightEyeCorner, Landmark::new(0.50, 0.40)),
            ],
        );
        let second = synthetic_mesh(Landmark::new(0.9, 0.9), &[]);
        let results = DetectorResults::new(frame(), vec![first, second]);

        let sample = sample_from_results(&results).unwrap().unwrap();
        assert!(sample.gaze_x.abs() < 1e-12);
        assert!((sample.gaze_y - 0.42).abs() < 1e-12);
    }

    #[test]
    fn short_mesh_is_an_error() {
        let results = DetectorResults::new(frame(), vec![vec![Landmark::default(); 100]]);
        assert!(matches!(
            sample_from_results(&results),
            Err(GazeplotError::LandmarkIndexOutOfRange { .. })
        ));
    }
}
