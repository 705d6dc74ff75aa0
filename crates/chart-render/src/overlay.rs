//! Landmark overlay for the camera preview.
//!
//! Marks the landmarks gaze extraction reads: iris centers in red, eye
//! corners in green, the nose tip in blue.

use gazeplot_landmark_model::{GazeLandmarks, LandmarkRole};

use crate::surface::{DrawSurface, Marker};

pub const IRIS_COLOR: &str = "#FF0000";
pub const EYE_CORNER_COLOR: &str = "#00FF00";
pub const NOSE_TIP_COLOR: &str = "#0000FF";

const MARKER_RADIUS: f64 = 3.0;

pub fn role_color(role: LandmarkRole) -> &'static str {
    if role.is_iris() {
        IRIS_COLOR
    } else if role.is_eye_corner() {
        EYE_CORNER_COLOR
    } else {
        NOSE_TIP_COLOR
    }
}

/// Draw one marker per role, scaling normalized coordinates to the surface.
pub fn draw_landmarks<S: DrawSurface>(surface: &mut S, landmarks: &GazeLandmarks) {
    let (width, height) = surface.size();
    for (role, landmark) in landmarks.iter() {
        surface.append_marker(Marker {
            cx: landmark.x * width as f64,
            cy: landmark.y * height as f64,
            radius: MARKER_RADIUS,
            color: role_color(role).to_string(),
            stroke_width: 1.0,
        });
    }
}

/// A fresh surface holding only the landmark markers.
pub fn render_overlay<S: DrawSurface>(landmarks: &GazeLandmarks, width: u32, height: u32) -> S {
    let mut surface = S::with_size(width, height);
    draw_landmarks(&mut surface, landmarks);
    surface
}
