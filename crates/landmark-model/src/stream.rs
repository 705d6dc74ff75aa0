//! Detector output and its recorded JSONL form.
//!
//! A landmark stream is what a face mesh detector produced for a sequence
//! of camera frames. On disk it is one JSON object per line, optionally
//! preceded by a `# {header}` line:
//!
//! ```text
//! # {"schema_version":"1.0","epoch_wall":"...","frame_width":640,"frame_height":480,"fps":30}
//! {"t":0,"faces":[[{"x":0.41,"y":0.38,"z":-0.02}, ...]]}
//! {"t":33333333,"faces":[]}
//! ```

use std::path::Path;

use gazeplot_common::clock::SessionClock;
use gazeplot_common::error::{GazeplotError, GazeplotResult};
use serde::{Deserialize, Serialize};

use crate::landmark::FaceMesh;

/// Monotonic timestamp in nanoseconds since the stream started.
pub type TimestampNs = u64;

/// Current landmark stream schema.
pub const STREAM_SCHEMA_VERSION: &str = "1.0";

/// Metadata written once at the top of a stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamHeader {
    pub schema_version: String,

    /// Wall-clock time of the first frame (RFC 3339).
    pub epoch_wall: String,

    /// Camera frame size in pixels.
    pub frame_width: u32,
    pub frame_height: u32,

    /// Nominal capture rate.
    pub fps: u32,
}

impl StreamHeader {
    pub fn new(frame_width: u32, frame_height: u32, fps: u32) -> Self {
        Self {
            schema_version: STREAM_SCHEMA_VERSION.to_string(),
            epoch_wall: chrono::Utc::now().to_rfc3339(),
            frame_width,
            frame_height,
            fps,
        }
    }
}

/// One recorded frame of detector output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkFrame {
    #[serde(rename = "t")]
    pub timestamp_ns: TimestampNs,

    /// Face meshes, most confident first. Empty when no face was found.
    #[serde(default)]
    pub faces: Vec<FaceMesh>,
}

impl LandmarkFrame {
    pub fn new(timestamp_ns: TimestampNs, faces: Vec<FaceMesh>) -> Self {
        Self {
            timestamp_ns,
            faces,
        }
    }

    pub fn empty(timestamp_ns: TimestampNs) -> Self {
        Self::new(timestamp_ns, Vec::new())
    }
}

/// Identity of the camera frame a detection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInfo {
    /// Zero-based frame counter within the session.
    pub index: u64,
    pub timestamp_ns: TimestampNs,
    pub width: u32,
    pub height: u32,
}

/// What the detector hands to the per-frame callback.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorResults {
    pub frame: FrameInfo,
    pub multi_face_landmarks: Vec<FaceMesh>,
}

impl DetectorResults {
    pub fn new(frame: FrameInfo, multi_face_landmarks: Vec<FaceMesh>) -> Self {
        Self {
            frame,
            multi_face_landmarks,
        }
    }

    /// The single face the gaze pipeline reads, if any was detected.
    pub fn first_face(&self) -> Option<&FaceMesh> {
        self.multi_face_landmarks.first()
    }

    pub fn has_face(&self) -> bool {
        !self.multi_face_landmarks.is_empty()
    }
}

/// A parsed landmark stream.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LandmarkStream {
    pub header: Option<StreamHeader>,
    pub frames: Vec<LandmarkFrame>,
}

impl LandmarkStream {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of frames with at least one face.
    pub fn frames_with_face(&self) -> usize {
        self.frames.iter().filter(|f| !f.faces.is_empty()).count()
    }

    /// Time between the first and last frame.
    pub fn duration_secs(&self) -> f64 {
        match (self.frames.first(), self.frames.last()) {
            (Some(first), Some(last)) => {
                SessionClock::ns_to_secs(last.timestamp_ns.saturating_sub(first.timestamp_ns))
            }
            _ => 0.0,
        }
    }

    /// Check that frame timestamps never go backwards.
    pub fn is_monotonic(&self) -> bool {
        self.frames
            .windows(2)
            .all(|w| w[1].timestamp_ns >= w[0].timestamp_ns)
    }
}

/// Parse a landmark stream from JSONL content.
///
/// A leading `# {...}` line is read as the header; other `#` lines and
/// blank lines are skipped.
pub fn parse_stream(jsonl: &str) -> Result<LandmarkStream, serde_json::Error> {
    let mut header = None;
    let mut frames = Vec::new();
    let mut seen_content = false;

    for line in jsonl.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }
        if let Some(comment) = line.strip_prefix('#') {
            let comment = comment.trim();
            if !seen_content && header.is_none() && comment.starts_with('{') {
                header = Some(serde_json::from_str(comment)?);
            }
            continue;
        }
        seen_content = true;
        frames.push(serde_json::from_str(line)?);
    }

    Ok(LandmarkStream { header, frames })
}

/// Serialize a landmark stream to JSONL.
pub fn serialize_stream(stream: &LandmarkStream) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    if let Some(header) = &stream.header {
        output.push_str("# ");
        output.push_str(&serde_json::to_string(header)?);
        output.push('\n');
    }
    for frame in &stream.frames {
        output.push_str(&serde_json::to_string(frame)?);
        output.push('\n');
    }
    Ok(output)
}

/// Read and parse a landmark stream file.
pub fn load_stream(path: &Path) -> GazeplotResult<LandmarkStream> {
    if !path.exists() {
        return Err(GazeplotError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    Ok(parse_stream(&content)?)
}

/// Write a landmark stream file, creating parent directories.
pub fn save_stream(path: &Path, stream: &LandmarkStream) -> GazeplotResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serialize_stream(stream)?)?;
    Ok(())
}
