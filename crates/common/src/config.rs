//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GazeplotError, GazeplotResult};

/// Global application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Chart rendering settings.
    pub charts: ChartDefaults,

    /// Capture driver settings.
    pub capture: CaptureDefaults,

    /// Options forwarded to the landmark detector.
    pub detector: DetectorOptions,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Chart geometry and styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartDefaults {
    /// Surface width in pixels.
    pub width: u32,

    /// Surface height in pixels.
    pub height: u32,

    /// Sliding window capacity per series.
    pub max_points: usize,

    /// Whether the combined XY direction chart is drawn.
    pub direction_chart: bool,

    /// Fill colour used for titles and axis labels.
    pub label_color: String,

    /// Stroke colour of the horizontal gaze line.
    pub x_color: String,

    /// Stroke colour of the vertical gaze line.
    pub y_color: String,

    /// Stroke colour of the direction trace.
    pub direction_color: String,
}

/// Capture driver parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureDefaults {
    /// Requested frame width.
    pub width: u32,

    /// Requested frame height.
    pub height: u32,

    /// Frame rate used when pacing replayed streams.
    pub fps: u32,
}

/// Detector options. Only `max_num_faces` is enforced in-tree; the
/// confidence thresholds are handed to live detector backends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorOptions {
    pub max_num_faces: usize,
    pub refine_landmarks: bool,
    pub min_detection_confidence: f64,
    pub min_tracking_confidence: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "gazeplot=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            charts: ChartDefaults::default(),
            capture: CaptureDefaults::default(),
            detector: DetectorOptions::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ChartDefaults {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            max_points: 100,
            direction_chart: false,
            label_color: "white".to_string(),
            x_color: "blue".to_string(),
            y_color: "red".to_string(),
            direction_color: "green".to_string(),
        }
    }
}

impl Default for CaptureDefaults {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fps: 30,
        }
    }
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            max_num_faces: 1,
            refine_landmarks: true,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Failed to load config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Load and validate config from an explicit path.
    pub fn load_from(path: &Path) -> GazeplotResult<Self> {
        if !path.exists() {
            return Err(GazeplotError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the standard location and return the path written.
    pub fn save(&self) -> Result<PathBuf, std::io::Error> {
        let config_path = config_file_path();
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Save config to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Reject values the renderer or frame pump cannot work with.
    pub fn validate(&self) -> GazeplotResult<()> {
        if self.charts.width == 0 || self.charts.height == 0 {
            return Err(GazeplotError::config("chart dimensions must be non-zero"));
        }
        if self.charts.max_points < 2 {
            return Err(GazeplotError::config("charts.max_points must be at least 2"));
        }
        if self.capture.fps == 0 {
            return Err(GazeplotError::config("capture.fps must be non-zero"));
        }
        if self.detector.max_num_faces == 0 {
            return Err(GazeplotError::config(
                "detector.max_num_faces must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("gazeplot").join("config.json")
}
