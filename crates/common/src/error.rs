//! Error types shared across Gazeplot crates.

use std::path::PathBuf;

/// Top-level error type for Gazeplot operations.
#[derive(Debug, thiserror::Error)]
pub enum GazeplotError {
    #[error("Capture error: {message}")]
    Capture { message: String },

    #[error("Detector error: {message}")]
    Detector { message: String },

    #[error("Landmark error: {message}")]
    Landmarks { message: String },

    #[error("Render error: {message}")]
    Render { message: String },

    #[error("Session error: {message}")]
    Session { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Chart `{chart}` has not been created")]
    ChartNotCreated { chart: String },

    #[error("Landmark index {index} out of range for a mesh of {len} points")]
    LandmarkIndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using GazeplotError.
pub type GazeplotResult<T> = Result<T, GazeplotError>;

impl GazeplotError {
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture {
            message: msg.into(),
        }
    }

    pub fn detector(msg: impl Into<String>) -> Self {
        Self::Detector {
            message: msg.into(),
        }
    }

    pub fn landmarks(msg: impl Into<String>) -> Self {
        Self::Landmarks {
            message: msg.into(),
        }
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
        }
    }

    pub fn session(msg: impl Into<String>) -> Self {
        Self::Session {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn chart_not_created(chart: impl Into<String>) -> Self {
        Self::ChartNotCreated {
            chart: chart.into(),
        }
    }
}
