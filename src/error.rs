use std::path::PathBuf;
use thiserror::Error;
use tone_lut::LutError;

/// Fatal errors: the run stops before (or instead of) processing images.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("input directory does not exist: {}", .0.display())]
    MissingInputDir(PathBuf),

    #[error("LUT file does not exist: {}", .0.display())]
    MissingLutFile(PathBuf),

    #[error("failed to read LUT file {}: {source}", path.display())]
    LutRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid LUT file {}: {source}", path.display())]
    Lut {
        path: PathBuf,
        #[source]
        source: LutError,
    },

    #[error("failed to list input directory {}: {source}", path.display())]
    ListInputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create output directory {}: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report {}: {source}", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RunError {
    /// True for the checks made before the LUT is even read.
    pub fn is_precondition(&self) -> bool {
        matches!(self, RunError::MissingInputDir(_) | RunError::MissingLutFile(_))
    }

    /// True if the LUT file was readable but its content was rejected.
    pub fn is_validation(&self) -> bool {
        matches!(self, RunError::Lut { .. })
    }
}

/// Failure of a single image; recorded and the batch continues.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("unsupported image format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("decode error: {0}")]
    Decode(#[source] image::ImageError),

    #[error("encode error: {0}")]
    Encode(#[source] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Invalid command-line option values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("--hsv must be H,S,V (e.g. 30,100,100), got {0:?}")]
    TintArity(String),

    #[error("--hsv values must be numbers: {0:?}")]
    TintNumber(String),

    #[error("--hsv {component} must be in [0, {max}], got {value}")]
    TintRange {
        component: &'static str,
        max: u16,
        value: f32,
    },
}
