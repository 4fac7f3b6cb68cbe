use std::path::PathBuf;
use thiserror::Error;

/// Why a thresholding run produced no output
#[derive(Debug, Error)]
pub enum ThresholdError {
    #[error("unsupported file extension for {0} (expected .jpg or .jpeg)")]
    UnsupportedExtension(PathBuf),

    #[error("input file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image {0} has no pixels")]
    EmptyImage(PathBuf),

    #[error("display error: {0}")]
    Display(String),
}

/// Result alias for the thresholding pipeline
pub type Result<T> = std::result::Result<T, ThresholdError>;
