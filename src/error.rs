//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Wraps image decode/encode failures with the path involved, converts I/O and
//! JSON errors, and provides semantic variants for argument validation.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load image from {path:?}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to save image to {path:?}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unsupported output format for {path:?} (unknown or missing extension)")]
    UnsupportedOutputFormat { path: PathBuf },

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Target {dimension} must be greater than 0, got: {size}")]
    ZeroSize { dimension: &'static str, size: u32 },

    #[error("Target {width}x{height} is too large to allocate")]
    TargetTooLarge { width: u32, height: u32 },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }
}
