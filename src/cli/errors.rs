use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read config file {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: minires::Error,
    },

    #[error(transparent)]
    Resize(#[from] minires::Error),
}
