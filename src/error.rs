//! Error types for icon generation

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for icon generation
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while writing icons to disk
#[derive(Error, Debug)]
pub enum Error {
    /// The output directory could not be created
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An icon could not be encoded or written
    #[error("Failed to write icon {}: {source}", path.display())]
    WriteIcon {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Invalid driver configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
