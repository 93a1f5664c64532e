use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ComposeError>;

/// Error type covering the different failure cases that can occur while the
/// composer discovers, loads, lays out, or writes icons.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// Wrapper for IO failures that are not tied to a specific icon or output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the dry-run report cannot be serialised.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when the icons directory does not exist.
    #[error("icons directory not found at {}", .0.display())]
    MissingIconsDir(PathBuf),

    /// Raised when an icon file cannot be read as UTF-8 text.
    #[error("failed to read icon {}: {source}", path.display())]
    ReadIcon {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Raised when the composed document cannot be written.
    #[error("failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Raised when custom layout parameters cannot produce a grid.
    #[error("invalid layout parameters: {0}")]
    InvalidLayout(String),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
