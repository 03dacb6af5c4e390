//! Error types for dirmap

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for dirmap operations
pub type MapResult<T> = Result<T, MapError>;

/// Errors raised while walking a directory or writing its map.
///
/// Nothing is retried or skipped: the first failure ends the run.
#[derive(Error, Debug)]
pub enum MapError {
    /// Root path is missing or is not a directory
    #[error("cannot access '{}': not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    /// A directory could not be enumerated
    #[error("cannot read directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An output file could not be written
    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
