//! Error types for linetallylib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during scanning and counting
#[derive(Error, Debug)]
pub enum LinetallyError {
    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Read buffer length of zero makes no progress
    #[error("buffer length must be at least 1 byte")]
    InvalidBufferSize,

    /// Unsupported grouping name
    #[error("unknown grouping '{0}' (expected 'extension' or 'directory')")]
    UnknownGrouping(String),

    /// Scan root does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// A directory entry could not be read during the walk
    #[error("walk error: {0}")]
    Walk(String),

    /// File vanished between discovery and read
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
}
