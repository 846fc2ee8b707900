//! Error types for file-backed persistence.

use std::path::PathBuf;

use thiserror::Error;

use randlist_core::CodecError;

/// Errors from saving or loading a list through the filesystem.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The file could not be created or opened. No partial list escapes.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Encoding or decoding failed once the file was open.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Result type for persistence operations.
pub type Result<T> = std::result::Result<T, PersistError>;
