//! Error types for randlist-core.

use thiserror::Error;

/// Errors from encoding or decoding the line format.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The sink or source failed mid-operation.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An auxiliary-reference line was neither an integer nor the sentinel.
    #[error("malformed reference line at position {position}: {content:?}")]
    MalformedReference { position: usize, content: String },
}

/// Errors from list mutation.
#[derive(Debug, Error)]
pub enum ListError {
    /// The handle does not name a member of this list.
    #[error("node handle is not a member of this list")]
    InvalidNode,
}
