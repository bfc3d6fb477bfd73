//! Error types for compositing and output encoding.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Compositing or output error.
#[derive(Debug, Error)]
pub enum OpsError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Output file could not be encoded.
    #[error("encode error for {}: {reason}", path.display())]
    Encode {
        /// Destination file.
        path: PathBuf,
        /// Encoder message.
        reason: String,
    },
}

impl OpsError {
    /// Shorthand for an [`OpsError::Encode`] with a formatted reason.
    pub fn encode(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::Encode {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for compositing operations.
pub type OpsResult<T> = Result<T, OpsError>;
