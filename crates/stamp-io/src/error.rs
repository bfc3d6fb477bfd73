//! Error types for image admission.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Image admission error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed glob pattern (scan directory path was not valid UTF-8
    /// or contained glob metacharacters that do not parse).
    #[error("glob pattern error: {0}")]
    Pattern(#[from] glob::PatternError),

    /// File extension is not one of the admitted formats.
    #[error("unsupported format: {}", path.display())]
    UnsupportedFormat {
        /// Rejected file.
        path: PathBuf,
    },

    /// File has an admitted extension but could not be decoded.
    #[error("decode error in {}: {reason}", path.display())]
    Decode {
        /// Offending file.
        path: PathBuf,
        /// Decoder message.
        reason: String,
    },

    /// Logo assets are missing, unreadable, or inconsistent.
    #[error("logo error: {0}")]
    Logo(String),

    /// Feature requires an external SDK or a disabled cargo feature.
    #[error("feature unavailable: {0}")]
    UnsupportedFeature(String),
}

impl IoError {
    /// Shorthand for a [`IoError::Decode`] with a formatted reason.
    pub fn decode(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::Decode {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns `true` if the error condemns the input file itself rather
    /// than the environment. Such files are moved to quarantine.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. } | Self::Decode { .. })
    }
}

/// Result type for admission operations.
pub type IoResult<T> = Result<T, IoError>;
