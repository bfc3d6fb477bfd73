//! Error types for stamp-core operations.
//!
//! Covers configuration parsing (positions, colors, filters) and settings
//! validation. Decode and filesystem failures live in `stamp-io`.

use thiserror::Error;

/// Result type alias using [`CoreError`] as the error type.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors produced while parsing or validating configuration.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Position string is not one of the recognized choices.
    #[error("unknown position '{0}' (expected bottom_right, bottom_left, top_right, top_left, random or all)")]
    UnknownPosition(String),

    /// Color string is neither a palette key, `random`, `all`, nor `#rrggbb`.
    #[error("invalid color '{0}': expected a palette color name or #rrggbb hexadecimal format")]
    InvalidColor(String),

    /// Resampling filter name is not recognized.
    #[error("unknown filter '{0}' (expected nearest, bilinear, bicubic or lanczos)")]
    UnknownFilter(String),

    /// A settings field is out of its valid range.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

impl CoreError {
    /// Creates an [`CoreError::InvalidSettings`] error.
    #[inline]
    pub fn invalid_settings(msg: impl Into<String>) -> Self {
        Self::InvalidSettings(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownPosition("middle".into());
        assert!(err.to_string().contains("middle"));

        let err = CoreError::InvalidColor("#zzz".into());
        assert!(err.to_string().contains("#rrggbb"));
    }
}
