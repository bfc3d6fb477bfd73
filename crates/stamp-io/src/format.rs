//! Admitted file formats and decoder routing.
//!
//! Admission is extension-based: a file whose extension is not in
//! [`SUPPORTED_EXTS`] is quarantined without opening it. Files that pass
//! are routed to one of three decoder families by [`DecodeKind`].

use std::path::Path;

/// Extensions admitted into the pipeline (lowercase, without the dot).
pub const SUPPORTED_EXTS: &[&str] = &[
    "jpg", "png", "jpeg", "ico", "webp", "heic", "heif", "nef",
];

/// Extensions handled by libheif.
pub const HEIF_EXTS: &[&str] = &["heic", "heif"];

/// Extensions handled by the camera raw decoder.
pub const RAW_EXTS: &[&str] = &["nef"];

/// Decoder family for an admitted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeKind {
    /// Common formats decoded by the `image` crate (JPEG, PNG, WebP, ICO).
    Generic,
    /// HEIF/HEIC containers decoded by libheif.
    Heif,
    /// Camera raw files demosaiced from sensor data.
    Raw,
}

impl DecodeKind {
    /// Classifies a path by extension, case-insensitively.
    ///
    /// Returns `None` for unsupported extensions and for paths without
    /// an extension.
    pub fn classify(path: &Path) -> Option<DecodeKind> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if HEIF_EXTS.contains(&ext.as_str()) {
            Some(DecodeKind::Heif)
        } else if RAW_EXTS.contains(&ext.as_str()) {
            Some(DecodeKind::Raw)
        } else if SUPPORTED_EXTS.contains(&ext.as_str()) {
            Some(DecodeKind::Generic)
        } else {
            None
        }
    }
}

/// Returns `true` if the path carries one of the admitted extensions.
pub fn is_supported(path: &Path) -> bool {
    DecodeKind::classify(path).is_some()
}
