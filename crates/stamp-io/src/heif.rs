//! HEIF/HEIC decoding.
//!
//! Requires the `heif` feature and system libheif >= 1.17.
//!
//! # Setup
//!
//! **Linux:**
//! ```bash
//! apt install libheif-dev   # Debian/Ubuntu
//! dnf install libheif-devel # Fedora
//! ```
//!
//! **macOS:**
//! ```bash
//! brew install libheif
//! ```
//!
//! Only the primary image of a container is decoded; burst sequences
//! and auxiliary images are ignored. libheif applies the container's
//! rotation transforms itself, so HEIF images bypass the EXIF
//! orientation pass.

#[cfg(not(feature = "heif"))]
use crate::IoError;
use crate::IoResult;
use image::RgbaImage;
use std::path::Path;

/// Decodes the primary image of a HEIF/HEIC file into 8-bit RGBA.
#[cfg(feature = "heif")]
pub fn read_heif(path: &Path) -> IoResult<RgbaImage> {
    use crate::IoError;
    use libheif_rs::{ColorSpace, HeifContext, LibHeif, RgbChroma};

    let path_str = path
        .to_str()
        .ok_or_else(|| IoError::decode(path, "path is not valid UTF-8"))?;

    let lib = LibHeif::new();
    let ctx = HeifContext::read_from_file(path_str).map_err(|e| IoError::decode(path, e))?;
    let handle = ctx
        .primary_image_handle()
        .map_err(|e| IoError::decode(path, e))?;

    let decoded = lib
        .decode(&handle, ColorSpace::Rgb(RgbChroma::Rgba), None)
        .map_err(|e| IoError::decode(path, e))?;

    let width = decoded.width();
    let height = decoded.height();
    let planes = decoded.planes();
    let plane = planes
        .interleaved
        .ok_or_else(|| IoError::decode(path, "no interleaved plane in decoded image"))?;

    // Rows are stride-padded; copy them out tightly
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height as usize {
        let row = y * plane.stride;
        pixels.extend_from_slice(&plane.data[row..row + width as usize * 4]);
    }

    RgbaImage::from_raw(width, height, pixels)
        .ok_or_else(|| IoError::decode(path, "decoded plane size mismatch"))
}

/// Placeholder when the heif feature is disabled.
#[cfg(not(feature = "heif"))]
pub fn read_heif(_path: &Path) -> IoResult<RgbaImage> {
    Err(IoError::UnsupportedFeature(
        "HEIF decoding requires the 'heif' feature".into(),
    ))
}
