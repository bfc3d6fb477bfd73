//! EXIF orientation handling.
//!
//! Cameras record portrait shots as landscape pixel grids plus an
//! orientation tag (values 1 through 8). Before watermarking, the pixel
//! grid is rotated upright so corner positions mean what the viewer
//! sees. Mirrored orientations (2, 4, 5, 7) are collapsed onto their
//! rotated counterparts; only the rotation is applied, never a flip.

use crate::IoResult;
use exif::{In, Tag};
use image::RgbaImage;
use image::imageops;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Upright rotation derived from an EXIF orientation value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Already upright.
    None,
    /// Quarter turn clockwise.
    Cw90,
    /// Half turn.
    Cw180,
    /// Quarter turn counter-clockwise.
    Cw270,
}

/// Reads the EXIF orientation value (1-8) from an image file.
///
/// Returns `None` when the file has no EXIF segment, no orientation tag,
/// or a value outside the valid range. A missing tag is the common case
/// and not an error.
pub fn read_orientation(path: &Path) -> IoResult<Option<u32>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let Ok(exif) = exif::Reader::new().read_from_container(&mut reader) else {
        return Ok(None);
    };
    let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) else {
        return Ok(None);
    };
    let orientation = field.value.get_uint(0).filter(|v| (1..=8).contains(v));

    if let Some(v) = orientation {
        debug!("{}: EXIF orientation {v}", path.display());
    }
    Ok(orientation)
}

/// Maps an orientation value onto the rotation that makes it upright.
///
/// Values pair up two by two: {1, 2} upright, {3, 4} upside down, {5, 6}
/// need a clockwise quarter turn, {7, 8} a counter-clockwise one.
pub fn rotation_for(orientation: u32) -> Rotation {
    match (orientation.saturating_sub(1)) / 2 {
        1 => Rotation::Cw180,
        2 => Rotation::Cw90,
        3 => Rotation::Cw270,
        _ => Rotation::None,
    }
}

/// Rotates the pixel grid upright for the given orientation value.
pub fn apply_orientation(pixels: RgbaImage, orientation: u32) -> RgbaImage {
    match rotation_for(orientation) {
        Rotation::None => pixels,
        Rotation::Cw90 => imageops::rotate90(&pixels),
        Rotation::Cw180 => imageops::rotate180(&pixels),
        Rotation::Cw270 => imageops::rotate270(&pixels),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_rotation_buckets() {
        assert_eq!(rotation_for(1), Rotation::None);
        assert_eq!(rotation_for(2), Rotation::None);
        assert_eq!(rotation_for(3), Rotation::Cw180);
        assert_eq!(rotation_for(4), Rotation::Cw180);
        assert_eq!(rotation_for(5), Rotation::Cw90);
        assert_eq!(rotation_for(6), Rotation::Cw90);
        assert_eq!(rotation_for(7), Rotation::Cw270);
        assert_eq!(rotation_for(8), Rotation::Cw270);
    }

    #[test]
    fn test_out_of_range_values_do_not_rotate() {
        assert_eq!(rotation_for(0), Rotation::None);
        assert_eq!(rotation_for(9), Rotation::None);
        assert_eq!(rotation_for(42), Rotation::None);
    }

    #[test]
    fn test_apply_quarter_turn_swaps_dimensions() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 255, 0, 255]));

        let rotated = apply_orientation(img, 6);
        assert_eq!(rotated.dimensions(), (1, 2));
        assert_eq!(rotated.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
        assert_eq!(rotated.get_pixel(0, 1), &Rgba([0, 255, 0, 255]));
    }

    #[test]
    fn test_apply_half_turn() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 255, 0, 255]));

        let rotated = apply_orientation(img, 3);
        assert_eq!(rotated.dimensions(), (2, 1));
        assert_eq!(rotated.get_pixel(0, 0), &Rgba([0, 255, 0, 255]));
        assert_eq!(rotated.get_pixel(1, 0), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_read_orientation_without_exif() {
        // A bare PNG has no EXIF container; that is not an error
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.png");
        RgbaImage::new(2, 2).save(&path).unwrap();

        assert_eq!(read_orientation(&path).unwrap(), None);
    }
}
