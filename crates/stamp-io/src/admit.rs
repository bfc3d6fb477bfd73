//! Image admission: decode or quarantine.
//!
//! Every file found in the input directory goes through [`admit`], which
//! either hands back upright RGBA pixels or moves the file into the
//! quarantine directory and reports why. Environment failures (such as a
//! full disk or a missing cargo feature) propagate without touching the
//! input file.

use crate::format::DecodeKind;
use crate::{IoError, IoResult, fs, heif, orientation, raw};
use image::RgbaImage;
use stamp_core::LogoKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// An input image that passed admission.
#[derive(Debug)]
pub struct AdmittedImage {
    /// Original input path.
    pub path: PathBuf,
    /// Upright RGBA pixels.
    pub pixels: RgbaImage,
    /// Decoder family that produced the pixels.
    pub kind: DecodeKind,
}

impl AdmittedImage {
    /// Output filename stem, without extension or prefix.
    pub fn stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("image")
    }
}

/// Admits one input file: classify, decode, rotate upright.
///
/// On a rejection (unsupported extension or a decode failure) the file
/// is moved to `invalid_dir` before the error is returned, so one bad
/// file never stalls the batch. `apply_rotation` disables the EXIF
/// orientation pass when `false`.
pub fn admit(path: &Path, invalid_dir: &Path, apply_rotation: bool) -> IoResult<AdmittedImage> {
    let result = open_image(path, apply_rotation);

    if let Err(err) = &result {
        if err.is_rejection() {
            if let Err(move_err) = fs::quarantine(path, invalid_dir) {
                warn!("failed to quarantine {}: {move_err}", path.display());
            }
        }
    }
    result
}

fn open_image(path: &Path, apply_rotation: bool) -> IoResult<AdmittedImage> {
    let kind = DecodeKind::classify(path).ok_or_else(|| IoError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let pixels = match kind {
        DecodeKind::Generic => image::open(path)
            .map_err(|e| IoError::decode(path, e))?
            .to_rgba8(),
        DecodeKind::Heif => heif::read_heif(path)?,
        DecodeKind::Raw => raw::read_raw(path)?,
    };

    // HEIF rotation is applied by libheif; raw mosaics carry no display
    // orientation worth honoring here
    let pixels = if apply_rotation && kind == DecodeKind::Generic {
        match orientation::read_orientation(path) {
            Ok(Some(value)) => orientation::apply_orientation(pixels, value),
            Ok(None) => pixels,
            Err(err) => {
                warn!("{}: EXIF read failed, skipping rotation: {err}", path.display());
                pixels
            }
        }
    } else {
        pixels
    };

    debug!(
        "admitted {} ({}x{})",
        path.display(),
        pixels.width(),
        pixels.height()
    );
    Ok(AdmittedImage {
        path: path.to_path_buf(),
        pixels,
        kind,
    })
}

/// The pair of logo assets stamped onto images.
#[derive(Debug)]
pub struct Logos {
    /// Full-color logo, used over white circles.
    pub color: RgbaImage,
    /// White logo, used over colored circles.
    pub white: RgbaImage,
}

/// Color logo filename inside the logos directory.
pub const LOGO_COLOR_FILE: &str = "logo_color.png";
/// White logo filename inside the logos directory.
pub const LOGO_WHITE_FILE: &str = "logo_white.png";

impl Logos {
    /// Loads both logo assets from a directory.
    ///
    /// Both files must exist and share the same pixel size; the
    /// placement math assumes one logo geometry.
    pub fn load(dir: &Path) -> IoResult<Logos> {
        let color = load_logo(&dir.join(LOGO_COLOR_FILE))?;
        let white = load_logo(&dir.join(LOGO_WHITE_FILE))?;

        if color.dimensions() != white.dimensions() {
            return Err(IoError::Logo(format!(
                "logo sizes differ: {} is {:?}, {} is {:?}",
                LOGO_COLOR_FILE,
                color.dimensions(),
                LOGO_WHITE_FILE,
                white.dimensions()
            )));
        }
        Ok(Logos { color, white })
    }

    /// Native pixel size shared by both logo variants.
    pub fn size(&self) -> (u32, u32) {
        self.color.dimensions()
    }

    /// Picks the logo variant for a circle fill.
    pub fn select(&self, kind: LogoKind) -> &RgbaImage {
        match kind {
            LogoKind::Color => &self.color,
            LogoKind::White => &self.white,
        }
    }
}

fn load_logo(path: &Path) -> IoResult<RgbaImage> {
    let img = image::open(path)
        .map_err(|e| IoError::Logo(format!("cannot load {}: {e}", path.display())))?;
    Ok(img.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;

    fn setup_dirs() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let invalid = dir.path().join("invalid");
        stdfs::create_dir(&invalid).unwrap();
        (dir, invalid)
    }

    #[test]
    fn test_admit_valid_png() {
        let (dir, invalid) = setup_dirs();
        let path = dir.path().join("photo.png");
        RgbaImage::new(8, 6).save(&path).unwrap();

        let admitted = admit(&path, &invalid, true).unwrap();
        assert_eq!(admitted.pixels.dimensions(), (8, 6));
        assert_eq!(admitted.kind, DecodeKind::Generic);
        assert_eq!(admitted.stem(), "photo");
        assert!(path.exists());
    }

    #[test]
    fn test_admit_quarantines_unsupported_extension() {
        let (dir, invalid) = setup_dirs();
        let path = dir.path().join("notes.txt");
        stdfs::write(&path, b"hello").unwrap();

        let err = admit(&path, &invalid, true).unwrap_err();
        assert!(matches!(err, IoError::UnsupportedFormat { .. }));
        assert!(!path.exists());
        assert!(invalid.join("notes.txt").exists());
    }

    #[test]
    fn test_admit_quarantines_corrupt_file() {
        let (dir, invalid) = setup_dirs();
        let path = dir.path().join("broken.jpg");
        stdfs::write(&path, b"definitely not a jpeg").unwrap();

        let err = admit(&path, &invalid, true).unwrap_err();
        assert!(matches!(err, IoError::Decode { .. }));
        assert!(invalid.join("broken.jpg").exists());
    }

    #[test]
    fn test_logos_load_and_select() {
        let dir = tempfile::tempdir().unwrap();
        RgbaImage::new(40, 25)
            .save(dir.path().join(LOGO_COLOR_FILE))
            .unwrap();
        RgbaImage::new(40, 25)
            .save(dir.path().join(LOGO_WHITE_FILE))
            .unwrap();

        let logos = Logos::load(dir.path()).unwrap();
        assert_eq!(logos.size(), (40, 25));
        assert_eq!(logos.select(LogoKind::Color).dimensions(), (40, 25));
    }

    #[test]
    fn test_logos_reject_size_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        RgbaImage::new(40, 25)
            .save(dir.path().join(LOGO_COLOR_FILE))
            .unwrap();
        RgbaImage::new(30, 25)
            .save(dir.path().join(LOGO_WHITE_FILE))
            .unwrap();

        let err = Logos::load(dir.path()).unwrap_err();
        assert!(matches!(err, IoError::Logo(_)));
    }

    #[test]
    fn test_logos_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Logos::load(dir.path()).unwrap_err(),
            IoError::Logo(_)
        ));
    }
}
