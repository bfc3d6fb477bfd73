//! Immutable run configuration.
//!
//! All ratios and knobs that feed placement geometry and compositing are
//! collected in one [`Settings`] struct, validated once at startup. The
//! per-image selection policies (position, color) live separately in
//! [`crate::position`] and [`crate::palette`] because they are resolved
//! per image rather than per run.

use crate::{CoreError, Result};
use std::path::PathBuf;

/// Resampling filter used for the supersample/downscale round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Nearest-neighbor (fastest, no interpolation).
    Nearest,
    /// Bilinear interpolation (smooth, fast).
    #[default]
    Bilinear,
    /// Bicubic interpolation (sharper than bilinear).
    Bicubic,
    /// Lanczos-3 (high quality, best for downscaling).
    Lanczos3,
}

impl Filter {
    /// Parses a filter from its CLI string form.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "nearest" => Ok(Self::Nearest),
            "bilinear" => Ok(Self::Bilinear),
            "bicubic" => Ok(Self::Bicubic),
            "lanczos" => Ok(Self::Lanczos3),
            other => Err(CoreError::UnknownFilter(other.to_string())),
        }
    }
}

/// Immutable configuration bag for one watermarking run.
///
/// Ratios are expressed relative to the image or logo dimensions, so the
/// watermark scales consistently across portrait and landscape inputs.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Target logo height as a fraction of the smaller image dimension.
    pub wm_size_ratio: f64,
    /// Gap between logo and image edge, as a fraction of the logo height.
    pub padding_ratio: f64,
    /// Circle diameter as a fraction of the logo width.
    pub circle_ratio: f64,
    /// Circle center offset from the logo center, as (x, y) ratios of the
    /// logo dimensions; 0.5 means centered on that axis.
    pub circle_offset: (f64, f64),
    /// Linear supersampling factor for circle anti-aliasing (>= 1).
    pub ss_factor: u32,
    /// Whether to draw the circular backdrop at all.
    pub draw_circle: bool,
    /// Resampling filter for the supersample/downscale round trip.
    pub filter: Filter,
    /// Directory receiving output files.
    pub output_dir: PathBuf,
    /// Output encoding, as a file extension (`png`, `jpg`, ...).
    pub format: String,
    /// Filename prefix prepended to every output (may be empty).
    pub prefix: String,
}

/// Default circle offset ratios: shifted right of the logo center and all
/// the way down to its bottom edge.
pub(crate) const DEFAULT_CIRCLE_OFFSET: (f64, f64) = (0.6, 1.0);

impl Default for Settings {
    fn default() -> Self {
        Self {
            wm_size_ratio: 0.07,
            padding_ratio: 0.15,
            circle_ratio: 1.6,
            circle_offset: DEFAULT_CIRCLE_OFFSET,
            ss_factor: 2,
            draw_circle: true,
            filter: Filter::default(),
            output_dir: PathBuf::from("output"),
            format: "png".to_string(),
            prefix: "wm_".to_string(),
        }
    }
}

impl Settings {
    /// Collapses the circle offset so the circle is centered on the logo.
    pub fn with_centered_circle(mut self) -> Self {
        self.circle_offset = (0.5, 0.5);
        self
    }

    /// Validates field ranges. Called once at startup; placement code
    /// assumes a validated settings value.
    pub fn validate(&self) -> Result<()> {
        if self.ss_factor < 1 {
            return Err(CoreError::invalid_settings(
                "supersampling factor must be >= 1",
            ));
        }
        if !(self.wm_size_ratio > 0.0) {
            return Err(CoreError::invalid_settings(
                "watermark size ratio must be positive",
            ));
        }
        if !(self.circle_ratio > 0.0) {
            return Err(CoreError::invalid_settings(
                "circle ratio must be positive",
            ));
        }
        if self.padding_ratio < 0.0 {
            return Err(CoreError::invalid_settings(
                "padding ratio must not be negative",
            ));
        }
        if self.format.is_empty() {
            return Err(CoreError::invalid_settings("output format must be set"));
        }
        Ok(())
    }
}
