//! Watermark compositing for one variant.
//!
//! The stamp is painted through a supersampled detour so the circle edge
//! comes out anti-aliased:
//!
//! 1. crop the watermark region out of the image
//! 2. upscale the crop by the supersampling factor
//! 3. fill the circle and alpha-blend the pre-scaled logo on top
//! 4. downscale back to the crop size
//! 5. write the result over the original region
//!
//! Supersampling factor 1 degrades gracefully to direct drawing.

use crate::ellipse::fill_ellipse;
use crate::{OpsError, OpsResult};
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};
use stamp_core::{Filter, Placement, Rgb, Settings};
use std::path::Path;

/// Maps the configured filter onto the resampler implementation.
pub fn filter_type(filter: Filter) -> FilterType {
    match filter {
        Filter::Nearest => FilterType::Nearest,
        Filter::Bilinear => FilterType::Triangle,
        Filter::Bicubic => FilterType::CatmullRom,
        Filter::Lanczos3 => FilterType::Lanczos3,
    }
}

/// Scales a logo asset to its supersampled target size.
pub fn scale_logo(logo: &RgbaImage, size: (u32, u32), filter: Filter) -> RgbaImage {
    imageops::resize(logo, size.0.max(1), size.1.max(1), filter_type(filter))
}

/// Paints one watermark variant onto the image, in place.
///
/// `logo_ss` must already be scaled to [`Placement::logo_ss_size`].
/// `fill` is the circle color, or `None` when the circle is disabled.
/// A degenerate placement leaves the image untouched.
pub fn paint(
    image: &mut RgbaImage,
    placement: &Placement,
    logo_ss: &RgbaImage,
    fill: Option<Rgb>,
    settings: &Settings,
) {
    let region = placement.watermark_box;
    if region.is_empty() {
        return;
    }

    let ss = settings.ss_factor;
    let filter = filter_type(settings.filter);

    let crop = imageops::crop_imm(image, region.x, region.y, region.width, region.height)
        .to_image();
    let mut canvas = imageops::resize(
        &crop,
        region.width * ss,
        region.height * ss,
        filter,
    );

    if let Some(color) = fill {
        fill_ellipse(
            &mut canvas,
            placement.circle_box_local.scaled(ss as i64),
            color,
        );
    }

    imageops::overlay(
        &mut canvas,
        logo_ss,
        placement.logo_pos_ss.0,
        placement.logo_pos_ss.1,
    );

    let finished = imageops::resize(&canvas, region.width, region.height, filter);
    imageops::replace(image, &finished, region.x as i64, region.y as i64);
}

/// Encodes an image to disk, inferring the format from the extension.
///
/// JPEG cannot carry an alpha channel, so RGBA pixels are flattened to
/// RGB first; all other formats are written as-is.
pub fn save_output(image: &RgbaImage, path: &Path) -> OpsResult<()> {
    let is_jpeg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("jpg") || e.eq_ignore_ascii_case("jpeg"));

    let result = if is_jpeg {
        DynamicImage::ImageRgba8(image.clone()).to_rgb8().save(path)
    } else {
        image.save(path)
    };
    result.map_err(|e| OpsError::encode(path, e))
}
