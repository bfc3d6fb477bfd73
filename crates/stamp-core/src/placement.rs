//! Watermark placement geometry.
//!
//! Given an image size, the logo's native size, a corner and the ratio
//! settings, [`compute_placement`] produces every pixel box the
//! compositor needs:
//!
//! - the watermark crop box in full-image coordinates, clamped per edge
//!   to the image bounds;
//! - the circle bounding box re-based into crop-local coordinates
//!   (signed, because a clipped circle extends past the crop);
//! - the logo's top-left offset inside the *supersampled* crop canvas.
//!
//! All intermediate arithmetic stays in `f64`; coordinates are truncated
//! to integers only when the boxes are assembled, so rounding error does
//! not compound across steps.
//!
//! # Consistency
//!
//! The three boxes share one origin shift (the crop origin) and one scale
//! (the supersampling factor). Cropping the image at `watermark_box` and
//! drawing the circle at `circle_box_local` inside that crop paints the
//! same pixels as drawing at the pre-clip coordinates on the full image.

use crate::{Box2, Corner, Rect, Settings};

/// Pixel geometry for one watermark variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Crop region in full-image coordinates, clamped to image bounds.
    /// Empty when the circle lies entirely off-canvas.
    pub watermark_box: Rect,
    /// Circle bounding box in crop-local coordinates (unscaled).
    pub circle_box_local: Box2,
    /// Logo top-left offset inside the supersampled crop canvas.
    pub logo_pos_ss: (i64, i64),
    /// Supersampled logo dimensions the logo assets must be scaled to.
    pub logo_ss_size: (u32, u32),
}

impl Placement {
    /// Returns `true` if the watermark region is entirely off-canvas and
    /// this variant should be skipped.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.watermark_box.is_empty()
    }
}

/// Computes the target logo size for an image.
///
/// The target height is a fraction of the *smaller* image dimension, so
/// portrait and landscape images get proportionally consistent watermark
/// sizes; the width follows from the logo's native aspect ratio.
pub fn target_logo_size(image_size: (u32, u32), logo_size: (u32, u32), ratio: f64) -> (f64, f64) {
    let (image_w, image_h) = (image_size.0 as f64, image_size.1 as f64);
    let (logo_w, logo_h) = (logo_size.0 as f64, logo_size.1 as f64);

    let target_h = ratio * image_w.min(image_h);
    let target_w = target_h / logo_h * logo_w;
    (target_w, target_h)
}

/// Computes the placement geometry for one (image, corner) pair.
///
/// `logo_size` is the logo asset's native pixel size; the caller scales
/// the assets to [`Placement::logo_ss_size`] before compositing.
pub fn compute_placement(
    image_size: (u32, u32),
    logo_size: (u32, u32),
    corner: Corner,
    settings: &Settings,
) -> Placement {
    let (image_w, image_h) = (image_size.0 as f64, image_size.1 as f64);
    let ss = settings.ss_factor as f64;

    let (target_w, target_h) = target_logo_size(image_size, logo_size, settings.wm_size_ratio);
    let logo_ss_size = ((ss * target_w) as u32, (ss * target_h) as u32);

    // Logo center, measured from the nearest corner
    let padding = target_h * settings.padding_ratio;
    let padding_x = padding + target_w / 2.0;
    let padding_y = padding + target_h / 2.0;

    let logo_center_x = if corner.is_left() {
        padding_x
    } else {
        image_w - padding_x
    };
    let logo_center_y = if corner.is_top() {
        padding_y
    } else {
        image_h - padding_y
    };

    // Circle center: offset from the logo center, mirrored on left/top
    // edges so the shift direction follows the corner
    let circle_radius = target_w * settings.circle_ratio / 2.0;
    let offset_abs_x = target_w * (settings.circle_offset.0 - 0.5);
    let offset_abs_y = target_h * (settings.circle_offset.1 - 0.5);

    let circle_center_x = logo_center_x + offset_abs_x * sign_for(corner.is_left());
    let circle_center_y = logo_center_y + offset_abs_y * sign_for(corner.is_top());

    let circle_x0 = circle_center_x - circle_radius;
    let circle_y0 = circle_center_y - circle_radius;
    let circle_x1 = circle_center_x + circle_radius;
    let circle_y1 = circle_center_y + circle_radius;

    // Crop box: the circle box clamped per edge, per axis. A circle that
    // hangs off an edge produces an asymmetric crop, not a rejection.
    let crop_x0 = circle_x0.max(0.0);
    let crop_y0 = circle_y0.max(0.0);
    let crop_x1 = circle_x1.min(image_w);
    let crop_y1 = circle_y1.min(image_h);

    let (ix0, iy0, ix1, iy1) = (
        crop_x0 as i64,
        crop_y0 as i64,
        crop_x1 as i64,
        crop_y1 as i64,
    );
    let watermark_box = if ix1 > ix0 && iy1 > iy0 {
        Rect::new(
            ix0 as u32,
            iy0 as u32,
            (ix1 - ix0) as u32,
            (iy1 - iy0) as u32,
        )
    } else {
        // Fully off-canvas: empty box, variant skipped downstream
        Rect::new(
            ix0.clamp(0, image_w as i64) as u32,
            iy0.clamp(0, image_h as i64) as u32,
            0,
            0,
        )
    };

    // Re-base the circle into crop-local coordinates using the pre-trunc
    // crop origin, keeping local and absolute drawing equivalent
    let circle_box_local = Box2::new(
        (circle_x0 - crop_x0) as i64,
        (circle_y0 - crop_y0) as i64,
        (circle_x1 - crop_x0) as i64,
        (circle_y1 - crop_y0) as i64,
    );

    // Logo top-left inside the supersampled crop canvas
    let logo_center_local_x = logo_center_x - crop_x0;
    let logo_center_local_y = logo_center_y - crop_y0;
    let logo_pos_ss = (
        (ss * logo_center_local_x - logo_ss_size.0 as f64 / 2.0) as i64,
        (ss * logo_center_local_y - logo_ss_size.1 as f64 / 2.0) as i64,
    );

    Placement {
        watermark_box,
        circle_box_local,
        logo_pos_ss,
        logo_ss_size,
    }
}

/// Offset sign: shifts flip direction on left/top edges.
#[inline]
fn sign_for(mirrored: bool) -> f64 {
    if mirrored { -1.0 } else { 1.0 }
}
