//! Variant expansion: one admitted image to N output files.
//!
//! The resolved position and color lists form a cross product; every
//! combination is rendered on a fresh copy of the source pixels, so
//! variants never bleed into each other. Output files are named
//! `<prefix><stem>_<position>.<format>`, with a numeric color index
//! inserted before the extension when more than one color is rendered.

use crate::compose::{paint, save_output, scale_logo};
use crate::OpsResult;
use image::RgbaImage;
use stamp_core::{Corner, Rgb, Settings, compute_placement, logo_for_circle};
use stamp_io::{AdmittedImage, Logos};
use std::path::PathBuf;
use tracing::{debug, warn};

/// One (position, color) combination to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    /// Corner the watermark occupies.
    pub corner: Corner,
    /// Circle fill color.
    pub fill: Rgb,
    /// Color index appended to the filename, when rendering several.
    pub color_index: Option<usize>,
}

/// Expands resolved position and color lists into the variant list.
///
/// Color indices are only assigned when more than one color is in play;
/// a single-color run keeps plain filenames.
pub fn variants(corners: &[Corner], colors: &[Rgb]) -> Vec<Variant> {
    let indexed = colors.len() > 1;
    corners
        .iter()
        .flat_map(|&corner| {
            colors.iter().enumerate().map(move |(i, &fill)| Variant {
                corner,
                fill,
                color_index: indexed.then_some(i),
            })
        })
        .collect()
}

/// Builds the output filename for one variant.
pub fn output_name(prefix: &str, stem: &str, variant: &Variant, format: &str) -> String {
    match variant.color_index {
        Some(i) => format!("{prefix}{stem}_{}_{i}.{format}", variant.corner),
        None => format!("{prefix}{stem}_{}.{format}", variant.corner),
    }
}

/// Renders and writes every variant of one admitted image.
///
/// Skips variants whose watermark lies entirely off-canvas and logs a
/// warning for each file that fails to encode; an error is returned only
/// when *no* variant could be written. Returns the written paths.
pub fn process_image(
    admitted: &AdmittedImage,
    logos: &Logos,
    corners: &[Corner],
    colors: &[Rgb],
    settings: &Settings,
) -> OpsResult<Vec<PathBuf>> {
    let image_size = admitted.pixels.dimensions();
    let variant_list = variants(corners, colors);
    if variant_list.is_empty() {
        return Ok(Vec::new());
    }

    // The supersampled logo size depends only on the image, so both logo
    // variants are scaled once and reused across the whole cross product
    let probe = compute_placement(image_size, logos.size(), corners[0], settings);
    let scaled = ScaledLogos {
        color: scale_logo(&logos.color, probe.logo_ss_size, settings.filter),
        white: scale_logo(&logos.white, probe.logo_ss_size, settings.filter),
    };

    let mut written = Vec::new();
    let mut last_error = None;

    for variant in &variant_list {
        let placement = compute_placement(image_size, logos.size(), variant.corner, settings);
        if placement.is_degenerate() {
            warn!(
                "{}: watermark at {} lies off-canvas, skipping variant",
                admitted.path.display(),
                variant.corner
            );
            continue;
        }

        let logo_ss = scaled.select(variant.fill);
        let fill = settings.draw_circle.then_some(variant.fill);

        let mut canvas = admitted.pixels.clone();
        paint(&mut canvas, &placement, logo_ss, fill, settings);

        let name = output_name(&settings.prefix, admitted.stem(), variant, &settings.format);
        let dest = settings.output_dir.join(name);
        match save_output(&canvas, &dest) {
            Ok(()) => {
                debug!("wrote {}", dest.display());
                written.push(dest);
            }
            Err(err) => {
                warn!("{err}");
                last_error = Some(err);
            }
        }
    }

    match (written.is_empty(), last_error) {
        (true, Some(err)) => Err(err),
        _ => Ok(written),
    }
}

struct ScaledLogos {
    color: RgbaImage,
    white: RgbaImage,
}

impl ScaledLogos {
    /// White circles get the color logo; every other fill the white one.
    fn select(&self, fill: Rgb) -> &RgbaImage {
        match logo_for_circle(fill) {
            stamp_core::LogoKind::Color => &self.color,
            stamp_core::LogoKind::White => &self.white,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use stamp_core::WHITE;
    use stamp_io::DecodeKind;
    use std::path::Path;

    fn test_logos() -> Logos {
        Logos {
            color: RgbaImage::from_pixel(40, 25, Rgba([200, 30, 30, 255])),
            white: RgbaImage::from_pixel(40, 25, Rgba([255, 255, 255, 255])),
        }
    }

    fn admitted(w: u32, h: u32, name: &str) -> AdmittedImage {
        AdmittedImage {
            path: PathBuf::from(format!("input/{name}")),
            pixels: RgbaImage::from_pixel(w, h, Rgba([90, 90, 90, 255])),
            kind: DecodeKind::Generic,
        }
    }

    #[test]
    fn test_variant_cross_product() {
        let corners = [Corner::BottomRight, Corner::TopLeft];
        let colors = [WHITE, [0, 0, 0], [236, 0, 140]];
        let list = variants(&corners, &colors);

        assert_eq!(list.len(), 6);
        assert_eq!(list[0].corner, Corner::BottomRight);
        assert_eq!(list[0].color_index, Some(0));
        assert_eq!(list[5].corner, Corner::TopLeft);
        assert_eq!(list[5].fill, [236, 0, 140]);
    }

    #[test]
    fn test_single_color_has_no_index() {
        let list = variants(&[Corner::BottomRight], &[WHITE]);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].color_index, None);
    }

    #[test]
    fn test_output_name_forms() {
        let plain = Variant {
            corner: Corner::BottomLeft,
            fill: WHITE,
            color_index: None,
        };
        assert_eq!(
            output_name("wm_", "holiday", &plain, "png"),
            "wm_holiday_bottom_left.png"
        );

        let indexed = Variant {
            color_index: Some(2),
            ..plain
        };
        assert_eq!(
            output_name("", "holiday", &indexed, "jpg"),
            "holiday_bottom_left_2.jpg"
        );
    }

    #[test]
    fn test_process_image_writes_cross_product() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            output_dir: dir.path().to_path_buf(),
            ..Settings::default()
        };
        let corners = Corner::ALL;
        let colors = [WHITE, [0, 0, 0], [236, 0, 140]];

        let written = process_image(
            &admitted(640, 480, "pic.jpg"),
            &test_logos(),
            &corners,
            &colors,
            &settings,
        )
        .unwrap();

        assert_eq!(written.len(), 12);
        assert!(dir.path().join("wm_pic_bottom_right_0.png").exists());
        assert!(dir.path().join("wm_pic_top_left_2.png").exists());
    }

    #[test]
    fn test_process_image_variants_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            output_dir: dir.path().to_path_buf(),
            ..Settings::default()
        };
        let colors = [[236, 0, 140]];

        process_image(
            &admitted(640, 480, "pic.jpg"),
            &test_logos(),
            &Corner::ALL,
            &colors,
            &settings,
        )
        .unwrap();

        // A top-left variant must not carry the bottom-right stamp
        let top_left = image::open(dir.path().join("wm_pic_top_left.png"))
            .unwrap()
            .to_rgba8();
        let br = compute_placement((640, 480), (40, 25), Corner::BottomRight, &settings)
            .watermark_box;
        for x in br.x..br.right() {
            for y in br.y..br.bottom() {
                assert_eq!(top_left.get_pixel(x, y), &Rgba([90, 90, 90, 255]));
            }
        }
    }

    #[test]
    fn test_process_image_bad_output_dir_errors() {
        let settings = Settings {
            output_dir: Path::new("/nonexistent/definitely/missing").to_path_buf(),
            ..Settings::default()
        };
        let result = process_image(
            &admitted(320, 240, "pic.png"),
            &test_logos(),
            &[Corner::BottomRight],
            &[WHITE],
            &settings,
        );
        assert!(result.is_err());
    }
}
