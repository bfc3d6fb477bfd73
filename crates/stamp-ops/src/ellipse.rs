//! Filled ellipse rasterization.
//!
//! The circular backdrop is drawn on the supersampled canvas, so a plain
//! scanline fill is enough: the downscale pass afterwards provides the
//! anti-aliasing. Clipping happens per pixel against the canvas bounds,
//! which handles circles hanging off any edge.

use image::{Rgba, RgbaImage};
use stamp_core::{Box2, Rgb};

/// Fills the ellipse inscribed in `bbox` with an opaque color.
///
/// `bbox` is in canvas coordinates and may extend past the canvas on any
/// side; out-of-bounds spans are clipped. An empty or inverted box draws
/// nothing.
pub fn fill_ellipse(canvas: &mut RgbaImage, bbox: Box2, color: Rgb) {
    if bbox.width() <= 0 || bbox.height() <= 0 {
        return;
    }

    let (center_x, center_y) = bbox.center();
    let radius_x = bbox.width() as f64 / 2.0;
    let radius_y = bbox.height() as f64 / 2.0;
    let fill = Rgba([color[0], color[1], color[2], 255]);

    let (canvas_w, canvas_h) = canvas.dimensions();
    let y_start = bbox.y0.clamp(0, canvas_h as i64);
    let y_end = bbox.y1.clamp(0, canvas_h as i64);

    for y in y_start..y_end {
        // Sample the scanline at the pixel center
        let ny = (y as f64 + 0.5 - center_y) / radius_y;
        let span = 1.0 - ny * ny;
        if span <= 0.0 {
            continue;
        }
        let half_width = radius_x * span.sqrt();

        let x_start = ((center_x - half_width).floor() as i64).clamp(0, canvas_w as i64);
        let x_end = ((center_x + half_width).ceil() as i64).clamp(0, canvas_w as i64);
        for x in x_start..x_end {
            // Reject corner pixels whose center falls outside the curve
            let nx = (x as f64 + 0.5 - center_x) / radius_x;
            if nx * nx + ny * ny <= 1.0 {
                canvas.put_pixel(x as u32, y as u32, fill);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = [255, 0, 0];

    fn blank(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([0, 0, 0, 255]))
    }

    fn is_red(canvas: &RgbaImage, x: u32, y: u32) -> bool {
        canvas.get_pixel(x, y) == &Rgba([255, 0, 0, 255])
    }

    #[test]
    fn test_fills_center_not_corners() {
        let mut canvas = blank(100, 100);
        fill_ellipse(&mut canvas, Box2::new(10, 10, 90, 90), RED);

        assert!(is_red(&canvas, 50, 50));
        // Bbox corners lie outside the inscribed circle
        assert!(!is_red(&canvas, 11, 11));
        assert!(!is_red(&canvas, 88, 88));
        // Outside the bbox entirely
        assert!(!is_red(&canvas, 5, 50));
    }

    #[test]
    fn test_touches_bbox_edge_midpoints() {
        let mut canvas = blank(100, 100);
        fill_ellipse(&mut canvas, Box2::new(10, 10, 90, 90), RED);

        assert!(is_red(&canvas, 10, 50));
        assert!(is_red(&canvas, 89, 50));
        assert!(is_red(&canvas, 50, 10));
        assert!(is_red(&canvas, 50, 89));
    }

    #[test]
    fn test_clips_offcanvas_box() {
        let mut canvas = blank(50, 50);
        // Circle centered on the top-left canvas corner
        fill_ellipse(&mut canvas, Box2::new(-20, -20, 20, 20), RED);

        assert!(is_red(&canvas, 0, 0));
        assert!(is_red(&canvas, 10, 10));
        assert!(!is_red(&canvas, 20, 20));
    }

    #[test]
    fn test_degenerate_box_is_noop() {
        let mut canvas = blank(20, 20);
        fill_ellipse(&mut canvas, Box2::new(10, 10, 10, 15), RED);
        fill_ellipse(&mut canvas, Box2::new(15, 15, 5, 5), RED);

        assert!(canvas.pixels().all(|p| p == &Rgba([0, 0, 0, 255])));
    }

    #[test]
    fn test_fully_offcanvas_box_is_noop() {
        let mut canvas = blank(20, 20);
        fill_ellipse(&mut canvas, Box2::new(100, 100, 140, 140), RED);
        assert!(canvas.pixels().all(|p| p == &Rgba([0, 0, 0, 255])));
    }
}
