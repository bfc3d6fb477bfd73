//! Camera raw (NEF) decoding.
//!
//! Raw files carry a single-channel Bayer mosaic straight off the
//! sensor. Turning that into something watermarkable takes a small
//! develop pipeline:
//!
//! 1. subtract the per-channel black level and normalize to white level
//! 2. apply the camera white balance recorded in the file
//! 3. demosaic the Bayer mosaic to RGB (bilinear interpolation)
//! 4. gamma-encode to 8-bit
//!
//! Bilinear demosaicing trades edge quality for speed, which is the
//! right call here: the output gets a logo stamped on it, not a print.

use crate::{IoError, IoResult};
use image::{Rgba, RgbaImage};
use rawloader::RawImageData;
use std::path::Path;
use tracing::debug;

/// Decodes a camera raw file into an 8-bit RGBA image.
pub fn read_raw(path: &Path) -> IoResult<RgbaImage> {
    let raw = rawloader::decode_file(path).map_err(|e| IoError::decode(path, e))?;

    let data = match &raw.data {
        RawImageData::Integer(data) => data,
        RawImageData::Float(_) => {
            return Err(IoError::decode(path, "float raw data is not supported"));
        }
    };
    if data.len() < raw.width * raw.height {
        return Err(IoError::decode(path, "raw data shorter than declared size"));
    }

    // Active sensor area; the masked borders are calibration pixels
    let (top, right, bottom, left) = (raw.crops[0], raw.crops[1], raw.crops[2], raw.crops[3]);
    let width = raw.width.saturating_sub(left + right);
    let height = raw.height.saturating_sub(top + bottom);
    if width == 0 || height == 0 {
        return Err(IoError::decode(path, "empty active sensor area"));
    }

    debug!(
        "{}: {} {} {}x{} active area",
        path.display(),
        raw.make,
        raw.model,
        width,
        height
    );

    let wb = normalized_wb(raw.wb_coeffs);

    // Normalize the mosaic to [0, 1] with white balance applied
    let mut plane = vec![0.0f32; width * height];
    for y in 0..height {
        for x in 0..width {
            let (row, col) = (y + top, x + left);
            let channel = raw.cfa.color_at(row, col);
            let black = raw.blacklevels[channel] as f32;
            let white = raw.whitelevels[channel] as f32;
            let range = (white - black).max(1.0);

            let value = data[row * raw.width + col] as f32;
            let normalized = ((value - black) / range).clamp(0.0, 1.0);
            plane[y * width + x] = (normalized * wb[channel.min(3)]).min(1.0);
        }
    }

    let rgb = demosaic_bilinear(&plane, width, height, |x, y| {
        fold_green(raw.cfa.color_at(y + top, x + left))
    });

    let mut out = RgbaImage::new(width as u32, height as u32);
    for (i, pixel) in rgb.iter().enumerate() {
        let (x, y) = ((i % width) as u32, (i / width) as u32);
        out.put_pixel(
            x,
            y,
            Rgba([
                gamma_encode(pixel[0]),
                gamma_encode(pixel[1]),
                gamma_encode(pixel[2]),
                255,
            ]),
        );
    }
    Ok(out)
}

/// White balance coefficients scaled so green is 1.0.
///
/// Files without usable coefficients (zero or NaN) fall back to neutral.
fn normalized_wb(coeffs: [f32; 4]) -> [f32; 4] {
    let green = coeffs[1];
    if !green.is_finite() || green <= 0.0 {
        return [1.0; 4];
    }
    let mut wb = [1.0; 4];
    for (out, c) in wb.iter_mut().zip(coeffs) {
        if c.is_finite() && c > 0.0 {
            *out = c / green;
        }
    }
    // The second green site shares the first green's coefficient
    wb[3] = wb[1];
    wb
}

/// Collapses the second green sensor site onto the green channel.
#[inline]
fn fold_green(cfa_color: usize) -> usize {
    if cfa_color == 3 { 1 } else { cfa_color }
}

/// Bilinear demosaic of a single-channel mosaic plane.
///
/// `color_at(x, y)` gives the channel (0=R, 1=G, 2=B) recorded at a
/// site. Each missing channel is the average of the 8-neighborhood
/// sites that record it, which reduces to the classic axis/diagonal
/// interpolation on a Bayer grid.
fn demosaic_bilinear(
    plane: &[f32],
    width: usize,
    height: usize,
    color_at: impl Fn(usize, usize) -> usize,
) -> Vec<[f32; 3]> {
    let mut out = vec![[0.0f32; 3]; width * height];

    for y in 0..height {
        for x in 0..width {
            let own = color_at(x, y);
            let mut rgb = [0.0f32; 3];
            rgb[own] = plane[y * width + x];

            let mut sums = [0.0f32; 3];
            let mut counts = [0u32; 3];
            for dy in -1i64..=1 {
                for dx in -1i64..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let nx = x as i64 + dx;
                    let ny = y as i64 + dy;
                    if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                        continue;
                    }
                    let (nx, ny) = (nx as usize, ny as usize);
                    let ncolor = color_at(nx, ny);
                    sums[ncolor] += plane[ny * width + nx];
                    counts[ncolor] += 1;
                }
            }

            for c in 0..3 {
                if c != own && counts[c] > 0 {
                    rgb[c] = sums[c] / counts[c] as f32;
                }
            }
            out[y * width + x] = rgb;
        }
    }

    out
}

/// Encodes a linear [0, 1] value with a 2.2 display gamma.
#[inline]
fn gamma_encode(linear: f32) -> u8 {
    (linear.clamp(0.0, 1.0).powf(1.0 / 2.2) * 255.0).round() as u8
}
