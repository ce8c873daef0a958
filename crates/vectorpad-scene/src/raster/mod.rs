//! Pixel-buffer utilities.
//!
//! Pure functions over RGBA rasters. The editing core only reaches for
//! [`auto_crop`] when placing an image; the rest is kept for tools that
//! work on bitmaps directly.

use image::{imageops, Rgba as Pixel, RgbaImage};
use tracing::debug;
use vectorpad_core::Rgba;

mod channel;

pub use channel::{rotate_right_index, CompressedChannel};

const WHITE: Pixel<u8> = Pixel([255, 255, 255, 255]);
const BLACK: Pixel<u8> = Pixel([0, 0, 0, 255]);

/// Row-major index of `(x, y)` in a buffer `width` pixels wide.
pub fn pos_to_index(x: usize, y: usize, width: usize) -> usize {
    x + y * width
}

pub fn index_to_pos(index: usize, width: usize) -> (usize, usize) {
    (index % width, index / width)
}

/// Cells visited walking from `p0` to `p1`, as buffer indices.
///
/// The walk steps once per column and advances the row on every step, so
/// it only traces true Bresenham lines for 45 degree slopes. Cells outside
/// the `width` x `height` buffer are dropped.
pub fn bresenham_line(width: usize, height: usize, p0: (i64, i64), p1: (i64, i64)) -> Vec<usize> {
    let (x0, y0) = p0;
    let (x1, y1) = p1;
    let step_x = if x1 - x0 > 0 { 1 } else { -1 };
    let step_y = if y1 - y0 > 0 { 1 } else { -1 };

    let mut cells = vec![(x0, y0)];
    let (mut cx, mut cy) = (x0, y0);
    while cx != x1 {
        cy += step_y;
        cells.push((cy, cx));
        cx += step_x;
    }
    cells.push((x1, y1));

    let (w, max) = (width as i64, (width * height) as i64);
    cells
        .into_iter()
        .map(|(x, y)| x + y * w)
        .filter(|i| (0..max).contains(i))
        .map(|i| i as usize)
        .collect()
}

fn channel_sum(p: &Pixel<u8>) -> u32 {
    p.0[0] as u32 + p.0[1] as u32 + p.0[2] as u32
}

/// Averages the colour channels into an opaque grey.
pub fn grayscale(img: &RgbaImage) -> RgbaImage {
    let mut out = img.clone();
    for p in out.pixels_mut() {
        let g = (channel_sum(p) / 3) as u8;
        *p = Pixel([g, g, g, 255]);
    }
    out
}

/// Black and white threshold against the mean grey level.
///
/// A pixel turns white when its summed channels exceed the floored mean
/// grey, otherwise black. Both outputs are opaque.
pub fn binarize(img: &RgbaImage) -> RgbaImage {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return img.clone();
    }
    let total: f64 = img.pixels().map(|p| channel_sum(p) as f64 / 3.0).sum();
    let mean = (total / w as f64 / h as f64).floor() as u32;
    debug!("binarize {}x{} around mean grey {}", w, h, mean);

    let mut out = img.clone();
    for p in out.pixels_mut() {
        *p = if channel_sum(p) > mean { WHITE } else { BLACK };
    }
    out
}

/// Offset and extent of the non-background pixels.
///
/// `width` and `height` are the distance between the outermost content
/// pixels, so a single pixel has zero extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

pub fn content_bounds(img: &RgbaImage, background: Rgba) -> Option<ContentBounds> {
    let bg = Pixel(background.to_array());
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, p) in img.enumerate_pixels() {
        if *p == bg {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    bounds.map(|(x0, y0, x1, y1)| ContentBounds {
        x: x0,
        y: y0,
        width: x1 - x0,
        height: y1 - y0,
    })
}

/// Copies out the content region; `None` when everything is background.
pub fn auto_crop(img: &RgbaImage, background: Rgba) -> Option<RgbaImage> {
    let b = content_bounds(img, background)?;
    Some(imageops::crop_imm(img, b.x, b.y, b.width + 1, b.height + 1).to_image())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        assert_eq!(pos_to_index(2, 3, 5), 17);
        assert_eq!(index_to_pos(17, 5), (2, 3));
    }

    #[test]
    fn test_auto_crop_single_pixel() {
        let mut img = RgbaImage::new(4, 4);
        img.put_pixel(2, 1, Pixel([9, 9, 9, 255]));
        let cropped = auto_crop(&img, Rgba::TRANSPARENT).unwrap();
        assert_eq!(cropped.dimensions(), (1, 1));
        assert_eq!(cropped.get_pixel(0, 0).0, [9, 9, 9, 255]);
    }

    #[test]
    fn test_binarize_empty_image() {
        assert_eq!(binarize(&RgbaImage::new(0, 0)).dimensions(), (0, 0));
    }
}
