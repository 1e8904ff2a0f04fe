//! Binarization and projections
//!
//! Ink masks are `GrayImage`s where 255 marks ink (dark pixels of the
//! source) and 0 marks background. `mask_to_bw` turns a mask back into a
//! printable black-on-white image.

use image::{GrayImage, Luma};

/// Fallback threshold for images with a single gray level.
const FLAT_THRESHOLD: u8 = 127;

pub const INK: u8 = 255;

/// Otsu's threshold: the gray level maximising the between-class variance.
/// Pixels at or below the returned level belong to the dark class.
pub fn otsu_threshold(gray: &GrayImage) -> u8 {
    let mut hist = [0u64; 256];
    for p in gray.pixels() {
        hist[p[0] as usize] += 1;
    }

    let total: u64 = hist.iter().sum();
    let sum_all: f64 = hist
        .iter()
        .enumerate()
        .map(|(i, &h)| i as f64 * h as f64)
        .sum();

    let mut w0 = 0u64;
    let mut sum0 = 0f64;
    let mut best_var = 0f64;
    let mut threshold = FLAT_THRESHOLD;

    for (t, &h) in hist.iter().enumerate() {
        w0 += h;
        sum0 += t as f64 * h as f64;
        if w0 == 0 {
            continue;
        }
        let w1 = total - w0;
        if w1 == 0 {
            break;
        }
        let m0 = sum0 / w0 as f64;
        let m1 = (sum_all - sum0) / w1 as f64;
        let var = w0 as f64 * w1 as f64 * (m0 - m1) * (m0 - m1);
        if var > best_var {
            best_var = var;
            threshold = t as u8;
        }
    }

    threshold
}

/// Ink mask of a grayscale image using a fixed threshold.
pub fn threshold_mask(gray: &GrayImage, threshold: u8) -> GrayImage {
    let (w, h) = gray.dimensions();
    GrayImage::from_fn(w, h, |x, y| {
        if gray.get_pixel(x, y)[0] <= threshold {
            Luma([INK])
        } else {
            Luma([0])
        }
    })
}

/// Ink mask of a grayscale image using Otsu's threshold.
pub fn binarize(gray: &GrayImage) -> GrayImage {
    let threshold = otsu_threshold(gray);
    log::debug!("otsu threshold {}", threshold);
    threshold_mask(gray, threshold)
}

/// Black ink on white background.
pub fn mask_to_bw(mask: &GrayImage) -> GrayImage {
    let (w, h) = mask.dimensions();
    GrayImage::from_fn(w, h, |x, y| {
        if is_ink(mask, x, y) {
            Luma([0])
        } else {
            Luma([255])
        }
    })
}

#[inline]
pub fn is_ink(mask: &GrayImage, x: u32, y: u32) -> bool {
    mask.get_pixel(x, y)[0] > 127
}

/// Ink pixel count of every row.
pub fn horizontal_projection(mask: &GrayImage) -> Vec<u32> {
    let (w, h) = mask.dimensions();
    (0..h)
        .map(|y| (0..w).filter(|&x| is_ink(mask, x, y)).count() as u32)
        .collect()
}

/// Ink pixel count of every column.
pub fn vertical_projection(mask: &GrayImage) -> Vec<u32> {
    let (w, h) = mask.dimensions();
    (0..w)
        .map(|x| (0..h).filter(|&y| is_ink(mask, x, y)).count() as u32)
        .collect()
}
