//! Stroke and text line measurements of a document image

use std::collections::BTreeMap;

use image::GrayImage;

use crate::preprocess::{binarize, horizontal_projection, is_ink};
use crate::segment::line_spans;
use crate::types::LineConfig;

/// Most frequent length of horizontal ink runs, 0 when there is no ink.
pub fn strokes_width(gray: &GrayImage) -> u32 {
    let mask = binarize(gray);
    let (w, h) = mask.dimensions();
    let mut runs = RunHistogram::default();
    for y in 0..h {
        runs.scan((0..w).map(|x| is_ink(&mask, x, y)));
    }
    runs.mode()
}

/// Most frequent length of vertical ink runs, 0 when there is no ink.
pub fn strokes_height(gray: &GrayImage) -> u32 {
    let mask = binarize(gray);
    let (w, h) = mask.dimensions();
    let mut runs = RunHistogram::default();
    for x in 0..w {
        runs.scan((0..h).map(|y| is_ink(&mask, x, y)));
    }
    runs.mode()
}

/// Median x-height of the text lines.
///
/// The x-height of a line is its number of rows holding at least half the
/// ink of its densest row, which leaves out ascenders and descenders.
pub fn estimate_lines_x_height(gray: &GrayImage) -> u32 {
    let projection = horizontal_projection(&binarize(gray));
    let mut heights: Vec<u32> = line_spans(&projection, &LineConfig::default())
        .into_iter()
        .map(|(top, bottom)| {
            let rows = &projection[top as usize..bottom as usize];
            let densest = rows.iter().copied().max().unwrap_or(0);
            rows.iter().filter(|&&c| c * 2 >= densest).count() as u32
        })
        .collect();

    if heights.is_empty() {
        return 0;
    }
    heights.sort_unstable();
    heights[(heights.len() - 1) / 2]
}

#[derive(Default)]
struct RunHistogram {
    counts: BTreeMap<u32, u64>,
}

impl RunHistogram {
    fn scan<I: Iterator<Item = bool>>(&mut self, pixels: I) {
        let mut run = 0u32;
        for ink in pixels {
            if ink {
                run += 1;
            } else if run > 0 {
                *self.counts.entry(run).or_default() += 1;
                run = 0;
            }
        }
        if run > 0 {
            *self.counts.entry(run).or_default() += 1;
        }
    }

    /// Shortest of the most frequent run lengths.
    fn mode(&self) -> u32 {
        let mut best = (0u32, 0u64);
        for (&len, &count) in &self.counts {
            if count > best.1 {
                best = (len, count);
            }
        }
        best.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn paint(img: &mut GrayImage, x0: u32, y0: u32, w: u32, h: u32) {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                img.put_pixel(x, y, Luma([0]));
            }
        }
    }

    #[test]
    fn test_strokes_of_bars() {
        let mut img = GrayImage::from_pixel(40, 30, Luma([255]));
        paint(&mut img, 2, 2, 3, 20);
        paint(&mut img, 10, 5, 3, 20);
        assert_eq!(strokes_width(&img), 3);
        assert_eq!(strokes_height(&img), 20);
    }

    #[test]
    fn test_blank_image() {
        let img = GrayImage::from_pixel(10, 10, Luma([255]));
        assert_eq!(strokes_width(&img), 0);
        assert_eq!(strokes_height(&img), 0);
        assert_eq!(estimate_lines_x_height(&img), 0);
    }

    #[test]
    fn test_x_height_ignores_ascenders() {
        let mut img = GrayImage::from_pixel(60, 40, Luma([255]));
        // body of the line
        paint(&mut img, 5, 10, 40, 8);
        // thin ascender
        paint(&mut img, 8, 4, 2, 6);
        assert_eq!(estimate_lines_x_height(&img), 8);
    }
}
