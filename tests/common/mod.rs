//! Synthetic glyphs and pages for the integration tests.

#![allow(dead_code)]

use std::io::Cursor;
use std::path::Path;

use cli_test_dir::TestDir;
use image::{GrayImage, ImageFormat, Luma};

/// Pixel size of one font cell.
pub const SCALE: u32 = 6;

const FONT: [(char, [&str; 7]); 26] = [
    ('A', [".###.", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"]),
    ('B', ["####.", "#...#", "#...#", "####.", "#...#", "#...#", "####."]),
    ('C', [".###.", "#...#", "#....", "#....", "#....", "#...#", ".###."]),
    ('D', ["####.", "#...#", "#...#", "#...#", "#...#", "#...#", "####."]),
    ('E', ["#####", "#....", "#....", "####.", "#....", "#....", "#####"]),
    ('F', ["#####", "#....", "#....", "####.", "#....", "#....", "#...."]),
    ('G', [".###.", "#...#", "#....", "#.###", "#...#", "#...#", ".####"]),
    ('H', ["#...#", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"]),
    ('I', [".###.", "..#..", "..#..", "..#..", "..#..", "..#..", ".###."]),
    ('J', ["..###", "...#.", "...#.", "...#.", "...#.", "#..#.", ".##.."]),
    ('K', ["#...#", "#..#.", "#.#..", "##...", "#.#..", "#..#.", "#...#"]),
    ('L', ["#....", "#....", "#....", "#....", "#....", "#....", "#####"]),
    ('M', ["#...#", "##.##", "#.#.#", "#.#.#", "#...#", "#...#", "#...#"]),
    ('N', ["#...#", "#...#", "##..#", "#.#.#", "#..##", "#...#", "#...#"]),
    ('O', [".###.", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."]),
    ('P', ["####.", "#...#", "#...#", "####.", "#....", "#....", "#...."]),
    ('Q', [".###.", "#...#", "#...#", "#...#", "#.#.#", "#..#.", ".##.#"]),
    ('R', ["####.", "#...#", "#...#", "####.", "#.#..", "#..#.", "#...#"]),
    ('S', [".####", "#....", "#....", ".###.", "....#", "....#", "####."]),
    ('T', ["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#.."]),
    ('U', ["#...#", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."]),
    ('V', ["#...#", "#...#", "#...#", "#...#", "#...#", ".#.#.", "..#.."]),
    ('W', ["#...#", "#...#", "#...#", "#.#.#", "#.#.#", "#.#.#", ".#.#."]),
    ('X', ["#...#", "#...#", ".#.#.", "..#..", ".#.#.", "#...#", "#...#"]),
    ('Y', ["#...#", "#...#", ".#.#.", "..#..", "..#..", "..#..", "..#.."]),
    ('Z', ["#####", "....#", "...#.", "..#..", ".#...", "#....", "#####"]),
];

/// Black-on-white glyph cropped to its ink.
pub fn glyph(letter: char) -> GrayImage {
    let rows = FONT
        .iter()
        .find(|(c, _)| *c == letter)
        .map(|(_, rows)| rows)
        .unwrap_or_else(|| panic!("no glyph for {letter}"));

    let ink_cols: Vec<usize> = (0..5)
        .filter(|&x| rows.iter().any(|r| r.as_bytes()[x] == b'#'))
        .collect();
    let left = ink_cols[0];
    let cols = ink_cols[ink_cols.len() - 1] - left + 1;

    GrayImage::from_fn(cols as u32 * SCALE, 7 * SCALE, |x, y| {
        let cell = rows[(y / SCALE) as usize].as_bytes()[left + (x / SCALE) as usize];
        if cell == b'#' {
            Luma([0])
        } else {
            Luma([255])
        }
    })
}

/// PNG encoding of `img`, for `TestDir::create_file`.
pub fn png(img: &GrayImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("could not encode PNG");
    bytes
}

/// Creates `<dir>/A.png` .. `<dir>/Z.png` inside `testdir`.
pub fn create_font(testdir: &TestDir, dir: &str) {
    for (letter, _) in FONT {
        testdir.create_file(format!("{dir}/{letter}.png"), png(&glyph(letter)));
    }
}

/// Writes `<dir>/A.png` .. `<dir>/Z.png`.
pub fn save_font(dir: &Path) {
    std::fs::create_dir_all(dir).unwrap();
    for (letter, _) in FONT {
        glyph(letter).save(dir.join(format!("{letter}.png"))).unwrap();
    }
}

/// White page with one row of glyphs per entry of `lines`.
pub fn page(lines: &[&str]) -> GrayImage {
    let margin = 20;
    let spacing = 2 * SCALE;
    let line_height = 7 * SCALE;
    let width = margin * 2 + lines.iter().map(|l| l.len() as u32).max().unwrap_or(0) * 8 * SCALE;
    let height = margin * 2 + lines.len() as u32 * (line_height + margin);

    let mut page = GrayImage::from_pixel(width, height, Luma([255]));
    for (row, text) in lines.iter().enumerate() {
        let top = margin + row as u32 * (line_height + margin);
        let mut left = margin;
        for letter in text.chars() {
            let g = glyph(letter);
            image::imageops::overlay(&mut page, &g, left as i64, top as i64);
            left += g.width() + spacing;
        }
    }
    page
}
