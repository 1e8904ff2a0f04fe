// Connected component labeling on ink masks

use image::GrayImage;
use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::preprocess::is_ink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Connectivity {
    /// Up, down, left, right
    FourWay,
    /// Includes diagonals
    #[default]
    EightWay,
}

impl Connectivity {
    fn offsets(self) -> &'static [(i64, i64)] {
        const FOUR: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        const EIGHT: [(i64, i64); 8] = [
            (1, 0),
            (-1, 0),
            (0, 1),
            (0, -1),
            (1, 1),
            (1, -1),
            (-1, 1),
            (-1, -1),
        ];
        match self {
            Connectivity::FourWay => &FOUR,
            Connectivity::EightWay => &EIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Labels start at 1 and follow raster order of each component's first pixel.
    pub label: u32,
    pub pixel_count: u32,
    pub bounds: Rect,
}

/// Finds the connected ink regions of a mask.
pub fn find_components(mask: &GrayImage, connectivity: Connectivity) -> Vec<Component> {
    let (width, height) = mask.dimensions();
    let mut labels = vec![0u32; width as usize * height as usize];
    let mut components = Vec::new();
    let mut next_label = 1u32;

    for y in 0..height {
        for x in 0..width {
            let idx = y as usize * width as usize + x as usize;
            if labels[idx] == 0 && is_ink(mask, x, y) {
                let component = flood_fill_label(mask, &mut labels, x, y, next_label, connectivity);
                components.push(component);
                next_label += 1;
            }
        }
    }

    log::debug!("found {} components", components.len());
    components
}

/// Labels every ink pixel reachable from `(start_x, start_y)`.
fn flood_fill_label(
    mask: &GrayImage,
    labels: &mut [u32],
    start_x: u32,
    start_y: u32,
    label: u32,
    connectivity: Connectivity,
) -> Component {
    let (width, height) = mask.dimensions();
    let (w, h) = (width as i64, height as i64);

    let mut stack = vec![(start_x as i64, start_y as i64)];
    let mut pixel_count = 0u32;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (start_x, start_y, start_x, start_y);

    while let Some((x, y)) = stack.pop() {
        if x < 0 || x >= w || y < 0 || y >= h {
            continue;
        }

        let (ux, uy) = (x as u32, y as u32);
        let idx = uy as usize * width as usize + ux as usize;
        if labels[idx] != 0 || !is_ink(mask, ux, uy) {
            continue;
        }

        labels[idx] = label;
        pixel_count += 1;
        min_x = min_x.min(ux);
        max_x = max_x.max(ux);
        min_y = min_y.min(uy);
        max_y = max_y.max(uy);

        for (dx, dy) in connectivity.offsets() {
            stack.push((x + dx, y + dy));
        }
    }

    Component {
        label,
        pixel_count,
        bounds: Rect::from_corners(min_x, min_y, max_x, max_y),
    }
}
