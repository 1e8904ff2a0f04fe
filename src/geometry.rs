use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle spanning the inclusive corners `(x0, y0)` and `(x1, y1)`.
    pub fn from_corners(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self::new(x0, y0, x1 - x0 + 1, y1 - y0 + 1)
    }

    /// Exclusive right edge.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Moves a rectangle expressed relative to `origin` into `origin`'s frame.
    pub fn offset_by(&self, origin: &Rect) -> Rect {
        Rect::new(self.x + origin.x, self.y + origin.y, self.width, self.height)
    }
}

/// Side of a shape, used by profile extraction and tree sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Orders rectangles starting from the given side: `Left` sorts left to
/// right, `Bottom` sorts bottom to top, and so on. Ties fall back to the
/// perpendicular axis so the order is total.
pub fn compare_from(direction: Direction, a: &Rect, b: &Rect) -> Ordering {
    match direction {
        Direction::Left => a.x.cmp(&b.x).then(a.y.cmp(&b.y)),
        Direction::Right => b.right().cmp(&a.right()).then(a.y.cmp(&b.y)),
        Direction::Top => a.y.cmp(&b.y).then(a.x.cmp(&b.x)),
        Direction::Bottom => b.bottom().cmp(&a.bottom()).then(a.x.cmp(&b.x)),
    }
}

/// True when a rectangle survives a "min-or" filter: it is rejected when its
/// width is below `min_width` or its height is below `min_height`.
pub fn passes_min_or(rect: &Rect, min_width: u32, min_height: u32) -> bool {
    rect.width >= min_width && rect.height >= min_height
}
