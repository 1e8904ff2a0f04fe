use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::contours::Connectivity;
use crate::geometry::{Direction, Orientation};

pub const LINES_TREE: &str = "Lines";
pub const CHARACTERS_TREE: &str = "Characters";

#[derive(Clone, Debug)]
pub struct LineConfig {
    /// Rows with at most this many ink pixels count as blank.
    pub min_ink: u32,
    /// Blank rows tolerated inside one line.
    pub max_gap: u32,
    pub min_height: u32,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            min_ink: 0,
            max_gap: 1,
            min_height: 2,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ProfileConfig {
    pub directions: Vec<Direction>,
    pub size: usize,
    pub max: f32,
}

#[derive(Clone, Debug)]
pub struct ProjectionConfig {
    pub orientations: Vec<Orientation>,
    pub size: usize,
    pub max: f32,
}

#[derive(Clone, Debug)]
pub struct StreetOcrConfig {
    pub font_dir: PathBuf,
    pub alphabet: RangeInclusive<char>,
    pub profile: ProfileConfig,
    pub projection: ProjectionConfig,
    pub lines: LineConfig,
    pub connectivity: Connectivity,
    pub min_char_width: u32,
    pub min_char_height: u32,
}

impl Default for StreetOcrConfig {
    fn default() -> Self {
        Self {
            font_dir: PathBuf::from("street/font"),
            alphabet: 'A'..='Z',
            profile: ProfileConfig {
                directions: vec![Direction::Left, Direction::Right, Direction::Top, Direction::Bottom],
                size: 10,
                max: 1000.0,
            },
            projection: ProjectionConfig {
                orientations: vec![Orientation::Horizontal, Orientation::Vertical],
                size: 10,
                max: 100.0,
            },
            lines: LineConfig::default(),
            connectivity: Connectivity::EightWay,
            min_char_width: 2,
            min_char_height: 2,
        }
    }
}

impl StreetOcrConfig {
    pub fn with_font_dir(font_dir: PathBuf) -> Self {
        Self {
            font_dir,
            ..Self::default()
        }
    }
}
