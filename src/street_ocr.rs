use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::database::PrototypeDatabase;
use crate::error::Result;
use crate::features::{FeatureSet, ProfileExtractor, ProjectionExtractor};
use crate::geometry::{Direction, Rect};
use crate::image_impl::Image;
use crate::segment::extract_text_lines;
use crate::types::{StreetOcrConfig, CHARACTERS_TREE, LINES_TREE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedChar {
    pub label: char,
    pub class_id: usize,
    pub distance: f32,
    #[serde(flatten)]
    pub bounds: Rect,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreetOcrOutput {
    /// Recognized letters, one `'\n'`-terminated row per text line.
    pub text: String,
    pub lines: Vec<Vec<RecognizedChar>>,
    pub elapse: f64,
}

/// Letter recognizer over a prototype database.
pub struct StreetOcr {
    pub config: StreetOcrConfig,
    pub features: FeatureSet,
    pub database: PrototypeDatabase,
}

impl StreetOcr {
    /// Builds the feature set and loads one prototype per letter from the
    /// configured font directory.
    pub fn new(config: StreetOcrConfig) -> Result<Self> {
        let features = Self::feature_set(&config);
        let database = PrototypeDatabase::load_font_dir(&config.font_dir, config.alphabet.clone(), &features)?;
        log::info!("loaded {} prototypes from {}", database.len(), config.font_dir.display());
        Ok(Self {
            config,
            features,
            database,
        })
    }

    pub fn from_database(config: StreetOcrConfig, database: PrototypeDatabase) -> Self {
        let features = Self::feature_set(&config);
        Self {
            config,
            features,
            database,
        }
    }

    /// Four outer profiles followed by both projections.
    pub fn feature_set(config: &StreetOcrConfig) -> FeatureSet {
        let mut set = FeatureSet::new();
        set.push_back(ProfileExtractor::new(
            &config.profile.directions,
            config.profile.size,
            config.profile.max,
        ));
        set.push_back(ProjectionExtractor::new(
            &config.projection.orientations,
            config.projection.size,
            config.projection.max,
        ));
        set
    }

    /// Run OCR on an image file (convenience wrapper for run_on_image)
    pub fn run<P: AsRef<Path>>(&self, image_path: P) -> Result<StreetOcrOutput> {
        let image = Image::open(image_path)?;
        self.run_on_image(image)
    }

    pub fn run_on_image(&self, image: Image) -> Result<StreetOcrOutput> {
        let mut page = Block::new(image);
        self.run_on_block(&mut page)
    }

    /// Segments `page` into lines and characters (kept in its trees) and
    /// classifies every character left to right.
    pub fn run_on_block(&self, page: &mut Block) -> Result<StreetOcrOutput> {
        self.run_on_block_with(page, |_| {})
    }

    /// Like [`run_on_block`](Self::run_on_block), calling `on_char` as soon
    /// as each character is classified.
    pub fn run_on_block_with<F>(&self, page: &mut Block, mut on_char: F) -> Result<StreetOcrOutput>
    where
        F: FnMut(&RecognizedChar),
    {
        let start = Instant::now();
        let cfg = &self.config;

        extract_text_lines(page, LINES_TREE, &cfg.lines);

        let mut output = StreetOcrOutput::default();
        for line in page.children_mut(LINES_TREE) {
            line.extract_cc(CHARACTERS_TREE, cfg.connectivity);
            line.filter_min_or(CHARACTERS_TREE, cfg.min_char_width, cfg.min_char_height);
            line.sort_tree(CHARACTERS_TREE, Direction::Left);

            let mut chars = Vec::with_capacity(line.nb_children(CHARACTERS_TREE));
            for character in line.children(CHARACTERS_TREE) {
                let features = self.features.extract(character);
                let (label, res) = self.database.classify(&features)?;
                log::debug!("class {} -> '{}' (distance {:.3})", res.class_id, label, res.distance);

                let recognized = RecognizedChar {
                    label,
                    class_id: res.class_id,
                    distance: res.distance,
                    bounds: character.rect(),
                };
                on_char(&recognized);
                output.text.push(label);
                chars.push(recognized);
            }
            output.text.push('\n');
            output.lines.push(chars);
        }

        output.elapse = start.elapsed().as_secs_f64();
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn prototype(gray: GrayImage, set: &FeatureSet) -> crate::features::FeatureVector {
        set.extract(&Block::new(Image::from_gray(gray)))
    }

    fn database(ocr_cfg: &StreetOcrConfig) -> PrototypeDatabase {
        let set = StreetOcr::feature_set(ocr_cfg);
        let mut db = PrototypeDatabase::new();
        // "I" is a solid bar, "L" a bar with a foot
        db.push('I', prototype(GrayImage::from_pixel(4, 20, Luma([0])), &set));
        let l = GrayImage::from_fn(12, 20, |x, y| if x < 4 || y >= 16 { Luma([0]) } else { Luma([255]) });
        db.push('L', prototype(l, &set));
        db
    }

    #[test]
    fn test_recognize_two_lines() {
        let cfg = StreetOcrConfig::default();
        let db = database(&cfg);
        let ocr = StreetOcr::from_database(cfg, db);

        let mut page = GrayImage::from_pixel(80, 70, Luma([255]));
        let mut paint = |x0: u32, y0: u32, w: u32, h: u32| {
            for y in y0..y0 + h {
                for x in x0..x0 + w {
                    page.put_pixel(x, y, Luma([0]));
                }
            }
        };
        // line 1: L then I
        paint(10, 5, 4, 20);
        paint(10, 21, 12, 4);
        paint(40, 5, 4, 20);
        // line 2: I
        paint(20, 40, 4, 20);
        // speck filtered out as too small
        paint(60, 45, 1, 1);

        let out = ocr.run_on_image(Image::from_gray(page)).unwrap();
        assert_eq!(out.text, "LI\nI\n");
        assert_eq!(out.lines.len(), 2);
        assert_eq!(out.lines[0][0].bounds, Rect::new(10, 5, 12, 20));
        assert_eq!(out.lines[0][1].class_id, 0);
        assert!(out.lines[1][0].distance < 1e-3);
    }

    #[test]
    fn test_characters_reported_in_reading_order() {
        let cfg = StreetOcrConfig::default();
        let db = database(&cfg);
        let ocr = StreetOcr::from_database(cfg, db);

        let mut page = GrayImage::from_pixel(60, 30, Luma([255]));
        for (x0, w) in [(30, 4), (10, 4)] {
            for y in 5..25 {
                for x in x0..x0 + w {
                    page.put_pixel(x, y, Luma([0]));
                }
            }
        }

        let mut seen = Vec::new();
        let mut block = Block::new(Image::from_gray(page));
        let out = ocr
            .run_on_block_with(&mut block, |c| seen.push((c.label, c.bounds.x)))
            .unwrap();
        assert_eq!(seen, vec![('I', 10), ('I', 30)]);
        assert_eq!(out.text, "II\n");
        assert_eq!(block.nb_children(LINES_TREE), 1);
    }

    #[test]
    fn test_blank_page() {
        let cfg = StreetOcrConfig::default();
        let db = database(&cfg);
        let ocr = StreetOcr::from_database(cfg, db);
        let out = ocr.run_on_image(Image::from_gray(GrayImage::from_pixel(30, 30, Luma([255])))).unwrap();
        assert!(out.text.is_empty());
        assert!(out.lines.is_empty());
    }
}
