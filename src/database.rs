//! Labelled reference vectors for nearest-neighbour recognition

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use crate::block::Block;
use crate::classify::{nearest_neighbor, Classification};
use crate::error::{OcrError, Result};
use crate::features::{FeatureSet, FeatureVector};
use crate::image_impl::Image;

#[derive(Debug, Clone)]
pub struct Prototype {
    pub label: char,
    pub features: FeatureVector,
}

/// Ordered prototypes. The class id of a classification is the index of the
/// matching prototype, and its label is stored next to it.
#[derive(Debug, Clone, Default)]
pub struct PrototypeDatabase {
    prototypes: Vec<Prototype>,
}

impl PrototypeDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds one prototype per character of `alphabet` from
    /// `<dir>/<char>.png`. Fails on the first image that cannot be opened.
    pub fn load_font_dir<P: AsRef<Path>>(
        dir: P,
        alphabet: RangeInclusive<char>,
        features: &FeatureSet,
    ) -> Result<Self> {
        let dir = dir.as_ref();
        let mut db = Self::new();
        for label in alphabet.clone() {
            let image = Image::open(prototype_path(dir, label))?;
            let block = Block::new(image);
            db.push(label, features.extract(&block));
        }
        db.check_alphabet(alphabet)?;
        log::debug!("loaded {} prototypes from {}", db.len(), dir.display());
        Ok(db)
    }

    pub fn push(&mut self, label: char, features: FeatureVector) {
        self.prototypes.push(Prototype { label, features });
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    pub fn label(&self, class_id: usize) -> Option<char> {
        self.prototypes.get(class_id).map(|p| p.label)
    }

    /// Verifies one prototype per character of `alphabet`, in order.
    pub fn check_alphabet(&self, alphabet: RangeInclusive<char>) -> Result<()> {
        let expected: Vec<char> = alphabet.collect();
        if self.prototypes.len() != expected.len() {
            return Err(OcrError::InvalidDatabase(format!(
                "expected {} prototypes, found {}",
                expected.len(),
                self.prototypes.len()
            )));
        }
        for (class_id, (p, &want)) in self.prototypes.iter().zip(&expected).enumerate() {
            if p.label != want {
                return Err(OcrError::InvalidDatabase(format!(
                    "class {} is labelled '{}', expected '{}'",
                    class_id, p.label, want
                )));
            }
        }
        Ok(())
    }

    /// Closest prototype to `query` and its label.
    pub fn classify(&self, query: &FeatureVector) -> Result<(char, Classification)> {
        let res = nearest_neighbor(query, self.prototypes.iter().map(|p| &p.features))?;
        let label = self.prototypes[res.class_id].label;
        Ok((label, res))
    }
}

pub fn prototype_path(dir: &Path, label: char) -> PathBuf {
    dir.join(format!("{label}.png"))
}
