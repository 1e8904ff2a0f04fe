//! # Lifka - small image toolkit and street letter recognizer
//!
//! Lifka bundles the image operations behind two command-line programs:
//!
//! - **`lifka`**: image information, grayscale / RGB / black-and-white
//!   conversion and rescaling, saved as PNG
//! - **`street_ocr`**: recognizes capital letters by matching connected
//!   components against a database of prototype glyph images
//!
//! Images are decoded and encoded with the pure Rust `image` crate. Pages
//! are represented as [`Block`] trees; features are `ndarray` vectors built
//! from outer profiles and projections, and classification is a plain
//! nearest-neighbour search.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lifka::{StreetOcr, StreetOcrConfig};
//!
//! let ocr = StreetOcr::new(StreetOcrConfig::default())?;
//! let output = ocr.run("street.png")?;
//!
//! print!("{}", output.text);
//! # Ok::<(), lifka::OcrError>(())
//! ```

mod block;
mod classify;
mod contours;
mod database;
mod error;
mod features;
mod geometry;
mod image_impl;
mod preprocess;
mod segment;
mod stats;
mod street_ocr;
mod timer;
mod types;

// Public API exports
pub use crate::block::Block;
pub use crate::classify::{distance, nearest_neighbor, Classification};
pub use crate::contours::{find_components, Component, Connectivity};
pub use crate::database::{prototype_path, Prototype, PrototypeDatabase};
pub use crate::error::{OcrError, Result};
pub use crate::features::{FeatureExtractor, FeatureSet, FeatureVector, ProfileExtractor, ProjectionExtractor};
pub use crate::geometry::{Direction, Orientation, Rect};
pub use crate::image_impl::{output_path, Image};
pub use crate::preprocess::{binarize, horizontal_projection, mask_to_bw, otsu_threshold, vertical_projection};
pub use crate::segment::{extract_text_lines, line_spans};
pub use crate::stats::{estimate_lines_x_height, strokes_height, strokes_width};
pub use crate::street_ocr::{RecognizedChar, StreetOcr, StreetOcrOutput};
pub use crate::timer::Stopwatch;
pub use crate::types::{LineConfig, ProfileConfig, ProjectionConfig, StreetOcrConfig, CHARACTERS_TREE, LINES_TREE};
