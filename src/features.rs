//! Shape descriptors for character blocks
//!
//! Extractors work on the ink mask of a block and produce a fixed number of
//! values regardless of the block size: every per-row or per-column signal is
//! averaged down to `size` bins and scaled into `[0, max]`. A [`FeatureSet`]
//! concatenates the output of its extractors into one [`FeatureVector`].

use image::GrayImage;
use ndarray::Array1;

use crate::block::Block;
use crate::geometry::{Direction, Orientation};
use crate::preprocess::{horizontal_projection, is_ink, vertical_projection};

pub type FeatureVector = Array1<f32>;

pub trait FeatureExtractor: Send + Sync {
    /// Number of values produced by [`FeatureExtractor::extract`].
    fn dimension(&self) -> usize;

    fn extract(&self, mask: &GrayImage) -> Vec<f32>;
}

/// Outer profiles: for every row (left/right) or column (top/bottom), the
/// distance from the side of the block to the first ink pixel.
#[derive(Debug, Clone)]
pub struct ProfileExtractor {
    pub directions: Vec<Direction>,
    pub size: usize,
    pub max: f32,
}

impl ProfileExtractor {
    pub fn new(directions: &[Direction], size: usize, max: f32) -> Self {
        Self {
            directions: directions.to_vec(),
            size,
            max,
        }
    }

    fn profile(mask: &GrayImage, direction: Direction) -> Vec<f32> {
        let (w, h) = mask.dimensions();
        match direction {
            Direction::Left => (0..h)
                .map(|y| (0..w).position(|x| is_ink(mask, x, y)).unwrap_or(w as usize) as f32 / w as f32)
                .collect(),
            Direction::Right => (0..h)
                .map(|y| (0..w).rev().position(|x| is_ink(mask, x, y)).unwrap_or(w as usize) as f32 / w as f32)
                .collect(),
            Direction::Top => (0..w)
                .map(|x| (0..h).position(|y| is_ink(mask, x, y)).unwrap_or(h as usize) as f32 / h as f32)
                .collect(),
            Direction::Bottom => (0..w)
                .map(|x| (0..h).rev().position(|y| is_ink(mask, x, y)).unwrap_or(h as usize) as f32 / h as f32)
                .collect(),
        }
    }
}

impl FeatureExtractor for ProfileExtractor {
    fn dimension(&self) -> usize {
        self.directions.len() * self.size
    }

    fn extract(&self, mask: &GrayImage) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.dimension());
        for &direction in &self.directions {
            let profile = Self::profile(mask, direction);
            out.extend(resample(&profile, self.size).into_iter().map(|v| v * self.max));
        }
        out
    }
}

/// Ink density of every row (horizontal) or column (vertical).
#[derive(Debug, Clone)]
pub struct ProjectionExtractor {
    pub orientations: Vec<Orientation>,
    pub size: usize,
    pub max: f32,
}

impl ProjectionExtractor {
    pub fn new(orientations: &[Orientation], size: usize, max: f32) -> Self {
        Self {
            orientations: orientations.to_vec(),
            size,
            max,
        }
    }
}

impl FeatureExtractor for ProjectionExtractor {
    fn dimension(&self) -> usize {
        self.orientations.len() * self.size
    }

    fn extract(&self, mask: &GrayImage) -> Vec<f32> {
        let (w, h) = mask.dimensions();
        let mut out = Vec::with_capacity(self.dimension());
        for &orientation in &self.orientations {
            let (counts, span) = match orientation {
                Orientation::Horizontal => (horizontal_projection(mask), w),
                Orientation::Vertical => (vertical_projection(mask), h),
            };
            let density: Vec<f32> = counts
                .iter()
                .map(|&c| if span == 0 { 0.0 } else { c as f32 / span as f32 })
                .collect();
            out.extend(resample(&density, self.size).into_iter().map(|v| v * self.max));
        }
        out
    }
}

/// Ordered collection of extractors.
#[derive(Default)]
pub struct FeatureSet {
    extractors: Vec<Box<dyn FeatureExtractor>>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back<E: FeatureExtractor + 'static>(&mut self, extractor: E) {
        self.extractors.push(Box::new(extractor));
    }

    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.extractors.iter().map(|e| e.dimension()).sum()
    }

    pub fn extract(&self, block: &Block) -> FeatureVector {
        self.extract_mask(&block.ink_mask())
    }

    pub fn extract_mask(&self, mask: &GrayImage) -> FeatureVector {
        let mut values = Vec::with_capacity(self.dimension());
        for extractor in &self.extractors {
            values.extend(extractor.extract(mask));
        }
        Array1::from_vec(values)
    }
}

/// Averages `values` down (or stretches them up) to exactly `size` bins.
pub fn resample(values: &[f32], size: usize) -> Vec<f32> {
    let n = values.len();
    if n == 0 {
        return vec![0.0; size];
    }
    (0..size)
        .map(|i| {
            let start = (i * n / size).min(n - 1);
            let end = ((i + 1) * n / size).clamp(start + 1, n);
            let bin = &values[start..end];
            bin.iter().sum::<f32>() / bin.len() as f32
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    const ALL_SIDES: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Top, Direction::Bottom];

    /// 10x10 mask with ink in the left half only.
    fn left_half() -> GrayImage {
        GrayImage::from_fn(10, 10, |x, _| if x < 5 { Luma([255]) } else { Luma([0]) })
    }

    #[test]
    fn test_resample() {
        assert_eq!(resample(&[1.0, 3.0, 5.0, 7.0], 2), vec![2.0, 6.0]);
        assert_eq!(resample(&[4.0], 3), vec![4.0, 4.0, 4.0]);
        assert_eq!(resample(&[], 2), vec![0.0, 0.0]);
        assert_eq!(resample(&[1.0, 2.0, 3.0], 3), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_profile_values() {
        let extractor = ProfileExtractor::new(&ALL_SIDES, 5, 1000.0);
        let values = extractor.extract(&left_half());
        assert_eq!(values.len(), extractor.dimension());
        assert_eq!(values.len(), 20);
        // left profile touches the border, right profile sits halfway
        assert!(values[0..5].iter().all(|&v| v == 0.0));
        assert!(values[5..10].iter().all(|&v| (v - 500.0).abs() < 1e-3));
        // columns without ink report the full height
        assert_eq!(values[10], 0.0);
        assert_eq!(values[19], 1000.0);
    }

    #[test]
    fn test_projection_values() {
        let extractor = ProjectionExtractor::new(&[Orientation::Horizontal, Orientation::Vertical], 10, 100.0);
        let values = extractor.extract(&left_half());
        assert_eq!(values.len(), 20);
        assert!(values[0..10].iter().all(|&v| (v - 50.0).abs() < 1e-3));
        assert_eq!(&values[10..15], &[100.0; 5]);
        assert_eq!(&values[15..20], &[0.0; 5]);
    }

    #[test]
    fn test_feature_set_concatenates() {
        let mut set = FeatureSet::new();
        set.push_back(ProfileExtractor::new(&ALL_SIDES, 10, 1000.0));
        set.push_back(ProjectionExtractor::new(&[Orientation::Horizontal, Orientation::Vertical], 10, 100.0));
        assert_eq!(set.len(), 2);
        assert_eq!(set.dimension(), 60);

        let v = set.extract_mask(&left_half());
        assert_eq!(v.len(), 60);
        assert!(v.iter().all(|&x| (0.0..=1000.0).contains(&x)));
    }
}
