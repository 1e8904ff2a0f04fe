use serde::{Deserialize, Serialize};

use crate::error::{OcrError, Result};
use crate::features::FeatureVector;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Index of the closest reference vector.
    pub class_id: usize,
    pub distance: f32,
}

/// Euclidean distance between two feature vectors of the same length.
pub fn distance(a: &FeatureVector, b: &FeatureVector) -> Result<f32> {
    if a.len() != b.len() {
        return Err(OcrError::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok((a - b).mapv(|d| d * d).sum().sqrt())
}

/// Nearest neighbour of `query` among `references`. The first of several
/// equally distant references wins.
pub fn nearest_neighbor<'a, I>(query: &FeatureVector, references: I) -> Result<Classification>
where
    I: IntoIterator<Item = &'a FeatureVector>,
{
    let mut best: Option<Classification> = None;
    for (class_id, reference) in references.into_iter().enumerate() {
        let d = distance(reference, query)?;
        if best.map_or(true, |b| d < b.distance) {
            best = Some(Classification { class_id, distance: d });
        }
    }
    best.ok_or(OcrError::EmptyDatabase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_nearest_neighbor() {
        let refs = vec![array![0.0, 0.0], array![10.0, 0.0], array![0.0, 10.0]];
        let res = nearest_neighbor(&array![9.0, 1.0], &refs).unwrap();
        assert_eq!(res.class_id, 1);
        assert!((res.distance - 2f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_ties_keep_first() {
        let refs = vec![array![1.0], array![1.0]];
        assert_eq!(nearest_neighbor(&array![1.0], &refs).unwrap().class_id, 0);
    }

    #[test]
    fn test_errors() {
        let empty: Vec<FeatureVector> = Vec::new();
        assert!(matches!(
            nearest_neighbor(&array![1.0], &empty),
            Err(OcrError::EmptyDatabase)
        ));

        let refs = vec![array![1.0, 2.0]];
        assert!(matches!(
            nearest_neighbor(&array![1.0], &refs),
            Err(OcrError::DimensionMismatch { expected: 2, found: 1 })
        ));
    }
}
