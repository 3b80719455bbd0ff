use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use num_traits::AsPrimitive;

use crate::{LinRegErr, Result};

/// A validated, in-memory supervised dataset.
///
/// A `Dataset` can only be built through [`Dataset::new`], so every instance holds at least one
/// row, exactly one label per row and rows of a single width.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: Array2<f64>,
    labels: Array1<f64>,
}

impl Dataset {
    /// Validates a feature matrix and a label vector and builds a `Dataset` from them.
    ///
    /// The checks run in this order and the first failing one is reported:
    /// 1. `x.len() == y.len()`, else `DimensionMismatch`.
    /// 2. Neither is empty, else `EmptyDataset`.
    /// 3. Every row is as wide as the first one, else `InconsistentFeatureWidth`.
    ///
    /// # Arguments
    /// * `x` - The feature rows, of any primitive numeric element type.
    /// * `y` - One label per row.
    pub fn new<T>(x: &[Vec<T>], y: &[f64]) -> Result<Self>
    where
        T: AsPrimitive<f64>,
    {
        let width = validate(x, y)?;

        let features = Array2::from_shape_fn((x.len(), width), |(i, j)| x[i][j].as_());
        let labels = Array1::from_vec(y.to_vec());

        Ok(Self { features, labels })
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always `false` for a validated dataset.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the width of every feature row.
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    pub fn features(&self) -> ArrayView2<'_, f64> {
        self.features.view()
    }

    pub fn labels(&self) -> ArrayView1<'_, f64> {
        self.labels.view()
    }
}

/// Runs the ingestion checks without copying anything.
///
/// # Returns
/// The common feature width on success.
fn validate<T>(x: &[Vec<T>], y: &[f64]) -> Result<usize> {
    if x.len() != y.len() {
        return Err(LinRegErr::DimensionMismatch {
            what: "labels",
            got: y.len(),
            expected: x.len(),
        });
    }

    let Some(first) = x.first() else {
        return Err(LinRegErr::EmptyDataset);
    };

    let width = first.len();
    if let Some((row, bad)) = x.iter().enumerate().find(|(_, row)| row.len() != width) {
        return Err(LinRegErr::InconsistentFeatureWidth {
            row,
            got: bad.len(),
            expected: width,
        });
    }

    Ok(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_valid_rows() {
        let ds = Dataset::new(&[vec![1., 2.], vec![3., 4.], vec![5., 6.]], &[1., 2., 3.]).unwrap();

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.n_features(), 2);
        assert_eq!(ds.features()[[2, 1]], 6.);
        assert_eq!(ds.labels().to_vec(), vec![1., 2., 3.]);
    }

    #[test]
    fn converts_integer_features() {
        let ds = Dataset::new(&[vec![1i32], vec![-2]], &[0., 0.]).unwrap();
        assert_eq!(ds.features().column(0).to_vec(), vec![1., -2.]);
    }

    #[test]
    fn rejects_label_count_mismatch() {
        let err = Dataset::new(&[vec![0.], vec![1.], vec![2.]], &[1., 2.]).unwrap_err();
        assert!(matches!(
            err,
            LinRegErr::DimensionMismatch {
                got: 2,
                expected: 3,
                ..
            }
        ));
    }

    #[test]
    fn rejects_empty() {
        let err = Dataset::new::<f64>(&[], &[]).unwrap_err();
        assert!(matches!(err, LinRegErr::EmptyDataset));
    }

    #[test]
    fn mismatch_is_checked_before_emptiness() {
        let err = Dataset::new::<f64>(&[], &[1.]).unwrap_err();
        assert!(matches!(err, LinRegErr::DimensionMismatch { .. }));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Dataset::new(&[vec![1., 2.], vec![1., 2., 3.]], &[0., 0.]).unwrap_err();
        assert!(matches!(
            err,
            LinRegErr::InconsistentFeatureWidth {
                row: 1,
                got: 3,
                expected: 2,
            }
        ));
    }
}
