use ndarray::ArrayView1;

use crate::Result;

/// Measures how far a model's predictions are from the expected labels.
pub trait LossFn {
    /// Computes the loss of `y_pred` against `y`.
    ///
    /// # Errors
    /// `CorruptedState` if either side is empty or their lengths differ.
    fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> Result<f64>;
}
