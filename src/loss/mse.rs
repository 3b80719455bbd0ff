use ndarray::ArrayView1;

use super::LossFn;
use crate::{LinRegErr, Result};

/// Mean squared error loss function.
#[derive(Default, Clone, Copy)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for Mse {
    /// `(1/n) * Σ (y[i] - y_pred[i])²`.
    fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> Result<f64> {
        if y.is_empty() || y_pred.len() != y.len() {
            return Err(LinRegErr::CorruptedState(
                "labels and predictions are empty or differ in length",
            ));
        }

        let sum: f64 = y
            .iter()
            .zip(y_pred.iter())
            .map(|(y, y_pred)| (y - y_pred).powi(2))
            .sum();

        Ok(sum / y.len() as f64)
    }
}
