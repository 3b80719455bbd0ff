use ndarray::{Array1, ArrayView1};

/// Gradient descent optimization algorithm.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    learning_rate: f64,
}

impl GradientDescent {
    /// Returns a new `GradientDescent`.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of the steps taken on `update_params`.
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }

    /// Updates the parameters according to the algorithm's learning rule, that is, making a step
    /// in the opposite direction of the gradient, with a length of `learning_rate`.
    ///
    /// # Arguments
    /// * `weights` - The weights that are going to be modified.
    /// * `bias` - The bias that is going to be modified.
    /// * `dw` - The gradient with respect to each weight.
    /// * `db` - The gradient with respect to the bias.
    pub fn update_params(
        &self,
        weights: &mut Array1<f64>,
        bias: &mut f64,
        dw: ArrayView1<f64>,
        db: f64,
    ) {
        let lr = self.learning_rate;

        *bias -= lr * db;
        weights.scaled_add(-lr, &dw);
    }
}
