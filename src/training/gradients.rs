use ndarray::{Array1, ArrayView1, ArrayView2};

/// The gradient of the mean squared error with respect to every parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub dw: Array1<f64>,
    pub db: f64,
}

/// Computes the full batch gradients of the mean squared error under a linear model:
///
/// - `error[i] = prediction[i] - label[i]`
/// - `db = mean(error)`
/// - `dw[j] = mean(error[i] * features[i][j])`
///
/// The factor of 2 of the analytic derivative is absorbed by the learning rate.
pub fn batch_gradients(
    features: ArrayView2<f64>,
    labels: ArrayView1<f64>,
    predictions: ArrayView1<f64>,
) -> Gradients {
    let n = labels.len() as f64;
    let errors = &predictions - &labels;

    let db = errors.sum() / n;
    let dw = features.t().dot(&errors) / n;

    Gradients { dw, db }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn matches_hand_computed_case() {
        // y = 2x + 1 with w = 0, b = 0.
        let features = array![[1.], [2.], [3.]];
        let labels = array![3., 5., 7.];
        let predictions = array![0., 0., 0.];

        let grads = batch_gradients(features.view(), labels.view(), predictions.view());

        // errors: [-3, -5, -7]
        // db = -15 / 3 = -5
        // dw = (-3 * 1 + -5 * 2 + -7 * 3) / 3 = -34 / 3
        assert!((grads.db - -5.).abs() < 1e-12);
        assert!((grads.dw[0] - -34. / 3.).abs() < 1e-12);
    }

    #[test]
    fn zero_at_a_perfect_fit() {
        let features = array![[1., 0.], [0., 1.]];
        let labels = array![4., -2.];

        let grads = batch_gradients(features.view(), labels.view(), labels.view());

        assert_eq!(grads.db, 0.);
        assert_eq!(grads.dw, array![0., 0.]);
    }

    #[test]
    fn one_entry_per_feature() {
        let features = array![[1., 2., 3.], [4., 5., 6.]];
        let labels = array![1., 1.];
        let predictions = array![2., 3.];

        let grads = batch_gradients(features.view(), labels.view(), predictions.view());

        // errors: [1, 2]
        assert_eq!(grads.dw, array![4.5, 6., 7.5]);
        assert_eq!(grads.db, 1.5);
    }
}
