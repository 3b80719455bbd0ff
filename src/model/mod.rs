mod hyperparams;
mod invariants;

use log::debug;
use ndarray::{Array1, ArrayView1, ArrayView2};
use num_traits::AsPrimitive;

pub use hyperparams::{DEFAULT_EPOCHS, DEFAULT_LEARNING_RATE, Hyperparams};

use crate::{
    LinRegErr, Result,
    config::TrainingConfig,
    dataset::Dataset,
    initialization,
    loss::{LossFn, Mse},
};

/// A linear model `y = w·x + b` trained with full batch gradient descent on the mean squared
/// error.
///
/// The model exclusively owns its training data, parameters and prediction cache. Training data
/// is only ever replaced as a whole by `fit`.
#[derive(Debug, Clone)]
pub struct LinearRegression {
    pub(crate) dataset: Option<Dataset>,
    pub(crate) weights: Array1<f64>,
    pub(crate) bias: f64,
    pub(crate) predictions: Array1<f64>,
    pub(crate) hyperparams: Hyperparams,
    seed: Option<u64>,
}

impl LinearRegression {
    /// Creates a new untrained model with no data, no weights and a zero bias.
    ///
    /// # Errors
    /// `InvalidHyperparameter` if `learning_rate` is not positive or `epochs` is zero.
    pub fn new(learning_rate: f64, epochs: usize) -> Result<Self> {
        Ok(Self::from_hyperparams(Hyperparams::new(learning_rate, epochs)?))
    }

    /// Creates a new untrained model from a training configuration.
    pub fn from_config(config: &TrainingConfig) -> Result<Self> {
        let mut model = Self::new(config.learning_rate, config.epochs)?;
        model.seed = config.seed;
        Ok(model)
    }

    fn from_hyperparams(hyperparams: Hyperparams) -> Self {
        Self {
            dataset: None,
            weights: Array1::zeros(0),
            bias: 0.,
            predictions: Array1::zeros(0),
            hyperparams,
            seed: None,
        }
    }

    /// Makes every weight initialization of this model reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Computes `bias + Σ weight[i] * x[i]`.
    ///
    /// # Errors
    /// `DimensionMismatch` if `x` is not as wide as the weight vector. An untrained model has
    /// no weights, so it only accepts the empty vector.
    pub fn predict<T>(&self, x: &[T]) -> Result<f64>
    where
        T: AsPrimitive<f64>,
    {
        if x.len() != self.weights.len() {
            return Err(LinRegErr::DimensionMismatch {
                what: "feature vector",
                got: x.len(),
                expected: self.weights.len(),
            });
        }

        let dot: f64 = self.weights.iter().zip(x).map(|(w, x)| w * x.as_()).sum();
        Ok(self.bias + dot)
    }

    /// Returns the mean squared error of the cached predictions over the training labels.
    ///
    /// # Errors
    /// `CorruptedState` if the model has not been fitted.
    pub fn mse(&self) -> Result<f64> {
        self.check_invariants();

        let Some(dataset) = &self.dataset else {
            return Err(LinRegErr::CorruptedState("the model has no training labels"));
        };

        Mse::new().loss(self.predictions.view(), dataset.labels())
    }

    /// Alias of [`LinearRegression::mse`], the training objective.
    pub fn loss(&self) -> Result<f64> {
        self.mse()
    }

    /// Returns the root of [`LinearRegression::mse`].
    pub fn rmse(&self) -> Result<f64> {
        Ok(self.mse()?.sqrt())
    }

    /// Evaluates the mean squared error of the current parameters on a held-out dataset,
    /// leaving the training state untouched.
    ///
    /// # Errors
    /// The ingestion errors of [`Dataset::new`], or `DimensionMismatch` if the rows are not as
    /// wide as the weight vector.
    pub fn score<T>(&self, x: &[Vec<T>], y: &[f64]) -> Result<f64>
    where
        T: AsPrimitive<f64>,
    {
        self.check_invariants();

        let eval = Dataset::new(x, y)?;
        if eval.n_features() != self.weights.len() {
            return Err(LinRegErr::DimensionMismatch {
                what: "evaluation features",
                got: eval.n_features(),
                expected: self.weights.len(),
            });
        }

        let y_pred = affine(eval.features(), self.weights.view(), self.bias);
        Mse::new().loss(y_pred.view(), eval.labels())
    }

    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.weights.view()
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// The model's output for every training row, as of the last epoch.
    pub fn predictions(&self) -> ArrayView1<'_, f64> {
        self.predictions.view()
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn learning_rate(&self) -> f64 {
        self.hyperparams.learning_rate()
    }

    pub fn epochs(&self) -> usize {
        self.hyperparams.epochs()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// # Errors
    /// `InvalidHyperparameter` if `learning_rate` is not a positive finite number, in which case
    /// the previous value is kept.
    pub fn set_learning_rate(&mut self, learning_rate: f64) -> Result<()> {
        self.hyperparams.set_learning_rate(learning_rate)?;
        self.check_invariants();
        Ok(())
    }

    /// # Errors
    /// `InvalidHyperparameter` if `epochs` is zero, in which case the previous value is kept.
    pub fn set_epochs(&mut self, epochs: usize) -> Result<()> {
        self.hyperparams.set_epochs(epochs)?;
        self.check_invariants();
        Ok(())
    }

    /// Replaces the training data and re-initializes the parameters.
    ///
    /// Nothing is modified unless the data passes validation and the new weights were
    /// generated.
    pub(crate) fn ingest<T>(&mut self, x: &[Vec<T>], y: &[f64]) -> Result<()>
    where
        T: AsPrimitive<f64>,
    {
        let dataset = Dataset::new(x, y)?;
        let weights = initialization::init_weights(&x[0], self.seed)?;

        debug!(
            "ingested {} samples with {} features",
            dataset.len(),
            dataset.n_features()
        );

        self.predictions = Array1::zeros(dataset.len());
        self.dataset = Some(dataset);
        self.weights = weights;
        self.bias = 0.;

        self.check_invariants();
        Ok(())
    }
}

impl Default for LinearRegression {
    /// A learning rate of `0.01` and `1000` epochs.
    fn default() -> Self {
        Self::from_hyperparams(Hyperparams::default())
    }
}

/// Computes `features · weights + bias` for every row.
pub(crate) fn affine(features: ArrayView2<f64>, weights: ArrayView1<f64>, bias: f64) -> Array1<f64> {
    features.dot(&weights) + bias
}
