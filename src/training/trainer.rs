use log::info;
use num_traits::AsPrimitive;

use super::{
    Gradients, batch_gradients,
    progress::{EpochLoss, is_report_epoch},
};
use crate::{LinRegErr, LinearRegression, Result, model::affine, optimization::GradientDescent};

impl LinearRegression {
    /// Replaces the training data with `(x, y)` and trains the model on it with full batch
    /// gradient descent for exactly `epochs` epochs.
    ///
    /// Every 100th epoch the training loss is logged at `info` level.
    ///
    /// # Arguments
    /// * `x` - The feature rows, of any primitive numeric element type.
    /// * `y` - One label per row.
    ///
    /// # Errors
    /// The ingestion errors of [`crate::Dataset::new`], in which case no epoch runs and the
    /// model keeps its previous state.
    pub fn fit<T>(&mut self, x: &[Vec<T>], y: &[f64]) -> Result<()>
    where
        T: AsPrimitive<f64>,
    {
        self.fit_with(x, y, |_| {})
    }

    /// Same as [`LinearRegression::fit`], also handing every reported loss to `observer`.
    pub fn fit_with<T, F>(&mut self, x: &[Vec<T>], y: &[f64], mut observer: F) -> Result<()>
    where
        T: AsPrimitive<f64>,
        F: FnMut(EpochLoss),
    {
        self.ingest(x, y)?;

        let epochs = self.hyperparams.epochs();
        let optimizer = GradientDescent::new(self.hyperparams.learning_rate());

        let Some(dataset) = &self.dataset else {
            return Err(LinRegErr::CorruptedState("no training data after ingestion"));
        };
        let features = dataset.features();
        let labels = dataset.labels();

        info!(
            "fitting {} samples with {} features for {epochs} epochs",
            dataset.len(),
            dataset.n_features()
        );

        for epoch in 0..epochs {
            self.predictions = affine(features, self.weights.view(), self.bias);

            let Gradients { dw, db } = batch_gradients(features, labels, self.predictions.view());
            optimizer.update_params(&mut self.weights, &mut self.bias, dw.view(), db);

            if is_report_epoch(epoch) {
                let mse = self.mse()?;
                info!("epoch {epoch}: mse={mse}");
                observer(EpochLoss { epoch, mse });
            }
        }

        // Leave the cache consistent with the final parameters.
        self.predictions = affine(features, self.weights.view(), self.bias);
        self.check_invariants();

        info!(
            "fit finished: weights={} bias={} mse={}",
            self.weights,
            self.bias,
            self.mse()?
        );

        Ok(())
    }
}
