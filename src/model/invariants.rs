use super::LinearRegression;

impl LinearRegression {
    /// Asserts the structural invariants of the model state.
    ///
    /// Called after every structural mutation and before every loss read. The caller facing
    /// checks live in `Dataset::new` and the hyperparameter setters; reaching a failed assertion
    /// here means that a bug let an inconsistent state through, so it panics instead of
    /// returning an error.
    pub(crate) fn check_invariants(&self) {
        if let Some(dataset) = &self.dataset {
            assert!(!dataset.is_empty(), "training data must not be empty");
            assert_eq!(
                dataset.features().nrows(),
                dataset.labels().len(),
                "features and labels must have the same number of samples"
            );

            if !self.weights.is_empty() {
                assert_eq!(
                    self.weights.len(),
                    dataset.n_features(),
                    "weight vector must match the feature width"
                );
            }

            if !self.predictions.is_empty() {
                assert_eq!(
                    self.predictions.len(),
                    dataset.len(),
                    "predictions must match the number of training samples"
                );
            }
        } else {
            assert!(
                self.predictions.is_empty(),
                "predictions without training data"
            );
        }

        assert!(
            self.hyperparams.learning_rate() > 0.,
            "learning rate must be positive"
        );
        assert!(
            self.hyperparams.epochs() > 0,
            "number of epochs must be positive"
        );
    }
}
