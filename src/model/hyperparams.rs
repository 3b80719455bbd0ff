use crate::{LinRegErr, Result};

/// Step size used when none is given.
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// Number of epochs used when none is given.
pub const DEFAULT_EPOCHS: usize = 1000;

/// The training hyperparameters, valid by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hyperparams {
    learning_rate: f64,
    epochs: usize,
}

impl Hyperparams {
    /// Creates a new `Hyperparams`.
    ///
    /// # Errors
    /// `InvalidHyperparameter` if `learning_rate` is not a positive finite number or `epochs`
    /// is zero.
    pub fn new(learning_rate: f64, epochs: usize) -> Result<Self> {
        Ok(Self {
            learning_rate: check_learning_rate(learning_rate)?,
            epochs: check_epochs(epochs)?,
        })
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn epochs(&self) -> usize {
        self.epochs
    }

    pub fn set_learning_rate(&mut self, learning_rate: f64) -> Result<()> {
        self.learning_rate = check_learning_rate(learning_rate)?;
        Ok(())
    }

    pub fn set_epochs(&mut self, epochs: usize) -> Result<()> {
        self.epochs = check_epochs(epochs)?;
        Ok(())
    }
}

impl Default for Hyperparams {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            epochs: DEFAULT_EPOCHS,
        }
    }
}

fn check_learning_rate(learning_rate: f64) -> Result<f64> {
    // NaN fails the comparison too.
    if learning_rate > 0. && learning_rate.is_finite() {
        Ok(learning_rate)
    } else {
        Err(LinRegErr::InvalidHyperparameter {
            name: "learning rate",
            value: learning_rate,
        })
    }
}

fn check_epochs(epochs: usize) -> Result<usize> {
    if epochs > 0 {
        Ok(epochs)
    } else {
        Err(LinRegErr::InvalidHyperparameter {
            name: "epoch count",
            value: epochs as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let hp = Hyperparams::default();
        assert_eq!(hp.learning_rate(), DEFAULT_LEARNING_RATE);
        assert_eq!(hp.epochs(), DEFAULT_EPOCHS);
    }

    #[test]
    fn rejects_non_positive_values() {
        for lr in [0., -0.1, f64::NAN, f64::INFINITY] {
            assert!(Hyperparams::new(lr, 10).is_err(), "accepted lr {lr}");
        }
        assert!(Hyperparams::new(0.1, 0).is_err());
    }

    #[test]
    fn rejected_setter_keeps_previous_value() {
        let mut hp = Hyperparams::new(0.5, 3).unwrap();

        assert!(hp.set_learning_rate(-1.).is_err());
        assert!(hp.set_epochs(0).is_err());

        assert_eq!(hp, Hyperparams::new(0.5, 3).unwrap());
    }
}
