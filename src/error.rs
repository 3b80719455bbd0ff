use std::{
    error::Error,
    fmt::{self, Display},
};

use crate::initialization::RandErr;

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, LinRegErr>;

/// The estimator's error type.
///
/// Every variant is recoverable: the operation that returns it leaves the model in the state it
/// had before the call.
#[derive(Debug)]
pub enum LinRegErr {
    /// Two collections that must agree on their length do not.
    DimensionMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    /// The feature matrix or the label vector has no rows.
    EmptyDataset,
    /// A feature row differs in width from the first row.
    InconsistentFeatureWidth {
        row: usize,
        got: usize,
        expected: usize,
    },
    /// Labels and predictions are not in a state where a loss can be computed.
    CorruptedState(&'static str),
    /// A learning rate or epoch count outside of its valid range.
    InvalidHyperparameter { name: &'static str, value: f64 },
    /// The weight initializer could not be built.
    Initialization(RandErr),
}

impl Display for LinRegErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinRegErr::DimensionMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "dimension mismatch for {what}: got {got}, expected {expected}"
            ),
            LinRegErr::EmptyDataset => f.write_str("the dataset is empty"),
            LinRegErr::InconsistentFeatureWidth { row, got, expected } => write!(
                f,
                "inconsistent feature width at row {row}: got {got}, expected {expected}"
            ),
            LinRegErr::CorruptedState(msg) => write!(f, "corrupted state: {msg}"),
            LinRegErr::InvalidHyperparameter { name, value } => {
                write!(f, "invalid {name}: {value}, it must be positive")
            }
            LinRegErr::Initialization(e) => write!(f, "weight initialization failed: {e}"),
        }
    }
}

impl Error for LinRegErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LinRegErr::Initialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RandErr> for LinRegErr {
    fn from(value: RandErr) -> Self {
        Self::Initialization(value)
    }
}
