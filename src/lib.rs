//! A linear regression estimator, `y ≈ w·x + b`, fitted with full batch gradient descent on
//! the mean squared error.
//!
//! ```no_run
//! use linreg::LinearRegression;
//!
//! let mut model = LinearRegression::new(0.1, 2000)?.with_seed(42);
//! model.fit(&[vec![0.], vec![1.], vec![2.], vec![3.]], &[3., 5., 7., 9.])?;
//!
//! let y = model.predict(&[4.])?;
//! # Ok::<(), linreg::LinRegErr>(())
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod initialization;
pub mod loss;
pub mod model;
pub mod optimization;
pub mod training;

pub use config::TrainingConfig;
pub use dataset::Dataset;
pub use error::{LinRegErr, Result};
pub use model::LinearRegression;
pub use training::EpochLoss;
