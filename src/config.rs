use std::{
    error::Error,
    fmt::{self, Display},
    fs, io,
    path::Path,
};

use serde::Deserialize;

use crate::model::{DEFAULT_EPOCHS, DEFAULT_LEARNING_RATE};

/// The result type for reading configuration and dataset files.
pub type Result<T> = std::result::Result<T, ConfigErr>;

/// Failure to read or parse a JSON file.
#[derive(Debug)]
pub enum ConfigErr {
    Io(io::Error),
    Json(serde_json::Error),
}

impl Display for ConfigErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErr::Io(e) => write!(f, "io error: {e}"),
            ConfigErr::Json(e) => write!(f, "invalid JSON: {e}"),
        }
    }
}

impl Error for ConfigErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigErr::Io(e) => Some(e),
            ConfigErr::Json(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConfigErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ConfigErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// The training configuration. Missing fields take the estimator defaults.
///
/// Values are validated when the model is built from it, see
/// [`crate::LinearRegression::from_config`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainingConfig {
    pub learning_rate: f64,
    pub epochs: usize,
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            epochs: DEFAULT_EPOCHS,
            seed: None,
        }
    }
}

impl TrainingConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }
}

/// A labeled dataset as stored on disk:
///
/// ```json
/// { "features": [[0.0], [1.0]], "labels": [3.0, 5.0] }
/// ```
///
/// Shapes are not checked here, that is the job of [`crate::Dataset::new`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetFile {
    pub features: Vec<Vec<f64>>,
    pub labels: Vec<f64>,
}

impl DatasetFile {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = TrainingConfig::from_json_str("{}").unwrap();
        assert_eq!(config, TrainingConfig::default());

        let config = TrainingConfig::from_json_str(r#"{ "epochs": 5, "seed": 3 }"#).unwrap();
        assert_eq!(config.learning_rate, DEFAULT_LEARNING_RATE);
        assert_eq!(config.epochs, 5);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = TrainingConfig::from_json_str(r#"{ "lambda": 0.1 }"#).unwrap_err();
        assert!(matches!(err, ConfigErr::Json(_)));
    }

    #[test]
    fn negative_epochs_do_not_parse() {
        assert!(TrainingConfig::from_json_str(r#"{ "epochs": -1 }"#).is_err());
    }

    #[test]
    fn dataset_file() {
        let file =
            DatasetFile::from_json_str(r#"{ "features": [[0, 1], [2, 3]], "labels": [1, 2] }"#)
                .unwrap();

        assert_eq!(file.features, vec![vec![0., 1.], vec![2., 3.]]);
        assert_eq!(file.labels, vec![1., 2.]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = DatasetFile::load("/nonexistent/linreg/data.json").unwrap_err();
        assert!(matches!(err, ConfigErr::Io(_)));
    }
}
