use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use linreg::{LinearRegression, TrainingConfig, config::DatasetFile};

/// Fits a linear regression model to a JSON dataset with batch gradient descent.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// Training dataset: `{ "features": [[..], ..], "labels": [..] }`
    #[arg(short, long)]
    data: PathBuf,

    /// Held-out dataset to score the fitted model on, same format as `--data`
    #[arg(short, long)]
    eval: Option<PathBuf>,

    /// JSON training configuration: `{ "learning_rate", "epochs", "seed" }`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides the configured learning rate
    #[arg(long)]
    learning_rate: Option<f64>,

    /// Overrides the configured epoch count
    #[arg(long)]
    epochs: Option<usize>,

    /// Overrides the configured seed
    #[arg(long)]
    seed: Option<u64>,
}

impl Opts {
    fn training_config(&self) -> anyhow::Result<TrainingConfig> {
        let mut config = match &self.config {
            Some(path) => TrainingConfig::load(path)
                .with_context(|| format!("cannot load config '{}'", path.display()))?,
            None => TrainingConfig::default(),
        };

        if let Some(learning_rate) = self.learning_rate {
            config.learning_rate = learning_rate;
        }
        if let Some(epochs) = self.epochs {
            config.epochs = epochs;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Opts::parse();
    let config = opts.training_config()?;
    info!("training config: {config:?}");

    let train = DatasetFile::load(&opts.data)
        .with_context(|| format!("cannot load dataset '{}'", opts.data.display()))?;

    let mut model = LinearRegression::from_config(&config)?;
    model.fit(&train.features, &train.labels)?;

    println!("weights: {}", model.weights());
    println!("bias:    {}", model.bias());
    println!("mse:     {}", model.mse()?);
    println!("rmse:    {}", model.rmse()?);

    if let Some(path) = &opts.eval {
        let eval = DatasetFile::load(path)
            .with_context(|| format!("cannot load dataset '{}'", path.display()))?;
        println!("score:   {}", model.score(&eval.features, &eval.labels)?);
    }

    Ok(())
}
