mod gradients;
mod progress;
mod trainer;

pub use gradients::{Gradients, batch_gradients};
pub use progress::{EpochLoss, REPORT_EVERY};
