/// Number of epochs between two progress reports. Epoch 0 is always reported.
pub const REPORT_EVERY: usize = 100;

/// The training loss observed at a given epoch.
///
/// The loss is measured on the predictions the epoch computed its gradients from, that is, with
/// the parameters the epoch started with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochLoss {
    pub epoch: usize,
    pub mse: f64,
}

/// Whether `epoch` is one of the reported epochs.
pub fn is_report_epoch(epoch: usize) -> bool {
    epoch % REPORT_EVERY == 0
}
