use serde::{Serialize, Deserialize};

/// Epoch count used by the demo run and by `TrainConfig::default()`.
pub const DEFAULT_EPOCHS: usize = 1000;

/// Hyperparameters for a `train_loop` run.
///
/// # Fields
/// - `epochs`: number of full passes over the dataset; each pass ends in
///   exactly one parameter update
///
/// There is no learning rate: the step size is the `2 / N` batch-averaging
/// factor applied by `train_epoch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub epochs: usize,
}

impl TrainConfig {
    pub fn new(epochs: usize) -> Self {
        TrainConfig { epochs }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(DEFAULT_EPOCHS)
    }
}
