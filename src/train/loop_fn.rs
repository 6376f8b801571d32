use std::time::Instant;

use tracing::{info, trace};

use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::model::perceptron::Perceptron;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_epoch;

/// Trains `model` for exactly `config.epochs` epochs, in place.
///
/// # Arguments
/// - `model`  : perceptron whose weights and bias are updated once per epoch
/// - `dataset`: examples, visited in the same order every epoch
/// - `config` : hyperparameters (epoch count)
///
/// # Errors
/// Returns the first `DimensionMismatch` hit, which happens when the model's
/// weight vector does not match the dataset's dimension. Epochs completed
/// before the error stay applied.
pub fn train_loop(model: &mut Perceptron, dataset: &Dataset, config: &TrainConfig) -> Result<()> {
    info!(
        epochs = config.epochs,
        examples = dataset.len(),
        dimension = dataset.dimension(),
        "starting training"
    );

    let t_start = Instant::now();

    for epoch in 1..=config.epochs {
        train_epoch(model, dataset)?;
        trace!(epoch, bias = model.bias, "epoch complete");
    }

    info!(
        elapsed_ms = t_start.elapsed().as_millis() as u64,
        bias = model.bias,
        "training finished"
    );

    Ok(())
}
