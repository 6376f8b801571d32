use crate::{
    data::dataset::Dataset,
    error::Result,
    math::vector::{add, scale, zeros},
    model::perceptron::Perceptron,
    train::gradient::compute_gradient,
};

/// Runs one epoch of full-batch gradient descent: accumulates the gradient of
/// every example in dataset order, then applies a single update scaled by
/// `2 / N`.
///
/// The model is written only after every gradient has been computed, so an
/// error leaves the parameters as they were before the call.
pub fn train_epoch(model: &mut Perceptron, dataset: &Dataset) -> Result<()> {
    let mut dw = zeros(dataset.dimension());
    let mut db = 0.0;

    for (x, y) in dataset.iter() {
        let grad = compute_gradient(model, x, y)?;
        dw = add(&dw, &grad.weights)?;
        db += grad.bias;
    }

    // Batch average and step size in one factor.
    let step = 2.0 / dataset.len() as f64;
    model.weights = add(&model.weights, &scale(step, &dw))?;
    model.bias += step * db;

    Ok(())
}
