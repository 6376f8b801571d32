use crate::activation::activation::sigmoid_derivative;
use crate::error::Result;
use crate::math::vector::scale;
use crate::model::perceptron::Perceptron;

/// Per-example gradient contributions for the weights and the bias.
///
/// Both are already negated: adding them to the parameters moves downhill on
/// the squared error `(y - p)²`.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub weights: Vec<f64>,
    pub bias: f64,
}

/// `-(p - y) · p · (1 - p)`, the shared factor of both gradient halves.
fn delta(prediction: f64, target: f64) -> f64 {
    -(prediction - target) * sigmoid_derivative(prediction)
}

/// Computes both gradient halves for one example from a single forward pass.
pub fn compute_gradient(model: &Perceptron, x: &[f64], y: f64) -> Result<Gradient> {
    let d = delta(model.predict(x)?, y);
    Ok(Gradient {
        weights: scale(d, x),
        bias: d,
    })
}

pub fn weight_gradient(model: &Perceptron, x: &[f64], y: f64) -> Result<Vec<f64>> {
    let d = delta(model.predict(x)?, y);
    Ok(scale(d, x))
}

pub fn bias_gradient(model: &Perceptron, x: &[f64], y: f64) -> Result<f64> {
    Ok(delta(model.predict(x)?, y))
}
