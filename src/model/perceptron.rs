use rand::Rng;
use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::activation::activation::sigmoid;
use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::loss::mse::SquaredErrorLoss;
use crate::math::vector::{dot, zeros};
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;

/// A single sigmoid neuron: `sigmoid(w · x + b)`.
///
/// The perceptron owns its parameters exclusively; training mutates them in
/// place through `&mut self`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Perceptron {
    pub weights: Vec<f64>,
    pub bias: f64,
    config: TrainConfig,
}

impl Perceptron {
    /// Creates an untrained perceptron with no weights.
    ///
    /// Call `initialize` before `predict` or `train`; until then every input
    /// fails the length check.
    pub fn new(config: TrainConfig) -> Perceptron {
        Perceptron {
            weights: vec![],
            bias: 0.0,
            config,
        }
    }

    /// Creates a perceptron with fixed parameters, skipping random initialization.
    pub fn with_parameters(weights: Vec<f64>, bias: f64, config: TrainConfig) -> Perceptron {
        Perceptron { weights, bias, config }
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Resets the parameters: one weight per input feature, each drawn from
    /// uniform [0, 1), and a zero bias.
    pub fn initialize<R: Rng + ?Sized>(&mut self, dataset: &Dataset, rng: &mut R) {
        let mut weights = zeros(dataset.dimension());
        for w in weights.iter_mut() {
            *w = rng.gen::<f64>();
        }

        self.weights = weights;
        self.bias = 0.0;

        debug!(weights = ?self.weights, "initialized perceptron parameters");
    }

    /// Forward pass for one input vector.
    pub fn predict(&self, x: &[f64]) -> Result<f64> {
        Ok(sigmoid(dot(&self.weights, x)? + self.bias))
    }

    /// Trains for `config.epochs` epochs of full-batch gradient descent.
    pub fn train(&mut self, dataset: &Dataset) -> Result<()> {
        let config = self.config;
        train_loop(self, dataset, &config)
    }

    /// Squared error summed over every example in `dataset`.
    pub fn loss(&self, dataset: &Dataset) -> Result<f64> {
        let predicted = dataset
            .inputs()
            .iter()
            .map(|x| self.predict(x))
            .collect::<Result<Vec<f64>>>()?;
        Ok(SquaredErrorLoss::loss(&predicted, dataset.targets()))
    }
}
