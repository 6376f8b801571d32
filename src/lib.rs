pub mod error;
pub mod math;
pub mod activation;
pub mod data;
pub mod model;
pub mod loss;
pub mod train;
pub mod logging;

// Convenience re-exports
pub use error::{PerceptronError, Result};
pub use activation::activation::sigmoid;
pub use data::dataset::Dataset;
pub use model::perceptron::Perceptron;
pub use loss::mse::SquaredErrorLoss;
pub use train::train_config::TrainConfig;
pub use train::loop_fn::train_loop;
