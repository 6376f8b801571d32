pub mod gradient;
pub mod trainer;
pub mod train_config;
pub mod loop_fn;

pub use gradient::{compute_gradient, Gradient};
pub use trainer::train_epoch;
pub use train_config::TrainConfig;
pub use loop_fn::train_loop;
