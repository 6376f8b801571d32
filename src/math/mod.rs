pub mod vector;

pub use vector::{add, dot, scale, zeros};
