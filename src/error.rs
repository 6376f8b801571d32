use thiserror::Error;

pub type Result<T> = std::result::Result<T, PerceptronError>;

/// Errors raised by vector algebra and dataset construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PerceptronError {
    /// Two vectors that must be the same length are not.
    #[error("vector length mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("dataset must contain at least one example")]
    EmptyDataset,

    #[error("dataset has {inputs} inputs but {targets} targets")]
    TargetCountMismatch { inputs: usize, targets: usize },
}
