use serde::Serialize;

use crate::error::{PerceptronError, Result};

/// An ordered set of training examples: input vectors paired with scalar targets.
///
/// Construction checks that there is at least one example, that every input has
/// the same length, and that inputs and targets pair up one-to-one. Target
/// values are not range-checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    inputs: Vec<Vec<f64>>,
    targets: Vec<f64>,
}

impl Dataset {
    pub fn new(inputs: Vec<Vec<f64>>, targets: Vec<f64>) -> Result<Dataset> {
        if inputs.is_empty() {
            return Err(PerceptronError::EmptyDataset);
        }
        if inputs.len() != targets.len() {
            return Err(PerceptronError::TargetCountMismatch {
                inputs: inputs.len(),
                targets: targets.len(),
            });
        }

        let dimension = inputs[0].len();
        if let Some(ragged) = inputs.iter().find(|x| x.len() != dimension) {
            return Err(PerceptronError::DimensionMismatch {
                expected: dimension,
                found: ragged.len(),
            });
        }

        Ok(Dataset { inputs, targets })
    }

    /// The four-example set the demo binary trains on.
    ///
    /// The target tracks the first input component.
    pub fn toy() -> Dataset {
        Dataset {
            inputs: vec![
                vec![0.0, 0.0, 1.0],
                vec![1.0, 1.0, 1.0],
                vec![1.0, 0.0, 1.0],
                vec![0.0, 1.0, 0.0],
            ],
            targets: vec![0.0, 1.0, 1.0, 0.0],
        }
    }

    /// Number of examples.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Always false: construction rejects empty datasets.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Length shared by every input vector.
    pub fn dimension(&self) -> usize {
        self.inputs[0].len()
    }

    pub fn inputs(&self) -> &[Vec<f64>] {
        &self.inputs
    }

    pub fn targets(&self) -> &[f64] {
        &self.targets
    }

    /// Iterates `(input, target)` pairs in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = (&[f64], f64)> + '_ {
        self.inputs
            .iter()
            .zip(self.targets.iter())
            .map(|(x, &y)| (x.as_slice(), y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toy_shape() {
        let data = Dataset::toy();
        assert_eq!(data.len(), 4);
        assert_eq!(data.dimension(), 3);
        assert_eq!(data.targets(), &[0.0, 1.0, 1.0, 0.0]);
        assert_eq!(Dataset::new(data.inputs().to_vec(), data.targets().to_vec()), Ok(data));
    }

    #[test]
    fn test_iter_keeps_order() {
        let data = Dataset::toy();
        let pairs: Vec<_> = data.iter().collect();
        assert_eq!(pairs[1], (&[1.0, 1.0, 1.0][..], 1.0));
        assert_eq!(pairs[3], (&[0.0, 1.0, 0.0][..], 0.0));
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Dataset::new(vec![], vec![]), Err(PerceptronError::EmptyDataset));
    }

    #[test]
    fn test_rejects_target_count_mismatch() {
        let err = Dataset::new(vec![vec![1.0], vec![0.0]], vec![1.0]).unwrap_err();
        assert_eq!(err, PerceptronError::TargetCountMismatch { inputs: 2, targets: 1 });
    }

    #[test]
    fn test_rejects_ragged_inputs() {
        let err = Dataset::new(vec![vec![1.0, 0.0], vec![0.0]], vec![1.0, 0.0]).unwrap_err();
        assert_eq!(err, PerceptronError::DimensionMismatch { expected: 2, found: 1 });
    }
}
