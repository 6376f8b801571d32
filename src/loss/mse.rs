pub struct SquaredErrorLoss;

impl SquaredErrorLoss {
    /// Summed squared error: sum((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
    }
}
