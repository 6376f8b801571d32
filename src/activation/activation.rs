use std::f64::consts::E;

/// Logistic sigmoid, squashing any real input into (0, 1).
///
/// No overflow guard: for very negative `x` the exponential grows large and the
/// result underflows towards 0.0, which IEEE doubles handle without trapping.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of the sigmoid, written in terms of its output `fx = sigmoid(x)`.
///
/// Callers that already hold the prediction avoid a second exponential.
pub fn sigmoid_derivative(fx: f64) -> f64 {
    fx * (1.0 - fx)
}
