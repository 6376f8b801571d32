use crate::error::{PerceptronError, Result};

/// Returns a vector of `len` zeros.
pub fn zeros(len: usize) -> Vec<f64> {
    vec![0.0; len]
}

fn check_lengths(v1: &[f64], v2: &[f64]) -> Result<()> {
    if v1.len() != v2.len() {
        return Err(PerceptronError::DimensionMismatch {
            expected: v1.len(),
            found: v2.len(),
        });
    }
    Ok(())
}

/// Sum of elementwise products. Both vectors must have the same length.
pub fn dot(v1: &[f64], v2: &[f64]) -> Result<f64> {
    check_lengths(v1, v2)?;

    let mut sum = 0.0;
    for i in 0..v1.len() {
        sum += v1[i] * v2[i];
    }

    Ok(sum)
}

/// Elementwise sum as a new vector. Both vectors must have the same length.
pub fn add(v1: &[f64], v2: &[f64]) -> Result<Vec<f64>> {
    check_lengths(v1, v2)?;

    let mut res = zeros(v1.len());
    for i in 0..v1.len() {
        res[i] = v1[i] + v2[i];
    }

    Ok(res)
}

/// Multiplies every element of `v` by `scalar`.
pub fn scale(scalar: f64, v: &[f64]) -> Vec<f64> {
    v.iter().map(|x| scalar * x).collect()
}
