/// Softmax normalization: raw scores → probability vector.
use crate::error::{EngineError, Result};

/// `p_i = exp(s_i - max) / Σ exp(s_j - max)`.
///
/// Max-subtraction keeps every exponent `<= 0`, so large scores cannot
/// overflow. Output order matches input order.
pub fn softmax(scores: &[f64]) -> Result<Vec<f64>> {
    if scores.is_empty() {
        return Err(EngineError::EmptyCandidateSet);
    }
    if let Some(index) = scores.iter().position(|s| !s.is_finite()) {
        return Err(EngineError::NonFiniteScore { index });
    }

    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    // The max element contributes exp(0) = 1, so sum >= 1.
    let sum: f64 = exps.iter().sum();
    Ok(exps.into_iter().map(|e| e / sum).collect())
}
