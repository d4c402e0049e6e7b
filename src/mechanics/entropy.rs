/// Entropy mechanics: how peaked a distribution is, and the bonus it earns.
use crate::error::{EngineError, Result};
use crate::mechanics::sample::validate_probabilities;

/// Bonus paid for a fully certain distribution.
pub const BONUS_SCALE: f64 = 60.0;

/// Shannon entropy in bits, `-Σ p log2 p`, skipping zero entries.
pub fn calculate_entropy(probabilities: &[f64]) -> Result<f64> {
    validate_probabilities(probabilities)?;
    let mut entropy = 0.0;
    for &p in probabilities {
        if p > 0.0 {
            entropy -= p * p.log2();
        }
    }
    // Rounding can push a near-certain vector a hair below zero.
    Ok(entropy.max(0.0))
}

/// `1 - H / log2(N)`: 0 for uniform, 1 for certain.
/// A single candidate carries no uncertainty and scores 1.
pub fn normalized_confidence(probabilities: &[f64]) -> Result<f64> {
    let entropy = calculate_entropy(probabilities)?;
    let n = probabilities.len();
    if n == 1 {
        return Ok(1.0);
    }
    let max_entropy = (n as f64).log2();
    Ok((1.0 - entropy / max_entropy).clamp(0.0, 1.0))
}

/// `floor(confidence * 60)`, in `0..=60`.
pub fn calculate_confidence_bonus(probabilities: &[f64]) -> Result<u32> {
    if probabilities.is_empty() {
        return Err(EngineError::EmptyCandidateSet);
    }
    let confidence = normalized_confidence(probabilities)?;
    Ok((confidence * BONUS_SCALE).floor() as u32)
}
