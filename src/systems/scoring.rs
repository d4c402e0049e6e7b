//! Raw scores per candidate, and the probability vector built from them.
//!
//! ```text
//! score = structural * s
//!       + correctness.term(correct, under, hazard)
//!       + curve_fit * (-|y - f(x)|)        proximity curves only
//!       - hazard_penalty                   hazards only
//!       + goal_magnet.bonus(s, correct)    if configured
//! ```
//!
//! Pure: identical inputs give bit-identical outputs.

use crate::Candidate;
use crate::error::{EngineError, Result};
use crate::mechanics::curve::{self, Curve};
use crate::mechanics::softmax::softmax;
use crate::systems::weights::ScoringWeights;

/// Score a single candidate.
#[inline]
pub fn score_one(c: &Candidate, correct: bool, curve: Option<&Curve<'_>>, w: &ScoringWeights) -> f64 {
    let under = curve::is_under(curve, c.x, c.y);
    let mut s = w.structural * c.structural_score + w.correctness.term(correct, under, c.hazard);
    s += w.curve_fit * curve::fit(curve, c.x, c.y);
    if c.hazard {
        s -= w.hazard_penalty;
    }
    if let Some(g) = &w.goal_magnet {
        s += g.bonus(c.structural_score, correct);
    }
    s
}

/// Raw scores, same length and order as `candidates`.
pub fn compute_scores(
    candidates: &[Candidate],
    correct: bool,
    curve: Option<&Curve<'_>>,
    weights: &ScoringWeights,
) -> Result<Vec<f64>> {
    if candidates.is_empty() {
        return Err(EngineError::EmptyCandidateSet);
    }
    let mut scores = Vec::with_capacity(candidates.len());
    for (index, c) in candidates.iter().enumerate() {
        let s = score_one(c, correct, curve, weights);
        if !s.is_finite() {
            return Err(EngineError::NonFiniteScore { index });
        }
        scores.push(s);
    }
    Ok(scores)
}

/// `softmax(compute_scores(..))`.
pub fn build_probabilities(
    candidates: &[Candidate],
    correct: bool,
    curve: Option<&Curve<'_>>,
    weights: &ScoringWeights,
) -> Result<Vec<f64>> {
    let scores = compute_scores(candidates, correct, curve, weights)?;
    let probabilities = softmax(&scores)?;
    log::debug!(
        "built probabilities over {} candidates (correct={correct}, curve={curve:?}): {probabilities:.3?}",
        candidates.len()
    );
    Ok(probabilities)
}
