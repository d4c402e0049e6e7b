//! Score bookkeeping after a landing: base delta from (correct, hazard)
//! plus the confidence bonus of the distribution that produced the landing.

use serde::{Deserialize, Serialize};

use crate::Candidate;
use crate::error::{EngineError, Result};
use crate::mechanics::entropy::calculate_confidence_bonus;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeltaTable {
    pub correct_safe: i64,
    pub correct_hazard: i64,
    pub wrong_safe: i64,
    pub wrong_hazard: i64,
}

impl Default for DeltaTable {
    fn default() -> Self {
        Self { correct_safe: 100, correct_hazard: -50, wrong_safe: 25, wrong_hazard: -100 }
    }
}

#[inline]
pub fn base_delta(table: &DeltaTable, hazard: bool, correct: bool) -> i64 {
    match (correct, hazard) {
        (true, false) => table.correct_safe,
        (true, true) => table.correct_hazard,
        (false, false) => table.wrong_safe,
        (false, true) => table.wrong_hazard,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireOutcome {
    pub index: usize,
    pub id: u32,
    pub hazard: bool,
    pub base_delta: i64,
    pub confidence_bonus: u32,
    pub total: i64,
}

/// Settle a landing on `candidates[index]`.
pub fn resolve(
    candidates: &[Candidate],
    probabilities: &[f64],
    index: usize,
    correct: bool,
    table: &DeltaTable,
) -> Result<FireOutcome> {
    if candidates.is_empty() {
        return Err(EngineError::EmptyCandidateSet);
    }
    if probabilities.len() != candidates.len() {
        return Err(EngineError::InvalidProbabilityVector {
            reason: format!(
                "{} probabilities for {} candidates",
                probabilities.len(),
                candidates.len()
            ),
        });
    }
    let landed = candidates
        .get(index)
        .ok_or(EngineError::IndexOutOfRange { index, len: candidates.len() })?;

    let base = base_delta(table, landed.hazard, correct);
    let bonus = calculate_confidence_bonus(probabilities)?;
    let outcome = FireOutcome {
        index,
        id: landed.id,
        hazard: landed.hazard,
        base_delta: base,
        confidence_bonus: bonus,
        total: base + i64::from(bonus),
    };
    log::debug!("resolved landing: {outcome:?}");
    Ok(outcome)
}
