// src/genres/sdk.rs

//! # Genre SDK
//!
//! Glue for building **game modes** on top of the engine.
//!
//! Every mode fires the same three independent steps:
//! 1. `build_probabilities` (score + softmax) over the mode's candidates
//! 2. `sample_categorical` with the mode's own RNG
//! 3. `resolve` (base delta + confidence bonus)
//!
//! `fire_once` runs them in that order and hands back everything a renderer
//! needs (the full vector for beams/odds display, and the settled outcome).
//! Modes differ only in which candidates, curve and weights they pass in.
//!
//! ## Steps to add a new mode
//! 1. Create `src/genres/<name>.rs`, feature-gated as `genre-<name>`.
//! 2. Own the mode's state: candidates, player position, score, a `WyRand`.
//! 3. Pick a `Preset` (or custom `ScoringWeights`) and a curve role.
//! 4. Call `fire_once`, then apply the outcome to your state.

use crate::Candidate;
use crate::error::Result;
use crate::mechanics::curve::Curve;
use crate::mechanics::sample::sample_categorical;
use crate::mechanics::stoch::UnitSource;
use crate::systems::fire_outcome::{DeltaTable, FireOutcome, resolve};
use crate::systems::scoring::build_probabilities;
use crate::systems::weights::ScoringWeights;

/// Result of one fire action.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundReport {
    /// One entry per candidate, in candidate order.
    pub probabilities: Vec<f64>,
    pub outcome: FireOutcome,
}

pub fn fire_once<U: UnitSource + ?Sized>(
    candidates: &[Candidate],
    correct: bool,
    curve: Option<&Curve<'_>>,
    weights: &ScoringWeights,
    deltas: &DeltaTable,
    rng: &mut U,
) -> Result<RoundReport> {
    let probabilities = build_probabilities(candidates, correct, curve, weights)?;
    let index = sample_categorical(&probabilities, rng)?;
    let outcome = resolve(candidates, &probabilities, index, correct, deltas)?;
    Ok(RoundReport { probabilities, outcome })
}
