/*!
`grapple_odds` — probability-weighted target selection for answer-driven
grapple/jump mechanics.

What it does
- Turns a set of candidate anchors, a correctness signal and an optional
  line/curve into a probability vector (score → softmax).
- Samples a landing index from that vector with a caller-supplied RNG.
- Derives a confidence bonus from the vector's entropy.

How to use (call surface only)
- Build `Candidate`s (or let `systems::anchor_spawn` draw them).
- `systems::scoring::build_probabilities(&cands, correct, curve, &weights)`
- `mechanics::sample_categorical(&probs, &mut rng)`
- `mechanics::calculate_confidence_bonus(&probs)`
- Or compose all three with `genres::fire_once`.

What it does NOT do
- No rendering, no audio, no animation, no persistence. The engine holds no
  state between calls; randomness is always passed in.
*/

use serde::{Deserialize, Serialize};

/// A point the player may land on.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub hazard: bool,
    /// Progress toward the goal, in `[0, 1]`.
    pub structural_score: f64,
}

impl Candidate {
    pub fn new(id: u32, x: f64, y: f64, hazard: bool, structural_score: f64) -> Self {
        Self { id, x, y, hazard, structural_score }
    }
}

pub mod config;
pub mod error;
pub mod mechanics;
pub mod systems;
pub mod genres;

pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use mechanics::{
    Curve, CurveMode, calculate_confidence_bonus, calculate_entropy, sample_categorical, softmax,
};
pub use systems::scoring::{build_probabilities, compute_scores};
pub use systems::weights::{Preset, ScoringWeights};
