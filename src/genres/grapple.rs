// src/genres/grapple.rs
#![cfg(feature = "genre-grapple")]

//! Grapple arena mode.
//!
//! The player tilts a line `y = m x + b`, answers a question, then fires.
//! Anchors under the line are favored on a correct answer, hazards on a
//! wrong one. A safe landing moves the player and respawns the anchors; a
//! hazard landing knocks the player back to where they fired from.

use bevy_prng::WyRand;

use crate::Candidate;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::genres::sdk::{RoundReport, fire_once};
use crate::mechanics::curve::Curve;
use crate::mechanics::stoch;
use crate::systems::anchor_spawn::{SpawnConfig, spawn_anchors};
use crate::systems::fire_outcome::DeltaTable;
use crate::systems::weights::ScoringWeights;

pub struct GrappleArena {
    weights: ScoringWeights,
    deltas: DeltaTable,
    spawn: SpawnConfig,
    anchors: Vec<Candidate>,
    next_id: u32,
    player: (f64, f64),
    score: i64,
    rounds: u32,
    rng: WyRand,
}

impl GrappleArena {
    pub fn new(cfg: &EngineConfig, seed: u64) -> Result<Self> {
        cfg.validate()?;
        let spawn = cfg.spawn;
        // The magnet pulls toward exactly the anchors that count as a goal.
        let mut weights = cfg.weights();
        if let (Some(g), Some(goal_x)) = (weights.goal_magnet.as_mut(), spawn.goal_x) {
            g.threshold = spawn.structural_score(goal_x);
        }
        let mut arena = Self {
            weights,
            deltas: cfg.deltas,
            spawn,
            anchors: Vec::new(),
            next_id: 0,
            player: (spawn.x_min, spawn.y_min),
            score: 0,
            rounds: 0,
            rng: stoch::seeded(seed),
        };
        arena.respawn()?;
        Ok(arena)
    }

    /// Discard the current anchors and draw a new set.
    pub fn respawn(&mut self) -> Result<()> {
        self.anchors = spawn_anchors(&self.spawn, self.next_id, &mut self.rng)?;
        self.next_id = self.next_id.wrapping_add(self.anchors.len() as u32);
        Ok(())
    }

    /// One fire action. `line` is `(m, b)`; `None` leaves every anchor under.
    pub fn fire(&mut self, correct: bool, line: Option<(f64, f64)>) -> Result<RoundReport> {
        let curve = line.map(|(m, b)| Curve::line(m, b));
        let report = fire_once(
            &self.anchors,
            correct,
            curve.as_ref(),
            &self.weights,
            &self.deltas,
            &mut self.rng,
        )?;

        self.rounds += 1;
        self.score += report.outcome.total;
        let landed = self.anchors[report.outcome.index];
        log::debug!(
            "round {}: landed on anchor {} ({}), score now {}",
            self.rounds,
            landed.id,
            if landed.hazard { "hazard" } else { "safe" },
            self.score
        );
        if !landed.hazard {
            self.player = (landed.x, landed.y);
            self.respawn()?;
        }
        Ok(report)
    }

    /// Always false for an arena spawned without a goal line.
    pub fn reached_goal(&self) -> bool {
        self.spawn.goal_x.is_some_and(|g| self.player.0 >= g)
    }

    pub fn weights(&self) -> &ScoringWeights { &self.weights }
    pub fn anchors(&self) -> &[Candidate] { &self.anchors }
    pub fn player(&self) -> (f64, f64) { self.player }
    pub fn score(&self) -> i64 { self.score }
    pub fn rounds(&self) -> u32 { self.rounds }
}
