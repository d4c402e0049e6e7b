// src/genres/adventure.rs
#![cfg(feature = "genre-adventure")]

//! Adventure (platformer) mode.
//!
//! A correct answer powers a jump, climb or swing at full strength; a wrong
//! one at `weak_power`. The move's trajectory becomes a proximity curve, so
//! ledges close to where the move would carry the player are the likely
//! landings. Safe ledges move the player; hazards cost points and leave the
//! player where they stood.

use bevy_prng::WyRand;
use serde::{Deserialize, Serialize};

use crate::Candidate;
use crate::error::{EngineError, Result};
use crate::genres::sdk::{RoundReport, fire_once};
use crate::mechanics::curve::Curve;
use crate::mechanics::stoch;
use crate::systems::fire_outcome::DeltaTable;
use crate::systems::weights::{Preset, ScoringWeights};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    Jump,
    Climb,
    Swing,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdventureConfig {
    pub weights: ScoringWeights,
    pub deltas: DeltaTable,
    /// Peak height of a full-power jump.
    pub jump_height: f64,
    /// Horizontal distance of a full-power jump.
    pub jump_reach: f64,
    pub climb_reach: f64,
    /// Height lost per unit of horizontal offset while climbing.
    pub climb_drift: f64,
    pub swing_radius: f64,
    /// Power multiplier after a wrong answer, in `(0, 1]`.
    pub weak_power: f64,
}

impl Default for AdventureConfig {
    fn default() -> Self {
        Self {
            weights: Preset::Adventure.weights(),
            deltas: DeltaTable::default(),
            jump_height: 2.0,
            jump_reach: 4.0,
            climb_reach: 3.0,
            climb_drift: 2.0,
            swing_radius: 3.0,
            weak_power: 0.5,
        }
    }
}

impl AdventureConfig {
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        let lengths = [
            ("jump_height", self.jump_height),
            ("jump_reach", self.jump_reach),
            ("climb_reach", self.climb_reach),
            ("swing_radius", self.swing_radius),
        ];
        if let Some((name, v)) = lengths.iter().find(|(_, v)| !(v.is_finite() && *v > 0.0)) {
            return Err(EngineError::InvalidConfig(format!("{name} must be positive, got {v}")));
        }
        if !(self.climb_drift.is_finite() && self.climb_drift >= 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "climb_drift must be non-negative, got {}",
                self.climb_drift
            )));
        }
        if !(self.weak_power > 0.0 && self.weak_power <= 1.0) {
            return Err(EngineError::InvalidConfig(format!(
                "weak_power must be in (0, 1], got {}",
                self.weak_power
            )));
        }
        Ok(())
    }
}

/// Where a move would carry the player, as a height over x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trajectory {
    pub kind: MoveKind,
    pub origin: (f64, f64),
    pub power: f64,
    cfg: AdventureConfig,
}

impl Trajectory {
    pub fn new(kind: MoveKind, origin: (f64, f64), power: f64, cfg: &AdventureConfig) -> Self {
        Self { kind, origin, power, cfg: *cfg }
    }

    pub fn height_at(&self, x: f64) -> f64 {
        let (ox, oy) = self.origin;
        match self.kind {
            // Parabola through the origin and (ox + reach, oy), peaking midway.
            MoveKind::Jump => {
                let half = 0.5 * self.cfg.jump_reach * self.power;
                let u = (x - ox - half) / half;
                oy + self.cfg.jump_height * self.power * (1.0 - u * u)
            }
            // Straight up, falling off with horizontal offset.
            MoveKind::Climb => {
                oy + self.cfg.climb_reach * self.power - self.cfg.climb_drift * (x - ox).abs()
            }
            // Lower half-circle around a pivot ahead of and above the origin.
            MoveKind::Swing => {
                let r = self.cfg.swing_radius * self.power;
                let (cx, cy) = (ox + r, oy + r);
                let dx = (x - cx).abs().min(r);
                cy - (r * r - dx * dx).sqrt()
            }
        }
    }
}

pub struct AdventureScene {
    cfg: AdventureConfig,
    ledges: Vec<Candidate>,
    player: (f64, f64),
    score: i64,
    rng: WyRand,
}

impl AdventureScene {
    pub fn new(cfg: AdventureConfig, ledges: Vec<Candidate>, start: (f64, f64), seed: u64) -> Result<Self> {
        cfg.validate()?;
        if ledges.is_empty() {
            return Err(EngineError::EmptyCandidateSet);
        }
        Ok(Self { cfg, ledges, player: start, score: 0, rng: stoch::seeded(seed) })
    }

    pub fn trajectory(&self, kind: MoveKind, correct: bool) -> Trajectory {
        let power = if correct { 1.0 } else { self.cfg.weak_power };
        Trajectory::new(kind, self.player, power, &self.cfg)
    }

    pub fn attempt(&mut self, kind: MoveKind, correct: bool) -> Result<RoundReport> {
        let traj = self.trajectory(kind, correct);
        let f = |x: f64| traj.height_at(x);
        let curve = Curve::proximity(&f);
        let report = fire_once(
            &self.ledges,
            correct,
            Some(&curve),
            &self.cfg.weights,
            &self.cfg.deltas,
            &mut self.rng,
        )?;

        self.score += report.outcome.total;
        let landed = self.ledges[report.outcome.index];
        log::debug!("{kind:?} (correct={correct}) landed on ledge {}, score {}", landed.id, self.score);
        if !landed.hazard {
            self.player = (landed.x, landed.y);
        }
        Ok(report)
    }

    /// Swap in the next screen's ledges.
    pub fn set_ledges(&mut self, ledges: Vec<Candidate>) -> Result<()> {
        if ledges.is_empty() {
            return Err(EngineError::EmptyCandidateSet);
        }
        self.ledges = ledges;
        Ok(())
    }

    pub fn ledges(&self) -> &[Candidate] { &self.ledges }
    pub fn player(&self) -> (f64, f64) { self.player }
    pub fn score(&self) -> i64 { self.score }
}
