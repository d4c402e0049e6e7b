//! Anchor spawning: draw a fresh candidate set for a round.
//!
//! Positions are uniform over the configured box, hazards are Bernoulli, and
//! the structural score is the normalized x position. When `goal_x` is set
//! the set always contains at least one safe anchor at or past it.

use serde::{Deserialize, Serialize};

use crate::Candidate;
use crate::error::{EngineError, Result};
use crate::mechanics::stoch::{self, UnitSource};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub count: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub hazard_chance: f64,
    pub goal_x: Option<f64>,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            count: 8,
            x_min: 0.0,
            x_max: 10.0,
            y_min: 0.0,
            y_max: 10.0,
            hazard_chance: 0.3,
            goal_x: Some(9.0),
        }
    }
}

impl SpawnConfig {
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(EngineError::InvalidConfig("spawn count must be at least 1".into()));
        }
        let bounds = [
            ("x_min", self.x_min),
            ("x_max", self.x_max),
            ("y_min", self.y_min),
            ("y_max", self.y_max),
        ];
        if let Some((name, v)) = bounds.iter().find(|(_, v)| !v.is_finite()) {
            return Err(EngineError::InvalidConfig(format!("spawn bound {name} is {v}")));
        }
        if !(self.hazard_chance.is_finite() && (0.0..=1.0).contains(&self.hazard_chance)) {
            return Err(EngineError::InvalidConfig(format!(
                "hazard_chance must be in [0, 1], got {}",
                self.hazard_chance
            )));
        }
        if !(self.x_min < self.x_max) || !(self.y_min <= self.y_max) {
            return Err(EngineError::InvalidConfig(format!(
                "spawn box is empty: x [{}, {}), y [{}, {})",
                self.x_min, self.x_max, self.y_min, self.y_max
            )));
        }
        if let Some(g) = self.goal_x {
            if !(g >= self.x_min && g < self.x_max) {
                return Err(EngineError::InvalidConfig(format!(
                    "goal_x {g} outside [{}, {})",
                    self.x_min, self.x_max
                )));
            }
        }
        Ok(())
    }

    /// Normalized progress along x.
    #[inline]
    pub fn structural_score(&self, x: f64) -> f64 {
        ((x - self.x_min) / (self.x_max - self.x_min)).clamp(0.0, 1.0)
    }
}

pub fn spawn_anchors<U: UnitSource + ?Sized>(
    cfg: &SpawnConfig,
    first_id: u32,
    rng: &mut U,
) -> Result<Vec<Candidate>> {
    cfg.validate()?;

    let mut anchors = Vec::with_capacity(cfg.count);
    for k in 0..cfg.count {
        let x = stoch::uniform(rng, cfg.x_min, cfg.x_max);
        let y = stoch::uniform(rng, cfg.y_min, cfg.y_max);
        let hazard = stoch::bernoulli(rng, cfg.hazard_chance);
        anchors.push(Candidate {
            id: first_id.wrapping_add(k as u32),
            x,
            y,
            hazard,
            structural_score: cfg.structural_score(x),
        });
    }

    if let Some(goal_x) = cfg.goal_x {
        let has_goal = anchors.iter().any(|a| !a.hazard && a.x >= goal_x);
        if !has_goal {
            let x = stoch::uniform(rng, goal_x, cfg.x_max);
            let y = stoch::uniform(rng, cfg.y_min, cfg.y_max);
            log::debug!("no safe anchor past goal_x={goal_x}; forcing one at ({x:.2}, {y:.2})");
            if let Some(last) = anchors.last_mut() {
                last.x = x;
                last.y = y;
                last.hazard = false;
                last.structural_score = cfg.structural_score(x);
            }
        }
    }

    Ok(anchors)
}
