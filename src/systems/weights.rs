//! Scoring weights and the named presets built from them.
//!
//! Each game mode used to carry its own inline constants. They now share one
//! scorer and differ only by the `ScoringWeights` they pass in.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Correctness term, indexed by (correct, under-curve, hazard).
/// Hazard rows ignore the under-curve flag.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectnessTable {
    pub correct_under: f64,
    pub correct_over: f64,
    pub correct_hazard: f64,
    pub wrong_under: f64,
    pub wrong_over: f64,
    pub wrong_hazard: f64,
}

impl Default for CorrectnessTable {
    fn default() -> Self {
        Self {
            correct_under: 2.0,
            correct_over: -0.25,
            correct_hazard: -2.0,
            wrong_under: -0.5,
            wrong_over: 0.5,
            wrong_hazard: 1.5,
        }
    }
}

impl CorrectnessTable {
    #[inline]
    pub fn term(&self, correct: bool, under: bool, hazard: bool) -> f64 {
        match (correct, hazard, under) {
            (true, true, _) => self.correct_hazard,
            (true, false, true) => self.correct_under,
            (true, false, false) => self.correct_over,
            (false, true, _) => self.wrong_hazard,
            (false, false, true) => self.wrong_under,
            (false, false, false) => self.wrong_over,
        }
    }
}

/// Extra pull toward candidates past the finish line. The wrong-answer bonus
/// stays positive so progress is never ruled out.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalMagnet {
    /// Structural score at or above which a candidate counts as "at goal".
    pub threshold: f64,
    pub correct_bonus: f64,
    pub wrong_bonus: f64,
}

impl Default for GoalMagnet {
    fn default() -> Self {
        Self { threshold: 0.9, correct_bonus: 3.0, wrong_bonus: 1.0 }
    }
}

impl GoalMagnet {
    #[inline]
    pub fn bonus(&self, structural_score: f64, correct: bool) -> f64 {
        if structural_score < self.threshold {
            0.0
        } else if correct {
            self.correct_bonus
        } else {
            self.wrong_bonus
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub structural: f64,
    pub correctness: CorrectnessTable,
    /// Weight on `-|y - f(x)|` (proximity curves only).
    pub curve_fit: f64,
    /// Flat penalty subtracted from every hazard, on top of the table's
    /// hazard rows. Zero disables it.
    pub hazard_penalty: f64,
    pub goal_magnet: Option<GoalMagnet>,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            structural: 2.0,
            correctness: CorrectnessTable::default(),
            curve_fit: 1.0,
            hazard_penalty: 0.0,
            goal_magnet: None,
        }
    }
}

impl ScoringWeights {
    /// Rejects weights that break the scoring contract: non-finite terms,
    /// a correctness table with the wrong signs, a negative hazard penalty,
    /// or a goal magnet that is weaker when right than when wrong (or zero
    /// when wrong).
    pub fn validate(&self) -> Result<()> {
        let t = &self.correctness;
        let mut terms = vec![
            ("structural", self.structural),
            ("curve_fit", self.curve_fit),
            ("hazard_penalty", self.hazard_penalty),
            ("correctness.correct_under", t.correct_under),
            ("correctness.correct_over", t.correct_over),
            ("correctness.correct_hazard", t.correct_hazard),
            ("correctness.wrong_under", t.wrong_under),
            ("correctness.wrong_over", t.wrong_over),
            ("correctness.wrong_hazard", t.wrong_hazard),
        ];
        if let Some(g) = &self.goal_magnet {
            terms.push(("goal_magnet.threshold", g.threshold));
            terms.push(("goal_magnet.correct_bonus", g.correct_bonus));
            terms.push(("goal_magnet.wrong_bonus", g.wrong_bonus));
        }
        if let Some((name, v)) = terms.iter().find(|(_, v)| !v.is_finite()) {
            return Err(EngineError::InvalidConfig(format!("weight {name} is {v}")));
        }

        let signs = [
            ("correctness.correct_under > 0", t.correct_under > 0.0),
            ("correctness.correct_over <= 0", t.correct_over <= 0.0),
            ("correctness.correct_hazard < 0", t.correct_hazard < 0.0),
            ("correctness.wrong_under <= 0", t.wrong_under <= 0.0),
            ("correctness.wrong_over >= 0", t.wrong_over >= 0.0),
            ("correctness.wrong_hazard > 0", t.wrong_hazard > 0.0),
            ("hazard_penalty >= 0", self.hazard_penalty >= 0.0),
        ];
        if let Some((rule, _)) = signs.iter().find(|(_, ok)| !ok) {
            return Err(EngineError::InvalidConfig(format!("weights violate {rule}")));
        }

        if let Some(g) = &self.goal_magnet {
            if !(0.0..=1.0).contains(&g.threshold) {
                return Err(EngineError::InvalidConfig(format!(
                    "goal_magnet.threshold must be in [0, 1], got {}",
                    g.threshold
                )));
            }
            if !(g.wrong_bonus > 0.0 && g.wrong_bonus <= g.correct_bonus) {
                return Err(EngineError::InvalidConfig(format!(
                    "goal_magnet needs 0 < wrong_bonus <= correct_bonus, got {} / {}",
                    g.wrong_bonus, g.correct_bonus
                )));
            }
        }
        Ok(())
    }
}

/// Named configurations, one per game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    /// Grapple arena: the player tilts a line; goal magnet on.
    #[default]
    Arena,
    /// Function curves scored by closeness, with a small hazard surcharge.
    CurveFit,
    /// Platformer jumps/climbs/swings along a trajectory.
    Adventure,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Arena => "Arena",
            Preset::CurveFit => "CurveFit",
            Preset::Adventure => "Adventure",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "arena" | "grapple" => Some(Preset::Arena),
            "curvefit" | "curve_fit" | "curve-fit" => Some(Preset::CurveFit),
            "adventure" | "platformer" => Some(Preset::Adventure),
            _ => None,
        }
    }

    pub fn weights(&self) -> ScoringWeights {
        match self {
            Preset::Arena => ScoringWeights {
                structural: 1.5,
                curve_fit: 0.0,
                goal_magnet: Some(GoalMagnet::default()),
                ..ScoringWeights::default()
            },
            Preset::CurveFit => ScoringWeights {
                structural: 1.0,
                curve_fit: 1.5,
                hazard_penalty: 0.5,
                ..ScoringWeights::default()
            },
            Preset::Adventure => ScoringWeights {
                structural: 1.0,
                curve_fit: 2.0,
                correctness: CorrectnessTable {
                    correct_under: 1.0,
                    correct_over: 0.0,
                    correct_hazard: -1.5,
                    wrong_under: 0.0,
                    wrong_over: 0.0,
                    wrong_hazard: 1.0,
                },
                ..ScoringWeights::default()
            },
        }
    }
}
