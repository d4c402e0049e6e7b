//! Engine configuration bundle, loadable from JSON.
//!
//! Missing fields fall back to defaults, so `{}` is a valid config and
//! `{"preset": "CurveFit"}` switches presets without restating weights.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
#[cfg(feature = "system-anchor_spawn")]
use crate::systems::anchor_spawn::SpawnConfig;
#[cfg(feature = "system-fire_outcome")]
use crate::systems::fire_outcome::DeltaTable;
use crate::systems::weights::{Preset, ScoringWeights};

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub preset: Preset,
    /// Replaces the preset's weights when set.
    pub weights: Option<ScoringWeights>,
    #[cfg(feature = "system-fire_outcome")]
    pub deltas: DeltaTable,
    #[cfg(feature = "system-anchor_spawn")]
    pub spawn: SpawnConfig,
}

impl EngineConfig {
    pub fn from_preset(preset: Preset) -> Self {
        Self { preset, ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Effective scoring weights.
    pub fn weights(&self) -> ScoringWeights {
        self.weights.unwrap_or_else(|| self.preset.weights())
    }

    pub fn validate(&self) -> Result<()> {
        self.weights().validate()?;
        #[cfg(feature = "system-anchor_spawn")]
        self.spawn.validate()?;
        Ok(())
    }
}
