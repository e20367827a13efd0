//! Engine configuration.
//!
//! Every field has a default, and the defaults reproduce the published
//! formulas exactly:
//!
//! ```text
//! weight(u, v)   = 1 / (1.0 × sharedPlaces + 0.1 × sharedCategories + 0.01)
//! suitability(p) = likes(p) / (distance(p, centroid) + 0.01)
//! ```

use serde::{Deserialize, Serialize};
use crate::{Error, Result};

/// Coefficients of the affinity (edge weight) formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AffinityWeights {
    pub shared_place: f64,
    pub shared_category: f64,
    /// Added to the denominator; keeps every weight finite and positive.
    pub smoothing: f64,
}

impl Default for AffinityWeights {
    fn default() -> Self {
        Self {
            shared_place: 1.0,
            shared_category: 0.1,
            smoothing: 0.01,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub affinity: AffinityWeights,
    /// Added to the centroid distance when scoring place suitability.
    pub suitability_smoothing: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            affinity: AffinityWeights::default(),
            suitability_smoothing: 0.01,
        }
    }
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON document. Missing fields take their
    /// defaults. The result is validated.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let a = &self.affinity;
        for (name, val) in [
            ("affinity.shared_place", a.shared_place),
            ("affinity.shared_category", a.shared_category),
        ] {
            if !val.is_finite() || val < 0.0 {
                return Err(Error::Config(format!("{name} must be finite and non-negative, got {val}")));
            }
        }
        for (name, val) in [
            ("affinity.smoothing", a.smoothing),
            ("suitability_smoothing", self.suitability_smoothing),
        ] {
            if !val.is_finite() || val <= 0.0 {
                return Err(Error::Config(format!("{name} must be finite and positive, got {val}")));
            }
        }
        Ok(())
    }
}
