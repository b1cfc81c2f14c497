// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tunables for entity movement resolution.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for resolver configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Slope angle outside `0..=90` degrees.
    #[error("max slope climb angle must be within 0..=90 degrees, got {0}")]
    InvalidSlopeAngle(f64),
    /// Minimum step not strictly positive.
    #[error("min step must be positive, got {0}")]
    InvalidMinStep(f64),
    /// Feet fraction outside `(0, 1]`.
    #[error("feet height fraction must be within (0, 1], got {0}")]
    InvalidFeetFraction(f64),
    /// Deserialization failure.
    #[error("serde error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Resolver tunables. Missing JSON fields fall back to [`Default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Steepest slope (degrees) an entity walks up instead of being blocked.
    pub max_slope_climb_angle_deg: f64,
    /// Lower bound on the per-step climb allowance.
    pub min_step: f64,
    /// Height of the feet slab used for obstacle ordering, as a fraction of
    /// the entity's height.
    pub feet_height_fraction: f64,
    /// Visit obstacles nearest the feet first during the horizontal pass.
    pub sort_obstacles_by_feet_distance: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_slope_climb_angle_deg: 45.0,
            min_step: 1e-2,
            feet_height_fraction: 0.1,
            sort_obstacles_by_feet_distance: true,
        }
    }
}

impl ResolverConfig {
    /// Checks every field against its valid range.
    ///
    /// # Errors
    /// Returns the first out-of-range field as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_slope_angle(self.max_slope_climb_angle_deg)?;
        if self.min_step.is_nan() || self.min_step <= 0.0 {
            return Err(ConfigError::InvalidMinStep(self.min_step));
        }
        let f = self.feet_height_fraction;
        if f.is_nan() || f <= 0.0 || f > 1.0 {
            return Err(ConfigError::InvalidFeetFraction(f));
        }
        Ok(())
    }

    /// Parses and validates a JSON document.
    ///
    /// # Errors
    /// [`ConfigError::Json`] on malformed input, otherwise whatever
    /// [`Self::validate`] reports.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }
}

pub(crate) fn validate_slope_angle(angle_deg: f64) -> Result<(), ConfigError> {
    if (0.0..=90.0).contains(&angle_deg) {
        Ok(())
    } else {
        Err(ConfigError::InvalidSlopeAngle(angle_deg))
    }
}
