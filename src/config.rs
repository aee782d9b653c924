//! Configuration for cosmology generation.
//!
//! The defaults are the constants of the fixed sampling procedure. Changing
//! any of them changes the output for a given seed.

use std::path::Path;
use serde::{Serialize, Deserialize};
use crate::color::Rgb;
use crate::error::{CosmologyError, Result};

/// Version of the sampling procedure. Output for a seed is only stable within one version.
pub const ALGORITHM_VERSION: u32 = 1;

/// Exclusive upper bound on the sampled body count.
pub const MAX_BODY_COUNT: u32 = 16;

/// Largest rounding precision that still fits an `f64` mantissa.
pub const MAX_PRECISION: u32 = 15;

/// Tunable constants of the generation engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Half-open range for the number of sampled bodies (default: 4..16).
    pub body_count_range: (u32, u32),

    /// Half-open range for the skew-normal scale (default: 4..16).
    pub scale_range: (u32, u32),

    /// Skew-normal shape parameter (default: 2.0).
    pub skew_shape: f64,

    /// Skew-normal location (default: 0.0).
    pub skew_location: f64,

    /// Distance of the central body, always injected (default: 0.0 AU).
    pub central_anchor: f64,

    /// Distance of the home body, injected unless already sampled (default: 1.0 AU).
    pub home_anchor: f64,

    /// Bodies at or inside this distance are visible (default: 9.5 AU).
    pub visibility_threshold: f64,

    /// Color forced onto the central body (default: orange).
    pub central_rgb: Rgb,

    /// Decimal places kept on distances (default: 2).
    pub precision: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            body_count_range: (4, 16),
            scale_range: (4, 16),
            skew_shape: 2.0,
            skew_location: 0.0,
            central_anchor: 0.0,
            home_anchor: 1.0,
            visibility_threshold: 9.5,
            central_rgb: Rgb::new(255, 165, 0),
            precision: 2,
        }
    }
}

impl GenerationConfig {
    /// Reject configurations the engine cannot honour.
    ///
    /// At least one body must be sampled so that, with the central anchor,
    /// every cosmology has two or more luminaries. Generation stays bounded by
    /// [`MAX_BODY_COUNT`], and rounding beyond [`MAX_PRECISION`] places would
    /// overflow to NaN distances.
    pub fn validate(&self) -> Result<()> {
        let (lo, hi) = self.body_count_range;
        if lo < 1 || lo >= hi {
            return Err(CosmologyError::Config(format!(
                "body_count_range must be a non-empty range starting at 1 or more, got {}..{}",
                lo, hi
            )));
        }
        if hi > MAX_BODY_COUNT {
            return Err(CosmologyError::Config(format!(
                "body_count_range may not extend past {}, got {}..{}",
                MAX_BODY_COUNT, lo, hi
            )));
        }

        if self.precision > MAX_PRECISION {
            return Err(CosmologyError::Config(format!(
                "precision must be at most {} decimal places, got {}",
                MAX_PRECISION, self.precision
            )));
        }

        let (lo, hi) = self.scale_range;
        if lo < 1 || lo >= hi {
            return Err(CosmologyError::Config(format!(
                "scale_range must be a non-empty range of positive scales, got {}..{}",
                lo, hi
            )));
        }

        let finite = [
            ("skew_shape", self.skew_shape),
            ("skew_location", self.skew_location),
            ("central_anchor", self.central_anchor),
            ("home_anchor", self.home_anchor),
            ("visibility_threshold", self.visibility_threshold),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(CosmologyError::Config(format!("{} must be finite, got {}", name, value)));
        }

        if self.visibility_threshold < 0.0 {
            return Err(CosmologyError::Config(format!(
                "visibility_threshold must be non-negative, got {}",
                self.visibility_threshold
            )));
        }

        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GenerationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
