//! Simulator configuration.
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `BIAS_LAB` prefix
//! and `__` as the nesting separator; every field has a default, so
//! `SimulatorConfig::default()` is always a valid configuration.
//!
//! # Environment Variable Format
//!
//! - `BIAS_LAB__EVIDENCE_SHUFFLE_SEED=7`
//! - `BIAS_LAB__ANCHOR_LOWER_FACTOR=0.5`

use serde::Deserialize;
use thiserror::Error;

/// Default seed for the deterministic evidence shuffle.
pub const DEFAULT_EVIDENCE_SHUFFLE_SEED: u64 = 42;

/// Default lower bound factor for the anchor draw range.
pub const DEFAULT_ANCHOR_LOWER_FACTOR: f64 = 0.3;

/// Default upper bound factor for the anchor draw range.
pub const DEFAULT_ANCHOR_UPPER_FACTOR: f64 = 2.5;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Tunable parameters of the experiment engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Fixed seed for the evidence presentation shuffle. One seed is shared
    /// by all scenarios; ordering is reproducible across runs and never
    /// affects scoring.
    pub evidence_shuffle_seed: u64,

    /// Anchor draw lower bound as a multiple of the task's actual value.
    pub anchor_lower_factor: f64,

    /// Anchor draw upper bound as a multiple of the task's actual value.
    pub anchor_upper_factor: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            evidence_shuffle_seed: DEFAULT_EVIDENCE_SHUFFLE_SEED,
            anchor_lower_factor: DEFAULT_ANCHOR_LOWER_FACTOR,
            anchor_upper_factor: DEFAULT_ANCHOR_UPPER_FACTOR,
        }
    }
}

impl SimulatorConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present (for development), then reads
    /// `BIAS_LAB__*` variables over the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable fails to parse or the resulting
    /// values are inconsistent (see [`SimulatorConfig::validate`]).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config: Self = config::Config::builder()
            .add_source(config::Environment::with_prefix("BIAS_LAB").separator("__"))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.anchor_lower_factor <= 0.0 {
            return Err(ConfigError::Invalid(
                "anchor_lower_factor must be positive".to_string(),
            ));
        }
        if self.anchor_upper_factor <= self.anchor_lower_factor {
            return Err(ConfigError::Invalid(format!(
                "anchor_upper_factor ({}) must exceed anchor_lower_factor ({})",
                self.anchor_upper_factor, self.anchor_lower_factor
            )));
        }
        Ok(())
    }
}
