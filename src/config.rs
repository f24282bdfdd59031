//! Configuration management and validation.
//!
//! Holds the tunable scoring parameters of the verification engine and the
//! optional station table to merge into the built-in registry. Every field
//! defaults to the standard scoring literals, so a configuration file only
//! needs to name the values it changes.

use crate::constants::{
    DEFAULT_CATEGORY_BONUS, DEFAULT_CLOUD_WEIGHT, DEFAULT_SEVERE_TEMPORARY_WEIGHT,
    DEFAULT_TEMPORARY_WEIGHT, DEFAULT_TRANSITION_BONUS, DEFAULT_TREND_THRESHOLD,
    DEFAULT_VISIBILITY_WEIGHT, DEFAULT_WEATHER_WEIGHT, DEFAULT_WIND_WEIGHT,
    TOTAL_PARAMETER_WEIGHT,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// Share of the composite score given to each parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeWeights {
    pub wind: f64,
    pub visibility: f64,
    pub cloud: f64,
    pub weather: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            wind: DEFAULT_WIND_WEIGHT,
            visibility: DEFAULT_VISIBILITY_WEIGHT,
            cloud: DEFAULT_CLOUD_WEIGHT,
            weather: DEFAULT_WEATHER_WEIGHT,
        }
    }
}

impl CompositeWeights {
    pub fn total(&self) -> f64 {
        self.wind + self.visibility + self.cloud + self.weather
    }
}

/// Scoring parameters for forecast verification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    pub weights: CompositeWeights,

    /// Points added when visibility and cloud categories both agree
    pub category_bonus: f64,

    /// Points added to every comparison inside a BECMG window
    pub transition_bonus: f64,

    /// Weather confidence under an ordinary TEMPO group
    pub temporary_weight: f64,

    /// Weather confidence under a TEMPO group forecasting thunderstorms or heavy rain
    pub severe_temporary_weight: f64,

    /// Minimum first-to-last score change that counts as a trend
    pub trend_threshold: f64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            weights: CompositeWeights::default(),
            category_bonus: DEFAULT_CATEGORY_BONUS,
            transition_bonus: DEFAULT_TRANSITION_BONUS,
            temporary_weight: DEFAULT_TEMPORARY_WEIGHT,
            severe_temporary_weight: DEFAULT_SEVERE_TEMPORARY_WEIGHT,
            trend_threshold: DEFAULT_TREND_THRESHOLD,
        }
    }
}

impl VerificationConfig {
    pub fn with_weights(mut self, weights: CompositeWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_transition_bonus(mut self, bonus: f64) -> Self {
        self.transition_bonus = bonus;
        self
    }

    pub fn with_temporary_weights(mut self, normal: f64, severe: f64) -> Self {
        self.temporary_weight = normal;
        self.severe_temporary_weight = severe;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("wind", self.weights.wind),
            ("visibility", self.weights.visibility),
            ("cloud", self.weights.cloud),
            ("weather", self.weights.weather),
        ];
        for (name, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::configuration(format!(
                    "{} weight must be a non-negative number, got {}",
                    name, weight
                )));
            }
        }

        let total = self.weights.total();
        if (total - TOTAL_PARAMETER_WEIGHT).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(Error::configuration(format!(
                "Parameter weights must sum to {}, got {:.3}",
                TOTAL_PARAMETER_WEIGHT, total
            )));
        }

        for (name, bonus) in [
            ("category_bonus", self.category_bonus),
            ("transition_bonus", self.transition_bonus),
            ("trend_threshold", self.trend_threshold),
        ] {
            if !bonus.is_finite() || bonus < 0.0 {
                return Err(Error::configuration(format!(
                    "{} must be a non-negative number, got {}",
                    name, bonus
                )));
            }
        }

        for (name, weight) in [
            ("temporary_weight", self.temporary_weight),
            ("severe_temporary_weight", self.severe_temporary_weight),
        ] {
            if !(weight > 0.0 && weight <= 1.0) {
                return Err(Error::configuration(format!(
                    "{} must be in (0, 1], got {}",
                    name, weight
                )));
            }
        }

        Ok(())
    }
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub verification: VerificationConfig,

    /// JSON station table merged into the built-in registry
    pub stations_file: Option<PathBuf>,
}

impl Config {
    /// Load and validate a JSON configuration file
    ///
    /// A relative `stations_file` is resolved against the directory holding
    /// the configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let text = fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;
        let mut config: Config = serde_json::from_str(&text).map_err(|e| {
            Error::json(format!("Invalid config file {}", path.display()), e)
        })?;

        if let Some(stations) = config.stations_file.take() {
            let resolved = match path.parent() {
                Some(dir) if stations.is_relative() => dir.join(stations),
                _ => stations,
            };
            config.stations_file = Some(resolved);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.verification.validate()
    }
}
