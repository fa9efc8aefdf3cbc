//! Configuration system for chemforge.
//!
//! Every weight, bonus, cap and threshold the engine uses lives here. The
//! built-in values form a single versioned set ([`DEFAULT_CONFIG_VERSION`]);
//! a deployment may load a different set from TOML or YAML once at startup,
//! after which it is frozen inside the engine.
//!
//! # Examples
//!
//! Override a few values and keep the defaults for the rest:
//!
//! ```
//! use chemforge_config::ScoringConfig;
//!
//! let config = ScoringConfig::from_toml_str(r#"
//!     version = "staging"
//!
//!     [pair]
//!     saturation_scale = 20.0
//!
//!     [classify]
//!     level_thresholds = [25.0, 45.0, 65.0, 85.0]
//! "#).unwrap();
//!
//! assert_eq!(config.pair.saturation_scale, 20.0);
//! assert_eq!(config.adjust.soft_cap, 4.0);
//! config.validate().unwrap();
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use chemforge_config::ScoringConfig;
//!
//! let config = ScoringConfig::load("chemforge.toml").unwrap_or_default();
//! assert_eq!(config, ScoringConfig::default());
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Version tag of the built-in constant set.
pub const DEFAULT_CONFIG_VERSION: &str = "2024.2";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main scoring configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct ScoringConfig {
    /// Tag identifying this set of constants. Part of every cache key.
    pub version: String,

    /// Directional function-stack scoring.
    pub pair: PairConfig,

    /// Deterministic per-pair offset.
    pub tiebreak: TiebreakConfig,

    /// Preference adjustment layer.
    pub adjust: AdjustConfig,

    /// Level bands and categories.
    pub classify: ClassifyConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_CONFIG_VERSION.to_string(),
            pair: PairConfig::default(),
            tiebreak: TiebreakConfig::default(),
            adjust: AdjustConfig::default(),
            classify: ClassifyConfig::default(),
        }
    }
}

impl ScoringConfig {
    /// Creates the built-in configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the version tag.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Checks that the configuration keeps scores bounded and bands ordered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version.trim().is_empty() {
            return Err(invalid("version must not be empty"));
        }
        self.pair.validate()?;
        self.tiebreak.validate()?;
        self.adjust.validate()?;
        self.classify.validate()
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(message.into())
}

fn require_finite(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(format!("{} must be finite, got {}", name, value)))
    }
}

/// Directional pair scoring constants.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct PairConfig {
    /// Weight per stack position: dominant, auxiliary, tertiary, inferior.
    pub position_weights: [f64; 4],

    /// Subtracted (times both weights) when two functions are identical.
    pub same_function_penalty: f64,

    /// Added (times both weights) when two functions share a core but not an attitude.
    pub mirror_bonus: f64,

    /// Added when one side's auxiliary mirrors the other's dominant.
    pub aux_mirrors_dominant_bonus: f64,

    /// Added when the two auxiliaries are opposites (e.g. `Te` and `Fi`).
    pub aux_opposite_bonus: f64,

    /// Added when both dominants share a core letter.
    pub shared_dominant_core_bonus: f64,

    /// Added when both stacks extravert the same kind of function.
    pub daily_rhythm_bonus: f64,

    /// Divisor applied before the `tanh` saturation curve.
    pub saturation_scale: f64,
}

impl Default for PairConfig {
    fn default() -> Self {
        Self {
            position_weights: [1.0, 0.7, 0.45, 0.25],
            same_function_penalty: 4.0,
            mirror_bonus: 8.0,
            aux_mirrors_dominant_bonus: 5.0,
            aux_opposite_bonus: 3.0,
            shared_dominant_core_bonus: 2.0,
            daily_rhythm_bonus: 1.5,
            saturation_scale: 18.0,
        }
    }
}

impl PairConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (i, weight) in self.position_weights.iter().enumerate() {
            require_finite("pair.position_weights", *weight)?;
            if *weight <= 0.0 {
                return Err(invalid(format!(
                    "pair.position_weights[{}] must be positive, got {}",
                    i, weight
                )));
            }
        }
        if self.position_weights.windows(2).any(|w| w[1] > w[0]) {
            return Err(invalid("pair.position_weights must not increase down the stack"));
        }
        for (name, value) in [
            ("pair.same_function_penalty", self.same_function_penalty),
            ("pair.mirror_bonus", self.mirror_bonus),
            ("pair.aux_mirrors_dominant_bonus", self.aux_mirrors_dominant_bonus),
            ("pair.aux_opposite_bonus", self.aux_opposite_bonus),
            ("pair.shared_dominant_core_bonus", self.shared_dominant_core_bonus),
            ("pair.daily_rhythm_bonus", self.daily_rhythm_bonus),
        ] {
            require_finite(name, value)?;
        }
        require_finite("pair.saturation_scale", self.saturation_scale)?;
        if self.saturation_scale <= 0.0 {
            return Err(invalid("pair.saturation_scale must be positive"));
        }
        Ok(())
    }
}

/// Tie-break offset constants.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct TiebreakConfig {
    /// Offsets fall in `[0, span)`.
    pub span: f64,

    /// Number of distinct offsets.
    pub buckets: u64,
}

impl Default for TiebreakConfig {
    fn default() -> Self {
        Self {
            span: 2.0,
            buckets: 2000,
        }
    }
}

impl TiebreakConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        require_finite("tiebreak.span", self.span)?;
        if self.span <= 0.0 {
            return Err(invalid("tiebreak.span must be positive"));
        }
        if self.buckets == 0 {
            return Err(invalid("tiebreak.buckets must be at least 1"));
        }
        Ok(())
    }
}

/// Preference adjustment constants.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct AdjustConfig {
    /// Multiplier from fit deviation to score points.
    pub strength_scale: f64,

    /// Bound on the strength delta.
    pub strength_cap: f64,

    /// Weight of engagement similarity within one axis pair.
    pub similarity_weight: f64,

    /// Weight of tilt complementarity within one axis pair.
    pub complement_weight: f64,

    /// Symmetric DIRECT/AVOID/MEDIATE/BURST table.
    pub conflict_matrix: [[f64; 4]; 4],

    /// Energy delta by tier gap 0, 1, 2.
    pub energy_gap_deltas: [f64; 3],

    /// Base scores below this get a reduced energy delta.
    pub low_base_threshold: f64,

    /// Factor applied to the energy delta below `low_base_threshold`.
    pub low_base_energy_factor: f64,

    /// Totals within this bound pass unchanged.
    pub soft_cap: f64,

    /// Totals approach but never reach this bound.
    pub hard_cap: f64,
}

impl Default for AdjustConfig {
    fn default() -> Self {
        Self {
            strength_scale: 5.0,
            strength_cap: 3.0,
            similarity_weight: 0.6,
            complement_weight: 0.4,
            conflict_matrix: [
                // DIRECT AVOID MEDIATE BURST
                [0.5, -1.0, 1.0, -1.5],
                [-1.0, -0.5, 0.5, -1.0],
                [1.0, 0.5, 1.0, 0.5],
                [-1.5, -1.0, 0.5, -2.0],
            ],
            energy_gap_deltas: [0.0, 0.75, 1.5],
            low_base_threshold: 45.0,
            low_base_energy_factor: 0.5,
            soft_cap: 4.0,
            hard_cap: 6.0,
        }
    }
}

impl AdjustConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("adjust.strength_scale", self.strength_scale),
            ("adjust.strength_cap", self.strength_cap),
            ("adjust.similarity_weight", self.similarity_weight),
            ("adjust.complement_weight", self.complement_weight),
            ("adjust.low_base_threshold", self.low_base_threshold),
            ("adjust.low_base_energy_factor", self.low_base_energy_factor),
            ("adjust.soft_cap", self.soft_cap),
            ("adjust.hard_cap", self.hard_cap),
        ] {
            require_finite(name, value)?;
        }
        for value in self.energy_gap_deltas {
            require_finite("adjust.energy_gap_deltas", value)?;
        }
        if self.strength_cap < 0.0 {
            return Err(invalid("adjust.strength_cap must not be negative"));
        }
        if self.similarity_weight < 0.0 || self.complement_weight < 0.0 {
            return Err(invalid("adjust similarity/complement weights must not be negative"));
        }
        for (i, row) in self.conflict_matrix.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                require_finite("adjust.conflict_matrix", *value)?;
                if *value != self.conflict_matrix[j][i] {
                    return Err(invalid(format!(
                        "adjust.conflict_matrix must be symmetric: [{}][{}]={} but [{}][{}]={}",
                        i, j, value, j, i, self.conflict_matrix[j][i]
                    )));
                }
            }
        }
        if self.soft_cap <= 0.0 || self.soft_cap >= self.hard_cap {
            return Err(invalid(format!(
                "adjust caps must satisfy 0 < soft_cap < hard_cap, got {} and {}",
                self.soft_cap, self.hard_cap
            )));
        }
        Ok(())
    }
}

/// Level bands and category rules.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct ClassifyConfig {
    /// Minimum scores for levels 2, 3, 4 and 5.
    pub level_thresholds: [f64; 4],

    /// Scores at or above this are in the high band.
    pub high_band: f64,

    /// Scores below this are in the low band.
    pub low_band: f64,

    /// In the high band, this many differing axes reads as COMPLEMENT.
    pub complement_min_diff: u8,

    /// In the middle band, at most this many differing axes reads as STABLE.
    pub stable_max_diff: u8,

    /// In the low band, this many differing axes reads as VOLATILE.
    pub volatile_min_diff: u8,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            level_thresholds: [30.0, 45.0, 65.0, 80.0],
            high_band: 65.0,
            low_band: 45.0,
            complement_min_diff: 3,
            stable_max_diff: 2,
            volatile_min_diff: 3,
        }
    }
}

impl ClassifyConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for value in self.level_thresholds {
            require_finite("classify.level_thresholds", value)?;
        }
        if self.level_thresholds.windows(2).any(|w| w[1] <= w[0]) {
            return Err(invalid("classify.level_thresholds must be strictly ascending"));
        }
        require_finite("classify.high_band", self.high_band)?;
        require_finite("classify.low_band", self.low_band)?;
        if self.low_band > self.high_band {
            return Err(invalid("classify.low_band must not exceed classify.high_band"));
        }
        for (name, value) in [
            ("classify.complement_min_diff", self.complement_min_diff),
            ("classify.stable_max_diff", self.stable_max_diff),
            ("classify.volatile_min_diff", self.volatile_min_diff),
        ] {
            if value > 4 {
                return Err(invalid(format!("{} must be at most 4, got {}", name, value)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
