//! The compatibility result record returned to callers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Score returned when a pair cannot be scored.
pub const NEUTRAL_SCORE: u8 = 50;

/// Level that goes with [`NEUTRAL_SCORE`].
pub const NEUTRAL_LEVEL: u8 = 3;

/// Relationship category shown next to the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChemType {
    /// High score across many differing axes.
    Complement,
    /// Good or average score between similar types.
    Stable,
    /// Middling or low score that needs work.
    Tuning,
    /// Low score across many differing axes.
    Volatile,
}

impl ChemType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ChemType::Complement => "COMPLEMENT",
            ChemType::Stable => "STABLE",
            ChemType::Tuning => "TUNING",
            ChemType::Volatile => "VOLATILE",
        }
    }
}

impl fmt::Display for ChemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signed preference deltas and their clamped sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentBreakdown {
    pub strength: f64,
    pub conflict: f64,
    pub energy: f64,
    pub total: f64,
}

impl AdjustmentBreakdown {
    pub const ZERO: AdjustmentBreakdown = AdjustmentBreakdown {
        strength: 0.0,
        conflict: 0.0,
        energy: 0.0,
        total: 0.0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Outcome of scoring one pair of participants.
///
/// Plain numbers and strings only, so the record can be cached and handed
/// to any renderer unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    /// Type-only score, 0..=100.
    pub score_int: u8,
    /// Final score including tie-break and preferences, 0.0..=100.0.
    pub score: f64,
    /// Severity band, 1..=5.
    pub level: u8,
    pub chem_type: ChemType,
    pub adjustment: AdjustmentBreakdown,
    /// Deterministic per-pair offset used for stable ordering.
    pub tiebreak: f64,
    /// Number of differing type axes, 0..=4.
    pub diff_axes: u8,
    /// Set when a code could not be parsed and the neutral result was used.
    pub fallback: bool,
}

impl CompatibilityResult {
    /// The neutral result rendered for pairs that cannot be scored.
    pub fn neutral() -> Self {
        CompatibilityResult {
            score_int: NEUTRAL_SCORE,
            score: f64::from(NEUTRAL_SCORE),
            level: NEUTRAL_LEVEL,
            chem_type: ChemType::Tuning,
            adjustment: AdjustmentBreakdown::ZERO,
            tiebreak: 0.0,
            diff_axes: 0,
            fallback: true,
        }
    }
}
