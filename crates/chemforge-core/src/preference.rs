//! Optional behavioral preferences attached to a participant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ChemforgeError, Result};

/// Value assumed for a slider that was never filled in.
pub const NEUTRAL_SLIDER: u8 = 50;

const SLIDER_MAX: u8 = 100;

/// How a participant tends to handle disagreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConflictStyle {
    Direct,
    Avoid,
    Mediate,
    Burst,
}

impl ConflictStyle {
    pub const ALL: [ConflictStyle; 4] = [
        ConflictStyle::Direct,
        ConflictStyle::Avoid,
        ConflictStyle::Mediate,
        ConflictStyle::Burst,
    ];

    /// Row/column index into a 4x4 conflict table.
    pub const fn index(&self) -> usize {
        match self {
            ConflictStyle::Direct => 0,
            ConflictStyle::Avoid => 1,
            ConflictStyle::Mediate => 2,
            ConflictStyle::Burst => 3,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ConflictStyle::Direct => "DIRECT",
            ConflictStyle::Avoid => "AVOID",
            ConflictStyle::Mediate => "MEDIATE",
            ConflictStyle::Burst => "BURST",
        }
    }
}

impl fmt::Display for ConflictStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConflictStyle {
    type Err = ChemforgeError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        ConflictStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ChemforgeError::InvalidPreference(format!("conflict style '{}'", s)))
    }
}

/// Self-reported energy tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnergyLevel {
    Low,
    Mid,
    High,
}

impl EnergyLevel {
    pub const ALL: [EnergyLevel; 3] = [EnergyLevel::Low, EnergyLevel::Mid, EnergyLevel::High];

    pub const fn rank(&self) -> u8 {
        match self {
            EnergyLevel::Low => 0,
            EnergyLevel::Mid => 1,
            EnergyLevel::High => 2,
        }
    }

    /// Number of tiers between the two levels (0..=2).
    pub const fn gap(&self, other: &EnergyLevel) -> u8 {
        self.rank().abs_diff(other.rank())
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            EnergyLevel::Low => "LOW",
            EnergyLevel::Mid => "MID",
            EnergyLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnergyLevel {
    type Err = ChemforgeError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        EnergyLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ChemforgeError::InvalidPreference(format!("energy level '{}'", s)))
    }
}

/// The four strength sliders, already clamped and defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sliders {
    pub idea: u8,
    pub fact: u8,
    pub logic: u8,
    pub people: u8,
}

impl Sliders {
    pub const NEUTRAL: Sliders = Sliders {
        idea: NEUTRAL_SLIDER,
        fact: NEUTRAL_SLIDER,
        logic: NEUTRAL_SLIDER,
        people: NEUTRAL_SLIDER,
    };
}

/// Behavioral sliders and categories for one participant.
///
/// Every field is independently optional. Sliders are clamped to `0..=100`
/// on the way in and again on the way out, so deserialized out-of-range
/// values can never reach the scoring layer.
///
/// # Examples
///
/// ```
/// use chemforge_core::{ConflictStyle, EnergyLevel, PreferenceProfile};
///
/// let prefs = PreferenceProfile::new()
///     .with_logic(140)
///     .with_people(-3)
///     .with_conflict_style(ConflictStyle::Mediate)
///     .with_energy(EnergyLevel::High);
///
/// let sliders = prefs.sliders();
/// assert_eq!(sliders.logic, 100);
/// assert_eq!(sliders.people, 0);
/// assert_eq!(sliders.idea, 50);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceProfile {
    #[serde(deserialize_with = "de_slider")]
    idea: Option<u8>,
    #[serde(deserialize_with = "de_slider")]
    fact: Option<u8>,
    #[serde(deserialize_with = "de_slider")]
    logic: Option<u8>,
    #[serde(deserialize_with = "de_slider")]
    people: Option<u8>,
    conflict_style: Option<ConflictStyle>,
    energy: Option<EnergyLevel>,
}

fn clamp_slider(value: i64) -> u8 {
    value.clamp(0, i64::from(SLIDER_MAX)) as u8
}

/// Reads any integer slider and clamps it like the builders do.
fn de_slider<'de, D>(deserializer: D) -> std::result::Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.map(clamp_slider))
}

impl PreferenceProfile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idea(mut self, value: i64) -> Self {
        self.idea = Some(clamp_slider(value));
        self
    }

    pub fn with_fact(mut self, value: i64) -> Self {
        self.fact = Some(clamp_slider(value));
        self
    }

    pub fn with_logic(mut self, value: i64) -> Self {
        self.logic = Some(clamp_slider(value));
        self
    }

    pub fn with_people(mut self, value: i64) -> Self {
        self.people = Some(clamp_slider(value));
        self
    }

    pub fn with_conflict_style(mut self, style: ConflictStyle) -> Self {
        self.conflict_style = Some(style);
        self
    }

    pub fn with_energy(mut self, energy: EnergyLevel) -> Self {
        self.energy = Some(energy);
        self
    }

    /// Raw slider values as given, clamped: idea, fact, logic, people.
    pub fn raw_sliders(&self) -> [Option<u8>; 4] {
        [self.idea, self.fact, self.logic, self.people].map(|v| v.map(|v| v.min(SLIDER_MAX)))
    }

    /// Slider values with missing entries replaced by [`NEUTRAL_SLIDER`].
    pub fn sliders(&self) -> Sliders {
        let [idea, fact, logic, people] = self.raw_sliders().map(|v| v.unwrap_or(NEUTRAL_SLIDER));
        Sliders {
            idea,
            fact,
            logic,
            people,
        }
    }

    #[inline]
    pub fn conflict_style(&self) -> Option<ConflictStyle> {
        self.conflict_style
    }

    #[inline]
    pub fn energy(&self) -> Option<EnergyLevel> {
        self.energy
    }
}
