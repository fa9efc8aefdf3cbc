//! chemforge - deterministic personality-type compatibility scoring
//!
//! Two participants, each an opaque id plus a four-letter type code and
//! optional preferences, go in; a [`CompatibilityResult`] comes out. The
//! result does not depend on argument order, never panics on malformed
//! codes, and is identical across calls, threads and restarts.
//!
//! # Example
//!
//! ```rust
//! use chemforge::prelude::*;
//!
//! let ab = get_compat_score("p1", "INTJ", "p2", "ENFP", None, None);
//! let ba = get_compat_score("p2", "ENFP", "p1", "INTJ", None, None);
//! assert_eq!(ab, ba);
//! assert!(ab.score_int > 70);
//!
//! // malformed codes degrade to the neutral result
//! let neutral = get_compat_score("p1", "XYZZ", "p2", "ENFP", None, None);
//! assert_eq!(neutral.score_int, 50);
//! assert_eq!(neutral.level, 3);
//! ```

mod cache;
mod engine;
mod group;

pub use cache::CacheKey;
pub use engine::{default_engine, CompatEngine, CompatExplanation};
pub use group::{compare_pairs, GroupReport, MemberSummary, PairReport};

// Core types
pub use chemforge_core::{
    AdjustmentBreakdown, ChemType, ChemforgeError, CompatibilityResult, ConflictStyle,
    EnergyLevel, FunctionStack, ParticipantRef, PreferenceProfile, TypeCode,
};

// Configuration
pub use chemforge_config::{ConfigError, ScoringConfig, DEFAULT_CONFIG_VERSION};

/// Scores a pair with the built-in configuration.
///
/// Arguments may be given in either order; the result is the same.
pub fn get_compat_score(
    id_a: &str,
    code_a: &str,
    id_b: &str,
    code_b: &str,
    prefs_a: Option<&PreferenceProfile>,
    prefs_b: Option<&PreferenceProfile>,
) -> CompatibilityResult {
    default_engine().score_pair(id_a, code_a, id_b, code_b, prefs_a, prefs_b)
}

pub mod prelude {
    pub use super::get_compat_score;
    pub use super::{
        ChemType, CompatEngine, CompatibilityResult, ConflictStyle, EnergyLevel, GroupReport,
        ParticipantRef, PreferenceProfile, ScoringConfig, TypeCode,
    };
}
