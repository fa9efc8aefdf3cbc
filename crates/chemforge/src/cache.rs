//! Memoization keys for external result caches.

use std::fmt;

use chemforge_core::{ParticipantRef, PreferenceProfile};
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::Xxh3;

use crate::engine::CompatEngine;

/// Digest of everything a result depends on: config version, both ids,
/// both normalized codes and both preference profiles.
///
/// Two calls that produce the same key produce the same result, so callers
/// may memoize on it without further bookkeeping.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CacheKey(pub u64);

impl fmt::Debug for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CacheKey({:016x})", self.0)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

fn write_str(hasher: &mut Xxh3, value: &str) {
    hasher.update(&(value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

fn write_opt(hasher: &mut Xxh3, value: Option<u8>) {
    match value {
        Some(v) => hasher.update(&[1, v]),
        None => hasher.update(&[0]),
    }
}

fn write_preferences(hasher: &mut Xxh3, preferences: Option<&PreferenceProfile>) {
    let Some(prefs) = preferences else {
        hasher.update(&[0]);
        return;
    };
    hasher.update(&[1]);
    for slider in prefs.raw_sliders() {
        write_opt(hasher, slider);
    }
    write_opt(hasher, prefs.conflict_style().map(|s| s.index() as u8));
    write_opt(hasher, prefs.energy().map(|e| e.rank()));
}

fn participant_digest(participant: &ParticipantRef) -> u64 {
    let mut hasher = Xxh3::new();
    write_str(&mut hasher, &participant.id);
    write_str(&mut hasher, &participant.normalized_code());
    write_preferences(&mut hasher, participant.preferences.as_ref());
    hasher.digest()
}

impl CompatEngine {
    /// Order-independent memoization key for scoring `a` against `b` with
    /// this engine's configuration.
    ///
    /// Each side is digested on its own; the two digests are combined
    /// smallest first.
    pub fn cache_key(&self, a: &ParticipantRef, b: &ParticipantRef) -> CacheKey {
        let (da, db) = (participant_digest(a), participant_digest(b));
        let (first, second) = (da.min(db), da.max(db));
        let mut hasher = Xxh3::new();
        write_str(&mut hasher, &self.config().version);
        hasher.update(&first.to_le_bytes());
        hasher.update(&second.to_le_bytes());
        CacheKey(hasher.digest())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chemforge_config::ScoringConfig;
    use chemforge_core::{ConflictStyle, EnergyLevel};
    use chemforge_test::{participant, participant_with, profile};

    #[test]
    fn test_key_is_order_independent() {
        let engine = CompatEngine::default();
        let a = participant("p1", "INTJ");
        let b = participant("p2", "ENFP");
        assert_eq!(engine.cache_key(&a, &b), engine.cache_key(&b, &a));
    }

    #[test]
    fn test_key_ignores_order_when_id_and_code_tie() {
        let engine = CompatEngine::default();
        let a = participant_with(
            "x",
            "INTJ",
            profile(80, 20, 60, 40, ConflictStyle::Burst, EnergyLevel::Low),
        );
        let b = participant_with(
            "x",
            "intj",
            profile(30, 70, 45, 55, ConflictStyle::Direct, EnergyLevel::High),
        );
        assert_eq!(engine.cache_key(&a, &b), engine.cache_key(&b, &a));
        assert_eq!(engine.get_compat_score(&a, &b), engine.get_compat_score(&b, &a));

        let plain = participant("x", "INTJ");
        assert_eq!(engine.cache_key(&a, &plain), engine.cache_key(&plain, &a));
        assert_ne!(engine.cache_key(&a, &b), engine.cache_key(&a, &plain));
    }

    #[test]
    fn test_key_normalizes_codes() {
        let engine = CompatEngine::default();
        assert_eq!(
            engine.cache_key(&participant("p1", "intj "), &participant("p2", "ENFP")),
            engine.cache_key(&participant("p1", "INTJ"), &participant("p2", "enfp")),
        );
    }

    #[test]
    fn test_key_tracks_every_input() {
        let engine = CompatEngine::default();
        let prefs = profile(60, 40, 55, 45, ConflictStyle::Mediate, EnergyLevel::Mid);
        let base = engine.cache_key(&participant("p1", "INTJ"), &participant("p2", "ENFP"));

        let variants = [
            engine.cache_key(&participant("p1", "INTJ"), &participant("p3", "ENFP")),
            engine.cache_key(&participant("p1", "INTP"), &participant("p2", "ENFP")),
            engine.cache_key(
                &participant_with("p1", "INTJ", prefs),
                &participant("p2", "ENFP"),
            ),
            engine.cache_key(
                &participant_with("p1", "INTJ", prefs.with_logic(56)),
                &participant("p2", "ENFP"),
            ),
            engine.cache_key(
                &participant_with("p1", "INTJ", PreferenceProfile::new()),
                &participant("p2", "ENFP"),
            ),
        ];
        for key in variants {
            assert_ne!(key, base);
        }
    }

    #[test]
    fn test_key_includes_config_version() {
        let a = participant("p1", "INTJ");
        let b = participant("p2", "ENFP");
        let builtin = CompatEngine::default().cache_key(&a, &b);
        let other = CompatEngine::new(ScoringConfig::default().with_version("next"))
            .unwrap()
            .cache_key(&a, &b);
        assert_ne!(builtin, other);
    }

    #[test]
    fn test_id_boundaries_are_unambiguous() {
        let engine = CompatEngine::default();
        assert_ne!(
            engine.cache_key(&participant("ab", "INTJ"), &participant("c", "ENFP")),
            engine.cache_key(&participant("a", "INTJ"), &participant("bc", "ENFP")),
        );
    }
}
