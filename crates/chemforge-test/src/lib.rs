//! Shared test fixtures for chemforge crates.
//!
//! This crate only depends on `chemforge-core` so that every other crate,
//! `chemforge-scoring` included, can use it as a dev-dependency.
//!
//! - [`ALL_CODES`] - the sixteen valid type codes
//! - [`participant`] / [`participant_with`] - participant builders
//! - [`profile`] - fully populated preference profiles
//! - [`init_tracing`] - test log output, filtered by `RUST_LOG`
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! chemforge-test = { workspace = true }
//! ```
//!
//! ```
//! use chemforge_test::{participant, ALL_CODES};
//!
//! let group: Vec<_> = ALL_CODES
//!     .iter()
//!     .enumerate()
//!     .map(|(i, code)| participant(&format!("m{}", i), code))
//!     .collect();
//! assert_eq!(group.len(), 16);
//! ```

use std::sync::OnceLock;

use chemforge_core::{ConflictStyle, EnergyLevel, ParticipantRef, PreferenceProfile};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Every valid type code, upper-case.
pub const ALL_CODES: [&str; 16] = [
    "ENTJ", "ENTP", "ENFJ", "ENFP", "ESTJ", "ESTP", "ESFJ", "ESFP", "INTJ", "INTP", "INFJ",
    "INFP", "ISTJ", "ISTP", "ISFJ", "ISFP",
];

/// Participant without preferences.
pub fn participant(id: &str, code: &str) -> ParticipantRef {
    ParticipantRef::new(id, code)
}

/// Participant with preferences.
pub fn participant_with(id: &str, code: &str, preferences: PreferenceProfile) -> ParticipantRef {
    ParticipantRef::new(id, code).with_preferences(preferences)
}

/// Profile with every field set.
pub fn profile(
    idea: i64,
    fact: i64,
    logic: i64,
    people: i64,
    conflict_style: ConflictStyle,
    energy: EnergyLevel,
) -> PreferenceProfile {
    PreferenceProfile::new()
        .with_idea(idea)
        .with_fact(fact)
        .with_logic(logic)
        .with_people(people)
        .with_conflict_style(conflict_style)
        .with_energy(energy)
}

static TRACING: OnceLock<()> = OnceLock::new();

/// Installs a test-friendly fmt subscriber once per process.
///
/// Defaults to `chemforge=debug`; override with `RUST_LOG`.
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("chemforge=debug"));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();
    });
}
