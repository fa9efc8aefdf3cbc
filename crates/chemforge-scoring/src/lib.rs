//! Deterministic compatibility scoring for chemforge.
//!
//! Each stage is a small borrowed view over one section of
//! [`ScoringConfig`](chemforge_config::ScoringConfig):
//! - [`PairScorer`] - directional stack matching, averaged both ways
//! - [`Tiebreaker`] - order-independent hashed offset per pair
//! - [`PreferenceAdjuster`] - bounded preference deltas
//! - [`Classifier`] - level bands and relationship categories
//!
//! None of them hold mutable state; all are `Copy` and safe to share.

pub mod adjust;
pub mod classify;
pub mod pair;
pub mod tiebreak;

pub use adjust::{soft_clamp, PreferenceAdjuster};
pub use classify::Classifier;
pub use pair::{saturate, PairScore, PairScorer};
pub use tiebreak::{canonical_key, is_canonical_order, Tiebreaker};
