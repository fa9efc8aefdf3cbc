//! chemforge Core - Core types for personality-type compatibility scoring
//!
//! This crate provides the value types shared by every other chemforge crate:
//! - Type codes and their four binary axes
//! - Cognitive function stacks derived from a type code
//! - Optional preference profiles (sliders, conflict style, energy)
//! - Participants and the compatibility result record

pub mod code;
pub mod error;
pub mod participant;
pub mod preference;
pub mod result;
pub mod stack;

pub use code::{Judgment, Lifestyle, Orientation, Perception, TypeCode};
pub use error::ChemforgeError;
pub use participant::ParticipantRef;
pub use preference::{ConflictStyle, EnergyLevel, PreferenceProfile, Sliders, NEUTRAL_SLIDER};
pub use result::{
    AdjustmentBreakdown, ChemType, CompatibilityResult, NEUTRAL_LEVEL, NEUTRAL_SCORE,
};
pub use stack::{Attitude, CognitiveFunction, FunctionCore, FunctionStack};
