//! Participants as handed to the engine by callers.

use serde::{Deserialize, Serialize};

use crate::code::TypeCode;
use crate::error::Result;
use crate::preference::PreferenceProfile;

/// An opaque participant id, its raw type code, and optional preferences.
///
/// The code is kept as the caller supplied it. It is only parsed when the
/// engine needs it, so an invalid code is carried around as data rather
/// than rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantRef {
    pub id: String,
    pub code: String,
    #[serde(default)]
    pub preferences: Option<PreferenceProfile>,
}

impl ParticipantRef {
    pub fn new(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            preferences: None,
        }
    }

    pub fn with_preferences(mut self, preferences: PreferenceProfile) -> Self {
        self.preferences = Some(preferences);
        self
    }

    /// Parses the raw code.
    pub fn type_code(&self) -> Result<TypeCode> {
        TypeCode::parse(&self.code)
    }

    /// The code in canonical form: upper-cased and trimmed.
    ///
    /// Invalid codes are still normalized the same way so that ordering and
    /// hashing stay total over every input.
    pub fn normalized_code(&self) -> String {
        match self.type_code() {
            Ok(code) => code.to_string(),
            Err(_) => self.code.trim().to_ascii_uppercase(),
        }
    }
}
