//! Error types for chemforge

use thiserror::Error;

/// Main error type for chemforge operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChemforgeError {
    /// Input is not one of the sixteen four-letter type codes
    #[error("Invalid type code: '{input}'")]
    InvalidTypeCode { input: String },

    /// Preference value that does not name a known category
    #[error("Invalid preference value: {0}")]
    InvalidPreference(String),

    /// Error in scoring configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ChemforgeError {
    pub(crate) fn invalid_code(input: &str) -> Self {
        ChemforgeError::InvalidTypeCode {
            input: input.to_string(),
        }
    }
}

/// Result type alias for chemforge operations
pub type Result<T> = std::result::Result<T, ChemforgeError>;
