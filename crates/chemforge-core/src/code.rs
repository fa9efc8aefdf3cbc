//! TypeCode - four-letter personality type codes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChemforgeError, Result};

/// The E/I axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    Extraverted,
    Introverted,
}

/// The N/S axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Perception {
    Intuition,
    Sensing,
}

/// The T/F axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Judgment {
    Thinking,
    Feeling,
}

/// The J/P axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lifestyle {
    Judging,
    Perceiving,
}

/// A validated four-letter type code such as `INTJ`.
///
/// Parsing trims surrounding whitespace and ignores case. Anything that is
/// not exactly one of `E|I`, `N|S`, `T|F`, `J|P` in that order is rejected
/// with [`ChemforgeError::InvalidTypeCode`].
///
/// # Examples
///
/// ```
/// use chemforge_core::{Orientation, TypeCode};
///
/// let code = TypeCode::parse(" intj ").unwrap();
/// assert_eq!(code.to_string(), "INTJ");
/// assert_eq!(code.orientation(), Orientation::Introverted);
///
/// assert!(TypeCode::parse("XYZZ").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeCode {
    orientation: Orientation,
    perception: Perception,
    judgment: Judgment,
    lifestyle: Lifestyle,
}

impl TypeCode {
    /// Creates a type code from its four axes.
    pub const fn new(
        orientation: Orientation,
        perception: Perception,
        judgment: Judgment,
        lifestyle: Lifestyle,
    ) -> Self {
        TypeCode {
            orientation,
            perception,
            judgment,
            lifestyle,
        }
    }

    /// Parses a code, case-insensitively and ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self> {
        let bytes = input.trim().as_bytes();
        if bytes.len() != 4 {
            return Err(ChemforgeError::invalid_code(input));
        }

        let orientation = match bytes[0].to_ascii_uppercase() {
            b'E' => Orientation::Extraverted,
            b'I' => Orientation::Introverted,
            _ => return Err(ChemforgeError::invalid_code(input)),
        };
        let perception = match bytes[1].to_ascii_uppercase() {
            b'N' => Perception::Intuition,
            b'S' => Perception::Sensing,
            _ => return Err(ChemforgeError::invalid_code(input)),
        };
        let judgment = match bytes[2].to_ascii_uppercase() {
            b'T' => Judgment::Thinking,
            b'F' => Judgment::Feeling,
            _ => return Err(ChemforgeError::invalid_code(input)),
        };
        let lifestyle = match bytes[3].to_ascii_uppercase() {
            b'J' => Lifestyle::Judging,
            b'P' => Lifestyle::Perceiving,
            _ => return Err(ChemforgeError::invalid_code(input)),
        };

        Ok(TypeCode::new(orientation, perception, judgment, lifestyle))
    }

    /// Returns the upper-cased, trimmed form of `input` if it is a valid code.
    pub fn normalize(input: &str) -> Option<String> {
        TypeCode::parse(input).ok().map(|code| code.to_string())
    }

    #[inline]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub const fn perception(&self) -> Perception {
        self.perception
    }

    #[inline]
    pub const fn judgment(&self) -> Judgment {
        self.judgment
    }

    #[inline]
    pub const fn lifestyle(&self) -> Lifestyle {
        self.lifestyle
    }

    /// Returns the four letters in canonical order.
    pub const fn letters(&self) -> [char; 4] {
        [
            match self.orientation {
                Orientation::Extraverted => 'E',
                Orientation::Introverted => 'I',
            },
            match self.perception {
                Perception::Intuition => 'N',
                Perception::Sensing => 'S',
            },
            match self.judgment {
                Judgment::Thinking => 'T',
                Judgment::Feeling => 'F',
            },
            match self.lifestyle {
                Lifestyle::Judging => 'J',
                Lifestyle::Perceiving => 'P',
            },
        ]
    }

    /// Counts the axes on which the two codes differ (0..=4).
    pub fn diff_axes(&self, other: &TypeCode) -> u8 {
        u8::from(self.orientation != other.orientation)
            + u8::from(self.perception != other.perception)
            + u8::from(self.judgment != other.judgment)
            + u8::from(self.lifestyle != other.lifestyle)
    }

    /// Iterates over all sixteen codes, in `E/I`, `N/S`, `T/F`, `J/P` order.
    pub fn all() -> impl Iterator<Item = TypeCode> {
        (0u8..16).map(|bits| {
            TypeCode::new(
                if bits & 0b1000 == 0 {
                    Orientation::Extraverted
                } else {
                    Orientation::Introverted
                },
                if bits & 0b0100 == 0 {
                    Perception::Intuition
                } else {
                    Perception::Sensing
                },
                if bits & 0b0010 == 0 {
                    Judgment::Thinking
                } else {
                    Judgment::Feeling
                },
                if bits & 0b0001 == 0 {
                    Lifestyle::Judging
                } else {
                    Lifestyle::Perceiving
                },
            )
        })
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl fmt::Debug for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeCode({})", self)
    }
}

impl FromStr for TypeCode {
    type Err = ChemforgeError;

    fn from_str(s: &str) -> Result<Self> {
        TypeCode::parse(s)
    }
}

impl TryFrom<String> for TypeCode {
    type Error = ChemforgeError;

    fn try_from(value: String) -> Result<Self> {
        TypeCode::parse(&value)
    }
}

impl From<TypeCode> for String {
    fn from(code: TypeCode) -> Self {
        code.to_string()
    }
}
