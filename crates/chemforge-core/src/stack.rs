//! Cognitive function stacks derived from type codes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::code::{Judgment, Lifestyle, Orientation, Perception, TypeCode};

/// The core letter of a cognitive function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionCore {
    Intuition,
    Sensing,
    Thinking,
    Feeling,
}

impl FunctionCore {
    pub const fn letter(&self) -> char {
        match self {
            FunctionCore::Intuition => 'N',
            FunctionCore::Sensing => 'S',
            FunctionCore::Thinking => 'T',
            FunctionCore::Feeling => 'F',
        }
    }

    /// The other core of the same pair: N/S or T/F.
    pub const fn counterpart(&self) -> FunctionCore {
        match self {
            FunctionCore::Intuition => FunctionCore::Sensing,
            FunctionCore::Sensing => FunctionCore::Intuition,
            FunctionCore::Thinking => FunctionCore::Feeling,
            FunctionCore::Feeling => FunctionCore::Thinking,
        }
    }

    /// True for the judging cores (T, F).
    pub const fn is_judging(&self) -> bool {
        matches!(self, FunctionCore::Thinking | FunctionCore::Feeling)
    }
}

/// Whether a function is directed inward or outward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attitude {
    Introverted,
    Extraverted,
}

impl Attitude {
    pub const fn letter(&self) -> char {
        match self {
            Attitude::Introverted => 'i',
            Attitude::Extraverted => 'e',
        }
    }

    pub const fn inverted(&self) -> Attitude {
        match self {
            Attitude::Introverted => Attitude::Extraverted,
            Attitude::Extraverted => Attitude::Introverted,
        }
    }
}

/// A single cognitive function, e.g. `Ni` or `Te`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CognitiveFunction {
    pub core: FunctionCore,
    pub attitude: Attitude,
}

impl CognitiveFunction {
    pub const fn new(core: FunctionCore, attitude: Attitude) -> Self {
        CognitiveFunction { core, attitude }
    }

    /// Same core, inverted attitude (`Ni` -> `Ne`).
    pub const fn mirror(&self) -> CognitiveFunction {
        CognitiveFunction::new(self.core, self.attitude.inverted())
    }

    /// Counterpart core, inverted attitude (`Ni` -> `Se`, `Te` -> `Fi`).
    pub const fn opposite(&self) -> CognitiveFunction {
        CognitiveFunction::new(self.core.counterpart(), self.attitude.inverted())
    }

    /// True when both functions share a core but differ in attitude.
    pub fn is_mirror_of(&self, other: &CognitiveFunction) -> bool {
        self.core == other.core && self.attitude != other.attitude
    }
}

impl fmt::Display for CognitiveFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.core.letter(), self.attitude.letter())
    }
}

impl fmt::Debug for CognitiveFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// The ordered dominant, auxiliary, tertiary and inferior functions of a type.
///
/// The J/P letter names which of the two preferred functions is used in the
/// outer world: the judging one (T/F) for `J`, the perceiving one (N/S) for
/// `P`. Extraverts lead with that function, introverts with the other one.
/// Tertiary and inferior are the opposites of auxiliary and dominant.
///
/// # Examples
///
/// ```
/// use chemforge_core::{FunctionStack, TypeCode};
///
/// let stack = FunctionStack::derive(TypeCode::parse("INTJ").unwrap());
/// assert_eq!(stack.to_string(), "Ni-Te-Fi-Se");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionStack([CognitiveFunction; 4]);

impl FunctionStack {
    /// Derives the stack for a valid type code.
    pub fn derive(code: TypeCode) -> Self {
        let perceiving = match code.perception() {
            Perception::Intuition => FunctionCore::Intuition,
            Perception::Sensing => FunctionCore::Sensing,
        };
        let judging = match code.judgment() {
            Judgment::Thinking => FunctionCore::Thinking,
            Judgment::Feeling => FunctionCore::Feeling,
        };
        let (outer, inner) = match code.lifestyle() {
            Lifestyle::Judging => (judging, perceiving),
            Lifestyle::Perceiving => (perceiving, judging),
        };

        let outer = CognitiveFunction::new(outer, Attitude::Extraverted);
        let inner = CognitiveFunction::new(inner, Attitude::Introverted);
        let (dominant, auxiliary) = match code.orientation() {
            Orientation::Extraverted => (outer, inner),
            Orientation::Introverted => (inner, outer),
        };

        FunctionStack([
            dominant,
            auxiliary,
            auxiliary.opposite(),
            dominant.opposite(),
        ])
    }

    #[inline]
    pub fn functions(&self) -> &[CognitiveFunction; 4] {
        &self.0
    }

    #[inline]
    pub fn dominant(&self) -> CognitiveFunction {
        self.0[0]
    }

    #[inline]
    pub fn auxiliary(&self) -> CognitiveFunction {
        self.0[1]
    }

    #[inline]
    pub fn tertiary(&self) -> CognitiveFunction {
        self.0[2]
    }

    #[inline]
    pub fn inferior(&self) -> CognitiveFunction {
        self.0[3]
    }

    /// True when the extraverted half of the dominant/auxiliary pair is a
    /// judging function. This is the stack-level reading of the J/P letter.
    pub fn extraverts_judging(&self) -> bool {
        let outer = if self.dominant().attitude == Attitude::Extraverted {
            self.dominant()
        } else {
            self.auxiliary()
        };
        outer.core.is_judging()
    }
}

impl From<TypeCode> for FunctionStack {
    fn from(code: TypeCode) -> Self {
        FunctionStack::derive(code)
    }
}

impl fmt::Display for FunctionStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}-{}", self.0[0], self.0[1], self.0[2], self.0[3])
    }
}

impl fmt::Debug for FunctionStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionStack({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(code: &str) -> String {
        FunctionStack::derive(TypeCode::parse(code).unwrap()).to_string()
    }

    #[test]
    fn test_known_stacks() {
        assert_eq!(stack("INTJ"), "Ni-Te-Fi-Se");
        assert_eq!(stack("ENFP"), "Ne-Fi-Te-Si");
        assert_eq!(stack("ESTJ"), "Te-Si-Ne-Fi");
        assert_eq!(stack("ISFP"), "Fi-Se-Ni-Te");
        assert_eq!(stack("INTP"), "Ti-Ne-Si-Fe");
        assert_eq!(stack("ESFJ"), "Fe-Si-Ne-Ti");
    }

    #[test]
    fn test_sixteen_distinct_stacks() {
        let mut stacks: Vec<String> = TypeCode::all()
            .map(|c| FunctionStack::derive(c).to_string())
            .collect();
        stacks.sort();
        stacks.dedup();
        assert_eq!(stacks.len(), 16);
    }

    #[test]
    fn test_stack_shape() {
        for code in TypeCode::all() {
            let s = FunctionStack::derive(code);
            assert_ne!(s.dominant().attitude, s.auxiliary().attitude);
            assert_eq!(s.tertiary(), s.auxiliary().opposite());
            assert_eq!(s.inferior(), s.dominant().opposite());
            assert_eq!(
                s.extraverts_judging(),
                code.lifestyle() == Lifestyle::Judging
            );
        }
    }

    #[test]
    fn test_derive_is_pure() {
        let code = TypeCode::parse("ENTP").unwrap();
        assert_eq!(FunctionStack::derive(code), FunctionStack::from(code));
    }

    #[test]
    fn test_mirror_and_opposite() {
        let ni = CognitiveFunction::new(FunctionCore::Intuition, Attitude::Introverted);
        assert_eq!(ni.mirror().to_string(), "Ne");
        assert_eq!(ni.opposite().to_string(), "Se");
        assert!(ni.is_mirror_of(&ni.mirror()));
        assert!(!ni.is_mirror_of(&ni));
        assert!(!ni.is_mirror_of(&ni.opposite()));
    }
}
