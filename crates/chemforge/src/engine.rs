//! The compatibility engine facade.

use std::path::Path;
use std::sync::LazyLock;

use chemforge_config::ScoringConfig;
use chemforge_core::error::Result;
use chemforge_core::{
    ChemforgeError, CompatibilityResult, FunctionStack, ParticipantRef, PreferenceProfile,
    TypeCode,
};
use chemforge_scoring::{
    is_canonical_order, Classifier, PairScore, PairScorer, PreferenceAdjuster, Tiebreaker,
};
use tracing::{debug, warn};

static DEFAULT_ENGINE: LazyLock<CompatEngine> = LazyLock::new(CompatEngine::default);

/// Process-wide engine built from the built-in constants.
pub fn default_engine() -> &'static CompatEngine {
    &DEFAULT_ENGINE
}

/// Orders two participants canonically by `(id, normalized code)`.
pub(crate) fn canonical_pair<'p>(
    a: &'p ParticipantRef,
    b: &'p ParticipantRef,
) -> (&'p ParticipantRef, &'p ParticipantRef) {
    if is_canonical_order(&a.id, &a.normalized_code(), &b.id, &b.normalized_code()) {
        (a, b)
    } else {
        (b, a)
    }
}

/// Everything that went into one result, in canonical order.
#[derive(Debug, Clone, PartialEq)]
pub struct CompatExplanation {
    pub id_a: String,
    pub id_b: String,
    pub code_a: TypeCode,
    pub code_b: TypeCode,
    pub stack_a: FunctionStack,
    pub stack_b: FunctionStack,
    /// Directional scores and their mean.
    pub pair: PairScore,
    pub result: CompatibilityResult,
}

/// Scores participant pairs under one frozen [`ScoringConfig`].
///
/// The engine holds no mutable state; share it freely across threads.
///
/// # Examples
///
/// ```
/// use chemforge::{ChemType, CompatEngine, ParticipantRef};
///
/// let engine = CompatEngine::default();
/// let a = ParticipantRef::new("p1", "INTJ");
/// let b = ParticipantRef::new("p2", "ENFP");
///
/// let result = engine.get_compat_score(&a, &b);
/// assert_eq!(result, engine.get_compat_score(&b, &a));
/// assert!(matches!(result.chem_type, ChemType::Complement | ChemType::Stable));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompatEngine {
    config: ScoringConfig,
}

impl CompatEngine {
    /// Creates an engine after validating `config`.
    pub fn new(config: ScoringConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| ChemforgeError::Config(e.to_string()))?;
        Ok(Self { config })
    }

    /// Loads, validates and freezes a TOML configuration.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = ScoringConfig::from_toml_file(path)
            .map_err(|e| ChemforgeError::Config(e.to_string()))?;
        Self::new(config)
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores two participants.
    ///
    /// Never fails: an unparseable code yields [`CompatibilityResult::neutral`].
    pub fn get_compat_score(&self, a: &ParticipantRef, b: &ParticipantRef) -> CompatibilityResult {
        let (a, b) = canonical_pair(a, b);
        match self.evaluate(a, b) {
            Ok(explanation) => explanation.result,
            Err(err) => {
                warn!(
                    event = "compat_fallback",
                    id_a = %a.id,
                    id_b = %b.id,
                    error = %err,
                );
                CompatibilityResult::neutral()
            }
        }
    }

    /// Scores a pair given as loose fields.
    pub fn score_pair(
        &self,
        id_a: &str,
        code_a: &str,
        id_b: &str,
        code_b: &str,
        prefs_a: Option<&PreferenceProfile>,
        prefs_b: Option<&PreferenceProfile>,
    ) -> CompatibilityResult {
        let a = ParticipantRef {
            id: id_a.to_string(),
            code: code_a.to_string(),
            preferences: prefs_a.copied(),
        };
        let b = ParticipantRef {
            id: id_b.to_string(),
            code: code_b.to_string(),
            preferences: prefs_b.copied(),
        };
        self.get_compat_score(&a, &b)
    }

    /// Like [`get_compat_score`](Self::get_compat_score), but keeps the
    /// intermediate values and reports invalid codes as errors.
    pub fn explain(&self, a: &ParticipantRef, b: &ParticipantRef) -> Result<CompatExplanation> {
        let (a, b) = canonical_pair(a, b);
        self.evaluate(a, b)
    }

    /// The single computation path; `a` and `b` are already canonical.
    fn evaluate(&self, a: &ParticipantRef, b: &ParticipantRef) -> Result<CompatExplanation> {
        let code_a = a.type_code()?;
        let code_b = b.type_code()?;
        let stack_a = FunctionStack::derive(code_a);
        let stack_b = FunctionStack::derive(code_b);

        let pair = PairScorer::new(&self.config.pair).score(&stack_a, &stack_b);
        let tiebreak = Tiebreaker::new(&self.config.tiebreak).offset(
            &a.id,
            &code_a.to_string(),
            &b.id,
            &code_b.to_string(),
        );

        let base = f64::from(pair.score_int);
        let adjustment = PreferenceAdjuster::new(&self.config.adjust).adjust(
            base,
            a.preferences.as_ref(),
            b.preferences.as_ref(),
        );
        let score = (base + tiebreak + adjustment.total).clamp(0.0, 100.0);

        let classifier = Classifier::new(&self.config.classify);
        let diff_axes = code_a.diff_axes(&code_b);
        let result = CompatibilityResult {
            score_int: pair.score_int,
            score,
            level: classifier.level(score),
            chem_type: classifier.chem_type(diff_axes, score),
            adjustment,
            tiebreak,
            diff_axes,
            fallback: false,
        };

        debug!(
            event = "compat_pair",
            id_a = %a.id,
            id_b = %b.id,
            code_a = %code_a,
            code_b = %code_b,
            score_int = result.score_int,
            score,
            level = result.level,
            chem_type = %result.chem_type,
        );

        Ok(CompatExplanation {
            id_a: a.id.clone(),
            id_b: b.id.clone(),
            code_a,
            code_b,
            stack_a,
            stack_b,
            pair,
            result,
        })
    }
}
