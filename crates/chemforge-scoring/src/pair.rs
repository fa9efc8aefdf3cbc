//! Directional function-stack scoring.

use chemforge_config::PairConfig;
use chemforge_core::FunctionStack;

/// Neutral score every pair starts from.
const BASELINE: f64 = 50.0;

/// Maps an unbounded raw deviation onto `[0, 100]`.
///
/// `50 + 50 * tanh(raw / scale)`: linear near the centre, flattening towards
/// both ends. The clamp only matters for non-finite intermediate values.
#[inline]
pub fn saturate(raw: f64, scale: f64) -> f64 {
    let score = BASELINE + BASELINE * (raw / scale).tanh();
    if score.is_nan() {
        return BASELINE;
    }
    score.clamp(0.0, 100.0)
}

/// Both directional scores for a pair and their mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairScore {
    /// `score_directional(a, b)`.
    pub forward: f64,
    /// `score_directional(b, a)`.
    pub backward: f64,
    pub mean: f64,
    /// `mean` rounded to the nearest integer.
    pub score_int: u8,
}

/// Scores two function stacks against each other.
///
/// The weighted sum is not symmetric in its arguments, so [`PairScorer::score`]
/// always evaluates both directions and averages them.
///
/// # Examples
///
/// ```
/// use chemforge_config::PairConfig;
/// use chemforge_core::{FunctionStack, TypeCode};
/// use chemforge_scoring::PairScorer;
///
/// let config = PairConfig::default();
/// let scorer = PairScorer::new(&config);
/// let intj = FunctionStack::derive("INTJ".parse::<TypeCode>().unwrap());
/// let enfp = FunctionStack::derive("ENFP".parse::<TypeCode>().unwrap());
///
/// let pair = scorer.score(&intj, &enfp);
/// assert!(pair.score_int > 70);
/// assert_eq!(pair, scorer.score(&enfp, &intj).swapped());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PairScorer<'a> {
    config: &'a PairConfig,
}

impl<'a> PairScorer<'a> {
    pub fn new(config: &'a PairConfig) -> Self {
        Self { config }
    }

    /// Unsaturated deviation from the baseline, seen from `a`.
    pub fn raw_directional(&self, a: &FunctionStack, b: &FunctionStack) -> f64 {
        let c = self.config;
        let weights = &c.position_weights;
        let mut raw = 0.0;

        for (i, fa) in a.functions().iter().enumerate() {
            for (j, fb) in b.functions().iter().enumerate() {
                let weight = weights[i] * weights[j];
                if fa == fb {
                    raw -= c.same_function_penalty * weight;
                } else if fa.is_mirror_of(fb) {
                    raw += c.mirror_bonus * weight;
                }
            }
        }

        if a.auxiliary().is_mirror_of(&b.dominant()) {
            raw += c.aux_mirrors_dominant_bonus;
        }
        if a.auxiliary().opposite() == b.auxiliary() {
            raw += c.aux_opposite_bonus;
        }
        // conversational rhythm
        if a.dominant().core == b.dominant().core {
            raw += c.shared_dominant_core_bonus;
        }
        // daily rhythm
        if a.extraverts_judging() == b.extraverts_judging() {
            raw += c.daily_rhythm_bonus;
        }

        raw
    }

    /// Saturated score in `[0, 100]`, seen from `a`.
    pub fn score_directional(&self, a: &FunctionStack, b: &FunctionStack) -> f64 {
        saturate(self.raw_directional(a, b), self.config.saturation_scale)
    }

    /// Scores `a` against `b` in both directions and averages.
    pub fn score(&self, a: &FunctionStack, b: &FunctionStack) -> PairScore {
        let forward = self.score_directional(a, b);
        let backward = self.score_directional(b, a);
        let mean = (forward + backward) / 2.0;
        PairScore {
            forward,
            backward,
            mean,
            score_int: mean.round().clamp(0.0, 100.0) as u8,
        }
    }
}

impl PairScore {
    /// The same pair seen from the other side.
    pub fn swapped(&self) -> PairScore {
        PairScore {
            forward: self.backward,
            backward: self.forward,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chemforge_core::TypeCode;
    use chemforge_test::ALL_CODES;

    fn stack(code: &str) -> FunctionStack {
        FunctionStack::derive(TypeCode::parse(code).unwrap())
    }

    #[test]
    fn test_complementary_pair_scores_high() {
        let config = PairConfig::default();
        let pair = PairScorer::new(&config).score(&stack("INTJ"), &stack("ENFP"));
        assert!(pair.mean > 70.0, "mean = {}", pair.mean);
        assert_eq!(pair.score_int, 77);
    }

    #[test]
    fn test_identical_stacks_are_moderate() {
        let config = PairConfig::default();
        let scorer = PairScorer::new(&config);
        let estj = stack("ESTJ");
        let raw = scorer.raw_directional(&estj, &estj);
        // identical functions at every position, softened by both rhythm bonuses
        assert!((raw - -3.52).abs() < 1e-9, "raw = {}", raw);

        let pair = scorer.score(&estj, &estj);
        assert_eq!(pair.forward, pair.backward);
        assert!((35..=50).contains(&pair.score_int), "score = {}", pair.score_int);
    }

    #[test]
    fn test_directional_asymmetry_is_averaged_away() {
        let config = PairConfig::default();
        let scorer = PairScorer::new(&config);
        let intj = stack("INTJ");
        let istp = stack("ISTP");

        // INTJ's Te mirrors ISTP's dominant Ti; the reverse does not hold
        let forward = scorer.raw_directional(&intj, &istp);
        let backward = scorer.raw_directional(&istp, &intj);
        assert!((forward - backward - config.aux_mirrors_dominant_bonus).abs() < 1e-9);

        let ab = scorer.score(&intj, &istp);
        let ba = scorer.score(&istp, &intj);
        assert_ne!(ab.forward, ab.backward);
        assert_eq!(ab.mean, ba.mean);
        assert_eq!(ab.score_int, ba.score_int);
    }

    #[test]
    fn test_all_pairs_bounded_and_symmetric() {
        let config = PairConfig::default();
        let scorer = PairScorer::new(&config);
        for a in ALL_CODES {
            for b in ALL_CODES {
                let ab = scorer.score(&stack(a), &stack(b));
                let ba = scorer.score(&stack(b), &stack(a));
                assert!((0.0..=100.0).contains(&ab.mean), "{}/{}", a, b);
                assert!(ab.score_int <= 100);
                assert_eq!(ab.mean, ba.mean, "{}/{}", a, b);
            }
        }
    }

    #[test]
    fn test_extreme_weights_stay_bounded() {
        let config = PairConfig {
            mirror_bonus: 1.0e9,
            same_function_penalty: 1.0e9,
            aux_opposite_bonus: 1.0e9,
            ..PairConfig::default()
        };
        let scorer = PairScorer::new(&config);
        for a in ALL_CODES {
            for b in ALL_CODES {
                let pair = scorer.score(&stack(a), &stack(b));
                assert!((0.0..=100.0).contains(&pair.forward));
                assert!((0.0..=100.0).contains(&pair.backward));
            }
        }
    }

    #[test]
    fn test_saturate_shape() {
        assert_eq!(saturate(0.0, 18.0), 50.0);
        assert_eq!(saturate(f64::INFINITY, 18.0), 100.0);
        assert_eq!(saturate(f64::NEG_INFINITY, 18.0), 0.0);
        assert_eq!(saturate(f64::NAN, 18.0), 50.0);

        // marginal gains shrink away from the centre
        let near_centre = saturate(5.0, 18.0) - saturate(0.0, 18.0);
        let near_edge = saturate(45.0, 18.0) - saturate(40.0, 18.0);
        assert!(near_centre > near_edge);

        // odd around the baseline
        let up = saturate(7.5, 18.0) - 50.0;
        let down = 50.0 - saturate(-7.5, 18.0);
        assert!((up - down).abs() < 1e-12);
    }
}
