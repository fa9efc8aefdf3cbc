//! Canonical pair ordering and the hashed tie-break offset.
//!
//! The offset stands in for persisted random state: it is a pure xxh3 hash of
//! the canonically ordered `(id, code)` pairs, so it survives restarts and
//! agrees across independently built consumers.

use chemforge_config::TiebreakConfig;
use xxhash_rust::xxh3::xxh3_64;

const FIELD_SEP: char = '\u{1f}';
const RECORD_SEP: char = '\u{1e}';

fn side_key(id: &str, code: &str) -> String {
    let mut key = String::with_capacity(id.len() + code.len() + 1);
    key.push_str(id);
    key.push(FIELD_SEP);
    key.push_str(code);
    key
}

/// True when `(id_a, code_a)` sorts at or before `(id_b, code_b)`.
///
/// Codes are expected in normalized (trimmed, upper-case) form.
pub fn is_canonical_order(id_a: &str, code_a: &str, id_b: &str, code_b: &str) -> bool {
    (id_a, code_a) <= (id_b, code_b)
}

/// Builds the order-independent composite key for a pair.
pub fn canonical_key(id_a: &str, code_a: &str, id_b: &str, code_b: &str) -> String {
    let (first, second) = if is_canonical_order(id_a, code_a, id_b, code_b) {
        (side_key(id_a, code_a), side_key(id_b, code_b))
    } else {
        (side_key(id_b, code_b), side_key(id_a, code_a))
    };
    let mut key = first;
    key.push(RECORD_SEP);
    key.push_str(&second);
    key
}

/// Hashes canonical pair keys into a small fixed range.
///
/// # Examples
///
/// ```
/// use chemforge_config::TiebreakConfig;
/// use chemforge_scoring::Tiebreaker;
///
/// let config = TiebreakConfig::default();
/// let tiebreaker = Tiebreaker::new(&config);
///
/// let ab = tiebreaker.offset("p1", "INTJ", "p2", "ENFP");
/// let ba = tiebreaker.offset("p2", "ENFP", "p1", "INTJ");
/// assert_eq!(ab, ba);
/// assert!((0.0..2.0).contains(&ab));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Tiebreaker<'a> {
    config: &'a TiebreakConfig,
}

impl<'a> Tiebreaker<'a> {
    pub fn new(config: &'a TiebreakConfig) -> Self {
        Self { config }
    }

    /// Offset in `[0, span)` for the pair, independent of argument order.
    pub fn offset(&self, id_a: &str, code_a: &str, id_b: &str, code_b: &str) -> f64 {
        let key = canonical_key(id_a, code_a, id_b, code_b);
        let buckets = self.config.buckets.max(1);
        let bucket = xxh3_64(key.as_bytes()) % buckets;
        bucket as f64 / buckets as f64 * self.config.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chemforge_test::ALL_CODES;

    #[test]
    fn test_canonical_key_ignores_order() {
        assert_eq!(
            canonical_key("p1", "INTJ", "p2", "ENFP"),
            canonical_key("p2", "ENFP", "p1", "INTJ")
        );
        assert_eq!(
            canonical_key("p1", "INTJ", "p2", "ENFP"),
            "p1\u{1f}INTJ\u{1e}p2\u{1f}ENFP"
        );
    }

    #[test]
    fn test_same_id_sorted_by_code() {
        assert!(is_canonical_order("x", "ENFP", "x", "INTJ"));
        assert!(!is_canonical_order("x", "INTJ", "x", "ENFP"));
        assert!(is_canonical_order("x", "INTJ", "x", "INTJ"));
    }

    #[test]
    fn test_separator_prevents_concatenation_collisions() {
        assert_ne!(
            canonical_key("ab", "C", "d", "E"),
            canonical_key("a", "bC", "d", "E")
        );
    }

    #[test]
    fn test_offset_range_and_determinism() {
        let config = TiebreakConfig::default();
        let tiebreaker = Tiebreaker::new(&config);
        for (i, a) in ALL_CODES.iter().enumerate() {
            for b in ALL_CODES {
                let id_a = format!("m{}", i);
                let first = tiebreaker.offset(&id_a, a, "other", b);
                let second = tiebreaker.offset("other", b, &id_a, a);
                assert_eq!(first.to_bits(), second.to_bits());
                assert!((0.0..config.span).contains(&first));
            }
        }
    }

    #[test]
    fn test_same_codes_distinct_ids_differ() {
        let config = TiebreakConfig::default();
        let tiebreaker = Tiebreaker::new(&config);
        let offsets: Vec<f64> = (0..32)
            .map(|i| tiebreaker.offset(&format!("u{}", i), "ESTJ", "anchor", "ESTJ"))
            .collect();
        let mut distinct = offsets.clone();
        distinct.sort_by(f64::total_cmp);
        distinct.dedup();
        assert!(distinct.len() > 16, "ids barely affect the offset: {:?}", offsets);
    }

    #[test]
    fn test_custom_span() {
        let config = TiebreakConfig {
            span: 0.5,
            buckets: 10,
        };
        let offset = Tiebreaker::new(&config).offset("a", "INFP", "b", "ENTJ");
        assert!((0.0..0.5).contains(&offset));
        let steps = offset * 20.0;
        assert!((steps - steps.round()).abs() < 1e-9);
    }
}
