//! Level bands and relationship categories.

use chemforge_config::ClassifyConfig;
use chemforge_core::{ChemType, TypeCode};

/// Maps scores to a 1..=5 level and a [`ChemType`].
///
/// The number of differing axes between the two codes decides between the
/// two categories available in each score band.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    config: &'a ClassifyConfig,
}

impl<'a> Classifier<'a> {
    pub fn new(config: &'a ClassifyConfig) -> Self {
        Self { config }
    }

    /// One plus the number of thresholds at or below `score`.
    pub fn level(&self, score: f64) -> u8 {
        1 + self
            .config
            .level_thresholds
            .iter()
            .filter(|threshold| score >= **threshold)
            .count() as u8
    }

    /// Category for a score and a count of differing axes.
    pub fn chem_type(&self, diff_axes: u8, score: f64) -> ChemType {
        let c = self.config;
        if score >= c.high_band {
            if diff_axes >= c.complement_min_diff {
                ChemType::Complement
            } else {
                ChemType::Stable
            }
        } else if score >= c.low_band {
            if diff_axes <= c.stable_max_diff {
                ChemType::Stable
            } else {
                ChemType::Tuning
            }
        } else if diff_axes >= c.volatile_min_diff {
            ChemType::Volatile
        } else {
            ChemType::Tuning
        }
    }

    /// Category for two codes at a given score.
    pub fn classify_type(&self, a: &TypeCode, b: &TypeCode, score: f64) -> ChemType {
        self.chem_type(a.diff_axes(b), score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bands() {
        let config = ClassifyConfig::default();
        let classifier = Classifier::new(&config);
        assert_eq!(classifier.level(0.0), 1);
        assert_eq!(classifier.level(29.99), 1);
        assert_eq!(classifier.level(30.0), 2);
        assert_eq!(classifier.level(50.0), 3);
        assert_eq!(classifier.level(70.0), 4);
        assert_eq!(classifier.level(80.0), 5);
        assert_eq!(classifier.level(100.0), 5);
    }

    #[test]
    fn test_level_is_monotonic() {
        let config = ClassifyConfig::default();
        let classifier = Classifier::new(&config);
        let mut previous = classifier.level(0.0);
        for step in 1..=1000 {
            let level = classifier.level(f64::from(step) / 10.0);
            assert!(level >= previous, "level dropped at {}", f64::from(step) / 10.0);
            previous = level;
        }
        assert_eq!(previous, 5);
    }

    #[test]
    fn test_high_band_categories() {
        let config = ClassifyConfig::default();
        let classifier = Classifier::new(&config);
        assert_eq!(classifier.chem_type(4, 82.0), ChemType::Complement);
        assert_eq!(classifier.chem_type(3, 65.0), ChemType::Complement);
        assert_eq!(classifier.chem_type(1, 82.0), ChemType::Stable);
    }

    #[test]
    fn test_middle_band_categories() {
        let config = ClassifyConfig::default();
        let classifier = Classifier::new(&config);
        assert_eq!(classifier.chem_type(0, 55.0), ChemType::Stable);
        assert_eq!(classifier.chem_type(2, 45.0), ChemType::Stable);
        assert_eq!(classifier.chem_type(3, 64.9), ChemType::Tuning);
    }

    #[test]
    fn test_low_band_categories() {
        let config = ClassifyConfig::default();
        let classifier = Classifier::new(&config);
        assert_eq!(classifier.chem_type(4, 20.0), ChemType::Volatile);
        assert_eq!(classifier.chem_type(3, 44.9), ChemType::Volatile);
        assert_eq!(classifier.chem_type(2, 20.0), ChemType::Tuning);
    }

    #[test]
    fn test_classify_type_uses_axis_difference() {
        let config = ClassifyConfig::default();
        let classifier = Classifier::new(&config);
        let intj = TypeCode::parse("INTJ").unwrap();
        let enfp = TypeCode::parse("ENFP").unwrap();
        let intp = TypeCode::parse("INTP").unwrap();

        assert_eq!(classifier.classify_type(&intj, &enfp, 77.0), ChemType::Complement);
        assert_eq!(classifier.classify_type(&intj, &intp, 77.0), ChemType::Stable);
        assert_eq!(classifier.classify_type(&intj, &enfp, 30.0), ChemType::Volatile);
        assert_eq!(classifier.classify_type(&intj, &intp, 30.0), ChemType::Tuning);
    }
}
