use super::*;

#[test]
fn test_default_is_valid() {
    let config = ScoringConfig::default();
    config.validate().unwrap();
    assert_eq!(config.version, DEFAULT_CONFIG_VERSION);
}

#[test]
fn test_toml_partial_override() {
    let toml = r#"
        version = "2025.1"

        [pair]
        mirror_bonus = 9.0

        [adjust]
        energy_gap_deltas = [0.0, 1.0, 2.0]

        [tiebreak]
        buckets = 500
    "#;

    let config = ScoringConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.version, "2025.1");
    assert_eq!(config.pair.mirror_bonus, 9.0);
    assert_eq!(config.pair.same_function_penalty, 4.0);
    assert_eq!(config.adjust.energy_gap_deltas, [0.0, 1.0, 2.0]);
    assert_eq!(config.tiebreak.buckets, 500);
    assert_eq!(config.tiebreak.span, 2.0);
    assert_eq!(config.classify, ClassifyConfig::default());
    config.validate().unwrap();
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        version: yaml-set
        classify:
          level_thresholds: [20.0, 40.0, 60.0, 80.0]
          high_band: 60.0
          low_band: 40.0
        adjust:
          soft_cap: 3.0
          hard_cap: 5.0
    "#;

    let config = ScoringConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.version, "yaml-set");
    assert_eq!(config.classify.level_thresholds, [20.0, 40.0, 60.0, 80.0]);
    assert_eq!(config.adjust.hard_cap, 5.0);
    config.validate().unwrap();
}

#[test]
fn test_missing_file_falls_back() {
    let err = ScoringConfig::load("/nonexistent/chemforge.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_bad_toml() {
    let err = ScoringConfig::from_toml_str("[pair]\nmirror_bonus = \"high\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_rejects_increasing_weights() {
    let mut config = ScoringConfig::default();
    config.pair.position_weights = [1.0, 0.5, 0.75, 0.25];
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_rejects_non_positive_scale() {
    let mut config = ScoringConfig::default();
    config.pair.saturation_scale = 0.0;
    assert!(config.validate().is_err());

    let mut config = ScoringConfig::default();
    config.pair.mirror_bonus = f64::NAN;
    assert!(config.validate().is_err());
}

#[test]
fn test_rejects_asymmetric_conflict_matrix() {
    let mut config = ScoringConfig::default();
    config.adjust.conflict_matrix[0][3] = 1.0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("symmetric"));
}

#[test]
fn test_rejects_inverted_caps() {
    let mut config = ScoringConfig::default();
    config.adjust.soft_cap = 6.0;
    config.adjust.hard_cap = 4.0;
    assert!(config.validate().is_err());
}

#[test]
fn test_rejects_unordered_thresholds() {
    let mut config = ScoringConfig::default();
    config.classify.level_thresholds = [30.0, 30.0, 65.0, 80.0];
    assert!(config.validate().is_err());

    let mut config = ScoringConfig::default();
    config.classify.low_band = 70.0;
    assert!(config.validate().is_err());
}

#[test]
fn test_rejects_diff_limits_above_four() {
    let mut config = ScoringConfig::default();
    config.classify.volatile_min_diff = 5;
    assert!(config.validate().is_err());
}

#[test]
fn test_rejects_empty_version() {
    let config = ScoringConfig::default().with_version("  ");
    assert!(config.validate().is_err());
}

#[test]
fn test_toml_round_trip_keeps_defaults() {
    let config = ScoringConfig::default();
    let text = toml::to_string(&config).unwrap();
    assert_eq!(ScoringConfig::from_toml_str(&text).unwrap(), config);
}
