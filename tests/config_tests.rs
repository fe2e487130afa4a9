use indoc::indoc;
use spamsift::{
    load_config_from_path, parse_and_validate_config, Classifier, ConfigError, RulesConfig,
};

#[test]
fn test_load_overrides_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".spamsift.toml");
    std::fs::write(
        &path,
        indoc! {r#"
            [weights]
            high = 50

            [thresholds]
            spam = 90
        "#},
    )
    .unwrap();

    let config = load_config_from_path(&path).unwrap();
    assert_eq!(config.weights.high, 50);
    assert_eq!(config.thresholds.spam, 90);
    // Untouched values keep their defaults.
    assert_eq!(config.weights.medium, 10);
    assert_eq!(config.keywords.low.len(), RulesConfig::default().keywords.low.len());
}

#[test]
fn test_loaded_config_changes_classification() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".spamsift.toml");
    std::fs::write(
        &path,
        indoc! {r#"
            [weights]
            high = 100
        "#},
    )
    .unwrap();

    let config = load_config_from_path(&path).unwrap();
    let tuned = Classifier::from_config(config).unwrap();
    let stock = Classifier::new();

    let text = "the lottery draw is tonight, plus filler words to pass fifty bytes";
    let stock_result = stock.classify(text).unwrap();
    let tuned_result = tuned.classify(text).unwrap();

    assert_eq!(stock_result.score, 25);
    assert_eq!(tuned_result.score, 100);
    assert!(tuned_result.is_spam);
    assert!(!stock_result.is_spam);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config_from_path(&dir.path().join(".spamsift.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_bad_pattern_is_rejected_at_load() {
    let contents = indoc! {r#"
        [[formatting]]
        pattern = "[unterminated"
        reason = "excessive_caps"
    "#};

    let err = parse_and_validate_config(contents).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPattern { .. }));
}

#[test]
fn test_unknown_reason_kind_is_parse_error() {
    let contents = indoc! {r#"
        [[patterns]]
        pattern = "jackpot"
        reason = "not_a_reason"
    "#};

    let err = parse_and_validate_config(contents).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_zero_spam_threshold_is_rejected() {
    let contents = indoc! {r#"
        [thresholds]
        spam = 0
    "#};

    let err = parse_and_validate_config(contents).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidThreshold { .. }));
}

#[test]
fn test_replacing_pattern_table_disables_stock_patterns() {
    let contents = indoc! {r#"
        [[patterns]]
        pattern = '(?i)\bwire\s*transfer\b'
        reason = "money_offer"
    "#};

    let config = parse_and_validate_config(contents).unwrap();
    assert_eq!(config.patterns.len(), 1);

    let classifier = Classifier::from_config(config).unwrap();
    let result = classifier
        .classify("please handle the wire transfer before close of day")
        .unwrap();
    assert_eq!(result.score, 20);

    // The stock click-bait pattern is gone ("click this" avoids the stock
    // keyword lists, which this config keeps).
    let click = classifier
        .classify("click this when you get a chance to review the slides")
        .unwrap();
    assert_eq!(click.score, 0);
}
