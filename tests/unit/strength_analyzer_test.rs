//! Unit tests for the strength analyzer.

use rust_passgen::{StrengthAnalyzer, StrengthLevel};

fn analyzer() -> StrengthAnalyzer {
    StrengthAnalyzer::new()
}

#[test]
fn test_empty_password_scores_zero() {
    let report = analyzer().analyze("");
    assert_eq!(report.score, 0);
    assert_eq!(report.level, StrengthLevel::Weak);
    assert!(report.criteria.iter().all(|c| !c.satisfied));
}

#[test]
fn test_ten_mixed_characters() {
    let report = analyzer().analyze("Abcdefgh1!");
    assert_eq!(report.score, 20 + 15 + 15 + 15 + 25 + 10);
    assert_eq!(report.level, StrengthLevel::Strong);
}

#[test]
fn test_repeated_lowercase() {
    let report = analyzer().analyze("aaaaaaaa");
    assert_eq!(report.score, 35);
    assert_eq!(report.level, StrengthLevel::Weak);
}

#[test]
fn test_maximum_score_exceeds_one_hundred() {
    let report = analyzer().analyze("Zy9!Xw8@Vu7#");
    assert_eq!(report.score, 110);
    assert_eq!(report.percent(), 100);
}

#[test]
fn test_criteria_order() {
    let report = analyzer().analyze("abcdefghijklm");
    let texts: Vec<&str> = report.criteria.iter().map(|c| c.description.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "adequate length",
            "excellent length",
            "no uppercase",
            "has lowercase",
            "no digits",
            "no symbols",
            "good variety",
        ]
    );
    // 20 + 10 + 15 + 10
    assert_eq!(report.score, 55);
    assert_eq!(report.level, StrengthLevel::Fair);
}

#[test]
fn test_spaces_count_as_symbols() {
    let report = analyzer().analyze("two words");
    assert!(report.criteria.iter().any(|c| c.description == "has symbols" && c.satisfied));
}

#[test]
fn test_analysis_is_deterministic() {
    let a = analyzer().analyze("S0me-Pass");
    let b = analyzer().analyze("S0me-Pass");
    assert_eq!(a, b);
}
