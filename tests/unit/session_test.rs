//! Unit tests for the password session.

use rust_passgen::core::config::Config;
use rust_passgen::generators::SeededRandom;
use rust_passgen::history::{HistoryStore, MemoryStorage};
use rust_passgen::{
    CharacterClass, ClearOutcome, GenerationConfig, PasswordGenerator, PasswordSession, RandomSource,
};

fn setup(seed: u64) -> PasswordSession<MemoryStorage> {
    let source: Box<dyn RandomSource> = Box::new(SeededRandom::new(seed));
    PasswordSession::new(
        PasswordGenerator::with_source(source),
        HistoryStore::new(MemoryStorage::new(), 10),
    )
}

#[test]
fn test_generate_scores_and_records() {
    let mut session = setup(1);
    let generated = session.generate(&GenerationConfig::default()).unwrap();

    assert_eq!(generated.password.len(), 12);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history().entries()[0].level, generated.report.level);
    assert_eq!(session.history().storage().save_count(), 1);
}

#[test]
fn test_digits_only_password_is_weak() {
    let mut session = setup(2);
    let generated = session
        .generate(&GenerationConfig::new(6, [CharacterClass::Digit]))
        .unwrap();

    assert!(generated.password.as_str().chars().all(|c| c.is_ascii_digit()));
    // Only the digit check can pass below 8 characters.
    assert!(generated.report.score <= 25);
}

#[test]
fn test_newest_first() {
    let mut session = setup(3);
    let first = session.generate(&GenerationConfig::default()).unwrap();
    let second = session.generate(&GenerationConfig::default()).unwrap();

    let entries = session.history().entries();
    assert_eq!(entries[0].password, second.password.as_str());
    assert_eq!(entries[1].password, first.password.as_str());
    assert_eq!(session.current_password(), Some(&second.password));
}

#[test]
fn test_no_classes_is_rejected() {
    let mut session = setup(4);
    let config = GenerationConfig::default()
        .without_class(CharacterClass::Uppercase)
        .without_class(CharacterClass::Lowercase)
        .without_class(CharacterClass::Digit)
        .without_class(CharacterClass::Symbol);

    assert!(session.generate(&config).is_err());
    assert!(session.history().is_empty());
}

#[test]
fn test_clear_reports_count() {
    let mut session = setup(5);
    for _ in 0..3 {
        session.generate(&GenerationConfig::default()).unwrap();
    }
    assert_eq!(session.clear_history(), ClearOutcome::Cleared(3));
    assert_eq!(session.clear_history(), ClearOutcome::AlreadyEmpty);
}

#[test]
fn test_session_from_config_uses_history_file() {
    let dir = tempfile::tempdir().unwrap();
    let history_file = dir.path().join("history.json");
    let config = Config {
        history_file: Some(history_file.clone()),
        max_history_items: 2,
        ..Config::default()
    };

    {
        let mut session = PasswordSession::from_config(&config);
        for _ in 0..3 {
            session.generate(&config.default_generation_config()).unwrap();
        }
    }

    assert!(history_file.exists());
    let session = PasswordSession::from_config(&config);
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history().capacity(), 2);
}
