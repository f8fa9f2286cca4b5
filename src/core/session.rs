// src/core/session.rs
use serde::Serialize;

use crate::core::config::Config;
use crate::generators::{GeneratorError, PasswordGenerator, RandomSource, StrengthAnalyzer};
use crate::history::{HistoryError, HistoryStorage, HistoryStore, JsonFileStorage};
use crate::models::{
    ClearOutcome, GenerationConfig, GenerationLimits, HistoryEntry, Password, StrengthReport,
};
use crate::utils::now_timestamp;

/// A password together with its strength report.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPassword {
    pub password: Password,
    pub report: StrengthReport,
}

/// Owns the generator, analyzer, history and the password currently shown.
pub struct PasswordSession<S: HistoryStorage> {
    generator: PasswordGenerator<Box<dyn RandomSource>>,
    analyzer: StrengthAnalyzer,
    history: HistoryStore<S>,
    current: Option<Password>,
}

impl PasswordSession<JsonFileStorage> {
    /// Session backed by the history file named in `config`.
    pub fn from_config(config: &Config) -> Self {
        let generator = PasswordGenerator::with_source(config.build_random_source())
            .with_limits(config.limits());
        let storage = JsonFileStorage::new(config.history_path());
        log::debug!("History file: {}", storage.path().display());
        let history = HistoryStore::load(storage, config.max_history_items);
        PasswordSession::new(generator, history)
    }
}

impl<S: HistoryStorage> PasswordSession<S> {
    pub fn new(generator: PasswordGenerator<Box<dyn RandomSource>>, history: HistoryStore<S>) -> Self {
        Self {
            generator,
            analyzer: StrengthAnalyzer::new(),
            history,
            current: None,
        }
    }

    /// Generate, score and record a password.
    pub fn generate(&mut self, config: &GenerationConfig) -> Result<GeneratedPassword, GeneratorError> {
        let generated = self.generate_unrecorded(config)?;
        self.history.record(HistoryEntry::new(
            generated.password.as_str(),
            now_timestamp(),
            generated.report.level,
        ));
        Ok(generated)
    }

    /// Generate and score a password without touching the history.
    pub fn generate_unrecorded(&mut self, config: &GenerationConfig) -> Result<GeneratedPassword, GeneratorError> {
        let password = self.generator.generate_password(config).map_err(|e| {
            log::warn!("Password generation rejected: {}", e);
            e
        })?;
        let report = self.analyzer.analyze(password.as_str());
        log::info!(
            "Generated {}-character password ({}, {}/100)",
            password.len(),
            report.level,
            report.score
        );

        self.current = Some(password.clone());
        Ok(GeneratedPassword { password, report })
    }

    pub fn analyze(&self, password: &str) -> StrengthReport {
        self.analyzer.analyze(password)
    }

    pub fn current_password(&self) -> Option<&Password> {
        self.current.as_ref()
    }

    pub fn limits(&self) -> GenerationLimits {
        self.generator.limits()
    }

    pub fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    pub fn remove_from_history(&mut self, index: usize) -> Result<HistoryEntry, HistoryError> {
        let removed = self.history.remove_at(index)?;
        log::info!("Removed history entry {}", index);
        Ok(removed)
    }

    pub fn clear_history(&mut self) -> ClearOutcome {
        let outcome = self.history.clear();
        match outcome {
            ClearOutcome::Cleared(count) => log::info!("Cleared {} history entries", count),
            ClearOutcome::AlreadyEmpty => log::debug!("History already empty"),
        }
        outcome
    }
}
