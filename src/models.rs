// src/models.rs
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Character classes a password can draw from.
///
/// Declaration order is the order in which guaranteed characters are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digit => "numbers",
            CharacterClass::Symbol => "symbols",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub length: usize,
    pub enabled_classes: BTreeSet<CharacterClass>,
}

impl GenerationConfig {
    pub fn new(length: usize, classes: impl IntoIterator<Item = CharacterClass>) -> Self {
        Self {
            length,
            enabled_classes: classes.into_iter().collect(),
        }
    }

    pub fn without_class(mut self, class: CharacterClass) -> Self {
        self.enabled_classes.remove(&class);
        self
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        self.enabled_classes.contains(&class)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(12, CharacterClass::ALL)
    }
}

/// Inclusive bounds on the requested password length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationLimits {
    pub min_length: usize,
    pub max_length: usize,
}

impl GenerationLimits {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self { min_length, max_length }
    }

    pub fn contains(&self, length: usize) -> bool {
        (self.min_length..=self.max_length).contains(&length)
    }
}

impl Default for GenerationLimits {
    fn default() -> Self {
        Self {
            min_length: 4,
            max_length: 128,
        }
    }
}

/// A generated password. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    pub(crate) fn from_chars(chars: Vec<char>) -> Self {
        Password(chars.into_iter().collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthCriterion {
    pub description: String,
    pub satisfied: bool,
}

impl StrengthCriterion {
    pub fn met(description: &str) -> Self {
        Self {
            description: description.to_string(),
            satisfied: true,
        }
    }

    pub fn unmet(description: &str) -> Self {
        Self {
            description: description.to_string(),
            satisfied: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    /// Highest tier whose threshold the score reaches.
    pub fn from_score(score: u32) -> Self {
        if score >= 85 {
            StrengthLevel::Strong
        } else if score >= 70 {
            StrengthLevel::Good
        } else if score >= 50 {
            StrengthLevel::Fair
        } else {
            StrengthLevel::Weak
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
    /// Summed points. Not clamped, so it can reach 110.
    pub score: u32,
    pub level: StrengthLevel,
    pub criteria: Vec<StrengthCriterion>,
}

impl StrengthReport {
    /// Score capped at 100, for progress bars.
    pub fn percent(&self) -> u32 {
        self.score.min(100)
    }

    pub fn satisfied_count(&self) -> usize {
        self.criteria.iter().filter(|c| c.satisfied).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub password: String,
    pub created_at: String,
    pub level: StrengthLevel,
}

impl HistoryEntry {
    pub fn new(password: impl Into<String>, created_at: impl Into<String>, level: StrengthLevel) -> Self {
        Self {
            password: password.into(),
            created_at: created_at.into(),
            level,
        }
    }
}

/// Result of clearing the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClearOutcome {
    Cleared(usize),
    AlreadyEmpty,
}
