//! Random password generation with strength scoring and a bounded,
//! persisted history of recent results.

pub mod cli;
pub mod core;
pub mod generators;
pub mod history;
pub mod logging;
pub mod models;
pub mod utils;

pub use crate::core::config::Config;
pub use crate::core::session::{GeneratedPassword, PasswordSession};
pub use crate::generators::{GeneratorError, PasswordGenerator, RandomSource, StrengthAnalyzer};
pub use crate::history::{HistoryError, HistoryStorage, HistoryStore};
pub use crate::models::{
    CharacterClass, ClearOutcome, GenerationConfig, GenerationLimits, HistoryEntry, Password,
    StrengthCriterion, StrengthLevel, StrengthReport,
};
