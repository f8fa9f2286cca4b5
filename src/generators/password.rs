use thiserror::Error;

use crate::generators::charset;
use crate::generators::random::{RandomSource, ThreadRandom};
use crate::models::{GenerationConfig, GenerationLimits, Password};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid config: password length must be between {min} and {max} characters (got {length})")]
    InvalidLength { length: usize, min: usize, max: usize },

    #[error("Invalid config: at least one character type must be included")]
    NoCharacterClasses,
}

impl GeneratorError {
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, GeneratorError::InvalidLength { .. } | GeneratorError::NoCharacterClasses)
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

pub struct PasswordGenerator<R = ThreadRandom> {
    rng: R,
    limits: GenerationLimits,
}

impl PasswordGenerator<ThreadRandom> {
    pub fn new() -> Self {
        PasswordGenerator::with_source(ThreadRandom::new())
    }
}

impl Default for PasswordGenerator<ThreadRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> PasswordGenerator<R> {
    pub fn with_source(rng: R) -> Self {
        PasswordGenerator {
            rng,
            limits: GenerationLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: GenerationLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> GenerationLimits {
        self.limits
    }

    pub fn validate(&self, config: &GenerationConfig) -> Result<()> {
        if !self.limits.contains(config.length) {
            return Err(GeneratorError::InvalidLength {
                length: config.length,
                min: self.limits.min_length,
                max: self.limits.max_length,
            });
        }

        if config.enabled_classes.is_empty() {
            return Err(GeneratorError::NoCharacterClasses);
        }

        Ok(())
    }

    /// Build a password for `config`.
    ///
    /// One character is drawn from every enabled class first, the rest comes
    /// from the union of the enabled classes, and the whole sequence is then
    /// shuffled. If more classes are enabled than `length` allows, the result
    /// is one character per class rather than `length` characters.
    pub fn generate_password(&mut self, config: &GenerationConfig) -> Result<Password> {
        self.validate(config)?;

        let mut chars = Vec::with_capacity(config.length.max(config.enabled_classes.len()));

        for class in &config.enabled_classes {
            chars.push(self.rng.pick_char(charset::members(*class)));
        }

        let pool = charset::build_pool(&config.enabled_classes);
        let remaining = config.length.saturating_sub(config.enabled_classes.len());
        for _ in 0..remaining {
            chars.push(self.rng.pick_char(&pool));
        }

        self.rng.shuffle_chars(&mut chars);

        log::debug!(
            "Generated password of {} characters from {} classes",
            chars.len(),
            config.enabled_classes.len()
        );

        Ok(Password::from_chars(chars))
    }
}
