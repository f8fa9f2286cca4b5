// src/core/config.rs
use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use crate::generators::random::{OsRandom, RandomSource, SeededRandom, ThreadRandom};
use crate::models::{GenerationConfig, GenerationLimits};

/// Upper bound accepted for `PASSGEN_MAX_LENGTH`.
pub const MAX_LENGTH_CAP: usize = 1024;

// Configuration for the password generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub min_length: usize,
    pub max_length: usize,
    pub default_length: usize,
    pub random_source: RandomSourceKind,
    pub random_seed: Option<u64>,

    // History
    pub max_history_items: usize,
    /// `None` means the platform data directory.
    pub history_file: Option<PathBuf>,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomSourceKind {
    Thread,
    Os,
    Seeded,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            min_length: 4,
            max_length: 128,
            default_length: 12,
            random_source: RandomSourceKind::Thread,
            random_seed: None,

            // History
            max_history_items: 10,
            history_file: None,

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset or unparsable values keep
    /// their defaults.
    pub fn load_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("PASSGEN_MIN_LENGTH") {
            match val.parse() {
                Ok(min) => config.min_length = min,
                Err(_) => log::warn!("Ignoring invalid PASSGEN_MIN_LENGTH '{}'", val),
            }
        }

        if let Some(val) = lookup("PASSGEN_MAX_LENGTH") {
            match val.parse::<usize>() {
                Ok(max) if max > MAX_LENGTH_CAP => {
                    log::warn!("PASSGEN_MAX_LENGTH {} is above {}, capping", max, MAX_LENGTH_CAP);
                    config.max_length = MAX_LENGTH_CAP;
                }
                Ok(max) => config.max_length = max,
                Err(_) => log::warn!("Ignoring invalid PASSGEN_MAX_LENGTH '{}'", val),
            }
        }

        if config.min_length > config.max_length {
            log::warn!(
                "Minimum length {} exceeds maximum {}, using defaults",
                config.min_length,
                config.max_length
            );
            let defaults = Config::default();
            config.min_length = defaults.min_length;
            config.max_length = defaults.max_length;
        }

        if let Some(val) = lookup("PASSGEN_DEFAULT_LENGTH") {
            match val.parse() {
                Ok(length) => config.default_length = length,
                Err(_) => log::warn!("Ignoring invalid PASSGEN_DEFAULT_LENGTH '{}'", val),
            }
        }
        config.default_length = config.default_length.clamp(config.min_length, config.max_length);

        if let Some(kind) = lookup("PASSGEN_RANDOM_SOURCE") {
            match kind.to_lowercase().as_str() {
                "thread" => config.random_source = RandomSourceKind::Thread,
                "os" => config.random_source = RandomSourceKind::Os,
                "seeded" => config.random_source = RandomSourceKind::Seeded,
                _ => log::warn!("Unknown random source '{}', using thread", kind),
            }
        }

        if let Some(val) = lookup("PASSGEN_RANDOM_SEED") {
            match val.parse() {
                Ok(seed) => config.random_seed = Some(seed),
                Err(_) => log::warn!("Ignoring invalid PASSGEN_RANDOM_SEED '{}'", val),
            }
        }

        // History
        if let Some(val) = lookup("PASSGEN_MAX_HISTORY") {
            match val.parse() {
                Ok(items) => config.max_history_items = items,
                Err(_) => log::warn!("Ignoring invalid PASSGEN_MAX_HISTORY '{}'", val),
            }
        }

        if let Some(file) = lookup("PASSGEN_HISTORY_FILE") {
            if !file.trim().is_empty() {
                config.history_file = Some(PathBuf::from(file));
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    /// Configured history file, or the platform default.
    ///
    /// Only the default path touches the filesystem, since resolving it
    /// creates the data directory.
    pub fn history_path(&self) -> PathBuf {
        match &self.history_file {
            Some(path) => path.clone(),
            None => crate::utils::default_history_path(),
        }
    }

    pub fn limits(&self) -> GenerationLimits {
        GenerationLimits::new(self.min_length, self.max_length)
    }

    pub fn default_generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            length: self.default_length,
            ..GenerationConfig::default()
        }
    }

    pub fn build_random_source(&self) -> Box<dyn RandomSource> {
        match self.random_source {
            RandomSourceKind::Thread => Box::new(ThreadRandom::new()),
            RandomSourceKind::Os => Box::new(OsRandom),
            RandomSourceKind::Seeded => Box::new(SeededRandom::new(self.random_seed.unwrap_or(0))),
        }
    }

    // Create directories needed for operation
    pub fn ensure_directories_exist(&self) {
        if let Some(parent) = self.history_file.as_ref().and_then(|f| f.parent()) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    log::warn!("Failed to create history directory: {}", e);
                }
            }
        }

        if let Some(parent) = self.log_file.as_ref().and_then(|f| f.parent()) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    log::warn!("Failed to create log directory: {}", e);
                }
            }
        }
    }
}
