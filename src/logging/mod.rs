// src/logging/mod.rs
use std::fs::OpenOptions;
use std::io;

use thiserror::Error;

use crate::core::config::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger initialization error: {0}")]
    InitError(String),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Install the global logger.
///
/// Logs go to `config.log_file` when set, stderr otherwise. `RUST_LOG`
/// still overrides the configured level per module.
pub fn init(config: &Config) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .parse_env("RUST_LOG")
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    if let Some(log_file) = &config.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    } else {
        builder.target(env_logger::Target::Stderr);
    }

    builder
        .try_init()
        .map_err(|e| LoggingError::InitError(e.to_string()))
}
