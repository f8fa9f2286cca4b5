// src/core/mod.rs
pub mod config;
pub mod session;

pub use config::{Config, RandomSourceKind};
pub use session::{GeneratedPassword, PasswordSession};
