// src/generators/mod.rs
pub mod charset;
pub mod password;
pub mod random;
pub mod strength;

pub use password::{GeneratorError, PasswordGenerator};
pub use random::{OsRandom, RandomSource, SeededRandom, ThreadRandom};
pub use strength::StrengthAnalyzer;
