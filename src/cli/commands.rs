// src/cli/commands.rs
use clap::Subcommand;

use crate::models::{CharacterClass, GenerationConfig};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password
    Generate {
        /// Password length
        #[arg(long, short)]
        length: Option<usize>,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out numbers
        #[arg(long)]
        no_numbers: bool,

        /// Leave out symbols
        #[arg(long)]
        no_symbols: bool,

        /// Do not record the password in the history
        #[arg(long)]
        no_history: bool,
    },

    /// Analyze the strength of a password
    Analyze {
        /// Password to analyze
        #[arg(required = true)]
        password: String,
    },

    /// List recently generated passwords
    History,

    /// Print a history entry in full
    Show {
        /// Position as shown by `history` (starting at 1)
        #[arg(required = true)]
        position: usize,
    },

    /// Remove a history entry
    Remove {
        /// Position as shown by `history` (starting at 1)
        #[arg(required = true)]
        position: usize,
    },

    /// Clear the history
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

/// Build a generation config from the `generate` flags.
pub fn generation_config(
    length: usize,
    no_uppercase: bool,
    no_lowercase: bool,
    no_numbers: bool,
    no_symbols: bool,
) -> GenerationConfig {
    let excluded = [
        (CharacterClass::Uppercase, no_uppercase),
        (CharacterClass::Lowercase, no_lowercase),
        (CharacterClass::Digit, no_numbers),
        (CharacterClass::Symbol, no_symbols),
    ];

    GenerationConfig::new(
        length,
        excluded
            .into_iter()
            .filter(|(_, skip)| !skip)
            .map(|(class, _)| class),
    )
}
