// src/cli/mod.rs
use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;
pub mod view;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Random password generator with strength scoring", long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// History file location
    #[arg(long, env = "PASSGEN_HISTORY_FILE")]
    pub history_file: Option<PathBuf>,

    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
