use std::path::Path;

use anyhow::Result;
use clap::Parser;

use rust_passgen::cli::commands::generation_config;
use rust_passgen::cli::{handlers, menu, Args, CliCommand};
use rust_passgen::{logging, Config, PasswordSession};

fn main() -> Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(history_file) = &args.history_file {
        config.history_file = Some(history_file.clone());
    }
    config.ensure_directories_exist();

    if let Err(e) = logging::init(&config) {
        eprintln!("⚠️  Logging disabled: {}", e);
    }

    log::info!("🔒 Starting password generator");
    log::debug!("Loaded config: {:?}", config);

    let mut session = PasswordSession::from_config(&config);

    match args.command {
        Some(CliCommand::Generate {
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            no_symbols,
            no_history,
        }) => {
            let options = generation_config(
                length.unwrap_or(config.default_length),
                no_uppercase,
                no_lowercase,
                no_numbers,
                no_symbols,
            );
            handlers::handle_generate(&mut session, &options, !no_history, args.json)?;
        }
        Some(CliCommand::Analyze { password }) => {
            handlers::handle_analyze(&session, &password, args.json)?;
        }
        Some(CliCommand::History) => {
            handlers::handle_history(&session, args.json)?;
        }
        Some(CliCommand::Show { position }) => {
            handlers::handle_show(&session, position, args.json)?;
        }
        Some(CliCommand::Remove { position }) => {
            handlers::handle_remove(&mut session, position, args.json)?;
        }
        Some(CliCommand::Clear { yes }) => {
            handlers::handle_clear(&mut session, yes, args.json)?;
        }
        None => {
            menu::run_cli_menu(&mut session, &config)?;
        }
    }

    log::info!("✅ Shutdown complete");
    Ok(())
}
