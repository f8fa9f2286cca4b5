// src/cli/menu.rs
use anyhow::Result;
use inquire::{Confirm, InquireError, MultiSelect, Password, PasswordDisplayMode, Select, Text};

use crate::cli::handlers::{print_entry, print_generated, print_history, print_report};
use crate::cli::view::render_history;
use crate::core::config::Config;
use crate::core::session::PasswordSession;
use crate::history::HistoryStorage;
use crate::models::{CharacterClass, ClearOutcome, GenerationConfig};

const GENERATE: &str = "🔐  Generate password";
const ANALYZE: &str = "📊  Analyze a password";
const SHOW_CURRENT: &str = "📋  Show last generated password";
const SHOW_HISTORY: &str = "📜  Show history";
const SHOW_ENTRY: &str = "🔎  Show a history entry in full";
const REMOVE_ENTRY: &str = "🗑️  Remove a history entry";
const CLEAR_HISTORY: &str = "🧹  Clear history";
const EXIT: &str = "🚪  Exit";

pub fn run_cli_menu<S: HistoryStorage>(session: &mut PasswordSession<S>, config: &Config) -> Result<()> {
    println!("🦀🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║        🦀 RUST PASSWORD FORGE        ║");
    println!("╚══════════════════════════════════════╝");

    loop {
        let options = vec![
            GENERATE,
            ANALYZE,
            SHOW_CURRENT,
            SHOW_HISTORY,
            SHOW_ENTRY,
            REMOVE_ENTRY,
            CLEAR_HISTORY,
            EXIT,
        ];
        let choice = match Select::new("What would you like to do?", options).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        let result = match choice {
            GENERATE => generate(session, config),
            ANALYZE => analyze(session),
            SHOW_CURRENT => {
                show_current(session);
                Ok(())
            }
            SHOW_HISTORY => {
                print_history(&render_history(session.history().entries()));
                Ok(())
            }
            SHOW_ENTRY => show_entry(session),
            REMOVE_ENTRY => remove_entry(session),
            CLEAR_HISTORY => clear_history(session),
            _ => break,
        };

        match result {
            Ok(()) => {}
            Err(e) if is_cancel(&e) => println!("Cancelled"),
            Err(e) => return Err(e),
        }

        if session.history().is_degraded() {
            println!("⚠️  History could not be saved; changes are kept for this session only");
        }
        println!();
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn is_cancel(e: &anyhow::Error) -> bool {
    matches!(
        e.downcast_ref::<InquireError>(),
        Some(InquireError::OperationCanceled) | Some(InquireError::OperationInterrupted)
    )
}

fn generate<S: HistoryStorage>(session: &mut PasswordSession<S>, config: &Config) -> Result<()> {
    let limits = session.limits();
    let length: usize = match Text::new(&format!(
        "Password length ({}-{}):",
        limits.min_length, limits.max_length
    ))
    .with_default(&config.default_length.to_string())
    .prompt()?
    .trim()
    .parse()
    {
        Ok(length) => length,
        Err(_) => {
            println!("❌ Invalid number");
            return Ok(());
        }
    };

    let classes = MultiSelect::new("Character types:", CharacterClass::ALL.to_vec())
        .with_default(&[0, 1, 2, 3])
        .prompt()?;

    if classes.is_empty() {
        println!("❗ You must select at least one character type");
        return Ok(());
    }

    match session.generate(&GenerationConfig::new(length, classes)) {
        Ok(generated) => print_generated(&generated),
        Err(e) => println!("❌ {}", e),
    }
    Ok(())
}

fn analyze<S: HistoryStorage>(session: &PasswordSession<S>) -> Result<()> {
    let password = Password::new("Password to analyze:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    print_report(&session.analyze(&password));
    Ok(())
}

fn show_current<S: HistoryStorage>(session: &PasswordSession<S>) {
    match session.current_password() {
        Some(password) => {
            println!("\nLast generated password: {}", password);
            print_report(&session.analyze(password.as_str()));
        }
        None => println!("No password generated in this session yet"),
    }
}

/// Let the user pick a history entry; returns its list index.
fn select_entry<S: HistoryStorage>(session: &PasswordSession<S>, prompt: &str) -> Result<Option<usize>> {
    let rows = render_history(session.history().entries());
    if rows.is_empty() {
        println!("No passwords generated yet");
        return Ok(None);
    }

    let labels: Vec<String> = rows
        .iter()
        .map(|row| format!("{}. {} ({}, {})", row.position, row.short_password(), row.created_at, row.level))
        .collect();
    let selection = Select::new(prompt, labels.clone()).prompt()?;

    Ok(labels.iter().position(|label| label == &selection))
}

fn show_entry<S: HistoryStorage>(session: &PasswordSession<S>) -> Result<()> {
    if let Some(index) = select_entry(session, "Select the entry to show:")? {
        if let Some(entry) = session.history().get(index) {
            print_entry(index + 1, entry);
        }
    }
    Ok(())
}

fn remove_entry<S: HistoryStorage>(session: &mut PasswordSession<S>) -> Result<()> {
    if let Some(index) = select_entry(session, "Select the entry to remove:")? {
        match session.remove_from_history(index) {
            Ok(_) => println!("✅ Removed password from history"),
            Err(e) => println!("❌ {}", e),
        }
    }
    Ok(())
}

fn clear_history<S: HistoryStorage>(session: &mut PasswordSession<S>) -> Result<()> {
    if session.history().is_empty() {
        println!("ℹ️  History is already empty");
        return Ok(());
    }

    let confirm = Confirm::new("Are you sure you want to clear the whole history?")
        .with_default(false)
        .prompt()?;

    if confirm {
        match session.clear_history() {
            ClearOutcome::Cleared(count) => println!("✅ Cleared {} history entries", count),
            ClearOutcome::AlreadyEmpty => println!("ℹ️  History is already empty"),
        }
    }
    Ok(())
}
