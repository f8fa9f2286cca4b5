// src/cli/handlers.rs
use anyhow::{bail, Result};
use console::style;
use inquire::Confirm;

use crate::cli::view::{render_history, strength_bar, HistoryRow};
use crate::core::session::{GeneratedPassword, PasswordSession};
use crate::history::{HistoryError, HistoryStorage};
use crate::models::{ClearOutcome, GenerationConfig, HistoryEntry, StrengthLevel, StrengthReport};

// Handlers for CLI commands
pub fn handle_generate<S: HistoryStorage>(
    session: &mut PasswordSession<S>,
    config: &GenerationConfig,
    record: bool,
    json: bool,
) -> Result<()> {
    let generated = if record {
        session.generate(config)?
    } else {
        session.generate_unrecorded(config)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&generated)?);
    } else {
        print_generated(&generated);
        warn_if_degraded(session);
    }
    Ok(())
}

pub fn handle_analyze<S: HistoryStorage>(session: &PasswordSession<S>, password: &str, json: bool) -> Result<()> {
    let report = session.analyze(password);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

pub fn handle_history<S: HistoryStorage>(session: &PasswordSession<S>, json: bool) -> Result<()> {
    let rows = render_history(session.history().entries());
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print_history(&rows);
    }
    Ok(())
}

pub fn handle_show<S: HistoryStorage>(session: &PasswordSession<S>, position: usize, json: bool) -> Result<()> {
    let entry = history_entry_at(session, position)?;
    if json {
        println!("{}", serde_json::to_string_pretty(entry)?);
    } else {
        print_entry(position, entry);
    }
    Ok(())
}

pub fn handle_remove<S: HistoryStorage>(session: &mut PasswordSession<S>, position: usize, json: bool) -> Result<()> {
    let removed = session.remove_from_history(position_to_index(position)?)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&removed)?);
    } else {
        println!("✅ Removed password from history");
        warn_if_degraded(session);
    }
    Ok(())
}

pub fn handle_clear<S: HistoryStorage>(session: &mut PasswordSession<S>, skip_confirm: bool, json: bool) -> Result<()> {
    if session.history().is_empty() {
        report_clear(ClearOutcome::AlreadyEmpty, json)?;
        return Ok(());
    }

    if !skip_confirm {
        let confirm = Confirm::new("Are you sure you want to clear the whole history?")
            .with_default(false)
            .prompt()?;
        if !confirm {
            println!("History left untouched");
            return Ok(());
        }
    }

    let outcome = session.clear_history();
    report_clear(outcome, json)?;
    if !json {
        warn_if_degraded(session);
    }
    Ok(())
}

/// Map a displayed position (starting at 1) to a list index.
pub fn position_to_index(position: usize) -> Result<usize> {
    if position == 0 {
        bail!("History positions start at 1");
    }
    Ok(position - 1)
}

/// The history entry shown at `position`.
pub fn history_entry_at<S: HistoryStorage>(session: &PasswordSession<S>, position: usize) -> Result<&HistoryEntry> {
    let index = position_to_index(position)?;
    let history = session.history();
    match history.get(index) {
        Some(entry) => Ok(entry),
        None => Err(HistoryError::IndexOutOfRange {
            index,
            len: history.len(),
        }
        .into()),
    }
}

fn report_clear(outcome: ClearOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        ClearOutcome::Cleared(count) => println!("✅ Cleared {} history entries", count),
        ClearOutcome::AlreadyEmpty => println!("ℹ️  History is already empty"),
    }
    Ok(())
}

pub fn print_generated(generated: &GeneratedPassword) {
    println!("\nGenerated Password: {}", style(generated.password.as_str()).bold());
    print_report(&generated.report);
}

pub fn print_report(report: &StrengthReport) {
    let level = match report.level {
        StrengthLevel::Weak => style(report.level.label()).red(),
        StrengthLevel::Fair => style(report.level.label()).yellow(),
        StrengthLevel::Good => style(report.level.label()).cyan(),
        StrengthLevel::Strong => style(report.level.label()).green(),
    };

    println!("Strength: {} {} {}/100", level.bold(), strength_bar(report), report.score);
    for criterion in &report.criteria {
        if criterion.satisfied {
            println!("  {} {}", style("✔").green(), criterion.description);
        } else {
            println!("  {} {}", style("✘").red(), criterion.description);
        }
    }
}

pub fn print_entry(position: usize, entry: &HistoryEntry) {
    println!("\n#{} Password: {}", position, style(&entry.password).bold());
    println!("Created: {}  Strength: {}", style(&entry.created_at).dim(), entry.level);
}

pub fn print_history(rows: &[HistoryRow]) {
    if rows.is_empty() {
        println!("No passwords generated yet");
        return;
    }

    for row in rows {
        println!(
            "{:>3}. {}  {}  {}",
            row.position,
            row.short_password(),
            style(&row.created_at).dim(),
            row.level
        );
    }
}

fn warn_if_degraded<S: HistoryStorage>(session: &PasswordSession<S>) {
    if session.history().is_degraded() {
        eprintln!("{}", style("⚠️  History could not be saved; changes are kept for this session only").yellow());
    }
}
