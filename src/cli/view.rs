// src/cli/view.rs
//! Plain display values for the terminal front end.

use serde::Serialize;

use crate::models::{HistoryEntry, StrengthReport};
use crate::utils::truncate_string;

/// Width of the password column in terminal listings.
pub const PASSWORD_COLUMN: usize = 40;
const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    /// 1-based, as typed back into `remove`.
    pub position: usize,
    /// Full stored password, never shortened.
    pub password: String,
    pub created_at: String,
    pub level: String,
}

impl HistoryRow {
    /// Password cut to the listing column width.
    pub fn short_password(&self) -> String {
        truncate_string(&self.password, PASSWORD_COLUMN)
    }
}

pub fn render_history(entries: &[HistoryEntry]) -> Vec<HistoryRow> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| HistoryRow {
            position: i + 1,
            password: entry.password.clone(),
            created_at: entry.created_at.clone(),
            level: entry.level.to_string(),
        })
        .collect()
}

/// Filled bar proportional to the capped score, e.g. `[#####-----]`.
pub fn strength_bar(report: &StrengthReport) -> String {
    let filled = report.percent() as usize * BAR_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
