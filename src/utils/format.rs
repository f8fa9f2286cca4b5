// src/utils/format.rs
use chrono::{DateTime, Local, TimeZone};

// Day-first local timestamp, e.g. "16/10/2026, 09:05:07"
pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%d/%m/%Y, %H:%M:%S").to_string()
}

pub fn now_timestamp() -> String {
    format_timestamp(&Local::now())
}

// Truncate a string if it's too long, counting characters
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
