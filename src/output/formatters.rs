//! Reusable formatting utilities for CLI output
//!
//! Common display helpers for API timestamps, resource units, and token
//! lifetimes used across multiple commands.

use chrono::{DateTime, Utc};

/// Shorten an RFC3339 timestamp from the API to `YYYY-MM-DD HH:MM` UTC.
///
/// Returns the input unchanged if it does not parse, and `-` when empty.
pub fn format_timestamp(raw: &str) -> String {
    if raw.is_empty() {
        return "-".to_string();
    }

    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Format a RAM quantity reported in MiB, switching to GiB when large.
///
/// # Example output
/// - `512 MiB`
/// - `4.0 GiB`
pub fn format_mib(mib: f64) -> String {
    if mib >= 1024.0 {
        format!("{:.1} GiB", mib / 1024.0)
    } else {
        format!("{:.0} MiB", mib)
    }
}

/// Format a storage quantity reported in GiB.
pub fn format_gib(gib: f64) -> String {
    if gib >= 1024.0 {
        format!("{:.1} TiB", gib / 1024.0)
    } else {
        format!("{:.0} GiB", gib)
    }
}

/// Format a used/limit ratio as a percentage, guarding division by zero.
pub fn format_percent(used: f64, limit: f64) -> String {
    if limit <= 0.0 {
        return "-".to_string();
    }
    format!("{:.0}%", used / limit * 100.0)
}

/// Format the time remaining until an instant as `Xh Ym` (or `Ym` under an
/// hour). Returns `expired` for instants in the past.
pub fn format_remaining(until: DateTime<Utc>) -> String {
    let remaining = until.signed_duration_since(Utc::now());
    if remaining.num_seconds() <= 0 {
        return "expired".to_string();
    }

    let hours = remaining.num_hours();
    let mins = remaining.num_minutes() % 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}
