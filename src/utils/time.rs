//! Time utilities: parsing configured durations, formatting elapsed time and hours.

use crate::errors::{AppError, AppResult};
use chrono::Duration;
use regex::Regex;
use std::sync::LazyLock;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:(\d+(?:\.\d+)?)h)?\s*(?:(\d+)m)?\s*$").expect("valid duration regex")
});

/// Parse a duration such as `8h`, `7h30m`, `450m` or `7.5h` into hours.
pub fn parse_duration_hours(s: &str) -> AppResult<f64> {
    let caps = DURATION_RE
        .captures(s)
        .ok_or_else(|| AppError::InvalidDuration(s.to_string()))?;

    let hours = caps.get(1).map(|m| m.as_str());
    let minutes = caps.get(2).map(|m| m.as_str());
    if hours.is_none() && minutes.is_none() {
        return Err(AppError::InvalidDuration(s.to_string()));
    }

    let h: f64 = match hours {
        Some(v) => v.parse().map_err(|_| AppError::InvalidDuration(s.to_string()))?,
        None => 0.0,
    };
    let m: f64 = match minutes {
        Some(v) => v.parse().map_err(|_| AppError::InvalidDuration(s.to_string()))?,
        None => 0.0,
    };

    let total = h + m / 60.0;
    if total <= 0.0 {
        return Err(AppError::InvalidDuration(s.to_string()));
    }
    Ok(total)
}

/// Zero-padded `HH:MM:SS`. Hours keep growing past 24; negative spans show as zero.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_seconds = elapsed.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}
