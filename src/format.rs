//! Display-value formatting: durations, counts, ratings.

use std::time::Duration;

/// Format a time-span as `H:MM:SS`, or `M:SS` when under an hour.
#[must_use]
pub fn duration(value: Duration) -> String {
    let total = value.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Parse an ISO-8601 duration of the `PnDTnHnMnS` profile used by video
/// APIs (e.g. `PT2M30S`). Returns `None` for anything outside that profile;
/// months and weeks are not supported.
#[must_use]
pub fn parse_iso8601_duration(raw: &str) -> Option<Duration> {
    let rest = raw.strip_prefix('P')?;
    let mut seconds: u64 = 0;
    let mut in_time = false;
    let mut digits = String::new();

    for ch in rest.chars() {
        match ch {
            'T' => {
                if in_time || !digits.is_empty() {
                    return None;
                }
                in_time = true;
            }
            '0'..='9' => digits.push(ch),
            unit => {
                let value: u64 = digits.parse().ok()?;
                digits.clear();
                let scale = match (in_time, unit) {
                    (false, 'D') => 86_400,
                    (true, 'H') => 3600,
                    (true, 'M') => 60,
                    (true, 'S') => 1,
                    _ => return None,
                };
                seconds = seconds.checked_add(value.checked_mul(scale)?)?;
            }
        }
    }

    if digits.is_empty() { Some(Duration::from_secs(seconds)) } else { None }
}

/// Format an integer with thousands separators: 1000000 → `"1,000,000"`.
#[must_use]
pub fn count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Round a rating to one decimal place: 7.66 → `"7.7"`.
#[must_use]
pub fn rating(value: f64) -> String {
    format!("{value:.1}")
}

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;
