//! Number and date formatting for the dashboard.
#![expect(
    clippy::cast_precision_loss,
    reason = "Formatted values are rounded to one or two decimals for display"
)]
use chrono::{DateTime, Utc};

/// Compact count: `999`, `1.2K`, `3.4M`.
#[must_use]
pub fn format_number(num: u64) -> String {
    if num >= 1_000_000 {
        format!("{:.1}M", num as f64 / 1_000_000.0)
    } else if num >= 1_000 {
        format!("{:.1}K", num as f64 / 1_000.0)
    } else {
        num.to_string()
    }
}

/// Count with thousands separators: `125,000`.
#[must_use]
pub fn format_thousands(num: u64) -> String {
    let digits = num.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

/// Human readable size: `0 Bytes`, `512 Bytes`, `1.5 KB`, `2 MB`.
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    /// Units, in powers of 1024
    const SIZES: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZES.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", SIZES.get(unit).unwrap_or(&"GB"))
}

/// Short date: `Jan 5, 2024`.
#[must_use]
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}
