//! Money and date formatting shared by the renderers.

use chrono::{DateTime, Utc};

/// Two-decimal amount with the symbol after any minus sign: `-$12.00`.
pub fn money(amount: f64, symbol: &str) -> String {
    // Avoid printing "-0.00" for negative zero or values that round to zero.
    let rounded = (amount * 100.0).round() / 100.0;
    if rounded < 0.0 {
        format!("-{}{:.2}", symbol, -rounded)
    } else {
        format!("{}{:.2}", symbol, rounded.abs())
    }
}

/// One-decimal percentage, e.g. `80.0%`.
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Short US-style date, e.g. `Oct 7, 2025`.
pub fn short_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}
