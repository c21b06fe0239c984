//! Formatting utilities used for CLI outputs.

use crate::errors::{AppError, AppResult};
use unicode_width::UnicodeWidthStr;

/// Pad to `width` terminal columns (not bytes), so accented names line up.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Shorten to at most `max` characters, marking the cut with `…`.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Empty detail fields print as a dash.
pub fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() { "-" } else { s }
}

/// Detail fields are short free text: at most `max_len` characters.
pub fn validate_detail(label: &str, value: &str, max_len: usize) -> AppResult<()> {
    if value.chars().count() > max_len {
        return Err(AppError::InvalidDetail(format!(
            "{} can only have {} characters",
            label, max_len
        )));
    }
    Ok(())
}
