//! Utility functions and helpers.

/// Truncates text to a maximum number of characters, adding ellipsis if needed.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
    }
}

/// Shows only the first few characters of a credential.
pub fn mask_secret(secret: &str) -> String {
    const VISIBLE: usize = 8;
    match secret.char_indices().nth(VISIBLE) {
        None => "*".repeat(secret.chars().count()),
        Some((byte_index, _)) => format!("{}...", &secret[..byte_index]),
    }
}

/// Formats a 0.0 to 1.0 ratio as a percentage with one decimal.
pub fn format_percentage(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}
