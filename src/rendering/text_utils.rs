//! Text rendering utilities
//!
//! Shared utilities for ellipsis truncation, independent of the text backend:
//! callers pass a measuring closure.

use crate::traits::ELLIPSIS;

/// Truncates text from the start to fit within `max_width`, prepending "…".
///
/// # Arguments
/// * `text` - The text to potentially truncate
/// * `max_width` - Maximum width available for the text
/// * `measure` - Width of a string in the caller's font
///
/// # Returns
/// * `text` unchanged if it fits, otherwise "…" followed by the longest tail
///   that fits, or an empty string if not even the ellipsis fits
pub fn ellipsize_start(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> String {
    if measure(text) <= max_width {
        return text.to_string();
    }
    if max_width <= 0.0 {
        return String::new();
    }

    let ellipsis = ELLIPSIS.to_string();
    let ellipsis_width = measure(&ellipsis);
    if ellipsis_width > max_width {
        return String::new();
    }
    let available_for_text = max_width - ellipsis_width;

    let chars: Vec<char> = text.chars().collect();
    let tail = |count: usize| -> String { chars[chars.len() - count..].iter().collect() };

    // Binary search for the longest tail that fits
    let mut low = 0;
    let mut high = chars.len();
    while low < high {
        let mid = (low + high + 1) / 2;
        if measure(&tail(mid)) <= available_for_text {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    let mut result = ellipsis;
    result.push_str(&tail(low));
    result
}

/// Drops the leading ellipsis a start-truncating backend added.
///
/// Only applies when the text was actually truncated, so an original caption
/// that itself starts with "…" is left alone.
pub fn strip_leading_ellipsis(ellipsized: String, original: &str) -> String {
    if !ellipsized.is_empty() && ellipsized != original && ellipsized.starts_with(ELLIPSIS) {
        ellipsized[ELLIPSIS.len_utf8()..].to_string()
    } else {
        ellipsized
    }
}
