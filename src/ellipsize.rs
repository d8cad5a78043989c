//! Single-line text truncation with an ellipsis marker.

/// Marker appended to truncated text.
pub const ELLIPSIS: char = '…';

/// Collapses line breaks into single spaces and trims the ends.
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
        .trim()
        .to_string()
}

/// Truncates `text` to at most `max_chars` characters on a single line.
///
/// Text that already fits is returned normalized but otherwise untouched.
/// Truncated text keeps `max_chars - 1` characters (minus any trailing
/// whitespace at the cut) and ends with [`ELLIPSIS`].
pub fn ellipsize(text: &str, max_chars: usize) -> String {
    let normalized = normalize(text);
    if normalized.chars().count() <= max_chars {
        return normalized;
    }
    if max_chars <= 1 {
        return ELLIPSIS.to_string();
    }

    let mut truncated: String = normalized.chars().take(max_chars - 1).collect();
    truncated.truncate(truncated.trim_end().len());
    truncated.push(ELLIPSIS);
    truncated
}
