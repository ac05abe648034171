//! Small text helpers shared across modules

/// Truncate long text for previews and log lines.
///
/// Counts chars, not bytes, so multi-byte content never splits mid-character.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
