use std::sync::OnceLock;

use regex::Regex;

/// A question is a line starting (after optional leading whitespace) with an
/// integer, a period, optional whitespace, then anything up to and including
/// the first `?` on the line.
const QUESTION_PATTERN: &str = r"(?m)^\s*\d+\.\s*(.+?\?)";

fn question_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(QUESTION_PATTERN).expect("question pattern is valid"))
}

/// Extract numbered questions from a quiz text blob, in source order.
///
/// Non-matching lines are silently dropped; duplicates are kept. Empty input
/// yields an empty vec, never an error.
pub fn extract_questions(text: &str) -> Vec<String> {
    question_regex()
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect()
}
