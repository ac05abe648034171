//! Core data model: answers, question kinds, persisted results

use serde::{Deserialize, Serialize};

/// A generated answer, one per extracted question.
///
/// A closed set of kinds, each carrying its own payload. The serialized form
/// carries either an `option` key (multiple choice) or an `answer` key (short
/// answer), which is what downstream consumers of the results file expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// The selected option of a multiple-choice question
    Choice {
        option: String,
        confidence: f64,
        source: String,
    },
    /// Verbatim text produced by the LLM for a short-answer question
    Text {
        answer: String,
        confidence: f64,
        source: String,
    },
}

impl Answer {
    /// The answer text regardless of kind
    pub fn text(&self) -> &str {
        match self {
            Answer::Choice { option, .. } => option,
            Answer::Text { answer, .. } => answer,
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            Answer::Choice { confidence, .. } | Answer::Text { confidence, .. } => *confidence,
        }
    }

    pub fn source(&self) -> &str {
        match self {
            Answer::Choice { source, .. } | Answer::Text { source, .. } => source,
        }
    }
}

/// Supported question kinds, each selecting an answer strategy.
///
/// Adding a kind means adding a variant here and a matching arm in the
/// answer service, not a new string branch.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// Rank the supplied options against the lesson content
    MultipleChoice { options: Vec<String> },
    /// Ask the LLM, grounded on the lesson content
    ShortAnswer,
}

/// The persisted form of a completed (or partially completed) session.
///
/// Created only at save time and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResult {
    pub questions: Vec<String>,
    pub answers: Vec<Answer>,
    /// First 100 chars of the lesson content plus an ellipsis marker,
    /// or empty when nothing was loaded
    pub lesson_source: String,
}

impl QuizResult {
    pub fn new(questions: Vec<String>, answers: Vec<Answer>, lesson_content: &str) -> Self {
        let lesson_source = if lesson_content.is_empty() {
            String::new()
        } else {
            lesson_content.chars().take(100).collect::<String>() + "..."
        };
        Self {
            questions,
            answers,
            lesson_source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_answer_serializes_with_option_key() {
        let answer = Answer::Choice {
            option: "Paris".to_string(),
            confidence: 0.9,
            source: "Section 1".to_string(),
        };
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(json["option"], "Paris");
        assert!(json.get("answer").is_none());
    }

    #[test]
    fn text_answer_serializes_with_answer_key() {
        let answer = Answer::Text {
            answer: "The mitochondria.".to_string(),
            confidence: 1.0,
            source: "General reference".to_string(),
        };
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(json["answer"], "The mitochondria.");
        assert!(json.get("option").is_none());
    }

    #[test]
    fn answers_round_trip_through_json() {
        let answers = vec![
            Answer::Choice {
                option: "B".to_string(),
                confidence: 0.42,
                source: "Section 3".to_string(),
            },
            Answer::Text {
                answer: "Because water expands when it freezes?".to_string(),
                confidence: 1.0,
                source: "General reference".to_string(),
            },
        ];
        let json = serde_json::to_string(&answers).unwrap();
        let back: Vec<Answer> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, answers);
    }

    #[test]
    fn lesson_source_preview_is_100_chars_plus_ellipsis() {
        let content = "x".repeat(250);
        let result = QuizResult::new(vec![], vec![], &content);
        assert_eq!(result.lesson_source, format!("{}...", "x".repeat(100)));
    }

    #[test]
    fn short_lesson_still_gets_ellipsis() {
        let result = QuizResult::new(vec![], vec![], "short lesson");
        assert_eq!(result.lesson_source, "short lesson...");
    }

    #[test]
    fn empty_lesson_gives_empty_preview() {
        let result = QuizResult::new(vec![], vec![], "");
        assert_eq!(result.lesson_source, "");
    }
}
