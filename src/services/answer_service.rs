//! Answer generation
//!
//! Two strategies behind one service: similarity ranking for multiple-choice
//! options, a chat-completion call for short answers. Both attach a source
//! reference pointing into the lesson content. The backend is optional so
//! similarity-only flows run without an LLM credential.

use tracing::{debug, info};

use crate::error::{ConfigError, Result};
use crate::models::Answer;
use crate::services::ChatBackend;
use crate::similarity::SimilarityScorer;

const SYSTEM_MESSAGE: &str = "You are a helpful teaching assistant.";
const NO_REFERENCE: &str = "General reference";

/// Generates one answer per question from injected capabilities.
pub struct AnswerService<S, B> {
    scorer: S,
    backend: Option<B>,
    /// Minimum similarity for a sentence to qualify as a source reference
    threshold: f64,
    /// Log per-option similarity scores
    verbose: bool,
}

impl<S, B> AnswerService<S, B>
where
    S: SimilarityScorer,
    B: ChatBackend,
{
    pub fn new(scorer: S, backend: Option<B>, threshold: f64, verbose: bool) -> Self {
        Self {
            scorer,
            backend,
            threshold,
            verbose,
        }
    }

    /// Pick the option most similar to the lesson content.
    ///
    /// Each candidate is scored as `question + " " + option` against the full
    /// lesson. Strict greater-than keeps the first-seen option on ties. An
    /// empty option list yields an empty zero-confidence result, never an
    /// error.
    pub fn best_option(&self, question: &str, options: &[String], lesson: &str) -> Answer {
        let mut best: Option<(&str, f64)> = None;

        for option in options {
            let candidate = format!("{} {}", question, option);
            let similarity = self.scorer.score(&candidate, lesson);
            if self.verbose {
                info!("  option '{}' scored {:.3}", option, similarity);
            } else {
                debug!("option '{}' scored {:.3}", option, similarity);
            }
            let current_best = best.map(|(_, score)| score).unwrap_or(0.0);
            if similarity > current_best {
                best = Some((option, similarity));
            }
        }

        match best {
            Some((option, confidence)) => Answer::Choice {
                option: option.to_string(),
                confidence,
                source: self.source_reference(question, lesson),
            },
            None => Answer::Choice {
                option: String::new(),
                confidence: 0.0,
                source: String::new(),
            },
        }
    }

    /// Generate a short answer from the lesson content via the LLM.
    ///
    /// The completion text is taken verbatim; confidence is fixed at the
    /// maximum since the model reports none. An absent backend surfaces as a
    /// configuration error before any call is attempted; backend failures
    /// propagate.
    pub async fn short_answer(&self, question: &str, lesson: &str) -> Result<Answer> {
        let backend = self
            .backend
            .as_ref()
            .ok_or(ConfigError::MissingCredential { var: "OPENAI_API_KEY" })?;

        let prompt = format!(
            "Based on the following lesson content:\n{}\n\nAnswer this question: {}",
            lesson, question
        );

        let answer = backend.complete(&prompt, Some(SYSTEM_MESSAGE)).await?;

        Ok(Answer::Text {
            answer,
            confidence: 1.0,
            source: self.source_reference(question, lesson),
        })
    }

    /// Locate the lesson sentence backing a question.
    ///
    /// Naive sentence split on `.`, linear scan, first sentence over the
    /// threshold wins (not best-match). 1-based section labels.
    pub fn source_reference(&self, question: &str, lesson: &str) -> String {
        for (i, sentence) in lesson.split('.').enumerate() {
            if self.scorer.score(question, sentence) > self.threshold {
                return format!("Section {}", i + 1);
            }
        }
        NO_REFERENCE.to_string()
    }
}
