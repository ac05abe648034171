//! Quiz session
//!
//! Holds the loaded lesson content, the extracted questions, and the
//! generated answers, and orchestrates load -> extract -> answer -> persist.
//! Each stage replaces its previous output wholesale; nothing accumulates.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{FileError, Result, StateError};
use crate::extract;
use crate::models::{Answer, QuestionKind, QuizResult};
use crate::services::{AnswerService, ChatBackend};
use crate::similarity::SimilarityScorer;
use crate::utils::truncate_text;

/// One quiz-answering session.
#[derive(Debug, Default)]
pub struct QuizSession {
    lesson_content: String,
    questions: Vec<String>,
    answers: Vec<Answer>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load lesson material, replacing any previous content.
    ///
    /// The source is dispatched on shape: an existing `.pdf` or `.txt` path
    /// goes through the matching reader, an `http(s)` URL is fetched and
    /// tag-stripped, and anything else is taken as direct text input.
    pub async fn load_lesson(&mut self, source: &str) -> Result<()> {
        let path = Path::new(source);

        self.lesson_content = if path.exists() {
            match path.extension().and_then(|e| e.to_str()) {
                Some("pdf") => extract::read_pdf(path)?,
                Some("txt") => extract::read_txt(path)?,
                _ => {
                    return Err(FileError::UnsupportedFormat {
                        path: source.to_string(),
                    }
                    .into())
                }
            }
        } else if source.starts_with("http") {
            extract::fetch_page_text(source).await?
        } else {
            source.to_string()
        };

        info!(
            "lesson loaded: {} chars ({})",
            self.lesson_content.len(),
            truncate_text(&self.lesson_content, 60)
        );
        Ok(())
    }

    /// Extract questions from quiz text, replacing the previous sequence.
    pub fn extract_questions(&mut self, quiz_text: &str) -> &[String] {
        self.questions = extract::extract_questions(quiz_text);
        info!("extracted {} questions", self.questions.len());
        &self.questions
    }

    /// Generate one answer per question, replacing the previous sequence.
    ///
    /// Requires lesson content and questions to already be loaded; fails
    /// immediately otherwise, without partial execution.
    pub async fn generate_answers<S, B>(
        &mut self,
        service: &AnswerService<S, B>,
        kind: &QuestionKind,
    ) -> Result<&[Answer]>
    where
        S: SimilarityScorer,
        B: ChatBackend,
    {
        if self.lesson_content.is_empty() {
            return Err(StateError::NoLessonContent.into());
        }
        if self.questions.is_empty() {
            return Err(StateError::NoQuestions.into());
        }

        let mut answers = Vec::with_capacity(self.questions.len());
        for (i, question) in self.questions.iter().enumerate() {
            debug!("answering question {}: {}", i + 1, truncate_text(question, 80));
            let answer = match kind {
                QuestionKind::MultipleChoice { options } => {
                    service.best_option(question, options, &self.lesson_content)
                }
                QuestionKind::ShortAnswer => {
                    service.short_answer(question, &self.lesson_content).await?
                }
            };
            answers.push(answer);
        }

        self.answers = answers;
        Ok(&self.answers)
    }

    /// Persist the current state as pretty-printed JSON, overwriting `path`.
    ///
    /// Saving without answers is valid and produces an empty answer array.
    pub fn save_results(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let results = QuizResult::new(
            self.questions.clone(),
            self.answers.clone(),
            &self.lesson_content,
        );

        let json = serde_json::to_string_pretty(&results)?;
        fs::write(path, json).map_err(|source| FileError::Write {
            path: path.display().to_string(),
            source,
        })?;

        info!("results saved to {}", path.display());
        Ok(())
    }

    pub fn lesson_content(&self) -> &str {
        &self.lesson_content
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }
}
