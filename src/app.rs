//! Interactive application flow
//!
//! A small menu-driven front end over the quiz session and the browser
//! automator. Failures are reported with a short description; the auto-submit
//! flow releases the browser on every exit path.

use std::collections::HashMap;
use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::browser::{launch_browser, QuizAutomator};
use crate::config::Config;
use crate::extract;
use crate::models::QuestionKind;
use crate::services::{AnswerService, LlmService};
use crate::session::QuizSession;
use crate::similarity::LexicalScorer;

/// Application entry object.
pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<()> {
        info!(
            "session started at {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );

        println!("\n=== Quiz Pilot ===");
        println!("1. Process quiz from files");
        println!("2. Process quiz from text/URL");
        println!("3. Auto-submit quiz (requires login)");
        println!("4. Exit");

        let choice = prompt("\nSelect an option (1-4): ")?;

        let outcome = match choice.as_str() {
            "1" => self.process_from_files().await,
            "2" => self.process_from_text().await,
            "3" => self.auto_submit().await,
            "4" => {
                println!("Exiting...");
                Ok(())
            }
            _ => {
                println!("Invalid choice");
                Ok(())
            }
        };

        if let Err(e) = outcome {
            error!("operation failed: {:#}", e);
        }
        Ok(())
    }

    /// Menu option 1: lesson and quiz both come from local files.
    async fn process_from_files(&self) -> Result<()> {
        let lesson_path = prompt("Enter path to lesson material (PDF/TXT): ")?;
        let quiz_path = prompt("Enter path to quiz questions file: ")?;

        let mut session = QuizSession::new();
        session.load_lesson(&lesson_path).await?;
        let quiz_text = extract::read_txt(&quiz_path)?;
        session.extract_questions(&quiz_text);

        self.answer_flow(session).await
    }

    /// Menu option 2: lesson from raw text or a URL, quiz from typed text.
    async fn process_from_text(&self) -> Result<()> {
        let lesson_source = prompt("Enter lesson text or URL: ")?;
        let quiz_text = prompt("Enter quiz questions text: ")?;

        let mut session = QuizSession::new();
        session.load_lesson(&lesson_source).await?;
        session.extract_questions(&quiz_text);

        self.answer_flow(session).await
    }

    /// Shared tail of options 1 and 2: pick a mode, generate, offer to save.
    async fn answer_flow(&self, mut session: QuizSession) -> Result<()> {
        if session.questions().is_empty() {
            println!("\nNo questions found in the quiz source.");
            return Ok(());
        }

        println!("\nFound questions:");
        for (i, question) in session.questions().iter().enumerate() {
            println!("{}. {}", i + 1, question);
        }

        let kind = match prompt("\nQuestion type (multiple_choice/short_answer): ")?.as_str() {
            "multiple_choice" => {
                let raw = prompt("Enter options (comma separated): ")?;
                let options = raw
                    .split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect();
                QuestionKind::MultipleChoice { options }
            }
            _ => QuestionKind::ShortAnswer,
        };

        // The LLM credential is only needed (and only checked) for
        // short-answer generation.
        let backend = match kind {
            QuestionKind::ShortAnswer => Some(LlmService::new(&self.config)?),
            QuestionKind::MultipleChoice { .. } => None,
        };
        let service = AnswerService::new(
            LexicalScorer,
            backend,
            self.config.similarity_threshold,
            self.config.verbose_logging,
        );

        session.generate_answers(&service, &kind).await?;

        println!("\nGenerated answers:");
        for (i, (question, answer)) in session
            .questions()
            .iter()
            .zip(session.answers())
            .enumerate()
        {
            println!("\nQuestion {}: {}", i + 1, question);
            println!("Answer: {}", answer.text());
            println!("Confidence: {:.2}", answer.confidence());
            println!("Source: {}", answer.source());
        }

        let save = prompt("\nSave results to file? (y/n): ")?;
        if save.eq_ignore_ascii_case("y") {
            session.save_results(&self.config.output_file)?;
            println!("Results saved to {}", self.config.output_file);
        }

        Ok(())
    }

    /// Menu option 3: log in and submit precomputed answers on the site.
    async fn auto_submit(&self) -> Result<()> {
        if self.config.require_llm_key().is_err() {
            println!("Error: LLM API key not configured (set OPENAI_API_KEY)");
            return Ok(());
        }

        let username = prompt("Enter your e-learning username: ")?;
        let password = prompt("Enter your password: ")?;
        let quiz_url = prompt("Enter quiz URL: ")?;

        let (browser, page) = launch_browser(&self.config).await?;
        let automator = QuizAutomator::new(browser, page, &self.config);

        // The browser must be released on every path from here on.
        let result = self.drive_submission(&automator, &username, &password, &quiz_url).await;
        if let Err(e) = automator.close().await {
            warn!("failed to close browser cleanly: {}", e);
        }
        result
    }

    async fn drive_submission(
        &self,
        automator: &QuizAutomator,
        username: &str,
        password: &str,
        quiz_url: &str,
    ) -> Result<()> {
        if !automator.login(username, password).await {
            println!("Login failed. Please check credentials.");
            return Ok(());
        }

        // Answers are re-entered manually as question-id=text pairs; the
        // automator shares no state with the quiz session.
        println!("\nEnter answers as 'question-id=answer', blank line to finish:");
        let mut answers = HashMap::new();
        loop {
            let line = prompt("> ")?;
            if line.is_empty() {
                break;
            }
            match line.split_once('=') {
                Some((id, answer)) => {
                    answers.insert(id.trim().to_string(), answer.trim().to_string());
                }
                None => println!("Expected 'question-id=answer'"),
            }
        }

        if automator.submit_quiz(quiz_url, &answers).await {
            info!("submission flow finished");
        } else {
            println!("Quiz submission failed.");
        }
        Ok(())
    }
}

/// Print a prompt and read one trimmed line from stdin.
fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush().context("failed to flush stdout")?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim().to_string())
}
