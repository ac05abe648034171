//! # Quiz Pilot
//!
//! Automates answering e-learning quizzes: loads lesson material from PDF,
//! text files, web pages or raw text; extracts numbered quiz questions;
//! matches or generates answers; and optionally drives a browser to log in
//! and submit answers on the learning platform.
//!
//! ## Layering
//!
//! - `extract/` - pure input-to-string transforms (PDF, text, web, question
//!   regex)
//! - `similarity` - the scorer seam and the default lexical scorer
//! - `services/` - single-question capabilities: LLM access, answer
//!   generation
//! - `session` - session state and the load -> extract -> answer -> persist
//!   flow
//! - `browser/` - the independent login/submit automation flow
//! - `app` - the interactive menu front end

pub mod app;
pub mod browser;
pub mod config;
pub mod error;
pub mod extract;
pub mod logger;
pub mod models;
pub mod services;
pub mod session;
pub mod similarity;
pub mod utils;

// Re-export the commonly used types
pub use browser::{launch_browser, QuizAutomator};
pub use config::Config;
pub use error::{AppError, Result};
pub use models::{Answer, QuestionKind, QuizResult};
pub use services::{AnswerService, ChatBackend, LlmService};
pub use session::QuizSession;
pub use similarity::{LexicalScorer, SimilarityScorer};
