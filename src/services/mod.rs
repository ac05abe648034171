//! Capability layer: LLM access and answer generation
//!
//! Services know how to do one thing to one question; they never hold
//! session state and never decide flow order.

pub mod answer_service;
pub mod llm_service;

pub use answer_service::AnswerService;
pub use llm_service::{ChatBackend, LlmService};
