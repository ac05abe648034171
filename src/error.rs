//! Application error types
//!
//! One enum per failure domain, so callers can decide retry/abort policy
//! instead of pattern-matching on message strings.

use std::time::Duration;

use thiserror::Error;

/// Top-level application error
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid session state: {0}")]
    State(#[from] StateError),
    #[error("file error: {0}")]
    File(#[from] FileError),
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
    #[error("browser error: {0}")]
    Browser(#[from] BrowserError),
}

/// Configuration errors, detected before any network call is attempted
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing credential: set the {var} environment variable")]
    MissingCredential { var: &'static str },
}

/// Session precondition violations
///
/// Generation fails immediately on these; it never partially executes.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("no lesson content loaded")]
    NoLessonContent,
    #[error("no questions extracted")]
    NoQuestions,
}

/// File and persistence errors
#[derive(Debug, Error)]
pub enum FileError {
    #[error("file not found: {path}")]
    NotFound { path: String },
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to extract PDF text from {path}: {source}")]
    Pdf {
        path: String,
        #[source]
        source: pdf_extract::OutputError,
    },
    #[error("JSON serialization failed: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported lesson file format: {path}")]
    UnsupportedFormat { path: String },
}

/// Web fetch errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// LLM service errors
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM API call failed (model: {model}): {source}")]
    RequestFailed {
        model: String,
        #[source]
        source: async_openai::error::OpenAIError,
    },
    #[error("LLM returned no content (model: {model})")]
    EmptyResponse { model: String },
}

/// Browser automation errors
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("failed to configure browser: {0}")]
    Configuration(String),
    #[error("failed to launch browser: {source}")]
    Launch {
        #[source]
        source: chromiumoxide::error::CdpError,
    },
    #[error("navigation to {url} failed: {source}")]
    Navigation {
        url: String,
        #[source]
        source: chromiumoxide::error::CdpError,
    },
    #[error("element '{selector}' did not appear within {waited:?}")]
    ElementTimeout { selector: String, waited: Duration },
    #[error("browser interaction failed: {source}")]
    Interaction {
        #[source]
        source: chromiumoxide::error::CdpError,
    },
}

// ========== Conversions from common third-party errors ==========

impl From<chromiumoxide::error::CdpError> for AppError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        AppError::Browser(BrowserError::Interaction { source: err })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::File(FileError::Json { source: err })
    }
}

/// Application result type
pub type Result<T> = std::result::Result<T, AppError>;
