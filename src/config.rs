use tracing::warn;

use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    // --- LLM configuration ---
    /// API key for the chat-completion service (never required for
    /// similarity-only flows)
    pub llm_api_key: Option<String>,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    /// Output token bound for short-answer generation
    pub llm_max_tokens: u32,
    // --- Matching configuration ---
    /// Minimum similarity for a sentence to count as a source reference
    pub similarity_threshold: f64,
    // --- Browser automation configuration ---
    /// Chromium/Chrome executable; autodetected when unset
    pub browser_executable: Option<String>,
    /// Login page of the e-learning platform
    pub login_url: String,
    /// Bounded wait applied to every element lookup, in seconds
    pub max_wait_secs: u64,
    // --- Output ---
    /// Where `save_results` writes by default
    pub output_file: String,
    /// Log per-option similarity scores
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_api_key: None,
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "gpt-3.5-turbo".to_string(),
            llm_max_tokens: 150,
            similarity_threshold: 0.75,
            browser_executable: None,
            login_url: "https://bcpeducollege.elearningcommons.com/login".to_string(),
            max_wait_secs: 10,
            output_file: "quiz_results.json".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            llm_api_key: std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            llm_api_base_url: std::env::var("OPENAI_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("OPENAI_MODEL").unwrap_or(default.llm_model_name),
            llm_max_tokens: parse_env("OPENAI_MAX_TOKENS", default.llm_max_tokens),
            similarity_threshold: parse_env("SIMILARITY_THRESHOLD", default.similarity_threshold),
            browser_executable: std::env::var("BROWSER_EXECUTABLE").ok(),
            login_url: std::env::var("LOGIN_URL").unwrap_or(default.login_url),
            max_wait_secs: parse_env("MAX_WAIT_TIME", default.max_wait_secs),
            output_file: std::env::var("OUTPUT_FILE").unwrap_or(default.output_file),
            verbose_logging: parse_env("VERBOSE_LOGGING", default.verbose_logging),
        }
    }

    /// The LLM credential, checked before any network call is attempted
    pub fn require_llm_key(&self) -> Result<&str> {
        self.llm_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingCredential { var: "OPENAI_API_KEY" }.into())
    }
}

/// Read and parse one environment variable, keeping the default (with a
/// warning) when the value does not parse.
fn parse_env<T: std::str::FromStr>(var: &str, default: T) -> T {
    match std::env::var(var) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("ignoring {}='{}': value does not parse, keeping default", var, raw);
                default
            }
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.llm_max_tokens, 150);
        assert_eq!(config.similarity_threshold, 0.75);
        assert_eq!(config.max_wait_secs, 10);
        assert_eq!(config.output_file, "quiz_results.json");
    }

    #[test]
    fn missing_key_is_a_config_error() {
        let config = Config::default();
        let err = config.require_llm_key().unwrap_err();
        assert!(matches!(
            err,
            crate::error::AppError::Config(ConfigError::MissingCredential { .. })
        ));
    }

    #[test]
    fn unparsable_numeric_env_keeps_the_default() {
        std::env::set_var("OPENAI_MAX_TOKENS", "lots");
        let config = Config::from_env();
        assert_eq!(config.llm_max_tokens, 150);
        std::env::remove_var("OPENAI_MAX_TOKENS");
    }

    #[test]
    fn present_key_is_returned() {
        let config = Config {
            llm_api_key: Some("sk-test".to_string()),
            ..Config::default()
        };
        assert_eq!(config.require_llm_key().unwrap(), "sk-test");
    }
}
