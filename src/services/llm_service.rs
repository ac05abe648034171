//! LLM service
//!
//! Wraps the chat-completion API behind the small [`ChatBackend`] trait so
//! the answer generator can be exercised without network access. Compatible
//! with any OpenAI-style endpoint via the configurable base URL.

use std::future::Future;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{LlmError, Result};

/// The seam between answer generation and the hosted model.
pub trait ChatBackend {
    /// Send one user message (plus optional system message) and return the
    /// model's reply, trimmed.
    fn complete(
        &self,
        user_message: &str,
        system_message: Option<&str>,
    ) -> impl Future<Output = Result<String>> + Send;
}

/// Chat-completion client bound to one model and output-token limit.
pub struct LlmService {
    client: Client<OpenAIConfig>,
    model_name: String,
    max_tokens: u32,
}

impl LlmService {
    /// Build a service from configuration.
    ///
    /// Fails up front when the credential is absent, so the failure surfaces
    /// as a configuration error rather than mid-call.
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.require_llm_key()?;

        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(&config.llm_api_base_url);

        Ok(Self {
            client: Client::with_config(openai_config),
            model_name: config.llm_model_name.clone(),
            max_tokens: config.llm_max_tokens,
        })
    }
}

impl ChatBackend for LlmService {
    fn complete(
        &self,
        user_message: &str,
        system_message: Option<&str>,
    ) -> impl Future<Output = Result<String>> + Send {
        async move {
            debug!("calling LLM API, model: {}", self.model_name);
            debug!("user message length: {} chars", user_message.len());

            let mut messages = Vec::new();

            if let Some(sys_msg) = system_message {
                let system_msg = ChatCompletionRequestSystemMessageArgs::default()
                    .content(sys_msg)
                    .build()
                    .map_err(|source| LlmError::RequestFailed {
                        model: self.model_name.clone(),
                        source,
                    })?;
                messages.push(ChatCompletionRequestMessage::System(system_msg));
            }

            let user_msg = ChatCompletionRequestUserMessageArgs::default()
                .content(user_message)
                .build()
                .map_err(|source| LlmError::RequestFailed {
                    model: self.model_name.clone(),
                    source,
                })?;
            messages.push(ChatCompletionRequestMessage::User(user_msg));

            let request = CreateChatCompletionRequestArgs::default()
                .model(&self.model_name)
                .messages(messages)
                .max_tokens(self.max_tokens)
                .build()
                .map_err(|source| LlmError::RequestFailed {
                    model: self.model_name.clone(),
                    source,
                })?;

            let response = self.client.chat().create(request).await.map_err(|source| {
                warn!("LLM API call failed: {}", source);
                LlmError::RequestFailed {
                    model: self.model_name.clone(),
                    source,
                }
            })?;

            let content = response
                .choices
                .first()
                .and_then(|choice| choice.message.content.clone())
                .ok_or_else(|| LlmError::EmptyResponse {
                    model: self.model_name.clone(),
                })?;

            debug!("LLM API call succeeded");
            Ok(content.trim().to_string())
        }
    }
}
