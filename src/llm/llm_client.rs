use crate::errors::{Error, Result};
use crate::llm::providers::LlmProvider;
use crate::llm::{ChatMessage, SamplingParams};
use tracing::{debug, info};

/// Generic LLM client that delegates work to a concrete provider.
#[derive(Debug)]
pub struct LlmClient {
    provider: Box<dyn LlmProvider>,
}

impl LlmClient {
    /// Creates a new LLM client with the specified provider and model.
    ///
    /// # Arguments
    /// * `provider_name` - Name of the LLM provider ("ollama" or "openai")
    /// * `model` - Model name to use with the provider
    pub fn new(provider_name: &str, model: &str) -> Result<Self> {
        let provider: Box<dyn LlmProvider> = match provider_name {
            "ollama" => Box::new(crate::llm::providers::ollama::OllamaProvider::new(model)),
            "openai" => Box::new(crate::llm::providers::openai::OpenAiProvider::new(model)?),
            _ => {
                return Err(Error::Config(format!(
                    "Unknown provider '{}'",
                    provider_name
                )))
            }
        };

        Ok(LlmClient { provider })
    }

    /// Wraps an already-constructed provider, used by tests to point at mock
    /// servers.
    pub fn from_provider(provider: Box<dyn LlmProvider>) -> Self {
        LlmClient { provider }
    }

    /// Runs a plain-text completion and returns the raw response.
    pub async fn complete(
        &self,
        prompt: &str,
        system: &str,
        params: &SamplingParams,
    ) -> Result<String> {
        self.provider.complete(prompt, system, params).await
    }

    /// Runs a chat completion over the given message history.
    pub async fn chat(&self, messages: &[ChatMessage], params: &SamplingParams) -> Result<String> {
        self.provider.chat(messages, params).await
    }

    /// Calls the chat endpoint with format validation and automatic retries
    /// if the format check fails.
    ///
    /// # Arguments
    /// * `messages` - Conversation so far; retries append to it
    /// * `validate_response` - Function to validate response format
    /// * `format_reminder` - Format instructions to include in retry attempts
    /// * `max_retries` - Maximum number of retry attempts
    pub async fn call_chat_with_format_check<F>(
        &self,
        messages: &mut Vec<ChatMessage>,
        validate_response: F,
        format_reminder: &str,
        max_retries: usize,
    ) -> Result<String>
    where
        F: Fn(&str) -> bool,
    {
        let mut attempts = 0;

        loop {
            attempts += 1;
            let response = self.chat(messages, &SamplingParams::default()).await?;
            debug!("LLM response: {}", response);

            if validate_response(&response) {
                return Ok(response);
            } else if attempts >= max_retries {
                info!(
                    "LLM did not follow the format after {} attempts, response: {}",
                    max_retries, response
                );
                return Err(Error::Provider(format!(
                    "LLM did not follow the format after {} attempts",
                    max_retries
                )));
            } else {
                let retry_message = format!(
                    "Your last answer did not follow the required format.\n\
                     {} \n\
                     Please provide a new answer following exactly these formatting rules.",
                    format_reminder
                );
                messages.push(ChatMessage::assistant(&response));
                messages.push(ChatMessage::user(&retry_message));
            }
        }
    }
}
