use super::LlmProvider;
use crate::constants::DEFAULT_OPENAI_BASE_URL;
use crate::errors::{Error, Result};
use crate::llm::{ChatMessage, SamplingParams};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

/// Provider implementation for OpenAI's API
#[derive(Debug)]
pub struct OpenAiProvider {
    /// OpenAI API key loaded from environment
    api_key: String,
    /// Model identifier to use (e.g. "gpt-4", "gpt-3.5-turbo")
    model: String,
    /// Base URL of the API, overridable for testing
    base_url: String,
}

impl OpenAiProvider {
    /// Creates a new OpenAI provider instance.
    ///
    /// # Errors
    ///
    /// Fails when `OPENAI_API_KEY` is not set in the environment.
    pub fn new(model: &str) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| Error::Config("OPENAI_API_KEY environment variable not set".into()))?;
        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string());
        Ok(Self::with_base_url(model, &base_url, &api_key))
    }

    /// Creates a provider pointing at an explicit base URL with a given key.
    pub fn with_base_url(model: &str, base_url: &str, api_key: &str) -> Self {
        OpenAiProvider {
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn read_error(res: reqwest::Response) -> Error {
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        Error::Provider(format!("OpenAI API error {}: {}", status, text))
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    /// Calls OpenAI's legacy completions API with a plain prompt.
    ///
    /// The system text is prepended to the prompt since the completion
    /// endpoint has no separate system field.
    async fn complete(
        &self,
        prompt: &str,
        system: &str,
        params: &SamplingParams,
    ) -> Result<String> {
        let client = Client::new();
        let full_prompt = if system.is_empty() {
            prompt.to_string()
        } else {
            format!("{}\n\n{}", system, prompt)
        };
        let request_body = json!({
            "model": self.model,
            "prompt": full_prompt,
            "temperature": params.temperature,
            "max_tokens": params.max_tokens,
            "top_p": params.top_p,
            "frequency_penalty": params.frequency_penalty,
            "presence_penalty": params.presence_penalty,
        });

        let res = client
            .post(format!("{}/v1/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(Self::read_error(res).await);
        }

        let json_resp: serde_json::Value = res.json().await?;
        if let Some(content) = json_resp["choices"][0]["text"].as_str() {
            Ok(content.trim().to_string())
        } else {
            Err(Error::Provider(
                "No choices in OpenAI completion answer".to_string(),
            ))
        }
    }

    /// Calls OpenAI's chat completions API.
    async fn chat(&self, messages: &[ChatMessage], params: &SamplingParams) -> Result<String> {
        let client = Client::new();
        let request_body = json!({
            "model": self.model,
            "messages": messages,
            "temperature": params.temperature,
            "max_tokens": params.max_tokens,
            "top_p": params.top_p,
            "frequency_penalty": params.frequency_penalty,
            "presence_penalty": params.presence_penalty,
        });

        let res = client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(Self::read_error(res).await);
        }

        let json_resp: serde_json::Value = res.json().await?;
        if let Some(content) = json_resp["choices"][0]["message"]["content"].as_str() {
            Ok(content.trim().to_string())
        } else {
            Err(Error::Provider(
                "No content in OpenAI chat answer".to_string(),
            ))
        }
    }
}
