use super::LlmProvider;
use crate::constants::DEFAULT_OLLAMA_BASE_URL;
use crate::errors::{Error, Result};
use crate::llm::{ChatMessage, SamplingParams};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

/// Provider implementation for Ollama's local API
#[derive(Debug)]
pub struct OllamaProvider {
    /// Model identifier to use (e.g. "llama3.2", "codellama")
    model: String,
    /// Base URL of the Ollama daemon
    base_url: String,
}

impl OllamaProvider {
    /// Creates a new Ollama provider instance.
    ///
    /// The base URL is taken from `OLLAMA_BASE_URL` when set, otherwise the
    /// default local daemon address is used.
    pub fn new(model: &str) -> Self {
        let base_url = std::env::var("OLLAMA_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_OLLAMA_BASE_URL.to_string());
        Self::with_base_url(model, &base_url)
    }

    /// Creates a provider pointing at an explicit base URL.
    pub fn with_base_url(model: &str, base_url: &str) -> Self {
        OllamaProvider {
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn options(params: &SamplingParams) -> serde_json::Value {
        json!({
            "temperature": params.temperature,
            "num_predict": params.max_tokens,
            "top_p": params.top_p,
            "frequency_penalty": params.frequency_penalty,
            "presence_penalty": params.presence_penalty,
        })
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    /// Calls Ollama's generate endpoint with a plain prompt.
    async fn complete(
        &self,
        prompt: &str,
        system: &str,
        params: &SamplingParams,
    ) -> Result<String> {
        let client = Client::new();

        let request_body = json!({
            "model": self.model,
            "prompt": prompt,
            "system": system,
            "stream": false,
            "options": Self::options(params),
        });

        let res = client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request_body)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(Error::Provider(format!(
                "Ollama API error {}: {}",
                status, text
            )));
        }

        let json_resp: serde_json::Value = res.json().await?;
        if let Some(content) = json_resp["response"].as_str() {
            Ok(content.trim().to_string())
        } else {
            Err(Error::Provider(
                "No response field in Ollama generate answer".to_string(),
            ))
        }
    }

    /// Calls Ollama's chat endpoint.
    async fn chat(&self, messages: &[ChatMessage], params: &SamplingParams) -> Result<String> {
        let client = Client::new();

        let request_body = json!({
            "model": self.model,
            "stream": false,
            "messages": messages,
            "options": Self::options(params),
        });

        let res = client
            .post(format!("{}/api/chat", self.base_url))
            .json(&request_body)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(Error::Provider(format!(
                "Ollama API error {}: {}",
                status, text
            )));
        }

        let json_resp: serde_json::Value = res.json().await?;
        if let Some(content) = json_resp["message"]["content"].as_str() {
            Ok(content.trim().to_string())
        } else {
            Err(Error::Provider(
                "No content in Ollama chat answer".to_string(),
            ))
        }
    }
}
