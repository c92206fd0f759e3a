use crate::errors::Result;
use crate::llm::{ChatMessage, SamplingParams};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod ollama;
pub mod openai;

#[async_trait]
pub trait LlmProvider: Debug + Send + Sync {
    /// Plain-text completion against the provider's completion endpoint.
    async fn complete(&self, prompt: &str, system: &str, params: &SamplingParams)
        -> Result<String>;

    /// Chat completion over a full message history.
    async fn chat(&self, messages: &[ChatMessage], params: &SamplingParams) -> Result<String>;
}
