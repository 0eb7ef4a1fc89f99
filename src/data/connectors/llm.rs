use super::types::QuestionGenerator;
use crate::config::llm::LlmConfig;
use crate::error::{Result, TicketError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Blocking client for an OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiChatGenerator {
    config: LlmConfig,
    client: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

impl OpenAiChatGenerator {
    pub fn new(config: LlmConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(TicketError::QuestionSource(
                "LLM api_key is not configured".to_string()
            ));
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TicketError::QuestionSource(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    fn extract_content(response: ChatResponse, model: &str) -> Result<String> {
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(TicketError::QuestionSource(format!(
                "LLM returned no content (model: {})",
                model
            )));
        }
        Ok(content)
    }
}

impl QuestionGenerator for OpenAiChatGenerator {
    fn complete(&self, prompt: &str) -> Result<String> {
        log::debug!("Calling LLM API, model: {}", self.config.model);

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .map_err(|e| TicketError::QuestionSource(format!("LLM request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            log::warn!("LLM API returned {}: {}", status, body);
            return Err(TicketError::QuestionSource(format!(
                "LLM API returned {}",
                status
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| TicketError::QuestionSource(format!("Invalid LLM response: {}", e)))?;

        log::debug!("LLM API call succeeded");
        Self::extract_content(parsed, &self.config.model)
    }
}
