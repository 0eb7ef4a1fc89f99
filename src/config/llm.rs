use super::traits::ConfigSection;
use crate::error::TicketError;
use serde::{Deserialize, Serialize};

/// Connection settings for the question generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
            max_tokens: 500,
            timeout_secs: 60,
        }
    }
}

impl ConfigSection for LlmConfig {
    fn section_name() -> &'static str {
        "llm"
    }

    fn validate(&self) -> Result<(), TicketError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(TicketError::Configuration(
                "LLM temperature must be between 0 and 2".to_string()
            ));
        }
        if self.max_tokens == 0 {
            return Err(TicketError::Configuration(
                "LLM max_tokens must be greater than 0".to_string()
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(TicketError::Configuration(
                "LLM base_url must not be empty".to_string()
            ));
        }
        Ok(())
    }
}
