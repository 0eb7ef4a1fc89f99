use thiserror::Error;

use crate::config::search::PoolSizePolicy;

#[derive(Error, Debug)]
pub enum TicketError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not enough questions: {required} required, {available} available ({policy})")]
    InsufficientQuestions {
        required: usize,
        available: usize,
        policy: PoolSizePolicy,
    },

    #[error("Search configuration error: {0}")]
    SearchConfiguration(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Question source error: {0}")]
    QuestionSource(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TicketError>;
