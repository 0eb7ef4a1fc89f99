use super::types::QuestionSource;
use crate::error::{Result, TicketError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// JSON document: either `["q1", "q2"]` or `{"questions": ["q1", "q2"]}`.
pub struct JsonFileSource {
    path: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum QuestionDocument {
    List(Vec<String>),
    Object { questions: Vec<String> },
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn parse(content: &str) -> Result<Vec<String>> {
        let document: QuestionDocument = serde_json::from_str(content)?;
        let questions = match document {
            QuestionDocument::List(questions) => questions,
            QuestionDocument::Object { questions } => questions,
        };
        Ok(questions
            .into_iter()
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty())
            .collect())
    }
}

impl QuestionSource for JsonFileSource {
    fn describe(&self) -> String {
        format!("JSON file {}", self.path.display())
    }

    fn load(&self) -> Result<Vec<String>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            TicketError::QuestionSource(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        Self::parse(&content)
    }
}
