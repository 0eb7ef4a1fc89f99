use super::types::QuestionSource;
use crate::error::{Result, TicketError};
use std::path::{Path, PathBuf};

/// Plain text document with one question per non-empty line.
pub struct TextFileSource {
    path: PathBuf,
}

impl TextFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn parse(content: &str) -> Vec<String> {
        content
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(|line| line.to_string())
            .collect()
    }
}

impl QuestionSource for TextFileSource {
    fn describe(&self) -> String {
        format!("text file {}", self.path.display())
    }

    fn load(&self) -> Result<Vec<String>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            TicketError::QuestionSource(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        Ok(Self::parse(&content))
    }
}
