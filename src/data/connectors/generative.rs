use super::types::{QuestionGenerator, QuestionSource};
use crate::error::{Result, TicketError};
use regex::Regex;

/// Asks a [`QuestionGenerator`] for `count` questions on `topic`.
///
/// The generator may return more or fewer lines than requested; the mismatch is
/// logged and the caller re-validates the pool size.
pub struct GeneratedSource<G> {
    generator: G,
    topic: String,
    count: usize,
    marker: Regex,
}

/// Leading list markers such as `1.`, `2)`, `-`, `*` or `•`.
const LIST_MARKER: &str = r"^\s*(?:\d+\s*[.)]|[-*•])\s*";

impl<G: QuestionGenerator> GeneratedSource<G> {
    pub fn new(generator: G, topic: impl Into<String>, count: usize) -> Result<Self> {
        let marker = Regex::new(LIST_MARKER).map_err(|e| {
            TicketError::QuestionSource(format!("Invalid list marker pattern: {}", e))
        })?;
        Ok(Self {
            generator,
            topic: topic.into(),
            count,
            marker,
        })
    }

    pub fn build_prompt(topic: &str, count: usize) -> String {
        format!(
            "Generate {} exam questions on the topic \"{}\". \
             Return the questions as a list, one question per line, \
             without numbering or any additional text.",
            count, topic
        )
    }

    /// One question per non-empty line, with list markers such as `1.`, `2)` or `-` removed.
    pub fn parse_response(&self, text: &str) -> Vec<String> {
        text.lines()
            .map(|line| self.marker.replace(line, "").trim().to_string())
            .filter(|line| !line.is_empty())
            .collect()
    }
}

impl<G: QuestionGenerator> QuestionSource for GeneratedSource<G> {
    fn describe(&self) -> String {
        format!("generated questions on \"{}\"", self.topic)
    }

    fn load(&self) -> Result<Vec<String>> {
        if self.topic.trim().is_empty() {
            return Err(TicketError::QuestionSource(
                "Topic must not be empty".to_string()
            ));
        }

        let prompt = Self::build_prompt(&self.topic, self.count);
        let response = self.generator.complete(&prompt)?;
        let questions = self.parse_response(&response);

        if questions.len() != self.count {
            log::warn!(
                "Generator returned {} questions, {} requested",
                questions.len(),
                self.count
            );
        }
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct CannedGenerator {
        reply: String,
        prompts: RefCell<Vec<String>>,
    }

    impl QuestionGenerator for CannedGenerator {
        fn complete(&self, prompt: &str) -> Result<String> {
            self.prompts.borrow_mut().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    #[test]
    fn test_parse_strips_markers() {
        let generator = CannedGenerator {
            reply: String::new(),
            prompts: RefCell::new(Vec::new()),
        };
        let source = GeneratedSource::new(&generator, "Concurrency", 4).unwrap();
        let reply = "1. What is a mutex?\n2) Define a semaphore\n\n- Explain starvation\n* What is a monitor?";
        assert_eq!(
            source.parse_response(reply),
            vec![
                "What is a mutex?",
                "Define a semaphore",
                "Explain starvation",
                "What is a monitor?",
            ]
        );
    }

    #[test]
    fn test_load_tolerates_count_mismatch() {
        let generator = CannedGenerator {
            reply: "Question one\nQuestion two\nQuestion three".to_string(),
            prompts: RefCell::new(Vec::new()),
        };
        let source = GeneratedSource::new(&generator, "Operating systems", 8).unwrap();

        let questions = source.load().unwrap();
        assert_eq!(questions.len(), 3);

        let prompts = generator.prompts.borrow();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Generate 8 exam questions"));
        assert!(prompts[0].contains("\"Operating systems\""));
    }

    #[test]
    fn test_repeated_loads_share_one_source() {
        let generator = CannedGenerator {
            reply: "1) Define a page fault\n2) What is a TLB?".to_string(),
            prompts: RefCell::new(Vec::new()),
        };
        let source = GeneratedSource::new(&generator, "Memory", 2).unwrap();

        let first = source.load().unwrap();
        let second = source.load().unwrap();
        assert_eq!(first, vec!["Define a page fault", "What is a TLB?"]);
        assert_eq!(first, second);
        assert_eq!(generator.prompts.borrow().len(), 2);
    }

    #[test]
    fn test_empty_topic() {
        let generator = CannedGenerator {
            reply: String::new(),
            prompts: RefCell::new(Vec::new()),
        };
        let source = GeneratedSource::new(&generator, "  ", 4).unwrap();
        assert!(matches!(source.load(), Err(TicketError::QuestionSource(_))));
    }
}
