use regex::Regex;

/// Splits question text into lower-cased word tokens of two or more characters.
pub struct Tokenizer {
    pattern: Regex,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"(?u)\b\w\w+\b").expect("token pattern is valid"),
        }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.pattern
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_single_characters_and_punctuation() {
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("What is a Page Fault?"),
            vec!["what", "is", "page", "fault"]
        );
    }

    #[test]
    fn test_unicode_words() {
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.tokenize("Что такое процесс?"),
            vec!["что", "такое", "процесс"]
        );
    }
}
