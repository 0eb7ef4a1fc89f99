use crate::config::search::PoolSizePolicy;
use crate::engines::generation::partition::check_capacity;
use crate::error::Result;
use std::collections::HashSet;

pub struct QuestionValidator;

impl QuestionValidator {
    /// Trims every question and drops empty ones.
    ///
    /// With `drop_duplicates`, questions that repeat an earlier one exactly once
    /// runs of whitespace are collapsed are removed as well. Case is significant.
    pub fn sanitize(questions: Vec<String>, drop_duplicates: bool) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(questions.len());
        let mut duplicates = 0usize;

        for question in questions {
            let trimmed = question.trim();
            if trimmed.is_empty() {
                continue;
            }
            if drop_duplicates && !seen.insert(Self::normalize(trimmed)) {
                duplicates += 1;
                continue;
            }
            kept.push(trimmed.to_string());
        }

        if duplicates > 0 {
            log::warn!("Dropped {} duplicate question(s)", duplicates);
        }
        kept
    }

    /// Re-checks the pool against the ticket demand after loading.
    pub fn ensure_capacity(
        questions: &[String],
        ticket_count: usize,
        ticket_size: usize,
        policy: PoolSizePolicy,
    ) -> Result<usize> {
        let required = check_capacity(questions.len(), ticket_count, ticket_size, policy)?;
        if questions.len() > required {
            log::info!(
                "{} of {} questions will be used",
                required,
                questions.len()
            );
        }
        Ok(required)
    }

    fn normalize(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TicketError;

    #[test]
    fn test_sanitize_drops_blank_and_duplicates() {
        let questions = vec![
            " What is paging? ".to_string(),
            "".to_string(),
            "What  is\tpaging?".to_string(),
            "Define a TLB".to_string(),
        ];

        assert_eq!(
            QuestionValidator::sanitize(questions.clone(), true),
            vec!["What is paging?", "Define a TLB"]
        );
        assert_eq!(QuestionValidator::sanitize(questions, false).len(), 3);
    }

    #[test]
    fn test_sanitize_keeps_case_variants() {
        let questions = vec!["What is RAM?".to_string(), "what is ram?".to_string()];
        assert_eq!(
            QuestionValidator::sanitize(questions, true),
            vec!["What is RAM?", "what is ram?"]
        );
    }

    #[test]
    fn test_ensure_capacity() {
        let questions: Vec<String> = (0..5).map(|i| format!("q{}", i)).collect();
        assert_eq!(
            QuestionValidator::ensure_capacity(&questions, 2, 2, PoolSizePolicy::AllowExactFit).unwrap(),
            4
        );
        assert!(matches!(
            QuestionValidator::ensure_capacity(&questions, 3, 2, PoolSizePolicy::AllowExactFit),
            Err(TicketError::InsufficientQuestions { required: 6, available: 5, .. })
        ));
    }
}
