use super::TicketRenderer;
use crate::error::Result;
use crate::types::{ExamMetadata, TicketSet};

/// Plain text layout, one ticket per form-feed separated page.
pub struct PlainTextRenderer;

const RULE: &str = "______________";

fn or_blank(value: &str) -> &str {
    if value.trim().is_empty() {
        RULE
    } else {
        value
    }
}

impl TicketRenderer for PlainTextRenderer {
    fn render(&self, tickets: &TicketSet, meta: &ExamMetadata) -> Result<Vec<u8>> {
        let pages: Vec<String> = tickets
            .tickets
            .iter()
            .enumerate()
            .map(|(i, questions)| {
                let mut lines = vec![
                    format!("Examination ticket No. {}", i + 1),
                    format!("Discipline: {}", meta.discipline),
                    format!("Specialty: {}", meta.specialty),
                    format!("Group: {}", or_blank(&meta.group)),
                    format!("Approved: {} «____» ___________ 20__", or_blank(&meta.approver)),
                    String::new(),
                ];
                for (n, question) in questions.iter().enumerate() {
                    lines.push(format!("{}. {}", n + 1, question));
                }
                lines.push(format!("{}.* {}", questions.len() + 1, "_".repeat(60)));
                lines.push(String::new());
                lines.push(format!("Teacher ___________________ {}", or_blank(&meta.teacher)));
                lines.join("\n")
            })
            .collect();

        Ok((pages.join("\n\u{c}\n") + "\n").into_bytes())
    }

    fn file_name(&self) -> &'static str {
        "tickets.txt"
    }
}
