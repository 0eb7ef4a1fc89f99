use super::TicketRenderer;
use crate::error::Result;
use crate::types::{ExamMetadata, TicketSet};
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonDocument<'a> {
    metadata: &'a ExamMetadata,
    fitness: f64,
    seed: u64,
    tickets: Vec<JsonTicket<'a>>,
}

#[derive(Serialize)]
struct JsonTicket<'a> {
    number: usize,
    questions: &'a [String],
    indices: &'a [usize],
}

impl TicketRenderer for JsonRenderer {
    fn render(&self, tickets: &TicketSet, meta: &ExamMetadata) -> Result<Vec<u8>> {
        let document = JsonDocument {
            metadata: meta,
            fitness: tickets.fitness,
            seed: tickets.seed,
            tickets: tickets
                .tickets
                .iter()
                .zip(&tickets.indices)
                .enumerate()
                .map(|(i, (questions, indices))| JsonTicket {
                    number: i + 1,
                    questions,
                    indices,
                })
                .collect(),
        };
        Ok(serde_json::to_vec_pretty(&document)?)
    }

    fn file_name(&self) -> &'static str {
        "tickets.json"
    }
}
