use serde::{Deserialize, Serialize};

/// Winning tickets mapped back to question texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketSet {
    /// Question texts, one inner vector per ticket.
    pub tickets: Vec<Vec<String>>,
    /// Pool indices parallel to `tickets`; a question's identity is its input position.
    pub indices: Vec<Vec<usize>>,
    /// Mean ticket dissimilarity of the partition.
    pub fitness: f64,
    pub seed: u64,
}

impl TicketSet {
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

/// Presentation data printed on every ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamMetadata {
    pub discipline: String,
    pub specialty: String,
    pub group: String,
    pub teacher: String,
    pub approver: String,
}
