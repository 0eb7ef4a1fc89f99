use super::traits::ConfigSection;
use crate::error::TicketError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Multiplier applied to the question demand when asking a generator.
    pub oversample: usize,
    /// Drop questions whose normalised text repeats an earlier one.
    pub drop_duplicates: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            oversample: 2,
            drop_duplicates: true,
        }
    }
}

impl SourceConfig {
    pub fn requested_count(&self, ticket_count: usize, ticket_size: usize) -> usize {
        ticket_count * ticket_size * self.oversample
    }
}

impl ConfigSection for SourceConfig {
    fn section_name() -> &'static str {
        "source"
    }

    fn validate(&self) -> Result<(), TicketError> {
        if self.oversample == 0 {
            return Err(TicketError::Configuration(
                "Oversample factor must be at least 1".to_string()
            ));
        }
        Ok(())
    }
}
