use super::traits::ConfigSection;
use crate::error::TicketError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters of the evolutionary ticket search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub generations: usize,
    pub population_size: usize,
    pub mutation_rate: f64,
    /// Questions per ticket.
    pub ticket_size: usize,
    pub pool_policy: PoolSizePolicy,
    /// Fixed seed for reproducible runs; fresh entropy when absent.
    pub seed: Option<u64>,
    /// Number of independent searches the pipeline runs in parallel.
    pub variants: usize,
}

/// How the pool size is compared against `ticket_count * ticket_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PoolSizePolicy {
    /// A pool of exactly the required size is accepted.
    #[default]
    AllowExactFit,
    /// The pool must hold strictly more questions than required.
    RequireSurplus,
}

impl PoolSizePolicy {
    pub fn admits(&self, required: usize, available: usize) -> bool {
        match self {
            PoolSizePolicy::AllowExactFit => required <= available,
            PoolSizePolicy::RequireSurplus => required < available,
        }
    }
}

impl fmt::Display for PoolSizePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolSizePolicy::AllowExactFit => write!(f, "exact fit allowed"),
            PoolSizePolicy::RequireSurplus => write!(f, "surplus required"),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            generations: 50,
            population_size: 100,
            mutation_rate: 0.1,
            ticket_size: 2,
            pool_policy: PoolSizePolicy::AllowExactFit,
            seed: None,
            variants: 1,
        }
    }
}

impl SearchConfig {
    /// Partitions carried unchanged into the next generation.
    pub fn survivor_count(&self) -> usize {
        (self.population_size / 5).max(2).min(self.population_size)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl ConfigSection for SearchConfig {
    fn section_name() -> &'static str {
        "search"
    }

    fn validate(&self) -> Result<(), TicketError> {
        if self.generations == 0 {
            return Err(TicketError::SearchConfiguration(
                "Generations must be greater than 0".to_string()
            ));
        }
        if self.population_size == 0 {
            return Err(TicketError::SearchConfiguration(
                "Population size must be greater than 0".to_string()
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TicketError::SearchConfiguration(
                "Mutation rate must be between 0 and 1".to_string()
            ));
        }
        if self.ticket_size < 2 {
            return Err(TicketError::SearchConfiguration(
                "Ticket size must be at least 2".to_string()
            ));
        }
        if self.survivor_count() < 2 {
            return Err(TicketError::SearchConfiguration(format!(
                "Population size {} leaves {} survivor(s); at least 2 are needed as parents",
                self.population_size,
                self.survivor_count()
            )));
        }
        if self.variants == 0 {
            return Err(TicketError::SearchConfiguration(
                "At least one variant must be requested".to_string()
            ));
        }
        Ok(())
    }
}
