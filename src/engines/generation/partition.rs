use crate::config::search::PoolSizePolicy;
use crate::error::{Result, TicketError};
use rand::Rng;
use std::collections::HashSet;

/// Assignment of distinct pool indices to fixed-size tickets.
///
/// Stored flat: ticket `t` occupies `slots[t * ticket_size..(t + 1) * ticket_size]`.
/// Flattening and re-chunking, which crossover and mutation rely on, are therefore free.
///
/// Invariant: no index appears twice across the whole partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    slots: Vec<usize>,
    ticket_size: usize,
}

impl Partition {
    /// Builds a partition from already flattened indices, checking the invariant.
    pub fn from_slots(slots: Vec<usize>, ticket_size: usize) -> Result<Self> {
        if ticket_size < 2 {
            return Err(TicketError::SearchConfiguration(
                "Ticket size must be at least 2".to_string()
            ));
        }
        if slots.is_empty() || slots.len() % ticket_size != 0 {
            return Err(TicketError::InvalidInput(format!(
                "{} indices cannot be split into tickets of {}",
                slots.len(),
                ticket_size
            )));
        }
        if !all_distinct(&slots) {
            return Err(TicketError::InvalidInput(
                "A question index is assigned to more than one slot".to_string()
            ));
        }
        Ok(Self { slots, ticket_size })
    }

    /// Only for slots produced by the search operators, which keep indices distinct.
    pub(crate) fn from_slots_unchecked(slots: Vec<usize>, ticket_size: usize) -> Self {
        debug_assert!(all_distinct(&slots));
        debug_assert_eq!(slots.len() % ticket_size, 0);
        Self { slots, ticket_size }
    }

    /// Draws `ticket_count * ticket_size` distinct indices from `[0, pool_size)` in random order.
    ///
    /// Callers must have checked capacity with [`check_capacity`].
    pub fn random<R: Rng>(pool_size: usize, ticket_count: usize, ticket_size: usize, rng: &mut R) -> Self {
        let needed = ticket_count * ticket_size;
        let slots = rand::seq::index::sample(rng, pool_size, needed).into_vec();
        Self { slots, ticket_size }
    }

    pub fn ticket_size(&self) -> usize {
        self.ticket_size
    }

    pub fn ticket_count(&self) -> usize {
        self.slots.len() / self.ticket_size
    }

    /// All assigned indices, ticket after ticket.
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    pub fn ticket(&self, index: usize) -> Option<&[usize]> {
        self.tickets().nth(index)
    }

    pub fn tickets(&self) -> std::slice::ChunksExact<'_, usize> {
        self.slots.chunks_exact(self.ticket_size)
    }

    pub fn to_tickets(&self) -> Vec<Vec<usize>> {
        self.tickets().map(|t| t.to_vec()).collect()
    }

    /// Checks the uniqueness invariant and that every index lies in the pool.
    pub fn is_valid(&self, pool_size: usize) -> bool {
        self.slots.len() % self.ticket_size == 0
            && self.slots.iter().all(|&q| q < pool_size)
            && all_distinct(&self.slots)
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [usize] {
        &mut self.slots
    }
}

/// Verifies that `ticket_count` tickets of `ticket_size` fit in the pool.
///
/// Returns the number of questions the partition will use.
pub fn check_capacity(
    pool_size: usize,
    ticket_count: usize,
    ticket_size: usize,
    policy: PoolSizePolicy,
) -> Result<usize> {
    if ticket_count == 0 {
        return Err(TicketError::SearchConfiguration(
            "Ticket count must be greater than 0".to_string()
        ));
    }
    if ticket_size < 2 {
        return Err(TicketError::SearchConfiguration(
            "Ticket size must be at least 2".to_string()
        ));
    }

    let required = ticket_count
        .checked_mul(ticket_size)
        .ok_or_else(|| TicketError::SearchConfiguration("Ticket demand overflows".to_string()))?;

    if !policy.admits(required, pool_size) {
        return Err(TicketError::InsufficientQuestions {
            required,
            available: pool_size,
            policy,
        });
    }
    Ok(required)
}

/// Capacity check followed by [`Partition::random`].
pub fn build_random_partition<R: Rng>(
    pool_size: usize,
    ticket_count: usize,
    ticket_size: usize,
    policy: PoolSizePolicy,
    rng: &mut R,
) -> Result<Partition> {
    check_capacity(pool_size, ticket_count, ticket_size, policy)?;
    Ok(Partition::random(pool_size, ticket_count, ticket_size, rng))
}

fn all_distinct(slots: &[usize]) -> bool {
    let mut seen = HashSet::with_capacity(slots.len());
    slots.iter().all(|q| seen.insert(*q))
}
