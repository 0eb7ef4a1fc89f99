use crate::engines::generation::partition::Partition;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Picks two distinct survivors uniformly at random.
///
/// `survivors` must hold at least two partitions.
pub fn select_parents<'a, R: Rng>(survivors: &'a [Partition], rng: &mut R) -> (&'a Partition, &'a Partition) {
    let picked = rand::seq::index::sample(rng, survivors.len(), 2);
    (&survivors[picked.index(0)], &survivors[picked.index(1)])
}

/// Single-point crossover on ticket boundaries followed by repair.
///
/// The child takes tickets `[0, c)` from `parent1` and `[c, ticket_count)` from `parent2`
/// for a random cut `c` in `[1, ticket_count)`. A single-ticket partition has no cut
/// point and is copied from `parent1`.
pub fn crossover<R: Rng>(
    parent1: &Partition,
    parent2: &Partition,
    pool_size: usize,
    rng: &mut R,
) -> Partition {
    let ticket_size = parent1.ticket_size();
    let ticket_count = parent1.ticket_count();

    let cut = if ticket_count > 1 {
        rng.gen_range(1..ticket_count)
    } else {
        ticket_count
    };
    let split = cut * ticket_size;

    let mut slots = Vec::with_capacity(parent1.slots().len());
    slots.extend_from_slice(&parent1.slots()[..split]);
    slots.extend_from_slice(&parent2.slots()[split..]);

    let slots = repair(slots, pool_size, rng);
    Partition::from_slots_unchecked(slots, ticket_size)
}

/// Restores the uniqueness invariant on a flattened child.
///
/// Duplicates are dropped keeping first occurrences in order, then the gaps are
/// filled from the unused pool indices: collected in ascending order, shuffled,
/// and taken until the original length is reached.
pub fn repair<R: Rng>(slots: Vec<usize>, pool_size: usize, rng: &mut R) -> Vec<usize> {
    let needed = slots.len();
    let mut seen = HashSet::with_capacity(needed);
    let mut repaired: Vec<usize> = slots.into_iter().filter(|q| seen.insert(*q)).collect();

    if repaired.len() == needed {
        return repaired;
    }

    let mut missing: Vec<usize> = (0..pool_size).filter(|q| !seen.contains(q)).collect();
    missing.shuffle(rng);
    repaired.extend(missing.into_iter().take(needed - repaired.len()));
    repaired
}

/// Swaps two distinct flattened positions. The set of assigned indices is unchanged.
pub fn swap_mutation<R: Rng>(partition: &mut Partition, rng: &mut R) {
    let slots = partition.slots_mut();
    if slots.len() < 2 {
        return;
    }
    let picked = rand::seq::index::sample(rng, slots.len(), 2);
    slots.swap(picked.index(0), picked.index(1));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_repair_keeps_first_occurrences() {
        let mut rng = StdRng::seed_from_u64(3);
        let repaired = repair(vec![4, 1, 4, 2, 1, 0], 8, &mut rng);

        assert_eq!(repaired.len(), 6);
        assert_eq!(&repaired[..4], &[4, 1, 2, 0]);
        let filled: Vec<usize> = repaired[4..].to_vec();
        assert!(filled.iter().all(|q| [3, 5, 6, 7].contains(q)));
        assert_ne!(filled[0], filled[1]);
    }

    #[test]
    fn test_repair_leaves_valid_children_alone() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(repair(vec![5, 2, 7, 1], 8, &mut rng), vec![5, 2, 7, 1]);
    }

    #[test]
    fn test_crossover_takes_head_and_tail() {
        let mut rng = StdRng::seed_from_u64(11);
        let p1 = Partition::from_slots(vec![0, 1, 2, 3, 4, 5], 2).unwrap();
        let p2 = Partition::from_slots(vec![6, 7, 8, 9, 10, 11], 2).unwrap();

        let child = crossover(&p1, &p2, 12, &mut rng);
        assert!(child.is_valid(12));
        assert_eq!(child.ticket(0), Some(&[0, 1][..]));
        assert_eq!(child.ticket(2), Some(&[10, 11][..]));
    }

    #[test]
    fn test_crossover_single_ticket_copies_first_parent() {
        let mut rng = StdRng::seed_from_u64(5);
        let p1 = Partition::from_slots(vec![2, 3], 2).unwrap();
        let p2 = Partition::from_slots(vec![0, 1], 2).unwrap();

        assert_eq!(crossover(&p1, &p2, 4, &mut rng), p1);
    }

    #[test]
    fn test_crossover_repairs_overlapping_parents() {
        let mut rng = StdRng::seed_from_u64(19);
        let p1 = Partition::from_slots(vec![0, 1, 2, 3], 2).unwrap();
        let p2 = Partition::from_slots(vec![2, 3, 0, 1], 2).unwrap();

        for _ in 0..20 {
            let child = crossover(&p1, &p2, 4, &mut rng);
            assert!(child.is_valid(4));
        }
    }

    #[test]
    fn test_swap_mutation_preserves_indices() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut partition = Partition::from_slots(vec![0, 1, 2, 3, 4, 5], 2).unwrap();

        for _ in 0..50 {
            swap_mutation(&mut partition, &mut rng);
        }
        let mut sorted = partition.slots().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_select_parents_are_distinct() {
        let mut rng = StdRng::seed_from_u64(9);
        let survivors = vec![
            Partition::from_slots(vec![0, 1], 2).unwrap(),
            Partition::from_slots(vec![1, 0], 2).unwrap(),
        ];
        for _ in 0..20 {
            let (a, b) = select_parents(&survivors, &mut rng);
            assert!(!std::ptr::eq(a, b));
        }
    }
}
