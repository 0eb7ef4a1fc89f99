use super::partition::Partition;
use crate::engines::similarity::SimilarityModel;

/// Scores tickets by how dissimilar their questions are. Higher is better.
#[derive(Clone, Copy)]
pub struct FitnessEvaluator<'a> {
    model: &'a SimilarityModel,
}

impl<'a> FitnessEvaluator<'a> {
    pub fn new(model: &'a SimilarityModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &'a SimilarityModel {
        self.model
    }

    /// `1 - similarity` averaged over every unordered pair in the ticket.
    pub fn ticket_fitness(&self, ticket: &[usize]) -> f64 {
        let mut total = 0.0;
        let mut pairs = 0usize;
        for (i, &a) in ticket.iter().enumerate() {
            for &b in &ticket[i + 1..] {
                total += 1.0 - self.model.similarity(a, b);
                pairs += 1;
            }
        }

        if pairs == 0 {
            0.0
        } else {
            total / pairs as f64
        }
    }

    /// Mean ticket fitness across the partition.
    pub fn partition_fitness(&self, partition: &Partition) -> f64 {
        let count = partition.ticket_count();
        if count == 0 {
            return 0.0;
        }
        partition.tickets().map(|t| self.ticket_fitness(t)).sum::<f64>() / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(texts: &[&str]) -> SimilarityModel {
        let texts: Vec<String> = texts.iter().map(|t| t.to_string()).collect();
        SimilarityModel::fit(&texts).unwrap()
    }

    #[test]
    fn test_identical_pair_scores_zero() {
        let model = model(&["page tables", "page tables", "disk scheduling"]);
        let evaluator = FitnessEvaluator::new(&model);

        assert_eq!(evaluator.ticket_fitness(&[0, 1]), 0.0);
        assert_eq!(evaluator.ticket_fitness(&[0, 2]), 1.0);
    }

    #[test]
    fn test_partition_fitness_is_mean() {
        let model = model(&["page tables", "page tables", "disk scheduling", "network sockets"]);
        let evaluator = FitnessEvaluator::new(&model);

        let partition = Partition::from_slots(vec![0, 1, 2, 3], 2).unwrap();
        assert_eq!(evaluator.partition_fitness(&partition), 0.5);
    }

    #[test]
    fn test_larger_tickets_average_all_pairs() {
        let model = model(&["page tables", "page tables", "disk scheduling"]);
        let evaluator = FitnessEvaluator::new(&model);

        // pairs: (0,1) = 0, (0,2) = 1, (1,2) = 1
        let fitness = evaluator.ticket_fitness(&[0, 1, 2]);
        assert!((fitness - 2.0 / 3.0).abs() < 1e-12);
    }
}
