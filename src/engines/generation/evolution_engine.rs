use crate::config::search::SearchConfig;
use crate::config::traits::ConfigSection;
use crate::engines::generation::{
    fitness::FitnessEvaluator,
    operators::{crossover, select_parents, swap_mutation},
    partition::{check_capacity, Partition},
};
use crate::engines::similarity::SimilarityModel;
use crate::error::{Result, TicketError};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative stop signal, checked once per generation.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    pub best_fitness: f64,
    pub mean_fitness: f64,
    pub survivors: usize,
}

pub trait ProgressCallback {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, stats: &GenerationStats);
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub best: Partition,
    pub fitness: f64,
    /// Best survivor fitness of each completed generation.
    pub history: Vec<f64>,
    pub generations_completed: usize,
    pub cancelled: bool,
}

/// Genetic search over ticket partitions.
///
/// Owns its population and random source for the duration of [`EvolutionEngine::run`];
/// the similarity model is only read.
pub struct EvolutionEngine<'a, R: Rng> {
    config: SearchConfig,
    ticket_count: usize,
    pool_size: usize,
    evaluator: FitnessEvaluator<'a>,
    rng: R,
    cancel: Option<CancelFlag>,
}

impl<'a, R: Rng> EvolutionEngine<'a, R> {
    /// Validates the parameters against the pool before any search work.
    pub fn new(
        model: &'a SimilarityModel,
        config: SearchConfig,
        ticket_count: usize,
        rng: R,
    ) -> Result<Self> {
        config.validate()?;
        let pool_size = model.len();
        check_capacity(pool_size, ticket_count, config.ticket_size, config.pool_policy)?;

        Ok(Self {
            config,
            ticket_count,
            pool_size,
            evaluator: FitnessEvaluator::new(model),
            rng,
            cancel: None,
        })
    }

    pub fn with_cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the evolution process
    pub fn run<C: ProgressCallback>(&mut self, callback: &mut C) -> Result<SearchOutcome> {
        let survivor_count = self.config.survivor_count();
        if survivor_count < 2 {
            return Err(TicketError::SearchConfiguration(format!(
                "{} survivor(s) cannot produce offspring",
                survivor_count
            )));
        }

        let mut population = self.initialize_population();
        let mut history = Vec::with_capacity(self.config.generations);
        let mut cancelled = false;

        for generation in 0..self.config.generations {
            if self.is_cancelled() {
                cancelled = true;
                break;
            }
            callback.on_generation_start(generation);

            let ranked = self.rank(population);
            let stats = GenerationStats {
                best_fitness: ranked[0].1,
                mean_fitness: ranked.iter().map(|(_, f)| f).sum::<f64>() / ranked.len() as f64,
                survivors: survivor_count,
            };
            history.push(stats.best_fitness);

            let survivors: Vec<Partition> = ranked
                .into_iter()
                .take(survivor_count)
                .map(|(partition, _)| partition)
                .collect();
            population = self.reproduce(survivors);

            callback.on_generation_complete(generation, &stats);
        }

        let (best, fitness) = self.best_of(&population);
        Ok(SearchOutcome {
            best,
            fitness,
            generations_completed: history.len(),
            history,
            cancelled,
        })
    }

    fn initialize_population(&mut self) -> Vec<Partition> {
        (0..self.config.population_size)
            .map(|_| {
                Partition::random(
                    self.pool_size,
                    self.ticket_count,
                    self.config.ticket_size,
                    &mut self.rng,
                )
            })
            .collect()
    }

    /// Sorts by descending fitness. The sort is stable, so ties keep population order.
    fn rank(&self, population: Vec<Partition>) -> Vec<(Partition, f64)> {
        let mut scored: Vec<(Partition, f64)> = population
            .into_iter()
            .map(|p| {
                let fitness = self.evaluator.partition_fitness(&p);
                (p, fitness)
            })
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored
    }

    fn reproduce(&mut self, survivors: Vec<Partition>) -> Vec<Partition> {
        let mut next_generation = survivors.clone();

        while next_generation.len() < self.config.population_size {
            let (parent1, parent2) = select_parents(&survivors, &mut self.rng);
            let mut child = crossover(parent1, parent2, self.pool_size, &mut self.rng);

            if self.rng.gen::<f64>() < self.config.mutation_rate {
                swap_mutation(&mut child, &mut self.rng);
            }
            next_generation.push(child);
        }

        next_generation
    }

    /// First partition with the highest fitness, in population order.
    fn best_of(&self, population: &[Partition]) -> (Partition, f64) {
        let mut best_idx = 0;
        let mut best_fitness = f64::NEG_INFINITY;
        for (idx, partition) in population.iter().enumerate() {
            let fitness = self.evaluator.partition_fitness(partition);
            if fitness > best_fitness {
                best_idx = idx;
                best_fitness = fitness;
            }
        }
        (population[best_idx].clone(), best_fitness)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().map(|c| c.is_cancelled()).unwrap_or(false)
    }
}
