use crate::config::search::SearchConfig;
use crate::config::source::SourceConfig;
use crate::config::traits::ConfigSection;
use crate::data::{QuestionSource, QuestionValidator};
use crate::engines::generation::{
    check_capacity, CancelFlag, EvolutionEngine, LoggingProgress, Partition, ProgressCallback,
    SearchOutcome,
};
use crate::engines::similarity::SimilarityModel;
use crate::error::{Result, TicketError};
use crate::types::TicketSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Runs the whole ticket assembly: capacity check, similarity fit, search, mapping back to texts.
pub struct TicketGenerator {
    config: SearchConfig,
}

impl TicketGenerator {
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Loads and cleans a question pool, then checks it can fill `ticket_count` tickets.
    pub fn load_pool(
        &self,
        source: &dyn QuestionSource,
        source_config: &SourceConfig,
        ticket_count: usize,
    ) -> Result<Vec<String>> {
        log::info!("Loading questions from {}", source.describe());
        let questions = QuestionValidator::sanitize(source.load()?, source_config.drop_duplicates);
        log::info!("Loaded {} question(s)", questions.len());

        QuestionValidator::ensure_capacity(
            &questions,
            ticket_count,
            self.config.ticket_size,
            self.config.pool_policy,
        )?;
        Ok(questions)
    }

    /// Builds `ticket_count` tickets.
    ///
    /// Uses the configured seed or a fresh one; with `variants > 1` the best of that
    /// many independent searches (seeds `seed, seed + 1, ...`) is returned.
    pub fn generate(&self, questions: &[String], ticket_count: usize) -> Result<TicketSet> {
        let base_seed = self.config.seed.unwrap_or_else(|| rand::thread_rng().gen());

        if self.config.variants <= 1 {
            return self.generate_with_seed(questions, ticket_count, base_seed);
        }

        let seeds: Vec<u64> = (0..self.config.variants as u64)
            .map(|i| base_seed.wrapping_add(i))
            .collect();
        let variants = self.generate_variants(questions, ticket_count, &seeds)?;
        pick_best(variants).ok_or_else(|| {
            TicketError::SearchConfiguration("No search variant was run".to_string())
        })
    }

    pub fn generate_with_seed(&self, questions: &[String], ticket_count: usize, seed: u64) -> Result<TicketSet> {
        let model = self.prepare(questions, ticket_count)?;
        let mut progress = self.progress(seed);
        let outcome = self.search(&model, ticket_count, seed, &mut progress, None)?;
        Ok(to_ticket_set(&outcome.best, outcome.fitness, questions, seed))
    }

    /// Full control over progress reporting and cancellation for a single search.
    pub fn generate_with<C: ProgressCallback>(
        &self,
        questions: &[String],
        ticket_count: usize,
        seed: u64,
        callback: &mut C,
        cancel: Option<CancelFlag>,
    ) -> Result<(TicketSet, SearchOutcome)> {
        let model = self.prepare(questions, ticket_count)?;
        let outcome = self.search(&model, ticket_count, seed, callback, cancel)?;
        let tickets = to_ticket_set(&outcome.best, outcome.fitness, questions, seed);
        Ok((tickets, outcome))
    }

    /// Independent searches in parallel, one random source per seed.
    ///
    /// Results come back in `seeds` order and match sequential
    /// [`TicketGenerator::generate_with_seed`] calls.
    pub fn generate_variants(
        &self,
        questions: &[String],
        ticket_count: usize,
        seeds: &[u64],
    ) -> Result<Vec<TicketSet>> {
        let model = self.prepare(questions, ticket_count)?;

        seeds
            .par_iter()
            .map(|&seed| {
                let mut progress = self.progress(seed);
                let outcome = self.search(&model, ticket_count, seed, &mut progress, None)?;
                Ok(to_ticket_set(&outcome.best, outcome.fitness, questions, seed))
            })
            .collect()
    }

    /// Logs about ten progress lines per run at info level.
    fn progress(&self, seed: u64) -> LoggingProgress {
        let generations = self.config.generations;
        LoggingProgress::new(format!("seed {}", seed), generations).every(generations / 10)
    }

    /// Fails fast on capacity before fitting the similarity model.
    fn prepare(&self, questions: &[String], ticket_count: usize) -> Result<SimilarityModel> {
        check_capacity(
            questions.len(),
            ticket_count,
            self.config.ticket_size,
            self.config.pool_policy,
        )?;
        SimilarityModel::fit(questions)
    }

    fn search<C: ProgressCallback>(
        &self,
        model: &SimilarityModel,
        ticket_count: usize,
        seed: u64,
        callback: &mut C,
        cancel: Option<CancelFlag>,
    ) -> Result<SearchOutcome> {
        let rng = StdRng::seed_from_u64(seed);
        let mut engine = EvolutionEngine::new(model, self.config.clone(), ticket_count, rng)?;
        if let Some(flag) = cancel {
            engine = engine.with_cancel_flag(flag);
        }

        let outcome = engine.run(callback)?;
        if outcome.cancelled {
            log::warn!(
                "Search cancelled after {} generation(s)",
                outcome.generations_completed
            );
        }
        Ok(outcome)
    }
}

fn to_ticket_set(partition: &Partition, fitness: f64, questions: &[String], seed: u64) -> TicketSet {
    let indices = partition.to_tickets();
    let tickets = indices
        .iter()
        .map(|ticket| ticket.iter().map(|&q| questions[q].clone()).collect())
        .collect();
    TicketSet {
        tickets,
        indices,
        fitness,
        seed,
    }
}

/// Highest fitness wins; the earliest variant wins ties. `None` for no variants.
fn pick_best(variants: Vec<TicketSet>) -> Option<TicketSet> {
    let mut best: Option<TicketSet> = None;
    for variant in variants {
        match &best {
            Some(current) if variant.fitness <= current.fitness => {}
            _ => best = Some(variant),
        }
    }
    best
}
