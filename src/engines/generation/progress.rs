use super::evolution_engine::{GenerationStats, ProgressCallback};

/// Discards progress reports.
pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, _generation: usize, _stats: &GenerationStats) {}
}

/// Reports progress through the `log` facade.
///
/// Every generation is logged at debug level; every `every`-th one and the last at info.
pub struct LoggingProgress {
    label: String,
    total_generations: usize,
    every: usize,
}

impl LoggingProgress {
    pub fn new(label: impl Into<String>, total_generations: usize) -> Self {
        Self {
            label: label.into(),
            total_generations,
            every: 10,
        }
    }

    pub fn every(mut self, every: usize) -> Self {
        self.every = every.max(1);
        self
    }
}

impl ProgressCallback for LoggingProgress {
    fn on_generation_start(&mut self, generation: usize) {
        log::trace!("[{}] generation {} starting", self.label, generation + 1);
    }

    fn on_generation_complete(&mut self, generation: usize, stats: &GenerationStats) {
        let done = generation + 1;
        if done % self.every == 0 || done == self.total_generations {
            log::info!(
                "[{}] generation {}/{}: best {:.4}, mean {:.4}",
                self.label,
                done,
                self.total_generations,
                stats.best_fitness,
                stats.mean_fitness
            );
        } else {
            log::debug!(
                "[{}] generation {}/{}: best {:.4}, mean {:.4}, survivors {}",
                self.label,
                done,
                self.total_generations,
                stats.best_fitness,
                stats.mean_fitness,
                stats.survivors
            );
        }
    }
}
