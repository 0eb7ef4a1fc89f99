pub mod partition;
pub mod fitness;
pub mod operators;
pub mod evolution_engine;
pub mod progress;

pub use partition::{build_random_partition, check_capacity, Partition};
pub use fitness::FitnessEvaluator;
pub use evolution_engine::{
    CancelFlag, EvolutionEngine, GenerationStats, ProgressCallback, SearchOutcome,
};
pub use progress::{LoggingProgress, NoProgress};
