pub mod traits;
pub mod search;
pub mod source;
pub mod llm;
pub mod output;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use search::{PoolSizePolicy, SearchConfig};
pub use source::SourceConfig;
pub use llm::LlmConfig;
pub use output::{OutputConfig, OutputFormat};
