use super::{
    llm::LlmConfig,
    output::OutputConfig,
    search::SearchConfig,
    source::SourceConfig,
    traits::ConfigSection,
};
use crate::error::TicketError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Environment variables override file values, e.g. `TICKETGEN_SEARCH__GENERATIONS=80`.
pub const ENV_PREFIX: &str = "TICKETGEN";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub source: SourceConfig,
    pub llm: LlmConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), TicketError> {
        validate_section(&self.search)?;
        validate_section(&self.source)?;
        validate_section(&self.llm)?;
        validate_section(&self.output)?;
        Ok(())
    }

    /// Builds a configuration from an optional TOML file layered under the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, TicketError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|e| TicketError::Configuration(format!("Failed to load config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }
}

/// Prefixes configuration errors with the offending `[section]`.
fn validate_section<S: ConfigSection>(section: &S) -> Result<(), TicketError> {
    section.validate().map_err(|e| match e {
        TicketError::Configuration(message) => {
            TicketError::Configuration(format!("[{}] {}", S::section_name(), message))
        }
        other => other,
    })
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), TicketError> {
        let config = AppConfig::load(Some(path.as_ref()))?;
        *self.write()? = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), TicketError> {
        let config = self.get()?;
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| TicketError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| TicketError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> Result<AppConfig, TicketError> {
        self.config
            .read()
            .map(|config| config.clone())
            .map_err(|_| TicketError::Configuration("Config lock poisoned".to_string()))
    }

    /// Applies `f` and keeps the result only if it validates.
    pub fn update<F>(&self, f: F) -> Result<(), TicketError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut guard = self.write()?;
        let mut candidate = guard.clone();
        f(&mut candidate);
        candidate.validate()?;
        *guard = candidate;
        Ok(())
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, AppConfig>, TicketError> {
        self.config
            .write()
            .map_err(|_| TicketError::Configuration("Config lock poisoned".to_string()))
    }
}
