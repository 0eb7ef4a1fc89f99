use std::path::PathBuf;
use ticketgen::config::{AppConfig, ConfigManager, OutputFormat, PoolSizePolicy};
use ticketgen::TicketError;

fn scratch_file(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ticketgen-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

#[test]
fn test_defaults_are_valid() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.search.generations, 50);
    assert_eq!(config.search.population_size, 100);
    assert_eq!(config.search.mutation_rate, 0.1);
    assert_eq!(config.search.ticket_size, 2);
    assert_eq!(config.search.pool_policy, PoolSizePolicy::AllowExactFit);
}

#[test]
fn test_load_partial_toml() {
    let path = scratch_file("partial.toml");
    std::fs::write(
        &path,
        r#"
[search]
generations = 12
pool_policy = "require_surplus"
seed = 77

[output]
format = "json"
discipline = "Databases"
"#,
    )
    .unwrap();

    let config = AppConfig::load(Some(&path)).unwrap();
    assert_eq!(config.search.generations, 12);
    assert_eq!(config.search.population_size, 100);
    assert_eq!(config.search.pool_policy, PoolSizePolicy::RequireSurplus);
    assert_eq!(config.search.seed, Some(77));
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.output.discipline, "Databases");
    assert_eq!(config.llm.model, "gpt-3.5-turbo");
}

#[test]
fn test_invalid_values_are_rejected() {
    let path = scratch_file("invalid.toml");
    std::fs::write(&path, "[search]\nmutation_rate = 2.0\n").unwrap();

    assert!(matches!(
        AppConfig::load(Some(&path)),
        Err(TicketError::SearchConfiguration(_))
    ));
}

#[test]
fn test_missing_file_is_a_configuration_error() {
    let path = scratch_file("does-not-exist.toml");
    assert!(matches!(
        AppConfig::load(Some(&path)),
        Err(TicketError::Configuration(_))
    ));
}

#[test]
fn test_manager_save_and_reload() {
    let path = scratch_file("saved.toml");
    let manager = ConfigManager::new();
    manager
        .update(|c| {
            c.search.generations = 30;
            c.output.group = "CS-21".to_string();
        })
        .unwrap();
    manager.save_to_file(&path).unwrap();

    let reloaded = ConfigManager::new();
    reloaded.load_from_file(&path).unwrap();
    let config = reloaded.get().unwrap();
    assert_eq!(config.search.generations, 30);
    assert_eq!(config.output.group, "CS-21");
}

#[test]
fn test_manager_keeps_previous_config_on_invalid_update() {
    let manager = ConfigManager::new();
    let result = manager.update(|c| c.search.population_size = 0);

    assert!(result.is_err());
    assert_eq!(manager.get().unwrap().search.population_size, 100);
}

#[test]
fn test_section_errors_name_their_section() {
    let mut config = AppConfig::default();
    config.output.compile_pdf = true;
    config.output.format = OutputFormat::Docx;

    match config.validate() {
        Err(TicketError::Configuration(message)) => {
            assert!(message.starts_with("[output]"), "{}", message)
        }
        other => panic!("unexpected result: {:?}", other),
    }
}
