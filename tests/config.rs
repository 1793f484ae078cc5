use chrono::FixedOffset;
use taskboard::config::Config;
use taskboard::entities::TaskStatus;
use taskboard::triage::DEFAULT_BOARD_ORDER;
use taskboard::utils::datetime;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.triage.upcoming_window_days, 7);
    assert_eq!(config.triage.deadline_limit, 5);
    assert_eq!(config.triage.recent_events_limit, 5);
    assert!(!config.triage.sort_recent_events);
    assert_eq!(config.board.columns, DEFAULT_BOARD_ORDER.to_vec());
    assert!(config.display.show_tags);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Zero-day window should fail
    config.triage.upcoming_window_days = 0;
    assert!(config.validate().is_err());

    // Reset and test an oversized list
    config.triage.upcoming_window_days = 14;
    config.triage.deadline_limit = 1000;
    assert!(config.validate().is_err());

    // Reset and test a repeated board column
    config.triage.deadline_limit = 5;
    config.board.columns = vec![TaskStatus::Open, TaskStatus::Open];
    assert!(config.validate().is_err());

    // Reset and test an empty board
    config.board.columns = Vec::new();
    assert!(config.validate().is_err());

    // Reset and test an unknown log level
    config.board.columns = vec![TaskStatus::Open];
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.logging.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_offset_validation() {
    let mut config = Config::default();
    config.triage.utc_offset_minutes = Some(24 * 60);
    assert!(config.validate().is_err());

    config.triage.utc_offset_minutes = Some(-300);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("upcoming_window_days = 7"));
    assert!(toml_str.contains("\"in_progress\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[triage]
upcoming_window_days = 14
sort_recent_events = true

[board]
columns = ["open", "in_progress", "completed"]

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.triage.upcoming_window_days, 14);
    assert!(config.triage.sort_recent_events);
    assert_eq!(
        config.board.columns,
        vec![TaskStatus::Open, TaskStatus::InProgress, TaskStatus::Completed]
    );
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.triage.deadline_limit, 5);
    assert_eq!(config.display.date_format, datetime::DATE_FORMAT);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.triage.deadline_limit, default_config.triage.deadline_limit);
    assert_eq!(config.board.columns, default_config.board.columns);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.display.date_format, default_config.display.date_format);
}

#[test]
fn test_policy_and_ingest_options() {
    let mut config = Config::default();
    config.triage.upcoming_window_days = 10;
    config.triage.deadline_limit = 3;

    let policy = config.triage.deadline_policy();
    assert_eq!(policy.window_days, 10);
    assert_eq!(policy.limit, 3);

    let local = FixedOffset::east_opt(3600).unwrap();
    assert_eq!(config.triage.ingest_options(local).offset, local);

    config.triage.utc_offset_minutes = Some(-300);
    assert_eq!(
        config.triage.ingest_options(local).offset,
        FixedOffset::west_opt(5 * 3600).unwrap()
    );
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("taskboard_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    // Ensure the directory doesn't exist initially
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());
    assert!(config_path.exists());

    // Verify the file contains expected content and loads back
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Taskboard Configuration File"));
    assert!(content.contains("deadline_limit = 5"));

    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.triage.deadline_limit, 5);

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}
