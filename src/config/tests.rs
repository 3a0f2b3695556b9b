//! Tests for config functionality.

use crate::config::types::DEFAULT_BUDGETS;
use crate::config::{CONFIG_FILE_NAME, Config, resolve};
use crate::test_support::DirGuard;
use serial_test::serial;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.budgets, DEFAULT_BUDGETS.to_vec());
    assert_eq!(config.backtrack_capacity, None);
    assert_eq!(config.max_line_length, 255);
    assert!(!config.fail_if_unsolved);
    assert!(config.print_trace);
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
budgets: [5, 50]
fail_if_unsolved: true
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.budgets, vec![5, 50]);
    assert!(config.fail_if_unsolved);

    // Unspecified values should use defaults
    assert_eq!(config.max_line_length, 255);
    assert!(config.print_trace);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
budgets:
  - 1
  - 2
  - 3
backtrack_capacity: 200
max_line_length: 80
fail_if_unsolved: true
print_trace: false
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.budgets, vec![1, 2, 3]);
    assert_eq!(config.backtrack_capacity, Some(200));
    assert_eq!(config.max_line_length, 80);
    assert!(config.fail_if_unsolved);
    assert!(!config.print_trace);
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
budgets: [7]
colour_scheme: solarized
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.budgets, vec![7]);
}

#[test]
fn test_empty_budgets_rejected() {
    let err = Config::from_yaml("budgets: []").unwrap_err();
    assert!(err.to_string().contains("budgets"));
    assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
}

#[test]
fn test_zero_line_length_rejected() {
    let err = Config::from_yaml("max_line_length: 0").unwrap_err();
    assert!(err.to_string().contains("max_line_length"));
}

#[test]
fn test_zero_capacity_rejected() {
    let err = Config::from_yaml("backtrack_capacity: 0").unwrap_err();
    assert!(err.to_string().contains("backtrack_capacity"));
}

#[test]
fn test_malformed_yaml_rejected() {
    let err = Config::from_yaml("budgets: [1, two]").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_yaml_round_trip() {
    let config = Config {
        budgets: vec![3, 30],
        backtrack_capacity: Some(64),
        ..Config::default()
    };
    let yaml = config.to_yaml().unwrap();
    assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Config::load(dir.path().join("missing.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_resolve_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.yaml");
    std::fs::write(&path, "budgets: [42]\n").unwrap();

    let config = resolve(Some(path.as_path())).unwrap();
    assert_eq!(config.budgets, vec![42]);
}

#[test]
#[serial]
fn test_resolve_finds_local_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "budgets: [9]\n").unwrap();
    let _guard = DirGuard::new(dir.path());

    let config = resolve(None).unwrap();
    assert_eq!(config.budgets, vec![9]);
}

#[test]
#[serial]
fn test_resolve_defaults_without_local_config() {
    let dir = TempDir::new().unwrap();
    let _guard = DirGuard::new(dir.path());

    assert_eq!(resolve(None).unwrap(), Config::default());
}
