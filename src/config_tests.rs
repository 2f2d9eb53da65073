//! Tests for configuration loading

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_explicit_path() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[lookup]\ndebounce_ms = 300\nlanguage = \"en\"").unwrap();

    let config = load_config(Some(file.path())).unwrap();

    assert_eq!(config.lookup.debounce_ms, 300);
    assert_eq!(config.lookup.language.as_deref(), Some("en"));
    assert_eq!(config.lookup.min_query_chars, 3);
}

#[test]
fn test_missing_explicit_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let result = load_config(Some(&path));

    match result {
        Err(WayfinderError::ConfigRead { path: p, .. }) => assert_eq!(p, path),
        other => panic!("Expected ConfigRead error, got {:?}", other),
    }
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[lookup\ndebounce_ms = ").unwrap();

    let result = load_config_from_path(file.path());

    assert!(matches!(result, Err(WayfinderError::InvalidConfig { .. })));
}

#[test]
fn test_invalid_config_message_names_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[lookup]\nresult_limit = 1000").unwrap();

    let err = load_config_from_path(file.path()).unwrap_err();

    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn test_parse_config_toml_empty() {
    assert_eq!(parse_config_toml("").unwrap(), Config::default());
}

#[test]
fn test_config_path_location() {
    if let Some(path) = config_path() {
        assert!(path.ends_with(".config/wayfinder/config.toml"));
    }
}
