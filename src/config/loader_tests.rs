use std::fs;

use tempfile::TempDir;

use super::*;

#[test]
fn test_config_path_points_at_config_dir() {
    let path = config_path();
    assert!(path.is_some());
    let path = path.unwrap();
    assert!(path.to_string_lossy().contains(".config/charsearch"));
    assert!(path.to_string_lossy().ends_with("config.toml"));
}

#[test]
fn test_load_config_from_path_valid() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[search]\nbase_url = \"http://game.local\"\n").unwrap();

    let config = load_config_from_path(&path).unwrap();
    assert_eq!(config.search.base_url, "http://game.local");
    assert_eq!(config.search.endpoint, "/search_characters");
}

#[test]
fn test_load_config_from_path_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");

    let result = load_config_from_path(&path);
    assert!(matches!(result, Err(CharsearchError::Io(_))));
}

#[test]
fn test_load_config_from_path_invalid_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[search\nbase_url = ").unwrap();

    let result = load_config_from_path(&path);
    match result {
        Err(CharsearchError::Config { path: p, .. }) => {
            assert!(p.ends_with("config.toml"));
        }
        other => panic!("Expected config error, got {:?}", other),
    }
}

#[test]
fn test_load_config_explicit_broken_file_falls_back_with_warning() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\nmax_visible_rows = \"many\"\n").unwrap();

    let result = load_config(Some(&path));
    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_some());
}

#[test]
fn test_load_config_explicit_valid_file_has_no_warning() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[binder]\ndefault_mode = \"splash\"\n").unwrap();

    let result = load_config(Some(&path));
    assert_eq!(result.config.binder.default_mode, "splash");
    assert!(result.warning.is_none());
}
