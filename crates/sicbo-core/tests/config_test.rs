//! Tests for predictor configuration resolution.

use std::path::PathBuf;
use std::sync::Mutex;

use sicbo_core::config::PickConfig;
use sicbo_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn clear_sicbo_env_vars() {
    for key in ["SICBO_MODEL_PATH", "SICBO_LOG"] {
        std::env::remove_var(key);
    }
}

#[test]
fn missing_file_yields_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_sicbo_env_vars();

    let dir = tempdir();
    let config = PickConfig::load(dir.path()).unwrap();
    assert!(config.model_path.is_none());
    assert_eq!(config.model_filename, "sicbo_core.onnx");
    assert_eq!(config.intra_threads, 1);
    assert_eq!(
        config.resolve_model_path(dir.path()),
        dir.path().join("sicbo_core.onnx")
    );
}

#[test]
fn file_values_are_applied() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_sicbo_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("sicbo.toml"),
        r#"
model_filename = "v2.onnx"
intra_threads = 2
log_filter = "sicbo=debug"
"#,
    )
    .unwrap();

    let config = PickConfig::load(dir.path()).unwrap();
    assert_eq!(config.intra_threads, 2);
    assert_eq!(config.log_filter, "sicbo=debug");
    assert_eq!(config.resolve_model_path(dir.path()), dir.path().join("v2.onnx"));
}

#[test]
fn env_overrides_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_sicbo_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("sicbo.toml"),
        "model_path = \"/from/file.onnx\"\nlog_filter = \"warn\"\n",
    )
    .unwrap();
    std::env::set_var("SICBO_MODEL_PATH", "/from/env.onnx");
    std::env::set_var("SICBO_LOG", "trace");

    let config = PickConfig::load(dir.path()).unwrap();
    clear_sicbo_env_vars();

    assert_eq!(
        config.resolve_model_path(dir.path()),
        PathBuf::from("/from/env.onnx")
    );
    assert_eq!(config.log_filter, "trace");
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_sicbo_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("sicbo.toml"), "intra_threads = [").unwrap();

    let result = PickConfig::load(dir.path());
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn invalid_values_fail_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_sicbo_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("sicbo.toml"), "intra_threads = 0\n").unwrap();

    let result = PickConfig::load(dir.path());
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn from_env_keeps_overrides_without_a_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_sicbo_env_vars();

    std::env::set_var("SICBO_LOG", "info");
    let config = PickConfig::from_env();
    clear_sicbo_env_vars();

    assert_eq!(config.log_filter, "info");
    assert!(config.model_path.is_none());
}

#[test]
fn unknown_keys_are_ignored() {
    let config = PickConfig::from_toml("future_knob = true\nintra_threads = 4\n").unwrap();
    assert_eq!(config.intra_threads, 4);
}
