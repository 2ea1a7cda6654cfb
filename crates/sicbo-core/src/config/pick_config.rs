//! Top-level predictor configuration with 3-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{CONFIG_FILENAME, ENV_LOG, ENV_MODEL_PATH};
use crate::errors::ConfigError;

/// Predictor configuration.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SICBO_MODEL_PATH`, `SICBO_LOG`)
/// 2. `sicbo.toml` next to the executable
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PickConfig {
    /// Explicit model artifact path. When unset the artifact is looked up
    /// next to the executable under `model_filename`.
    pub model_path: Option<String>,
    /// Artifact file name used for the co-located lookup.
    pub model_filename: String,
    /// Intra-op threads for the inference session.
    pub intra_threads: usize,
    /// `tracing` filter directive. Logs go to stderr.
    pub log_filter: String,
}

impl Default for PickConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            model_filename: defaults::DEFAULT_MODEL_FILENAME.to_string(),
            intra_threads: defaults::DEFAULT_INTRA_THREADS,
            log_filter: defaults::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl PickConfig {
    /// Load configuration for a binary installed in `base_dir`.
    ///
    /// A missing config file is not an error. A present but invalid file is.
    pub fn load(base_dir: &Path) -> Result<Self, ConfigError> {
        let path = base_dir.join(CONFIG_FILENAME);
        let mut config = if path.exists() {
            Self::from_toml_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus environment overrides. Used when the config file is unusable.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.intra_threads == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "intra_threads".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.model_filename.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "model_filename".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup. Empty values are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(ENV_MODEL_PATH).filter(|v| !v.is_empty()) {
            self.model_path = Some(val);
        }
        if let Some(val) = lookup(ENV_LOG).filter(|v| !v.is_empty()) {
            self.log_filter = val;
        }
    }

    /// Where the model artifact is expected for a binary installed in `base_dir`.
    pub fn resolve_model_path(&self, base_dir: &Path) -> PathBuf {
        match &self.model_path {
            Some(path) => PathBuf::from(path),
            None => base_dir.join(&self.model_filename),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_next_to_binary() {
        let config = PickConfig::default();
        let path = config.resolve_model_path(Path::new("/opt/sicbo"));
        assert_eq!(path, PathBuf::from("/opt/sicbo/sicbo_core.onnx"));
        assert_eq!(config.log_filter, "off");
    }

    #[test]
    fn explicit_model_path_wins() {
        let config = PickConfig {
            model_path: Some("/models/other.onnx".to_string()),
            ..Default::default()
        };
        let path = config.resolve_model_path(Path::new("/opt/sicbo"));
        assert_eq!(path, PathBuf::from("/models/other.onnx"));
    }

    #[test]
    fn overrides_ignore_empty_values() {
        let mut config = PickConfig::default();
        config.apply_overrides_from(|key| match key {
            ENV_MODEL_PATH => Some(String::new()),
            ENV_LOG => Some("debug".to_string()),
            _ => None,
        });
        assert!(config.model_path.is_none());
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn zero_threads_rejected() {
        let config = PickConfig {
            intra_threads: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationFailed { .. })
        ));
    }
}
