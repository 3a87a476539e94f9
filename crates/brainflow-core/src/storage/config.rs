//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Extractor behavior (aggressive fallback, deduplication)
//! - CLI output defaults
//! - Log level
//!
//! Configuration is stored at `~/.config/brainflow/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, CoreError, Result};
use crate::extract::ExtractorConfig;

/// CLI output defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print JSON instead of text.
    #[serde(default)]
    pub json: bool,
    /// Show per-category scores when classifying.
    #[serde(default)]
    pub show_scores: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `BRAINFLOW_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/brainflow/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub extractor: ExtractorConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_log_level() -> String {
    "warn".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => value
                        .parse::<u64>()
                        .map(|n| serde_json::Value::Number(n.into()))
                        .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?,
                    serde_json::Value::Object(_) => return Err(unknown()),
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Location of `config.toml` in the data directory.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing defaults if the file is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        match Self::read_from(path)? {
            Some(cfg) => Ok(cfg),
            None => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
        }
    }

    /// Parse the file at `path`, or `None` if it does not exist.
    pub fn read_from(path: &Path) -> Result<Option<Self>> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map(Some).map_err(|e| {
                CoreError::from(ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not match the
    /// type of the existing value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json)?;
        Ok(())
    }

    /// Every leaf value as a `(dot.path, value)` pair, sorted by key.
    pub fn entries(&self) -> Vec<(String, String)> {
        fn walk(prefix: &str, value: &serde_json::Value, out: &mut Vec<(String, String)>) {
            match value {
                serde_json::Value::Object(map) => {
                    for (key, child) in map {
                        let path = if prefix.is_empty() {
                            key.clone()
                        } else {
                            format!("{prefix}.{key}")
                        };
                        walk(&path, child, out);
                    }
                }
                serde_json::Value::String(s) => out.push((prefix.to_string(), s.clone())),
                other => out.push((prefix.to_string(), other.to_string())),
            }
        }

        let mut out = Vec::new();
        if let Ok(json) = serde_json::to_value(self) {
            walk("", &json, &mut out);
        }
        out
    }

    /// Read the config without creating it, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::path()
            .and_then(|path| Self::read_from(&path))
            .ok()
            .flatten()
            .unwrap_or_default()
    }
}
