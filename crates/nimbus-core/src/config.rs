//! Dashboard configuration persisted as TOML in the platform config
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::units::UnitPreference;

const CONFIG_DIR_NAME: &str = "nimbus";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_CITY: &str = "Chennai";
const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine the platform config directory")]
    NoConfigDir,

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Unit the dashboard starts in.
    pub units: UnitPreference,
    /// City loaded when no position is available.
    pub default_city: String,
    /// Language sent to the geocoding service.
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            units: UnitPreference::Celsius,
            default_city: DEFAULT_CITY.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// A single validation failure with enough context to report it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Outcome of validating a config: hard errors plus advisory warnings.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn add_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    fn add_warning(&mut self, field: &str, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Config {
    /// Load the config from the default path, writing the defaults there
    /// on first run.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path()?)
    }

    /// Load the config from `path`. A missing file is not an error: the
    /// defaults are saved to `path` and returned.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!(path = %path.display(), "No config file found, creating defaults");
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save the config to the default path.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_path()?)
    }

    /// Save the config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }

        let raw = toml::to_string_pretty(self)?;
        fs::write(path, raw).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Check the config for problems worth surfacing before startup.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.default_city.trim().is_empty() {
            result.add_error("default_city", "must not be empty");
        }
        if self.language.trim().is_empty() {
            result.add_error("language", "must not be empty");
        }
        if self.language.len() > 8 {
            result.add_warning(
                "language",
                "looks longer than a language tag; the geocoder may ignore it",
            );
        }

        result
    }
}

fn config_path() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
