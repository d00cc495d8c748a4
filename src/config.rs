//! Runtime configuration
//!
//! Resolution order for every setting: command line, then environment
//! (handled by clap), then the optional TOML file, then the built-in default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::utils::error::{PredictError, Result};
use crate::utils::logging::{LogConfig, LogLevel};

/// Weight file used when nothing else is configured
pub const DEFAULT_MODEL_PATH: &str = "plant-disease-model-complete.mpk";

/// Environment variable overriding the model path
pub const MODEL_PATH_ENV: &str = "PLANTVILLAGE_MODEL";

/// Settings of one prediction run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PredictConfig {
    /// Path of the `.mpk` weight record
    pub model_path: PathBuf,

    /// Log level name (trace, debug, info, warn, error)
    pub log_level: Option<String>,

    /// Pretty-print the JSON result
    pub pretty: bool,
}

impl Default for PredictConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            log_level: None,
            pretty: false,
        }
    }
}

/// Command line values that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub model_path: Option<PathBuf>,
    pub verbose: bool,
    pub quiet: bool,
    pub pretty: bool,
}

/// Load a TOML file into any deserializable config type
pub fn load_toml_config<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    let content = fs::read_to_string(path)
        .map_err(|e| PredictError::Config(format!("Failed to read config {}: {e}", path.display())))?;

    toml::from_str(&content)
        .map_err(|e| PredictError::Config(format!("Failed to parse config {}: {e}", path.display())))
}

impl PredictConfig {
    /// Defaults, or the contents of `path` when given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config: Self = match path {
            Some(path) => load_toml_config(path)?,
            None => Self::default(),
        };
        config.log_level()?;
        Ok(config)
    }

    /// Apply command line values on top of this config
    pub fn merge(mut self, overrides: Overrides) -> Self {
        if let Some(model_path) = overrides.model_path {
            self.model_path = model_path;
        }
        if overrides.verbose {
            self.log_level = Some(LogLevel::Debug.to_string());
        } else if overrides.quiet {
            self.log_level = Some(LogLevel::Error.to_string());
        }
        self.pretty |= overrides.pretty;
        self
    }

    /// Configured log level, if any
    pub fn log_level(&self) -> Result<Option<LogLevel>> {
        match &self.log_level {
            None => Ok(None),
            Some(name) => LogLevel::parse(name)
                .map(Some)
                .ok_or_else(|| PredictError::Config(format!("unknown log level '{name}'"))),
        }
    }

    /// Logging setup for this config
    pub fn log_config(&self) -> Result<LogConfig> {
        Ok(match self.log_level()? {
            Some(level) => LogConfig::with_level(level),
            None => LogConfig::default(),
        })
    }
}
