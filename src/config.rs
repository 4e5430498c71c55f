//! Configuration management for LinkChain

use crate::display::OutputFormat;
use crate::error::{ChainError, Result};
use crate::logging::LogFormat;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default config file, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "linkchain.toml";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub driver: DriverConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DriverConfig {
    /// Number of derive-and-append rounds after genesis.
    #[serde(default = "default_rounds")]
    pub rounds: usize,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "default_output_format")]
    pub format: OutputFormat,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            rounds: default_rounds(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
        }
    }
}

impl LoggingConfig {
    pub fn log_format(&self) -> Result<LogFormat> {
        self.format.parse()
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub rounds: Option<usize>,
    pub output_format: Option<OutputFormat>,
    pub log_level: Option<String>,
}

impl Config {
    /// Applies `overrides` on top of the loaded values and re-validates.
    pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> Result<Self> {
        if let Some(rounds) = overrides.rounds {
            self.driver.rounds = rounds;
        }
        if let Some(format) = overrides.output_format {
            self.output.format = format;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }

        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(ChainError::Config(
                "logging.level must not be empty".to_string(),
            ));
        }
        self.logging.log_format()?;
        Ok(())
    }
}

/// Loads configuration from `path`.
///
/// A missing file yields the defaults; an unreadable file is an IO error and a
/// malformed one a config error.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let config: Config = if path.exists() {
        toml::from_str(&fs::read_to_string(path)?)?
    } else {
        Config::default()
    };

    config.validate()?;
    Ok(config)
}

fn default_rounds() -> usize {
    4
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Debug
}
