//! Configuration types.
//!
//! ```toml
//! [logging]
//! filter = "tokenfault=debug,info"
//! format = "json"
//! with_target = true
//!
//! [logging.file]
//! directory = "/var/log/tokenfault"
//! prefix = "tokenfault.log"
//! ```
//!
//! # Environment Variables
//!
//! - `TOKENFAULT_LOG` - Override `logging.filter`
//! - `TOKENFAULT_LOG_FORMAT` - Override `logging.format` ("pretty"/"json")

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::{ConfigError, Result};

/// Environment variable overriding the log filter.
pub const LOG_FILTER_ENV: &str = "TOKENFAULT_LOG";

/// Environment variable overriding the log format.
pub const LOG_FORMAT_ENV: &str = "TOKENFAULT_LOG_FORMAT";

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenfaultConfig {
    pub logging: LoggingConfig,
}

impl TokenfaultConfig {
    /// Parse from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Output format for console and file logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives.
    /// Default: `info`
    pub filter: String,

    /// Console output format.
    pub format: LogFormat,

    /// Include the event target (module path) in console output.
    pub with_target: bool,

    /// Rolling JSON file output; disabled when absent.
    pub file: Option<LogFileConfig>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Pretty,
            with_target: true,
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Apply `TOKENFAULT_LOG` / `TOKENFAULT_LOG_FORMAT` as returned by
    /// `lookup`.
    ///
    /// Empty values are ignored.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(filter) = lookup(LOG_FILTER_ENV)
            && !filter.trim().is_empty()
        {
            self.filter = filter;
        }
        if let Some(format) = lookup(LOG_FORMAT_ENV)
            && !format.trim().is_empty()
        {
            self.format = format.parse()?;
        }
        Ok(())
    }

    /// Build the `EnvFilter` for the configured directives.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.filter).map_err(|e| ConfigError::InvalidFilter {
            filter: self.filter.clone(),
            reason: e.to_string(),
        })
    }
}

/// Rolling daily log file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogFileConfig {
    /// Directory that receives the log files.
    pub directory: PathBuf,

    /// File name prefix; the date is appended.
    #[serde(default = "default_log_prefix")]
    pub prefix: String,
}

fn default_log_prefix() -> String {
    "tokenfault.log".to_string()
}
