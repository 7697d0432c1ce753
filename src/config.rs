//! Configuration for the election simulator
//!
//! Loads settings from environment variables (and a `.env` file when one is
//! present). Every setting has a default, so an empty environment is valid.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Result, config_error};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(config_error!("LOG_FORMAT must be 'pretty' or 'json', got '{}'", other)),
        }
    }
}

/// How the shell renders election results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultsFormat {
    /// One `Candidate '<id>': <n> votes` line per candidate
    Text,
    /// A JSON election summary
    Json,
}

impl FromStr for ResultsFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(config_error!(
                "RESULTS_FORMAT must be 'text' or 'json', got '{}'",
                other
            )),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level applied to this crate when `RUST_LOG` is unset
    pub level: String,
    pub format: LogFormat,
}

/// Interactive shell configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    pub results_format: ResultsFormat,

    /// Print a greeting when the shell starts
    pub show_banner: bool,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub shell: ShellConfig,
}

impl Config {
    /// Load configuration from environment
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let logging = LoggingConfig {
            level: lookup("LOG_LEVEL").unwrap_or_else(|| "warn".to_string()),
            format: lookup("LOG_FORMAT")
                .map(|value| value.parse::<LogFormat>())
                .transpose()?
                .unwrap_or(LogFormat::Pretty),
        };

        let results_format = lookup("RESULTS_FORMAT")
            .map(|value| value.parse::<ResultsFormat>())
            .transpose()?
            .unwrap_or(ResultsFormat::Text);

        let show_banner = match lookup("SHOW_BANNER") {
            Some(value) => parse_bool(&value, "SHOW_BANNER")?,
            None => true,
        };

        Ok(Self {
            logging,
            shell: ShellConfig {
                results_format,
                show_banner,
            },
        })
    }

    /// Create configuration for testing
    pub fn for_testing() -> Self {
        Self {
            logging: LoggingConfig {
                level: "debug".to_string(),
                format: LogFormat::Pretty,
            },
            shell: ShellConfig {
                results_format: ResultsFormat::Text,
                show_banner: false,
            },
        }
    }
}

fn parse_bool(value: &str, name: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(config_error!("{} must be a boolean, got '{}'", name, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.shell.results_format, ResultsFormat::Text);
        assert!(config.shell.show_banner);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("LOG_LEVEL", "debug"),
            ("LOG_FORMAT", "JSON"),
            ("RESULTS_FORMAT", "json"),
            ("SHOW_BANNER", "off"),
        ])
        .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.shell.results_format, ResultsFormat::Json);
        assert!(!config.shell.show_banner);
    }

    #[test]
    fn test_invalid_values() {
        assert!(config_from(&[("LOG_FORMAT", "xml")]).is_err());
        assert!(config_from(&[("RESULTS_FORMAT", "csv")]).is_err());

        let err = config_from(&[("SHOW_BANNER", "maybe")]).unwrap_err();
        assert!(matches!(err, crate::Error::Config { .. }));
    }

    #[test]
    fn test_testing_config() {
        let config = Config::for_testing();
        assert!(!config.shell.show_banner);
        assert_eq!(config.logging.level, "debug");
    }
}
