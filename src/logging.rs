//! Logging System
//!
//! Structured logging via the `tracing` crate. Level, format and output
//! destination come from [`LoggingConfig`]; per-module overrides ride on
//! the same env-filter syntax tracing uses everywhere else.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether logging is enabled (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path when output is file; None means use the runtime default
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Resolve the log file path with precedence: `ZONEFS_LOG_FILE` env, config
/// file setting, platform default.
pub fn resolve_log_file_path(config_file: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    if let Ok(env_path) = std::env::var("ZONEFS_LOG_FILE") {
        if !env_path.is_empty() {
            return Ok(PathBuf::from(env_path));
        }
    }
    if let Some(p) = config_file {
        if !p.as_os_str().is_empty() {
            return Ok(p);
        }
    }
    default_log_file_path()
}

fn default_log_file_path() -> Result<PathBuf, ConfigError> {
    let project_dirs = directories::ProjectDirs::from("", "zonefs", "zonefs").ok_or_else(|| {
        ConfigError::Invalid("could not determine platform state directory for log file".to_string())
    })?;
    let state_dir = project_dirs.state_dir().ok_or_else(|| {
        ConfigError::Invalid("platform state directory not available for log file".to_string())
    })?;
    Ok(state_dir.join("zonefs.log"))
}

const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Install the global tracing subscriber described by `config`
///
/// A disabled config is a no-op. Installing twice fails with
/// [`ConfigError::Logging`], as does an unwritable log file.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigError> {
    if !config.enabled {
        return Ok(());
    }

    let level = config.level.to_lowercase();
    if !LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "invalid log level: {}",
            config.level
        )));
    }

    let mut directives = level;
    for (module, level) in &config.modules {
        directives.push_str(&format!(",{}={}", module, level));
    }
    let filter = EnvFilter::try_new(&directives)
        .map_err(|e| ConfigError::Invalid(format!("invalid log directives: {}", e)))?;

    let writer = match config.output.as_str() {
        "stdout" => BoxMakeWriter::new(std::io::stdout),
        "stderr" => BoxMakeWriter::new(std::io::stderr),
        "file" => {
            let path = resolve_log_file_path(config.file.clone())?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ConfigError::Invalid(format!("failed to create log directory: {}", e))
                })?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| {
                    ConfigError::Invalid(format!("failed to open log file {:?}: {}", path, e))
                })?;
            BoxMakeWriter::new(std::sync::Mutex::new(file))
        }
        other => {
            return Err(ConfigError::Invalid(format!(
                "unknown log output: {}",
                other
            )))
        }
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format.as_str() {
        "json" => registry
            .with(
                fmt::layer()
                    .json()
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init(),
        "text" => registry
            .with(
                fmt::layer()
                    .with_ansi(config.color)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init(),
        other => {
            return Err(ConfigError::Invalid(format!(
                "unknown log format: {}",
                other
            )))
        }
    };
    result.map_err(|e| ConfigError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = LoggingConfig::default();
        assert!(config.enabled);
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "text");
        assert_eq!(config.output, "stderr");
        assert!(config.file.is_none());
        assert!(config.modules.is_empty());
    }

    #[test]
    fn config_file_path_wins_without_env() {
        // Keep the env override out of the way for this test.
        std::env::remove_var("ZONEFS_LOG_FILE");
        let path = resolve_log_file_path(Some(PathBuf::from("/tmp/custom.log"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom.log"));
    }

    #[test]
    fn invalid_level_is_rejected() {
        let config = LoggingConfig {
            level: "shouting".to_string(),
            ..LoggingConfig::default()
        };
        assert!(matches!(
            init_logging(&config),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn disabled_config_is_a_no_op() {
        let config = LoggingConfig {
            enabled: false,
            ..LoggingConfig::default()
        };
        assert!(init_logging(&config).is_ok());
    }
}
