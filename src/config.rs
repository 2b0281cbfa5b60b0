//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub widget: WidgetConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Journal backend connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL, e.g. "http://127.0.0.1:8000"
    #[serde(default = "default_backend_url")]
    pub url: String,

    /// Request timeout in milliseconds. Unset waits indefinitely.
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
}

fn default_backend_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            request_timeout_ms: None,
        }
    }
}

impl BackendConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Captions and messages shown by the journal widget
#[derive(Debug, Clone, Deserialize)]
pub struct WidgetConfig {
    #[serde(default = "default_submit_label")]
    pub submit_label: String,

    #[serde(default = "default_busy_label")]
    pub busy_label: String,

    #[serde(default = "default_empty_entry_message")]
    pub empty_entry_message: String,

    #[serde(default = "default_backend_error_message")]
    pub backend_error_message: String,
}

fn default_submit_label() -> String {
    "Save Entry".to_string()
}

fn default_busy_label() -> String {
    "Saving...".to_string()
}

fn default_empty_entry_message() -> String {
    "Write something first.".to_string()
}

fn default_backend_error_message() -> String {
    "Backend error. Check server.".to_string()
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            submit_label: default_submit_label(),
            busy_label: default_busy_label(),
            empty_entry_message: default_empty_entry_message(),
            backend_error_message: default_backend_error_message(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("sentiment-journal").join("config.toml")),
            Some(PathBuf::from("./journal.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Backend overrides
        if let Ok(url) = std::env::var("JOURNAL_BACKEND_URL") {
            self.backend.url = url;
        }
        if let Ok(ms) = std::env::var("JOURNAL_REQUEST_TIMEOUT_MS") {
            if let Ok(ms) = ms.parse() {
                self.backend.request_timeout_ms = Some(ms);
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("JOURNAL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("JOURNAL_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Sentiment Journal Configuration
#
# Environment variables override these settings:
# - JOURNAL_BACKEND_URL
# - JOURNAL_REQUEST_TIMEOUT_MS
# - JOURNAL_LOG_LEVEL
# - JOURNAL_LOG_FORMAT

[backend]
# Journal backend base URL
url = "http://127.0.0.1:8000"

# Request timeout in milliseconds (unset = wait for the backend indefinitely)
# request_timeout_ms = 10000

[widget]
# Submit control caption when idle
submit_label = "Save Entry"

# Submit control caption while a request is in flight
busy_label = "Saving..."

# Warning shown when submitting an empty entry
empty_entry_message = "Write something first."

# Alert shown when the backend call fails for any reason
backend_error_message = "Backend error. Check server."

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path (default: stderr)
# file = "/tmp/sentiment-journal.log"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.backend.url, "http://127.0.0.1:8000");
        assert!(config.backend.request_timeout_ms.is_none());
        assert_eq!(config.widget.submit_label, "Save Entry");
        assert_eq!(config.widget.busy_label, "Saving...");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.backend.url, default_backend_url());
        assert!(config.backend.request_timeout_ms.is_none());
        assert_eq!(config.widget.empty_entry_message, "Write something first.");
        assert_eq!(
            config.widget.backend_error_message,
            "Backend error. Check server."
        );
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::parse(
            r#"
            [backend]
            url = "http://journal.local:9000"
            request_timeout_ms = 2500

            [widget]
            busy_label = "Analyzing..."
            "#,
        )
        .unwrap();

        assert_eq!(config.backend.url, "http://journal.local:9000");
        assert_eq!(config.backend.request_timeout_ms, Some(2500));
        assert_eq!(config.widget.busy_label, "Analyzing...");
        assert_eq!(config.widget.submit_label, "Save Entry");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"\nformat = \"json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[backend\nurl = ").unwrap();
        assert!(matches!(Config::load(&broken), Err(ConfigError::Parse { .. })));
    }
}
