//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any command runs.
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `OUTPUT_FORMAT` - Command output: `json` or `text` (default: `json`)
//!
//! ```bash
//! export RUST_LOG="debug"
//! export OUTPUT_FORMAT="text"
//! ```

use anyhow::{Context, Result};
use std::env::{self, VarError};

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: String,
    /// Format used to print command results to stdout.
    pub output_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset variables take their documented defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but is not valid unicode.
    pub fn from_env() -> Result<Self> {
        let log_level = var_or("RUST_LOG", "info")?;
        let log_format = var_or("LOG_FORMAT", "text")?;
        let output_format = var_or("OUTPUT_FORMAT", "json")?;

        Ok(Self {
            log_level,
            log_format,
            output_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `output_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.output_format != "text" && self.output_format != "json" {
            anyhow::bail!(
                "OUTPUT_FORMAT must be 'text' or 'json', got '{}'",
                self.output_format
            );
        }

        Ok(())
    }

    /// Returns whether command output should be JSON.
    pub fn is_json_output(&self) -> bool {
        self.output_format == "json"
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Log level: {}", self.log_level);
        tracing::debug!("  Log format: {}", self.log_format);
        tracing::debug!("  Output format: {}", self.output_format);
    }
}

/// Reads `name`, falling back to `default` only when it is unset.
fn var_or(name: &str, default: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) => Ok(value),
        Err(VarError::NotPresent) => Ok(default.to_string()),
        Err(e) => Err(e).with_context(|| format!("{name} is not valid unicode")),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn config() -> Config {
        Config {
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            output_format: "json".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.output_format = "yaml".to_string();
        assert!(config.validate().is_err());

        config.output_format = "text".to_string();
        assert!(config.validate().is_ok());
        assert!(!config.is_json_output());
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("RUST_LOG");
            env::remove_var("LOG_FORMAT");
            env::remove_var("OUTPUT_FORMAT");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "text");
        assert!(config.is_json_output());
    }

    #[test]
    #[serial]
    fn test_load_rejects_bad_output_format() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("OUTPUT_FORMAT", "xml");
        }

        let result = load_from_env();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("OUTPUT_FORMAT"));

        // Cleanup
        unsafe {
            env::remove_var("OUTPUT_FORMAT");
        }
    }

    #[test]
    #[serial]
    fn test_var_or_prefers_set_value() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "json");
        }

        assert_eq!(var_or("LOG_FORMAT", "text").unwrap(), "json");

        unsafe {
            env::remove_var("LOG_FORMAT");
        }

        assert_eq!(var_or("LOG_FORMAT", "text").unwrap(), "text");
    }
}
