//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is read first if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default number of records per batch when iterating the book.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Configuration for the address book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Records per batch for `AddressBook::batches` (default: 10)
    pub batch_size: usize,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_BATCH_SIZE`: Records per batch, greater than zero (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let batch_size = Self::parse_env_usize("ADDRESS_BOOK_BATCH_SIZE", DEFAULT_BATCH_SIZE)?;
        if batch_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_BATCH_SIZE".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            batch_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            batch_size: DEFAULT_BATCH_SIZE,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.batch_size, 10);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_BATCH_SIZE", "3");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.batch_size, 3);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_from_env_zero_batch_size() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_BATCH_SIZE", "0");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "ADDRESS_BOOK_BATCH_SIZE");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_non_numeric_batch_size() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_BATCH_SIZE", "lots");

        let result = Config::from_env();
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_parse_env_usize() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_USIZE", "42");

        let result = Config::parse_env_usize("TEST_USIZE", 10);
        assert_eq!(result.unwrap(), 42);

        let result = Config::parse_env_usize("NONEXISTENT_USIZE", 10);
        assert_eq!(result.unwrap(), 10);
    }
}
