//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from
//! environment variables, with `.env` file support.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the contact-book CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON contact file (default: "address_book.json")
    pub book_file: PathBuf,

    /// Records per page for `show all` (default: 3, must be >= 1)
    pub page_size: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BOOK_FILE`: path of the contact file (default: "address_book.json")
    /// - `BOOK_PAGE_SIZE`: records per page (default: 3)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let book_file =
            PathBuf::from(env::var("BOOK_FILE").unwrap_or_else(|_| "address_book.json".to_string()));

        let page_size = Self::parse_env_usize("BOOK_PAGE_SIZE", 3)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "BOOK_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_file,
            page_size,
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
            book_file: PathBuf::from("address_book.json"),
            page_size: 3,
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
        assert_eq!(config.book_file, PathBuf::from("address_book.json"));
        assert_eq!(config.page_size, 3);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        env::remove_var("BOOK_FILE");
        env::remove_var("BOOK_PAGE_SIZE");
        env::remove_var("LOG_LEVEL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.book_file, PathBuf::from("address_book.json"));
        assert_eq!(config.page_size, 3);
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        let mut guard = EnvGuard::new();
        guard.set("BOOK_FILE", "/tmp/contacts.json");
        guard.set("BOOK_PAGE_SIZE", "5");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.book_file, PathBuf::from("/tmp/contacts.json"));
        assert_eq!(config.page_size, 5);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_rejects_zero_page_size() {
        let mut guard = EnvGuard::new();
        guard.set("BOOK_PAGE_SIZE", "0");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "BOOK_PAGE_SIZE");
        }
    }

    #[test]
    #[serial]
    fn test_config_rejects_non_numeric_page_size() {
        let mut guard = EnvGuard::new();
        guard.set("BOOK_PAGE_SIZE", "lots");

        assert!(Config::from_env().is_err());
    }
}
