//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is loaded first when present; dotenvy never writes to stdout, which
//! MCP uses for communication.

use crate::error::{ConfigError, ConfigResult};
use crate::persistence::DEFAULT_STORAGE_KEY;
use crate::store::IndexMode;
use std::env;
use std::path::PathBuf;

/// Default location of the contact file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "contacts.json";

/// Configuration for the contact book server.
#[derive(Debug, Clone)]
pub struct Config {
    /// File backing the key-value store (default: "contacts.json")
    pub data_file: PathBuf,

    /// Key the contact list is stored under (default: "contacts")
    pub storage_key: String,

    /// How row indices are mapped to stored contacts (default: view)
    pub index_mode: IndexMode,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `CONTACT_BOOK_DATA_FILE`: path of the contact file (default: "contacts.json")
    /// - `CONTACT_BOOK_STORAGE_KEY`: storage key (default: "contacts")
    /// - `CONTACT_BOOK_INDEX_MODE`: "view" or "storage" (default: "view")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let data_file = Self::parse_env_non_blank("CONTACT_BOOK_DATA_FILE", DEFAULT_DATA_FILE)?;
        let storage_key =
            Self::parse_env_non_blank("CONTACT_BOOK_STORAGE_KEY", DEFAULT_STORAGE_KEY)?;
        let index_mode = Self::parse_env_index_mode("CONTACT_BOOK_INDEX_MODE")?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            data_file: PathBuf::from(data_file),
            storage_key,
            index_mode,
            log_level,
        })
    }

    /// Read a string variable that must not be blank when set.
    fn parse_env_non_blank(var_name: &str, default: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(val),
            Err(_) => Ok(default.to_string()),
        }
    }

    fn parse_env_index_mode(var_name: &str) -> ConfigResult<IndexMode> {
        match env::var(var_name) {
            Ok(val) => val
                .parse::<IndexMode>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason,
                }),
            Err(_) => Ok(IndexMode::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            index_mode: IndexMode::default(),
            log_level: "error".to_string(),
        }
    }
}
