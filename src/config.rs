//! Configuration management for the MEDDoC directory backend.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file picked up via `dotenvy`.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the hosted-platform access layer.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hosted platform (record store + object storage)
    pub api_base_url: String,

    /// Platform API key, attached to every request
    pub api_key: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Default page size for list endpoints (default: 50)
    pub default_page_size: usize,

    /// Storage bucket holding the documents library (default: "documents")
    pub storage_bucket: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `MEDDOC_API_BASE_URL`: Base URL of the hosted platform
    /// - `MEDDOC_API_KEY`: API key for authentication
    ///
    /// Optional environment variables:
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `DEFAULT_PAGE_SIZE`: List page size (default: 50)
    /// - `MEDDOC_STORAGE_BUCKET`: Documents bucket (default: "documents")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let api_base_url = env::var("MEDDOC_API_BASE_URL")
            .map_err(|_| ConfigError::MissingVar("MEDDOC_API_BASE_URL".to_string()))?;

        let api_key = env::var("MEDDOC_API_KEY")
            .map_err(|_| ConfigError::MissingVar("MEDDOC_API_KEY".to_string()))?;

        // Validate API URL format
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "MEDDOC_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        // Validate API key is not empty
        if api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "MEDDOC_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let default_page_size = Self::parse_env_usize("DEFAULT_PAGE_SIZE", 50)?;

        if default_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "DEFAULT_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let storage_bucket =
            env::var("MEDDOC_STORAGE_BUCKET").unwrap_or_else(|_| "documents".to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            api_base_url,
            api_key,
            request_timeout,
            default_page_size,
            storage_bucket,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
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
            api_base_url: String::new(),
            api_key: String::new(),
            request_timeout: 10,
            default_page_size: 50,
            storage_bucket: "documents".to_string(),
            log_level: "error".to_string(),
        }
    }
}
