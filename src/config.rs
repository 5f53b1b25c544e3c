// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the activity API
    pub api_base_url: String,
    /// Record limit per activity fetch
    pub fetch_limit: u32,
    /// Freshness window for cached paths, in seconds
    pub cache_ttl_secs: i64,
    /// Per-request HTTP timeout, in seconds
    pub request_timeout_secs: u64,
    /// Refresh interval for the monitor binary, in seconds
    pub poll_interval_secs: u64,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            fetch_limit: 100,
            cache_ttl_secs: 300,
            request_timeout_secs: 10,
            poll_interval_secs: 30,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            api_base_url: env::var("ACTIVITY_API_BASE_URL")
                .map_err(|_| ConfigError::Missing("ACTIVITY_API_BASE_URL"))?,
            fetch_limit: env::var("ACTIVITY_FETCH_LIMIT")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .unwrap_or(100),
            cache_ttl_secs: env::var("PATH_CACHE_TTL_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .unwrap_or(300),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            poll_interval_secs: env::var("POLL_INTERVAL_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
