//! Configuration module for lottoview.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: where the documents live, and how the dashboard shows them.

mod data_source_config;
mod display_config;

pub use data_source_config::{DataLocation, DataSourceEnvConfig};
pub use display_config::DisplayEnvConfig;

use anyhow::{Context, Result};

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub data: DataSourceEnvConfig,
    pub display: DisplayEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let data = DataSourceEnvConfig::from_env().context("Failed to load data source config")?;
        let display = DisplayEnvConfig::from_env().context("Failed to load display config")?;

        Ok(Self { data, display })
    }
}

/// Reads an optional numeric variable; present but malformed is an error.
pub(crate) fn parse_env<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Invalid value for {}: {:?}", key, raw)),
        _ => Ok(None),
    }
}
