//! Location of the exported JSON documents.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Debug, Clone, PartialEq)]
pub enum DataLocation {
    /// Static web directory, e.g. `https://example.org/data/`
    Http(Url),
    /// Local export directory
    Directory(PathBuf),
}

/// Data source environment configuration
#[derive(Debug, Clone)]
pub struct DataSourceEnvConfig {
    pub location: DataLocation,
}

impl DataSourceEnvConfig {
    /// `LOTTO_DATA_URL` wins over `LOTTO_DATA_DIR`.
    pub fn from_env() -> Result<Self> {
        let location = match env::var("LOTTO_DATA_URL") {
            Ok(raw) if !raw.trim().is_empty() => DataLocation::Http(
                Url::parse(raw.trim())
                    .with_context(|| format!("Invalid LOTTO_DATA_URL: {}", raw))?,
            ),
            _ => DataLocation::Directory(PathBuf::from(
                env::var("LOTTO_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string()),
            )),
        };

        Ok(Self { location })
    }
}
