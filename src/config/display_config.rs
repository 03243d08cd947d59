//! Display configuration parsing from environment variables.
//!
//! Set count, reveal timings, hidden panels and the UI font.

use super::parse_env;
use crate::interfaces::view_models::MountPoint;
use anyhow::Result;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_SET_COUNT: usize = 10;
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 1500;
pub const DEFAULT_LOADER_MIN_MS: u64 = 500;

/// Display environment configuration
#[derive(Debug, Clone)]
pub struct DisplayEnvConfig {
    pub default_set_count: usize,
    /// Minimum time between the initial request and the first render.
    pub reveal_delay: Duration,
    /// Minimum time the loading overlay stays up once shown.
    pub loader_min_display: Duration,
    pub hidden_panels: Vec<MountPoint>,
    pub font_path: Option<PathBuf>,
}

impl Default for DisplayEnvConfig {
    fn default() -> Self {
        Self {
            default_set_count: DEFAULT_SET_COUNT,
            reveal_delay: Duration::from_millis(DEFAULT_REVEAL_DELAY_MS),
            loader_min_display: Duration::from_millis(DEFAULT_LOADER_MIN_MS),
            hidden_panels: Vec::new(),
            font_path: None,
        }
    }
}

impl DisplayEnvConfig {
    pub fn from_env() -> Result<Self> {
        let default_set_count = parse_env::<usize>("LOTTO_SET_COUNT")?
            .unwrap_or(DEFAULT_SET_COUNT)
            .max(1);

        let reveal_delay = Duration::from_millis(
            parse_env::<u64>("LOTTO_REVEAL_DELAY_MS")?.unwrap_or(DEFAULT_REVEAL_DELAY_MS),
        );
        let loader_min_display = Duration::from_millis(
            parse_env::<u64>("LOTTO_LOADER_MIN_MS")?.unwrap_or(DEFAULT_LOADER_MIN_MS),
        );

        let hidden_panels = env::var("LOTTO_HIDDEN_PANELS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(MountPoint::from_str)
            .collect::<Result<Vec<_>>>()?;

        let font_path = env::var("LOTTO_FONT_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            default_set_count,
            reveal_delay,
            loader_min_display,
            hidden_panels,
            font_path,
        })
    }

    /// Same settings without the artificial delays (headless rendering, tests).
    pub fn immediate(mut self) -> Self {
        self.reveal_delay = Duration::ZERO;
        self.loader_min_display = Duration::ZERO;
        self
    }
}
