use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

pub const ENV_CAROUSEL_INTERVAL_MS: &str = "SHOWCASE_CAROUSEL_INTERVAL_MS";
pub const ENV_PAGE_SIZE: &str = "SHOWCASE_PAGE_SIZE";

/// Site settings, loadable from a JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Hero carousel auto-advance period
    pub carousel_interval_ms: u64,
    /// Listings per result page
    pub page_size: usize,
    /// Path of the property listing page
    pub listing_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            carousel_interval_ms: 3000,
            page_size: 9,
            listing_path: "/properties".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, overlaid by `path` if given, then by environment variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                Self::from_json(&raw)
                    .with_context(|| format!("Invalid config {}", path.display()))?
            }
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Failed to parse config JSON")
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(raw) = lookup(ENV_CAROUSEL_INTERVAL_MS) {
            self.carousel_interval_ms = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be an integer", ENV_CAROUSEL_INTERVAL_MS))?;
        }
        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            self.page_size = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be an integer", ENV_PAGE_SIZE))?;
        }
        Ok(())
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }
}
