// src/config/mod.rs
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Endpoint the probe targets when nothing overrides it.
pub const DEFAULT_TARGET_URL: &str = "http://localhost:8000/health";

/// Bound on the whole request, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    pub target_url: String,
    pub timeout_secs: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn target(&self) -> Result<Url> {
        Url::parse(&self.target_url).context("Failed to parse target URL")
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            bail!("Probe timeout must be greater than zero");
        }
        self.target()?;
        Ok(())
    }
}
