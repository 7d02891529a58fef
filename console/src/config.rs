//! Console configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Simulated router latency for swaps, in milliseconds
    pub swap_delay_ms: u64,

    /// Simulated reserve-manager latency for mint/redeem, in milliseconds
    pub reserve_delay_ms: u64,

    /// Simulated latency per attestation signing step, in milliseconds
    pub sign_step_delay_ms: u64,

    /// Simulated shadow-projection latency, in milliseconds
    pub projection_delay_ms: u64,

    /// Interval between background protocol-pulse events, in seconds
    pub feed_interval_secs: u64,

    /// Interval between latency gauge updates, in seconds
    pub latency_interval_secs: u64,
}

impl Config {
    /// Load configuration from TOML file
    pub fn load() -> Result<Self> {
        let config_path =
            std::env::var("SOVR_CONFIG").unwrap_or_else(|_| "sovr-console.toml".to_string());

        let config_str = std::fs::read_to_string(&config_path)
            .context(format!("Failed to read config file: {}", config_path))?;

        let config: Config =
            toml::from_str(&config_str).context("Failed to parse config TOML")?;

        Ok(config)
    }

    /// Default configuration matching the console's stock timings
    pub fn default_local() -> Self {
        Self {
            swap_delay_ms: 2400,
            reserve_delay_ms: 1500,
            sign_step_delay_ms: 1200,
            projection_delay_ms: 2500,
            feed_interval_secs: 12,
            latency_interval_secs: 3,
        }
    }

    /// Write default config to file
    pub fn write_default(path: &str) -> Result<()> {
        let config = Self::default_local();
        let toml_str =
            toml::to_string_pretty(&config).context("Failed to serialize config")?;

        std::fs::write(path, toml_str).context(format!("Failed to write config to {}", path))?;

        log::info!("Created default config at {}", path);
        Ok(())
    }
}
