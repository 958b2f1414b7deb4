// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sender configuration
//!
//! ```toml
//! [latency]
//! max_lag = "1ms"
//! seed = 42
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Upper bound on simulated send latency when none is configured
pub const DEFAULT_MAX_LAG: Duration = Duration::from_millis(1);

/// Errors that can occur while loading sender configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or schema error
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration for simulated senders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SenderConfig {
    pub latency: LatencyConfig,
}

/// Latency simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LatencyConfig {
    /// Exclusive upper bound of the per-send delay
    #[serde(with = "humantime_serde")]
    pub max_lag: Duration,
    /// Fixed RNG seed; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            max_lag: DEFAULT_MAX_LAG,
            seed: None,
        }
    }
}

impl SenderConfig {
    /// Parse configuration from TOML content
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            max_lag_us = config.latency.max_lag.as_micros() as u64,
            seeded = config.latency.seed.is_some(),
            "loaded sender config"
        );
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
