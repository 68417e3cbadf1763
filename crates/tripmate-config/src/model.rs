// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key fails
//! at startup instead of being silently ignored.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level Tripmate configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TripmateConfig {
    /// Application identity and logging.
    #[serde(default)]
    pub app: AppConfig,

    /// Remote data gateway settings.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Local key-value storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Application identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Display name used in log lines.
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_app_name() -> String {
    "tripmate".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Remote data gateway configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Base URL that endpoint paths are appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Serve fixture data without touching the network.
    #[serde(default)]
    pub force_mock: bool,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Lower bound of the artificial delay before fixture data is returned.
    #[serde(default = "default_fallback_delay_min_ms")]
    pub fallback_delay_min_ms: u64,

    /// Upper bound (inclusive) of the artificial fixture delay.
    #[serde(default = "default_fallback_delay_max_ms")]
    pub fallback_delay_max_ms: u64,
}

impl GatewayConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            force_mock: false,
            timeout_secs: default_timeout_secs(),
            fallback_delay_min_ms: default_fallback_delay_min_ms(),
            fallback_delay_max_ms: default_fallback_delay_max_ms(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3019".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_fallback_delay_min_ms() -> u64 {
    500
}

fn default_fallback_delay_max_ms() -> u64 {
    1500
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite file holding the token and preferences.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL journal mode.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|d| d.join("tripmate").join("tripmate.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("tripmate.db"))
        .display()
        .to_string()
}

fn default_wal_mode() -> bool {
    true
}
