// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks rules serde cannot express. All failures are collected rather than
//! stopping at the first one.

use crate::diagnostic::ConfigError;
use crate::model::TripmateConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
pub fn validate_config(config: &TripmateConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.app.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::validation(format!(
            "app.log_level `{}` is not one of {}",
            config.app.log_level,
            LOG_LEVELS.join(", ")
        )));
    }

    let gateway = &config.gateway;
    match url::Url::parse(gateway.base_url.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ConfigError::validation(format!(
            "gateway.base_url must use http or https, got scheme `{}`",
            url.scheme()
        ))),
        Err(e) => errors.push(ConfigError::validation(format!(
            "gateway.base_url `{}` is not a valid URL: {e}",
            gateway.base_url
        ))),
    }

    if gateway.timeout_secs == 0 {
        errors.push(ConfigError::validation(
            "gateway.timeout_secs must be greater than zero",
        ));
    }

    if gateway.fallback_delay_min_ms > gateway.fallback_delay_max_ms {
        errors.push(ConfigError::validation(format!(
            "gateway.fallback_delay_min_ms ({}) must not exceed gateway.fallback_delay_max_ms ({})",
            gateway.fallback_delay_min_ms, gateway.fallback_delay_max_ms
        )));
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::validation(
            "storage.database_path must not be empty",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
