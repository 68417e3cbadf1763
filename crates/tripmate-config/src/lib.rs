// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for Tripmate.
//!
//! TOML files in the XDG hierarchy are merged with `TRIPMATE_*` environment
//! overrides, checked with `deny_unknown_fields`, validated semantically, and
//! reported as miette diagnostics with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use tripmate_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("gateway: {}", config.gateway.base_url);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{GatewayConfig, StorageConfig, TripmateConfig};

/// Load configuration from the XDG hierarchy and validate it.
pub fn load_and_validate() -> Result<TripmateConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(
            err,
            &collect_toml_sources(),
        )),
    }
}

/// Load configuration from an inline TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<TripmateConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Load configuration from an explicit file (plus env overrides) and validate it.
pub fn load_and_validate_path(path: &std::path::Path) -> Result<TripmateConfig, Vec<ConfigError>> {
    match loader::load_config_from_path(path) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let mut sources = Vec::new();
            if let Ok(content) = std::fs::read_to_string(path) {
                sources.push((path.display().to_string(), content));
            }
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Read every config file that exists so diagnostics can show source spans.
fn collect_toml_sources() -> Vec<(String, String)> {
    let mut candidates = vec![std::path::PathBuf::from("/etc/tripmate/tripmate.toml")];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("tripmate/tripmate.toml"));
    }
    candidates.push(std::path::PathBuf::from("tripmate.toml"));

    candidates
        .into_iter()
        .filter_map(|path| {
            let content = std::fs::read_to_string(&path).ok()?;
            let display = if path.is_relative() {
                std::env::current_dir()
                    .map(|d| d.join(&path).display().to_string())
                    .unwrap_or_else(|_| path.display().to_string())
            } else {
                path.display().to_string()
            };
            Some((display, content))
        })
        .collect()
}
