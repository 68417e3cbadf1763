// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./tripmate.toml` > `~/.config/tripmate/tripmate.toml` >
//! `/etc/tripmate/tripmate.toml`, with `TRIPMATE_` environment overrides on top.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::TripmateConfig;

/// Load configuration from the XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/tripmate/tripmate.toml`
/// 3. `~/.config/tripmate/tripmate.toml`
/// 4. `./tripmate.toml`
/// 5. `TRIPMATE_*` environment variables
pub fn load_config() -> Result<TripmateConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<TripmateConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TripmateConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<TripmateConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TripmateConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(TripmateConfig::default()))
        .merge(Toml::file("/etc/tripmate/tripmate.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("tripmate/tripmate.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("tripmate.toml"))
        .merge(env_provider())
}

/// Environment provider with explicit section mapping.
///
/// `Env::split("_")` would turn `TRIPMATE_GATEWAY_BASE_URL` into
/// `gateway.base.url`; only the first segment names the section.
fn env_provider() -> Env {
    Env::prefixed("TRIPMATE_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("app_", "app.", 1)
            .replacen("gateway_", "gateway.", 1)
            .replacen("storage_", "storage.", 1);
        mapped.into()
    })
}
