// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Tripmate integration tests.
//!
//! - [`MemoryKvStore`] - in-memory key-value store with failure injection
//! - [`fast_gateway_config`] - gateway settings with no fallback delay

pub mod memory_store;

pub use memory_store::MemoryKvStore;

use tripmate_config::GatewayConfig;

/// Gateway config pointed at `base_url` with a 2 s timeout and zero fallback delay.
pub fn fast_gateway_config(base_url: &str) -> GatewayConfig {
    GatewayConfig {
        base_url: base_url.to_string(),
        force_mock: false,
        timeout_secs: 2,
        fallback_delay_min_ms: 0,
        fallback_delay_max_ms: 0,
    }
}
