// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions.
//!
//! Traits use `#[async_trait]` so they can be held as `Arc<dyn ...>`.

pub mod adapter;
pub mod storage;

pub use adapter::PluginAdapter;
pub use storage::KeyValueStore;
