// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key-value persistence used for the auth token and preferences.

use async_trait::async_trait;

use crate::error::TripmateError;
use crate::traits::adapter::PluginAdapter;

/// An async string-to-string store.
///
/// Every failure is reported as [`TripmateError::Persistence`]. Implementations
/// assume a single logical writer.
#[async_trait]
pub trait KeyValueStore: PluginAdapter {
    /// Reads a value. Absent keys are `Ok(None)`.
    async fn get(&self, key: &str) -> Result<Option<String>, TripmateError>;

    /// Inserts or replaces a value.
    async fn set(&self, key: &str, value: &str) -> Result<(), TripmateError>;

    /// Deletes a value. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<(), TripmateError>;
}
