// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory [`KeyValueStore`] for deterministic tests.
//!
//! Reads and writes can be switched to fail independently, which is how the
//! "write failed, state unchanged" paths are exercised without a real disk.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use tripmate_core::{AdapterType, HealthStatus, KeyValueStore, PluginAdapter, TripmateError};

/// A `HashMap`-backed store. Clones share the same map and switches.
#[derive(Clone, Default)]
pub struct MemoryKvStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
    writes: Arc<AtomicUsize>,
    read_delay_ms: Arc<AtomicU64>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the given entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(Mutex::new(map)),
            ..Self::default()
        }
    }

    /// Make every subsequent `get` fail.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `set`/`remove` fail.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Hold every `get` result for `delay` before returning it.
    ///
    /// The value is captured before the pause, so writes landing in the
    /// meantime are not observed by that read.
    pub fn read_delay(&self, delay: Duration) {
        let ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self.read_delay_ms.store(ms, Ordering::SeqCst);
    }

    /// Number of successful writes (sets and removes).
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Direct read of the map, bypassing failure switches.
    pub async fn peek(&self, key: &str) -> Option<String> {
        self.entries.lock().await.get(key).cloned()
    }

    fn check_write(&self) -> Result<(), TripmateError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(TripmateError::persistence("injected write failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl PluginAdapter for MemoryKvStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, TripmateError> {
        if self.fail_reads.load(Ordering::SeqCst) || self.fail_writes.load(Ordering::SeqCst) {
            return Ok(HealthStatus::Degraded("failure injection active".into()));
        }
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl KeyValueStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, TripmateError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(TripmateError::persistence("injected read failure"));
        }
        let value = self.entries.lock().await.get(key).cloned();
        let delay = self.read_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), TripmateError> {
        self.check_write()?;
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), TripmateError> {
        self.check_write()?;
        self.entries.lock().await.remove(key);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
