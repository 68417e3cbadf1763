// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of [`KeyValueStore`].

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension};
use tokio::sync::OnceCell;
use tracing::debug;

use tripmate_config::StorageConfig;
use tripmate_core::{AdapterType, HealthStatus, KeyValueStore, PluginAdapter, TripmateError};

use crate::database::{map_tr_err, Database};

/// Key-value store backed by the `kv_entries` table.
///
/// The database is opened by [`SqliteKvStore::initialize`]; every other
/// operation fails with a persistence error until then.
pub struct SqliteKvStore {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteKvStore {
    /// Create a store for the configured path without opening it.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Create and initialize a store in one step.
    pub async fn open(config: StorageConfig) -> Result<Self, TripmateError> {
        let store = Self::new(config);
        store.initialize().await?;
        Ok(store)
    }

    /// Open the database and apply migrations. Fails if called twice.
    pub async fn initialize(&self) -> Result<(), TripmateError> {
        let db = Database::open(&self.config.database_path, self.config.wal_mode).await?;
        self.db
            .set(db)
            .map_err(|_| TripmateError::persistence("storage already initialized"))?;
        debug!(path = %self.config.database_path, "key-value store initialized");
        Ok(())
    }

    /// Checkpoint the WAL. The connection itself closes on drop.
    pub async fn close(&self) -> Result<(), TripmateError> {
        self.db()?.checkpoint().await?;
        debug!("WAL checkpoint complete");
        Ok(())
    }

    fn db(&self) -> Result<&Database, TripmateError> {
        self.db.get().ok_or_else(|| {
            TripmateError::persistence("storage not initialized -- call initialize() first")
        })
    }
}

#[async_trait]
impl PluginAdapter for SqliteKvStore {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, TripmateError> {
        self.db()?
            .connection()
            .call(|conn| conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0)))
            .await
            .map_err(map_tr_err)?;
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl KeyValueStore for SqliteKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, TripmateError> {
        let key = key.to_string();
        self.db()?
            .connection()
            .call(move |conn| {
                conn.query_row(
                    "SELECT value FROM kv_entries WHERE key = ?1",
                    params![key],
                    |row| row.get(0),
                )
                .optional()
            })
            .await
            .map_err(map_tr_err)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), TripmateError> {
        let key = key.to_string();
        let value = value.to_string();
        self.db()?
            .connection()
            .call(move |conn| -> Result<(), rusqlite::Error> {
                conn.execute(
                    "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
                     ON CONFLICT(key) DO UPDATE SET
                         value = excluded.value,
                         updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
                    params![key, value],
                )?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)
    }

    async fn remove(&self, key: &str) -> Result<(), TripmateError> {
        let key = key.to_string();
        self.db()?
            .connection()
            .call(move |conn| -> Result<(), rusqlite::Error> {
                conn.execute("DELETE FROM kv_entries WHERE key = ?1", params![key])?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)
    }
}
