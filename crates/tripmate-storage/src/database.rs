// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management: migrations, PRAGMA setup, WAL checkpointing.
//!
//! Every statement runs on tokio-rusqlite's single background thread, so the
//! [`Database`] handle is the only writer. Do not open a second connection
//! for writes.

use std::path::Path;
use std::time::Duration;

use tracing::debug;
use tripmate_core::TripmateError;

use crate::migrations;

/// Handle to the single SQLite connection.
pub struct Database {
    conn: tokio_rusqlite::Connection,
}

impl Database {
    /// Open (creating if needed) the database at `path` and migrate it.
    ///
    /// Parent directories are created. Migrations run on a short-lived
    /// blocking connection before the async connection is opened.
    pub async fn open(path: &str, wal_mode: bool) -> Result<Self, TripmateError> {
        let migrate_path = path.to_string();
        tokio::task::spawn_blocking(move || -> Result<(), TripmateError> {
            let file = Path::new(&migrate_path);
            if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| TripmateError::Persistence {
                    message: format!("failed to create {}: {e}", parent.display()),
                    source: Some(Box::new(e)),
                })?;
            }
            let mut conn =
                rusqlite::Connection::open(file).map_err(|e| TripmateError::Persistence {
                    message: format!("failed to open {migrate_path}: {e}"),
                    source: Some(Box::new(e)),
                })?;
            migrations::run_migrations(&mut conn)
        })
        .await
        .map_err(|e| TripmateError::Internal(format!("migration task failed: {e}")))??;

        let conn = tokio_rusqlite::Connection::open(path)
            .await
            .map_err(|e| TripmateError::Persistence {
                message: format!("failed to open {path}: {e}"),
                source: Some(Box::new(e)),
            })?;

        conn.call(move |conn| -> Result<(), rusqlite::Error> {
            conn.busy_timeout(Duration::from_secs(5))?;
            if wal_mode {
                let mode: String =
                    conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
                debug!(journal_mode = %mode, "journal mode set");
            }
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;

        debug!(path, wal_mode, "database opened");
        Ok(Self { conn })
    }

    /// The underlying async connection.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    /// Flush the WAL into the main database file.
    pub async fn checkpoint(&self) -> Result<(), TripmateError> {
        self.conn
            .call(|conn| -> Result<(), rusqlite::Error> {
                // Returns (busy, log frames, checkpointed frames).
                conn.query_row("PRAGMA wal_checkpoint(TRUNCATE)", [], |_| Ok(()))
            })
            .await
            .map_err(map_tr_err)
    }
}

/// Map a tokio-rusqlite error into a persistence error.
pub fn map_tr_err(e: tokio_rusqlite::Error<rusqlite::Error>) -> TripmateError {
    TripmateError::Persistence {
        message: format!("database error: {e}"),
        source: Some(Box::new(e)),
    }
}
