// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Embedded schema migrations using refinery.
//!
//! SQL files under `migrations/` are compiled into the binary and applied on
//! every open; refinery records applied versions in
//! `refinery_schema_history`.

use tripmate_core::TripmateError;

mod embedded {
    use refinery::embed_migrations;
    embed_migrations!("migrations");
}

/// Apply all pending migrations to a synchronous connection.
pub fn run_migrations(conn: &mut rusqlite::Connection) -> Result<(), TripmateError> {
    let report = embedded::migrations::runner()
        .run(conn)
        .map_err(|e| TripmateError::Persistence {
            message: format!("schema migration failed: {e}"),
            source: Some(Box::new(e)),
        })?;
    tracing::debug!(
        applied = report.applied_migrations().len(),
        "schema migrations complete"
    );
    Ok(())
}
