// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence for Tripmate.
//!
//! A single-writer key-value table holds the auth token and user preferences.
//! The schema is managed by embedded refinery migrations.

pub mod database;
pub mod kv;
pub mod migrations;

pub use database::Database;
pub use kv::SqliteKvStore;
