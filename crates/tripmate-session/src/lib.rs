// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persisted client state for Tripmate.
//!
//! [`SessionStore`] owns the tri-state authentication flag backed by a stored
//! token. [`PreferenceStore`] holds the sound and language settings. Both sit
//! on any [`tripmate_core::KeyValueStore`].

pub mod preferences;
pub mod store;

pub use preferences::{PreferenceStore, Preferences};
pub use store::{SessionStore, TOKEN_KEY};
