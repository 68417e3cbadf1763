// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User preferences: sound toggle and interface language.

use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;
use tracing::warn;
use tripmate_core::{KeyValueStore, Language, TripmateError};

pub const SOUND_KEY: &str = "soundToggle";
pub const LANGUAGE_KEY: &str = "appLanguage";

/// Snapshot of the persisted preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Preferences {
    pub sound_enabled: bool,
    pub language: Language,
}

/// Reads and writes [`Preferences`] through a key-value store.
///
/// Setters only update the cached snapshot after the write succeeds.
pub struct PreferenceStore {
    storage: Arc<dyn KeyValueStore>,
    current: Preferences,
}

impl PreferenceStore {
    /// A store holding defaults until [`PreferenceStore::load`] is called.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            current: Preferences::default(),
        }
    }

    pub fn current(&self) -> Preferences {
        self.current
    }

    /// Read both keys. Missing keys keep their defaults.
    pub async fn load(&mut self) -> Result<Preferences, TripmateError> {
        let mut loaded = Preferences::default();

        if let Some(raw) = self.storage.get(SOUND_KEY).await? {
            loaded.sound_enabled = raw == "true";
        }

        if let Some(raw) = self.storage.get(LANGUAGE_KEY).await? {
            match Language::from_str(&raw) {
                Ok(language) => loaded.language = language,
                Err(_) => warn!(value = %raw, "unknown stored language; using default"),
            }
        }

        self.current = loaded;
        Ok(loaded)
    }

    pub async fn set_sound_enabled(&mut self, enabled: bool) -> Result<(), TripmateError> {
        self.storage
            .set(SOUND_KEY, if enabled { "true" } else { "false" })
            .await?;
        self.current.sound_enabled = enabled;
        Ok(())
    }

    pub async fn set_language(&mut self, language: Language) -> Result<(), TripmateError> {
        self.storage
            .set(LANGUAGE_KEY, &language.to_string())
            .await?;
        self.current.language = language;
        Ok(())
    }
}
