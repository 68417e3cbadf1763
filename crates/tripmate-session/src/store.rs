// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session store: the authentication flag and its persisted token.
//!
//! States move `Unresolved -> {Authenticated, Unauthenticated}` once, then
//! toggle via `login`/`logout` for the rest of the process. The in-memory
//! state changes only after the storage write it depends on has succeeded.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};
use tripmate_core::{AuthState, KeyValueStore, TripmateError};

/// Storage key holding the opaque auth token.
pub const TOKEN_KEY: &str = "auth_token";

/// Owns the authentication state and broadcasts every transition.
///
/// Share it as `Arc<SessionStore>`; views call [`SessionStore::subscribe`]
/// to re-render on change. Assumes a single writer: concurrent
/// `login`/`logout` calls are not coordinated.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    state: watch::Sender<AuthState>,
}

impl SessionStore {
    /// Create a store in the `Unresolved` state. Storage is not read yet.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let (state, _) = watch::channel(AuthState::Unresolved);
        Self { storage, state }
    }

    /// Current state.
    pub fn state(&self) -> AuthState {
        *self.state.borrow()
    }

    /// Receiver that observes every subsequent transition.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Read the persisted token and leave `Unresolved`.
    ///
    /// A read error resolves to `Unauthenticated`. Once resolved, later calls
    /// return the current state without reading storage. A `login` or
    /// `logout` that completes while the read is pending takes precedence
    /// over the read's result.
    pub async fn resolve(&self) -> AuthState {
        let current = self.state();
        if current.is_resolved() {
            debug!(state = %current, "session already resolved");
            return current;
        }

        let resolved = match self.storage.get(TOKEN_KEY).await {
            Ok(Some(token)) if !token.is_empty() => AuthState::Authenticated,
            Ok(_) => AuthState::Unauthenticated,
            Err(e) => {
                warn!(error = %e, "failed to read auth token; treating session as signed out");
                AuthState::Unauthenticated
            }
        };

        let applied = self.state.send_if_modified(|state| {
            if *state == AuthState::Unresolved {
                *state = resolved;
                true
            } else {
                false
            }
        });
        let current = self.state();
        if applied {
            debug!(from = %AuthState::Unresolved, to = %current, "session state changed");
        } else {
            debug!(state = %current, "session changed during resolve; keeping it");
        }
        current
    }

    /// Persist `token` and become `Authenticated`.
    ///
    /// On a storage failure the error is returned and the state is unchanged.
    pub async fn login(&self, token: &str) -> Result<(), TripmateError> {
        if token.is_empty() {
            return Err(TripmateError::InvalidInput(
                "auth token must not be empty".into(),
            ));
        }
        self.storage.set(TOKEN_KEY, token).await.inspect_err(|e| {
            warn!(error = %e, "failed to store auth token");
        })?;
        self.transition(AuthState::Authenticated);
        info!("signed in");
        Ok(())
    }

    /// Delete the persisted token and become `Unauthenticated`.
    ///
    /// Same failure contract as [`SessionStore::login`].
    pub async fn logout(&self) -> Result<(), TripmateError> {
        self.storage.remove(TOKEN_KEY).await.inspect_err(|e| {
            warn!(error = %e, "failed to remove auth token");
        })?;
        self.transition(AuthState::Unauthenticated);
        info!("signed out");
        Ok(())
    }

    /// The persisted token, for attaching to authenticated requests.
    pub async fn token(&self) -> Result<Option<String>, TripmateError> {
        Ok(self
            .storage
            .get(TOKEN_KEY)
            .await?
            .filter(|token| !token.is_empty()))
    }

    fn transition(&self, next: AuthState) {
        let previous = self.state.send_replace(next);
        debug!(from = %previous, to = %next, "session state changed");
    }
}
