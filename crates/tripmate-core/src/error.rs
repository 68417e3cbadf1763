// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for Tripmate.

use thiserror::Error;

/// The primary error type shared by every Tripmate crate.
///
/// `Network` and `Server` are produced by the remote data gateway's live path
/// and absorbed by its fallback. `Persistence` is always surfaced to callers.
#[derive(Debug, Error)]
pub enum TripmateError {
    /// Configuration errors (invalid TOML, bad values, missing settings).
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport failure: timeout, refused connection, DNS, TLS.
    #[error("network error: {message}")]
    Network {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The server answered, but not with usable data (non-2xx or malformed body).
    #[error("server error{}: {message}", format_status(.status))]
    Server { status: Option<u16>, message: String },

    /// Key-value storage read or write failure.
    #[error("persistence error: {message}")]
    Persistence {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Caller supplied a value the operation cannot accept.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

fn format_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" ({code})"),
        None => String::new(),
    }
}

impl TripmateError {
    /// Shorthand for a persistence error without an underlying cause.
    pub fn persistence(message: impl Into<String>) -> Self {
        TripmateError::Persistence {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error came from the transport or the server.
    ///
    /// These are the errors the gateway converts into fixture data.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            TripmateError::Network { .. } | TripmateError::Server { .. }
        )
    }
}
