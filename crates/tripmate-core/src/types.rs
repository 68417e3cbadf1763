// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the gateway, session, and CLI crates.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the kind of adapter behind a trait object.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Storage,
    Gateway,
}

/// Tri-state authentication flag.
///
/// `Unresolved` holds from process start until the persisted token has been
/// read once. Views treat it as "still loading".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AuthState {
    Unresolved,
    Authenticated,
    Unauthenticated,
}

impl AuthState {
    /// Returns true once the initial storage read has completed.
    pub fn is_resolved(self) -> bool {
        self != AuthState::Unresolved
    }

    /// Returns true only for [`AuthState::Authenticated`].
    pub fn is_authenticated(self) -> bool {
        self == AuthState::Authenticated
    }
}

/// Country listing as served by the countries endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryList {
    pub countries: Vec<String>,
    #[serde(default)]
    pub featured: Vec<String>,
}

/// A guided tour offered in a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    pub id: i64,
    pub name: String,
    /// Display string, e.g. "3 hours".
    pub duration: String,
    /// Display string, e.g. "$25".
    pub price: String,
}

/// A point of interest with a visitor rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    /// Rating on a 0-5 scale.
    pub rating: f64,
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A named map marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub name: String,
    pub category: String,
    pub position: Coordinate,
}

/// Interface language persisted in preferences.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Turkish,
}
