// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Tripmate.
//!
//! Holds the error type, the domain types exchanged with the remote data
//! gateway, the adapter traits that storage backends implement, and the
//! nearest-landmark helper used by the map view.

pub mod error;
pub mod geo;
pub mod traits;
pub mod types;

pub use error::TripmateError;
pub use traits::{KeyValueStore, PluginAdapter};
pub use types::{
    AdapterType, Attraction, AuthState, Coordinate, CountryList, HealthStatus, Landmark, Language,
    Tour,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn server_error_display_includes_status_when_known() {
        let with = TripmateError::Server {
            status: Some(503),
            message: "unavailable".into(),
        };
        assert_eq!(with.to_string(), "server error (503): unavailable");

        let without = TripmateError::Server {
            status: None,
            message: "bad envelope".into(),
        };
        assert_eq!(without.to_string(), "server error: bad envelope");
    }

    #[test]
    fn only_network_and_server_errors_are_remote() {
        let network = TripmateError::Network {
            message: "timed out".into(),
            source: None,
        };
        assert!(network.is_remote());
        assert!(!TripmateError::persistence("disk full").is_remote());
        assert!(!TripmateError::Config("x".into()).is_remote());
    }

    #[test]
    fn auth_state_strings() {
        assert_eq!(AuthState::Unresolved.to_string(), "unresolved");
        assert_eq!(
            AuthState::from_str("authenticated").unwrap(),
            AuthState::Authenticated
        );
        assert!(!AuthState::Unresolved.is_resolved());
        assert!(AuthState::Unauthenticated.is_resolved());
        assert!(!AuthState::Unauthenticated.is_authenticated());
    }

    #[test]
    fn language_parses_case_insensitively() {
        assert_eq!(Language::from_str("Turkish").unwrap(), Language::Turkish);
        assert_eq!(Language::English.to_string(), "english");
        assert!(Language::from_str("klingon").is_err());
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn attraction_uses_type_on_the_wire() {
        let json = r#"{"id":1,"name":"Historic Center","type":"Historical","rating":4.8}"#;
        let parsed: Attraction = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.category, "Historical");
        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["type"], "Historical");
    }

    #[test]
    fn country_list_featured_is_optional() {
        let parsed: CountryList = serde_json::from_str(r#"{"countries":["Italy"]}"#).unwrap();
        assert_eq!(parsed.countries, vec!["Italy"]);
        assert!(parsed.featured.is_empty());
    }

    #[test]
    fn adapter_traits_are_object_safe() {
        fn _assert_kv(_: &dyn KeyValueStore) {}
        fn _assert_plugin(_: &dyn PluginAdapter) {}
    }
}
