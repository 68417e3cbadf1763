// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response body decoding.
//!
//! The backend answers either with the bare payload or with an envelope of
//! the form `{"success": bool, "data": ..., "error": "..."}`. A JSON object
//! is treated as an envelope only when it carries a boolean `success` field.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tripmate_core::{Coordinate, TripmateError};

/// Body of the coordinates endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinatesResponse {
    #[serde(default)]
    pub coordinates: Vec<CoordinateEntry>,
}

/// One geocoded place. `x` is latitude, `y` is longitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateEntry {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl CoordinatesResponse {
    /// Position of the first entry, if any.
    pub fn first(&self) -> Option<Coordinate> {
        self.coordinates.first().map(|e| Coordinate::new(e.x, e.y))
    }
}

/// Decode a response body into `T`, unwrapping an envelope if present.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, TripmateError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| malformed(format!(
        "response body is not valid JSON: {e}"
    )))?;
    let payload = unwrap_envelope(value)?;
    serde_json::from_value(payload)
        .map_err(|e| malformed(format!("response body has an unexpected shape: {e}")))
}

fn unwrap_envelope(value: Value) -> Result<Value, TripmateError> {
    let mut map = match value {
        Value::Object(map) if matches!(map.get("success"), Some(Value::Bool(_))) => map,
        other => return Ok(other),
    };

    if map.get("success") != Some(&Value::Bool(true)) {
        let reason = map
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("no reason given");
        return Err(malformed(format!("server reported failure: {reason}")));
    }

    map.remove("data")
        .ok_or_else(|| malformed("successful envelope has no data field".to_string()))
}

fn malformed(message: String) -> TripmateError {
    TripmateError::Server {
        status: None,
        message,
    }
}

#[cfg(test)]
mod tests {
    use tripmate_core::Tour;

    use super::*;

    #[test]
    fn bare_payload_decodes() {
        let cities: Vec<String> = decode(br#"["Rome","Milan"]"#).unwrap();
        assert_eq!(cities, vec!["Rome", "Milan"]);
    }

    #[test]
    fn successful_envelope_yields_data() {
        let body = br#"{"success":true,"data":[{"id":7,"name":"Night Walk","duration":"1 hour","price":"$10"}]}"#;
        let tours: Vec<Tour> = decode(body).unwrap();
        assert_eq!(tours.len(), 1);
        assert_eq!(tours[0].id, 7);
    }

    #[test]
    fn failed_envelope_is_a_server_error() {
        let body = br#"{"success":false,"error":"city not found"}"#;
        let err = decode::<Vec<Tour>>(body).unwrap_err();
        assert!(matches!(err, TripmateError::Server { status: None, .. }));
        assert!(err.to_string().contains("city not found"));
    }

    #[test]
    fn envelope_without_data_is_rejected() {
        let err = decode::<Vec<String>>(br#"{"success":true}"#).unwrap_err();
        assert!(err.to_string().contains("no data field"));
    }

    #[test]
    fn non_boolean_success_is_not_an_envelope() {
        // Decoded as the payload itself, which then fails the shape check.
        let err = decode::<Vec<String>>(br#"{"success":"yes","data":[]}"#).unwrap_err();
        assert!(err.to_string().contains("unexpected shape"));
    }

    #[test]
    fn invalid_json_is_rejected() {
        let err = decode::<Vec<String>>(b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, TripmateError::Server { .. }));
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn coordinates_take_the_first_entry() {
        let body = br#"{"coordinates":[{"city":"Rome","name":"Forum","x":41.89,"y":12.48},{"city":"Rome","name":"Other","x":1.0,"y":2.0}]}"#;
        let resp: CoordinatesResponse = decode(body).unwrap();
        assert_eq!(resp.first(), Some(Coordinate::new(41.89, 12.48)));
    }

    #[test]
    fn missing_coordinates_field_is_empty() {
        let resp: CoordinatesResponse = decode(b"{}").unwrap();
        assert_eq!(resp.first(), None);
    }
}
