// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Tripmate backend.
//!
//! Provides [`RemoteGateway`], which fetches destination data with a bounded
//! timeout and never surfaces a failure: when the live request fails, or
//! when mock mode is forced, the caller receives the static fixture after a
//! short randomized delay.

use std::ops::RangeInclusive;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use tripmate_config::GatewayConfig;
use tripmate_core::{
    AdapterType, Attraction, Coordinate, CountryList, HealthStatus, PluginAdapter, Tour,
    TripmateError,
};

use crate::fixtures;
use crate::resource::Resource;
use crate::wire::{self, CoordinatesResponse};

/// Whether the gateway talks to the network at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayMode {
    /// Try the backend, fall back to fixtures on failure.
    Live,
    /// Serve fixtures only. No request is ever sent.
    Mock,
}

/// Remote data gateway with fixture fallback.
#[derive(Debug, Clone)]
pub struct RemoteGateway {
    client: reqwest::Client,
    base_url: Url,
    mode: GatewayMode,
    timeout: Duration,
    fixture_delay_ms: RangeInclusive<u64>,
}

impl RemoteGateway {
    /// Builds a gateway from configuration.
    ///
    /// Fails on a base URL that does not parse or is not http(s), on an
    /// inverted delay range, and on an HTTP client that cannot be built.
    pub fn new(config: &GatewayConfig) -> Result<Self, TripmateError> {
        let base_url = Url::parse(config.base_url.trim()).map_err(|e| {
            TripmateError::Config(format!("invalid gateway base URL `{}`: {e}", config.base_url))
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(TripmateError::Config(format!(
                "gateway base URL `{base_url}` must use http or https"
            )));
        }

        if config.fallback_delay_min_ms > config.fallback_delay_max_ms {
            return Err(TripmateError::Config(format!(
                "fixture delay range {}..={} ms is inverted",
                config.fallback_delay_min_ms, config.fallback_delay_max_ms
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| TripmateError::Network {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        let mode = if config.force_mock {
            GatewayMode::Mock
        } else {
            GatewayMode::Live
        };

        Ok(Self {
            client,
            base_url,
            mode,
            timeout: config.timeout(),
            fixture_delay_ms: config.fallback_delay_min_ms..=config.fallback_delay_max_ms,
        })
    }

    pub fn mode(&self) -> GatewayMode {
        self.mode
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// All countries plus the featured subset.
    pub async fn countries(&self) -> CountryList {
        self.request(&Resource::Countries, fixtures::countries).await
    }

    /// Cities of `country`. Unknown countries yield an empty list in fallback.
    pub async fn cities(&self, country: &str) -> Vec<String> {
        let resource = Resource::Cities {
            country: country.to_string(),
        };
        self.request(&resource, || fixtures::cities(country)).await
    }

    /// Tours, optionally filtered. Filters only reach the backend; the
    /// fixture list is returned unfiltered.
    pub async fn tours(&self, country: Option<&str>, city: Option<&str>) -> Vec<Tour> {
        let resource = Resource::Tours {
            country: country.map(str::to_string),
            city: city.map(str::to_string),
        };
        self.request(&resource, fixtures::tours).await
    }

    /// Attractions, optionally filtered. Same fixture rule as [`Self::tours`].
    pub async fn attractions(&self, country: Option<&str>, city: Option<&str>) -> Vec<Attraction> {
        let resource = Resource::Attractions {
            country: country.map(str::to_string),
            city: city.map(str::to_string),
        };
        self.request(&resource, fixtures::attractions).await
    }

    /// Position of `city`, or [`fixtures::DEFAULT_COORDINATE`] when the
    /// response lists no entries.
    pub async fn coordinates(&self, city: &str) -> Coordinate {
        let resource = Resource::Coordinates {
            city: city.to_string(),
        };
        let response: CoordinatesResponse = self.request(&resource, fixtures::coordinates).await;
        response.first().unwrap_or(fixtures::DEFAULT_COORDINATE)
    }

    /// Fetches `resource`, substituting `fixture()` on any failure.
    ///
    /// Mock mode and the degraded path return the same data; they differ only
    /// in what gets logged.
    pub async fn request<T, F>(&self, resource: &Resource, fixture: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        if self.mode == GatewayMode::Mock {
            debug!(%resource, "mock mode, serving fixture");
            return self.serve_fixture(fixture).await;
        }

        match self.try_live(resource).await {
            Ok(value) => value,
            Err(e) => {
                warn!(%resource, error = %e, "live request failed, serving fixture");
                self.serve_fixture(fixture).await
            }
        }
    }

    /// Performs the live request without any fallback.
    ///
    /// Transport failures map to [`TripmateError::Network`]; non-2xx statuses
    /// and undecodable bodies map to [`TripmateError::Server`].
    pub async fn try_live<T: DeserializeOwned>(
        &self,
        resource: &Resource,
    ) -> Result<T, TripmateError> {
        let url = resource.url(&self.base_url)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        debug!(%resource, status = %status, "response received");

        if !status.is_success() {
            return Err(TripmateError::Server {
                status: Some(status.as_u16()),
                message: format!("{resource} request returned {status}"),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;
        wire::decode(&body)
    }

    fn transport_error(&self, e: reqwest::Error) -> TripmateError {
        let message = if e.is_timeout() {
            format!("request timed out after {}s", self.timeout.as_secs())
        } else if e.is_connect() {
            format!("could not connect to {}: {e}", self.base_url)
        } else {
            format!("HTTP request failed: {e}")
        };
        TripmateError::Network {
            message,
            source: Some(Box::new(e)),
        }
    }

    async fn serve_fixture<T, F: FnOnce() -> T>(&self, fixture: F) -> T {
        tokio::time::sleep(self.fixture_delay()).await;
        fixture()
    }

    fn fixture_delay(&self) -> Duration {
        let range = self.fixture_delay_ms.clone();
        if range.is_empty() || *range.end() == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::thread_rng().gen_range(range))
    }
}

#[async_trait]
impl PluginAdapter for RemoteGateway {
    fn name(&self) -> &str {
        "remote-gateway"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Gateway
    }

    /// Any HTTP answer counts as reachable.
    async fn health_check(&self) -> Result<HealthStatus, TripmateError> {
        if self.mode == GatewayMode::Mock {
            return Ok(HealthStatus::Degraded(
                "mock mode forced, serving fixture data".to_string(),
            ));
        }
        match self.client.get(self.base_url.clone()).send().await {
            Ok(_) => Ok(HealthStatus::Healthy),
            Err(e) => Ok(HealthStatus::Unhealthy(self.transport_error(e).to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(base_url: &str) -> GatewayConfig {
        GatewayConfig {
            base_url: base_url.to_string(),
            force_mock: false,
            timeout_secs: 2,
            fallback_delay_min_ms: 0,
            fallback_delay_max_ms: 0,
        }
    }

    #[test]
    fn force_mock_selects_mock_mode() {
        let mut cfg = config("http://localhost:3019");
        assert_eq!(RemoteGateway::new(&cfg).unwrap().mode(), GatewayMode::Live);
        cfg.force_mock = true;
        assert_eq!(RemoteGateway::new(&cfg).unwrap().mode(), GatewayMode::Mock);
    }

    #[test]
    fn rejects_bad_base_url() {
        let err = RemoteGateway::new(&config("not a url")).unwrap_err();
        assert!(matches!(err, TripmateError::Config(_)));
    }

    #[test]
    fn rejects_non_http_base_url() {
        for base in ["mailto:x", "ftp://example.com", "file:///tmp/api"] {
            let err = RemoteGateway::new(&config(base)).unwrap_err();
            assert!(
                matches!(&err, TripmateError::Config(m) if m.contains("http or https")),
                "{base}: {err}"
            );
        }
        assert!(RemoteGateway::new(&config("https://api.example.com/v1/")).is_ok());
    }

    #[test]
    fn rejects_inverted_delay_range() {
        let mut cfg = config("http://localhost:3019");
        cfg.fallback_delay_min_ms = 10;
        cfg.fallback_delay_max_ms = 5;
        assert!(RemoteGateway::new(&cfg).is_err());
    }

    #[test]
    fn fixture_delay_stays_in_range() {
        let mut cfg = config("http://localhost:3019");
        cfg.fallback_delay_min_ms = 5;
        cfg.fallback_delay_max_ms = 20;
        let gateway = RemoteGateway::new(&cfg).unwrap();
        for _ in 0..50 {
            let d = gateway.fixture_delay();
            assert!(d >= Duration::from_millis(5) && d <= Duration::from_millis(20));
        }
    }

    #[tokio::test]
    async fn sends_json_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/countryList"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "countries": ["Japan"],
                "featured": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = RemoteGateway::new(&config(&server.uri())).unwrap();
        let list = gateway.countries().await;
        assert_eq!(list.countries, vec!["Japan"]);
    }

    #[tokio::test]
    async fn try_live_classifies_status_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tours"))
            .and(query_param("city", "Rome"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let gateway = RemoteGateway::new(&config(&server.uri())).unwrap();
        let resource = Resource::Tours {
            country: None,
            city: Some("Rome".into()),
        };
        let err = gateway.try_live::<Vec<Tour>>(&resource).await.unwrap_err();
        assert!(matches!(err, TripmateError::Server { status: Some(503), .. }));
        assert!(err.is_remote());
    }

    #[tokio::test]
    async fn try_live_classifies_timeouts_as_network() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/countryList"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"countries": []}))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let mut cfg = config(&server.uri());
        cfg.timeout_secs = 1;
        let gateway = RemoteGateway::new(&cfg).unwrap();
        let err = gateway
            .try_live::<CountryList>(&Resource::Countries)
            .await
            .unwrap_err();
        match err {
            TripmateError::Network { message, .. } => assert!(message.contains("timed out")),
            other => panic!("expected network error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn try_live_classifies_refused_connection_as_network() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let gateway = RemoteGateway::new(&config(&format!("http://127.0.0.1:{port}"))).unwrap();
        let err = gateway
            .try_live::<CountryList>(&Resource::Countries)
            .await
            .unwrap_err();
        assert!(matches!(err, TripmateError::Network { .. }));
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn degraded_fallback_logs_a_warning() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let gateway = RemoteGateway::new(&config(&server.uri())).unwrap();
        let list = gateway.countries().await;
        assert_eq!(list, fixtures::countries());
        assert!(logs_contain("live request failed, serving fixture"));
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn mock_mode_does_not_warn() {
        let mut cfg = config("http://127.0.0.1:9");
        cfg.force_mock = true;
        let gateway = RemoteGateway::new(&cfg).unwrap();
        let _ = gateway.tours(None, None).await;
        assert!(logs_contain("mock mode, serving fixture"));
        assert!(!logs_contain("live request failed"));
    }

    #[tokio::test]
    async fn health_reports_mock_mode_as_degraded() {
        let mut cfg = config("http://127.0.0.1:9");
        cfg.force_mock = true;
        let gateway = RemoteGateway::new(&cfg).unwrap();
        assert!(matches!(
            gateway.health_check().await.unwrap(),
            HealthStatus::Degraded(_)
        ));
    }

    #[tokio::test]
    async fn health_treats_any_response_as_reachable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let gateway = RemoteGateway::new(&config(&server.uri())).unwrap();
        assert_eq!(gateway.health_check().await.unwrap(), HealthStatus::Healthy);
    }
}
