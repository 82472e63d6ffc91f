//! OpenStreetMap Nominatim reverse geocoding client.
//!
//! Requests are plain `GET {endpoint}/reverse?format=jsonv2&lat=..&lon=..`
//! calls. Nominatim's usage policy requires an identifying `User-Agent` and
//! at most one request per second; pacing is handled by the caller through
//! [`Throttle`](crate::Throttle).

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Deserialize;
use solar_model::{DEFAULT_REQUEST_TIMEOUT, LatLng};
use tracing::debug;

use crate::error::{GeocodeError, Result};
use crate::provider::ReverseGeocoder;

/// Public Nominatim instance.
pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org";

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "solar_geojson_agent";

/// Connection settings for a Nominatim instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NominatimConfig {
    /// Base URL, without the `/reverse` path.
    pub endpoint: String,
    pub user_agent: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Preferred result language (`accept-language`), e.g. `es`.
    pub language: Option<String>,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
            language: None,
        }
    }
}

impl NominatimConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    /// Builds the reverse lookup URL for `point`.
    pub fn reverse_url(&self, point: LatLng) -> Result<Url> {
        let base = format!("{}/reverse", self.endpoint.trim_end_matches('/'));
        let lat = point.lat.to_string();
        let lon = point.lng.to_string();
        let mut params = vec![("format", "jsonv2"), ("lat", lat.as_str()), ("lon", lon.as_str())];
        if let Some(language) = &self.language {
            params.push(("accept-language", language.as_str()));
        }
        Url::parse_with_params(&base, &params)
            .map_err(|e| GeocodeError::Other(format!("invalid endpoint {base}: {e}")))
    }
}

/// Subset of the `jsonv2` reverse response this client reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReverseResponse {
    #[serde(default)]
    pub display_name: Option<String>,
    /// Set when no object was found, e.g. `"Unable to geocode"`.
    #[serde(default)]
    pub error: Option<String>,
}

impl ReverseResponse {
    /// The full address, or `None` when the lookup found nothing.
    pub fn into_address(self) -> Option<String> {
        if self.error.is_some() {
            return None;
        }
        self.display_name.filter(|name| !name.trim().is_empty())
    }
}

/// Blocking Nominatim client.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: Client,
    config: NominatimConfig,
}

impl NominatimClient {
    pub fn new(config: NominatimConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| GeocodeError::Other(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &NominatimConfig {
        &self.config
    }
}

impl ReverseGeocoder for NominatimClient {
    fn reverse(&self, point: LatLng) -> Result<Option<String>> {
        let url = self.config.reverse_url(point)?;
        debug!(%url, "reverse geocoding");

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Service(format!("HTTP {status}")));
        }

        let body: ReverseResponse = response.json()?;
        Ok(body.into_address())
    }
}
