//! Reverse geocoding client.
//!
//! Resolves a tag's cell center to a human place name via a
//! Nominatim-compatible `/reverse` endpoint. One request per lookup, no
//! retries: repeating a failed lookup is the caller's decision.

use crate::cache::TagCache;
use crate::config::GeocoderConfig;
use crate::error::{GeocodingError, GeocodingResult};
use civicpin_geotag::{is_valid_tag, reconstruct};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Reverse geocoding client with an injected memoization cache.
#[derive(Clone)]
pub struct ReverseGeocoder {
    inner: Client,
    config: Arc<GeocoderConfig>,
    cache: Arc<TagCache>,
}

/// Response shape of a Nominatim `/reverse` call.
///
/// The service reports "nothing here" as a 200 with an `error` field, not
/// as an HTTP failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ReverseResponse {
    /// Full display name of the place, if any
    #[serde(default)]
    pub display_name: Option<String>,
    /// Service-level error message, if any
    #[serde(default)]
    pub error: Option<String>,
}

impl ReverseGeocoder {
    /// Create a client with configuration from the environment.
    pub fn new() -> GeocodingResult<Self> {
        Self::with_config(GeocoderConfig::from_env()?)
    }

    /// Create a client with a specific configuration and a fresh cache.
    pub fn with_config(config: GeocoderConfig) -> GeocodingResult<Self> {
        Self::with_cache(config, Arc::new(TagCache::new()))
    }

    /// Create a client sharing an existing cache.
    pub fn with_cache(config: GeocoderConfig, cache: Arc<TagCache>) -> GeocodingResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&config.user_agent) {
            default_headers.insert(USER_AGENT, value);
        }

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(GeocodingError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
            cache,
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &GeocoderConfig {
        &self.config
    }

    /// Get the shared cache
    #[must_use]
    pub fn cache(&self) -> &TagCache {
        &self.cache
    }

    /// Look up a human place name for a tag's cell center.
    ///
    /// Returns `Ok(None)` when the service has no name for the cell.
    /// Lookups for the same tag are memoized in the shared cache.
    pub async fn place_name(&self, tag: &str) -> GeocodingResult<Option<String>> {
        if !is_valid_tag(tag) {
            return Err(GeocodingError::InvalidTag(tag.to_string()));
        }

        if let Some(hit) = self.cache.get(tag) {
            debug!(tag, "Reverse geocode cache hit");
            return Ok(Some(hit));
        }

        let Some(area) = reconstruct(tag) else {
            return Err(GeocodingError::InvalidTag(tag.to_string()));
        };

        let request_id = Uuid::new_v4().to_string();
        let url = format!("{}/reverse", self.config.base_url.trim_end_matches('/'));
        let start = Instant::now();

        let response = self
            .inner
            .get(&url)
            .header(X_REQUEST_ID, &request_id)
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", area.center.latitude.to_string()),
                ("lon", area.center.longitude.to_string()),
                ("zoom", self.config.zoom.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(
                request_id = %request_id,
                tag,
                status = status.as_u16(),
                "Reverse geocode failed"
            );
            return Err(GeocodingError::api_response(status.as_u16(), message));
        }

        let place: ReverseResponse = response.json().await.map_err(GeocodingError::Request)?;
        debug!(
            request_id = %request_id,
            tag,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Reverse geocode complete"
        );

        if let Some(service_error) = place.error {
            debug!(tag, error = %service_error, "Service has no name for this cell");
            return Ok(None);
        }

        match place.display_name {
            Some(name) => {
                self.cache.insert(tag, name.clone());
                Ok(Some(name))
            }
            None => Ok(None),
        }
    }

    /// Best-effort variant: failures are logged and collapse to `None`.
    pub async fn try_place_name(&self, tag: &str) -> Option<String> {
        match self.place_name(tag).await {
            Ok(name) => name,
            Err(e) => {
                warn!(tag, error = %e, "Reverse geocode lookup failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ReverseGeocoder::with_config(GeocoderConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_bad_config() {
        let config = GeocoderConfig::default().with_base_url("not a url");
        assert!(ReverseGeocoder::with_config(config).is_err());
    }

    #[test]
    fn test_parse_reverse_response() {
        let json = r#"{
            "place_id": 152569145,
            "display_name": "Covent Garden, London, Greater London, England, United Kingdom",
            "address": {"suburb": "Covent Garden", "city": "London"}
        }"#;
        let place: ReverseResponse = serde_json::from_str(json).unwrap();
        assert!(place.display_name.unwrap().starts_with("Covent Garden"));
        assert!(place.error.is_none());
    }

    #[test]
    fn test_parse_service_error_response() {
        let json = r#"{"error": "Unable to geocode"}"#;
        let place: ReverseResponse = serde_json::from_str(json).unwrap();
        assert!(place.display_name.is_none());
        assert_eq!(place.error.as_deref(), Some("Unable to geocode"));
    }

    #[tokio::test]
    async fn test_invalid_tag_is_rejected_without_io() {
        let client = ReverseGeocoder::with_config(GeocoderConfig::default()).unwrap();
        let result = client.place_name("#geo9c3xg").await;
        assert!(matches!(result, Err(GeocodingError::InvalidTag(_))));
    }

    #[tokio::test]
    async fn test_cache_hit_short_circuits() {
        let cache = Arc::new(TagCache::new());
        cache.insert("#geo9c3xgv", "Covent Garden, London");

        // Unroutable base_url: a hit must never touch the network.
        let config = GeocoderConfig::default().with_base_url("http://127.0.0.1:9");
        let client = ReverseGeocoder::with_cache(config, cache).unwrap();

        let name = client.place_name("#geo9c3xgv").await.unwrap();
        assert_eq!(name.as_deref(), Some("Covent Garden, London"));
    }

    #[tokio::test]
    async fn test_try_place_name_swallows_errors() {
        let config = GeocoderConfig::default()
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(std::time::Duration::from_millis(200));
        let client = ReverseGeocoder::with_config(config).unwrap();

        assert!(client.try_place_name("#geo9c3xgv").await.is_none());
    }
}
