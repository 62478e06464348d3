//! Configuration for the reverse geocoding client.
//!
//! Supports environment-based configuration with sensible defaults.

use crate::error::{GeocodingError, GeocodingResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default public Nominatim instance.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Default identifying user agent; the public service requires one.
const DEFAULT_USER_AGENT: &str = "civicpin-geocoding/0.3 (engineering@civicpin.app)";

/// Default zoom asked of the service; neighbourhood level, matching the
/// granularity of a tag cell.
const DEFAULT_ZOOM: u8 = 14;

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderConfig {
    /// Base URL of the Nominatim-compatible service
    pub base_url: String,
    /// Identifying user agent sent with every request
    pub user_agent: String,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    /// Zoom level for reverse lookups
    pub zoom: u8,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(10),
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl GeocoderConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `CIVICPIN_GEOCODER_URL`: Base URL of the service
    /// - `CIVICPIN_GEOCODER_UA`: Identifying user agent
    /// - `CIVICPIN_GEOCODER_TIMEOUT_SECS`: Request timeout in seconds
    pub fn from_env() -> GeocodingResult<Self> {
        let base_url =
            env::var("CIVICPIN_GEOCODER_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let user_agent =
            env::var("CIVICPIN_GEOCODER_UA").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        let timeout = env::var("CIVICPIN_GEOCODER_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(10));

        Ok(Self {
            base_url,
            user_agent,
            timeout,
            zoom: DEFAULT_ZOOM,
        })
    }

    /// Builder-style method to set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the user agent
    #[must_use]
    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    /// Builder-style method to set the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder-style method to set the zoom level
    #[must_use]
    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> GeocodingResult<()> {
        if self.base_url.is_empty() {
            return Err(GeocodingError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(GeocodingError::config(
                "base_url must start with http:// or https://",
            ));
        }

        if self.user_agent.is_empty() {
            return Err(GeocodingError::config("user_agent cannot be empty"));
        }

        if self.timeout.is_zero() {
            return Err(GeocodingError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeocoderConfig::default();
        assert!(config.base_url.contains("nominatim"));
        assert!(!config.user_agent.is_empty());
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.zoom, 14);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GeocoderConfig::default()
            .with_base_url("https://geocode.example.org")
            .with_timeout(Duration::from_secs(3))
            .with_zoom(10);

        assert_eq!(config.base_url, "https://geocode.example.org");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.zoom, 10);
    }

    #[test]
    fn test_validation() {
        assert!(GeocoderConfig::default().validate().is_ok());
        assert!(GeocoderConfig::default()
            .with_base_url("")
            .validate()
            .is_err());
        assert!(GeocoderConfig::default()
            .with_base_url("ftp://geocode.example.org")
            .validate()
            .is_err());
        assert!(GeocoderConfig::default()
            .with_user_agent("")
            .validate()
            .is_err());
        assert!(GeocoderConfig::default()
            .with_timeout(Duration::ZERO)
            .validate()
            .is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = GeocoderConfig::default().with_timeout(Duration::from_secs(7));
        let json = serde_json::to_string(&config).unwrap();
        let back: GeocoderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.timeout, Duration::from_secs(7));
        assert_eq!(back.base_url, config.base_url);
    }
}
