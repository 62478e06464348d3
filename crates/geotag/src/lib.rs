//! Privacy-preserving location tags for CivicPin.
//!
//! This crate provides:
//! - Truncation of precise coordinates into coarse, shareable geo tags
//! - Reconstruction of the geographic cell a tag reveals
//! - Tag grammar validation and extraction from free text
//! - Neighbor tag generation for proximity search
//! - Batch containment checks with optional parallelism
//! - WASM bindings for browser usage
//!
//! A tag deliberately reveals only an approximate area (~1 km nominal
//! radius). The precise input coordinate is never stored: every published
//! center is re-derived from the tag itself, so a `PrivacyLocation` carries
//! exactly the information any third party can recover from the tag alone.
//!
//! # Example
//!
//! ```
//! use civicpin_geotag::{truncate, reconstruct, is_valid_tag};
//!
//! let location = truncate(51.5074, -0.1278, Some("Blocked drain")).unwrap();
//! assert!(is_valid_tag(&location.tag));
//!
//! let area = reconstruct(&location.tag).unwrap();
//! assert!(area.contains(location.center_lat, location.center_lng));
//! ```

mod area;
pub mod batch;
mod error;
mod extract;
mod nearby;
mod olc;
mod tag;
mod truncate;

#[cfg(feature = "wasm")]
mod wasm;

pub use area::{contains, reconstruct, reconstruct_with, LocationArea};
pub use error::{GeotagError, GeotagErrorCode, Result};
pub use extract::extract_tags;
pub use nearby::{nearby_tags, nearby_tags_scaled, nearby_tags_with};
pub use olc::{CodeProvider, DecodedCell, PlusCode, CODE_ALPHABET};
pub use tag::{canonical_tag, is_valid_tag, TAG_CODE_LENGTH, TAG_PREFIX};
pub use truncate::{truncate, truncate_with, PrivacyLocation, TAG_PRECISION_KM};

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns true if the coordinate has valid values.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}
