//! Privacy truncation: precise coordinates in, coarse shareable tags out.
//!
//! Truncation discards the fine-precision digits of a full location code so
//! the resulting tag reveals only a ~1 km area. The published center is
//! derived by reconstructing the tag itself, never from the input, so a
//! `PrivacyLocation` holds exactly what any third party can recover from
//! the tag alone.

use crate::area;
use crate::error::{GeotagError, Result};
use crate::olc::{CodeProvider, PlusCode};
use crate::tag::{is_valid_tag, TAG_CODE_LENGTH, TAG_PREFIX};
use crate::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nominal radius revealed by a six-character tag, in kilometers.
///
/// Constant for the fixed truncation length; the true angular cell width
/// varies with latitude, which this figure deliberately ignores.
pub const TAG_PRECISION_KM: f64 = 1.0;

/// The public, shareable representation of a location.
///
/// Immutable once created; "changing" a location means creating a new one.
/// The original high-precision coordinate is never stored. `full_code` is
/// kept for internal reference and should not be surfaced in outward-facing
/// contexts beyond what the tag already reveals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivacyLocation {
    /// The privacy-truncated tag, canonically lowercase
    pub tag: String,
    /// Optional human-supplied annotation; carries no positional guarantee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Full-precision code the tag was truncated from
    pub full_code: String,
    /// Latitude of the truncated cell center, not the original coordinate
    pub center_lat: f64,
    /// Longitude of the truncated cell center, not the original coordinate
    pub center_lng: f64,
    /// Nominal radius of the truncated cell in kilometers
    pub precision_km: f64,
}

impl PrivacyLocation {
    /// Short human string, e.g. `#geo9c3xgv (Blocked drain) ~1km`.
    ///
    /// Presentation only; not part of the privacy contract.
    pub fn summary(&self) -> String {
        match &self.label {
            Some(label) => format!("{} ({}) ~{}km", self.tag, label, self.precision_km),
            None => format!("{} ~{}km", self.tag, self.precision_km),
        }
    }
}

impl fmt::Display for PrivacyLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Truncates a coordinate into a shareable `PrivacyLocation`.
///
/// Out-of-range inputs are rejected, never clamped. A provider failure is
/// fatal to the call: no partial location is ever produced.
pub fn truncate(lat: f64, lng: f64, label: Option<&str>) -> Result<PrivacyLocation> {
    truncate_with(&PlusCode, lat, lng, label)
}

/// Truncation against a specific code provider.
pub fn truncate_with<P: CodeProvider>(
    provider: &P,
    lat: f64,
    lng: f64,
    label: Option<&str>,
) -> Result<PrivacyLocation> {
    let coord = Coordinate::new(lat, lng);
    if !coord.is_valid() {
        return Err(GeotagError::InvalidCoordinate(format!("({lat}, {lng})")));
    }

    let full_code = provider.encode(lat, lng)?;
    let body: String = full_code
        .chars()
        .take(TAG_CODE_LENGTH)
        .collect::<String>()
        .to_ascii_lowercase();
    let tag = format!("{TAG_PREFIX}{body}");
    if !is_valid_tag(&tag) {
        return Err(GeotagError::InvalidTag(tag));
    }

    // Round-trip through reconstruction so the published center always
    // matches what anyone can recover from the tag alone.
    let area = area::reconstruct_with(provider, &tag)
        .ok_or_else(|| GeotagError::InvalidCode(full_code.clone()))?;

    Ok(PrivacyLocation {
        tag,
        label: label.map(str::to_owned),
        full_code,
        center_lat: area.center.latitude,
        center_lng: area.center.longitude,
        precision_km: TAG_PRECISION_KM,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::reconstruct;

    #[test]
    fn test_truncate_london() {
        let location = truncate(51.5074, -0.1278, None).unwrap();
        assert_eq!(location.tag, "#geo9c3xgv");
        assert_eq!(&location.full_code[..6], "9C3XGV");
        assert_eq!(location.precision_km, 1.0);
        assert!(location.label.is_none());
    }

    #[test]
    fn test_tag_is_lowercase() {
        let location = truncate(52.3676, 4.9041, None).unwrap();
        assert_eq!(location.tag, location.tag.to_ascii_lowercase());
        assert!(is_valid_tag(&location.tag));
    }

    #[test]
    fn test_center_matches_reconstruction() {
        let location = truncate(51.5074, -0.1278, None).unwrap();
        let area = reconstruct(&location.tag).unwrap();
        assert_eq!(location.center_lat, area.center.latitude);
        assert_eq!(location.center_lng, area.center.longitude);
    }

    #[test]
    fn test_center_is_not_the_input() {
        let location = truncate(51.5074, -0.1278, None).unwrap();
        assert_ne!(location.center_lat, 51.5074);
        assert_ne!(location.center_lng, -0.1278);
    }

    #[test]
    fn test_label_is_carried_verbatim() {
        let location = truncate(51.5074, -0.1278, Some("Blocked drain")).unwrap();
        assert_eq!(location.label.as_deref(), Some("Blocked drain"));
    }

    #[test]
    fn test_distinct_cities_distinct_tags() {
        let london = truncate(51.5074, -0.1278, None).unwrap();
        let amsterdam = truncate(52.3676, 4.9041, None).unwrap();
        assert_ne!(london.tag, amsterdam.tag);
    }

    #[test]
    fn test_same_input_same_tag() {
        let a = truncate(48.8566, 2.3522, None).unwrap();
        let b = truncate(48.8566, 2.3522, None).unwrap();
        assert_eq!(a.tag, b.tag);
        assert_eq!(a.full_code, b.full_code);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        assert!(truncate(90.5, 0.0, None).is_err());
        assert!(truncate(0.0, -180.5, None).is_err());
        assert!(truncate(f64::NAN, 0.0, None).is_err());
    }

    #[test]
    fn test_summary_formats() {
        let with_label = truncate(51.5074, -0.1278, Some("Pothole")).unwrap();
        assert_eq!(with_label.summary(), "#geo9c3xgv (Pothole) ~1km");

        let without = truncate(51.5074, -0.1278, None).unwrap();
        assert_eq!(without.summary(), "#geo9c3xgv ~1km");
        assert_eq!(without.to_string(), without.summary());
    }

    #[test]
    fn test_serde_round_trip() {
        let location = truncate(51.5074, -0.1278, Some("Pothole")).unwrap();
        let json = serde_json::to_string(&location).unwrap();
        let back: PrivacyLocation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, location);
    }

    #[test]
    fn test_label_absent_when_none() {
        let location = truncate(51.5074, -0.1278, None).unwrap();
        let json = serde_json::to_string(&location).unwrap();
        assert!(!json.contains("label"));
    }
}
