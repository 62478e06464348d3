//! Reverse geocoding for CivicPin geo tags.
//!
//! An optional collaborator that turns a tag into a human place name by
//! asking a Nominatim-compatible service for the tag's cell center. The
//! tagging core never requires it: lookups are best-effort, memoized in an
//! explicit injected cache, and safe to skip entirely.
//!
//! Lookups never retry; callers decide whether a failed lookup is worth
//! repeating.

mod cache;
mod client;
mod config;
mod error;

pub use cache::TagCache;
pub use client::{ReverseGeocoder, ReverseResponse};
pub use config::GeocoderConfig;
pub use error::{GeocodingError, GeocodingResult};
