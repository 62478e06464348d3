//! Area reconstruction: the geographic cell a tag reveals.
//!
//! A `LocationArea` is a pure, on-demand derivation from a tag string. It is
//! never persisted and never mutated; callers recompute it whenever needed.

use crate::olc::{CodeProvider, PlusCode};
use crate::tag;
use crate::Coordinate;
use serde::{Deserialize, Serialize};

/// Filler appended to a truncated code so the provider decodes it as the
/// coarsest cell at that digit count.
const PAD_SUFFIX: &str = "00+";

/// The reconstructed geographic cell for a tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationArea {
    /// South-west corner of the bounding box
    pub south_west: Coordinate,
    /// North-east corner of the bounding box
    pub north_east: Coordinate,
    /// Center of the cell
    pub center: Coordinate,
}

impl LocationArea {
    /// Inclusive bounding-box membership test.
    #[inline]
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.south_west.latitude
            && lat <= self.north_east.latitude
            && lng >= self.south_west.longitude
            && lng <= self.north_east.longitude
    }

    /// Latitude extent of the cell, in degrees.
    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.north_east.latitude - self.south_west.latitude
    }

    /// Longitude extent of the cell, in degrees.
    #[inline]
    pub fn lng_span(&self) -> f64 {
        self.north_east.longitude - self.south_west.longitude
    }
}

/// Reconstructs the area a tag reveals.
///
/// Returns `None` when the tag fails the grammar or the padded code cannot
/// be decoded. There is no sentinel value: an absent area is the only
/// failure signal.
pub fn reconstruct(tag: &str) -> Option<LocationArea> {
    reconstruct_with(&PlusCode, tag)
}

/// Reconstruction against a specific code provider.
pub fn reconstruct_with<P: CodeProvider>(provider: &P, tag: &str) -> Option<LocationArea> {
    let code = tag::tag_code(tag)?;
    let cell = provider.decode(&format!("{code}{PAD_SUFFIX}")).ok()?;

    let half = cell.resolution / 2.0;
    Some(LocationArea {
        south_west: Coordinate::new(cell.latitude - half, cell.longitude - half),
        north_east: Coordinate::new(cell.latitude + half, cell.longitude + half),
        center: Coordinate::new(cell.latitude, cell.longitude),
    })
}

/// Reports whether a raw coordinate falls inside a tag's reconstructed area.
///
/// `false` for invalid tags.
pub fn contains(lat: f64, lng: f64, tag: &str) -> bool {
    reconstruct(tag).is_some_and(|area| area.contains(lat, lng))
}
