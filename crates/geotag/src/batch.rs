//! Batch helpers with optional parallelism.
//!
//! Report feeds and map views check many markers against a searched area at
//! once; these helpers reconstruct the area a single time and sweep the
//! whole slice.

use crate::area::{self, LocationArea};
use crate::truncate;
use serde::{Deserialize, Serialize};

/// An item with an identifier and a raw coordinate.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoItem {
    /// Item ID
    pub id: i64,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// Containment verdict for a single item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainmentResult {
    /// The item ID
    pub id: i64,
    /// Whether the item falls inside the tag's area
    pub contained: bool,
}

/// Tagging result for a single item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemTag {
    /// The item ID
    pub id: i64,
    /// The item's tag, or `None` for an out-of-range coordinate
    pub tag: Option<String>,
}

/// Checks every item against a tag's reconstructed area.
///
/// An invalid tag marks every item as not contained.
pub fn check_contained(tag: &str, items: &[GeoItem]) -> Vec<ContainmentResult> {
    let area = area::reconstruct(tag);

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items
            .par_iter()
            .map(|item| check_single(area.as_ref(), item))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items
            .iter()
            .map(|item| check_single(area.as_ref(), item))
            .collect()
    }
}

/// IDs of the items inside a tag's area, in input order.
pub fn ids_within(tag: &str, items: &[GeoItem]) -> Vec<i64> {
    check_contained(tag, items)
        .into_iter()
        .filter(|r| r.contained)
        .map(|r| r.id)
        .collect()
}

/// Truncates every item's coordinate into a tag.
pub fn tag_items(items: &[GeoItem]) -> Vec<ItemTag> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items.par_iter().map(tag_single).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items.iter().map(tag_single).collect()
    }
}

#[inline]
fn check_single(area: Option<&LocationArea>, item: &GeoItem) -> ContainmentResult {
    ContainmentResult {
        id: item.id,
        contained: area.is_some_and(|a| a.contains(item.latitude, item.longitude)),
    }
}

#[inline]
fn tag_single(item: &GeoItem) -> ItemTag {
    ItemTag {
        id: item.id,
        tag: truncate::truncate(item.latitude, item.longitude, None)
            .ok()
            .map(|location| location.tag),
    }
}
