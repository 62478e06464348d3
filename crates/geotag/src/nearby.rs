//! Proximity tiles: neighboring tags for broad-area search.
//!
//! Searching "near" a tag means searching a small set of tags covering the
//! surrounding cells. Neighbors are generated by offsetting the cell center
//! a fixed angular step in the eight compass directions and re-truncating,
//! an approximation rather than exact grid adjacency: fixed-degree offsets
//! ignore longitude shrinkage at high latitude, so the set may degenerate
//! near the poles or at large multipliers.

use crate::area;
use crate::olc::{CodeProvider, PlusCode};
use crate::truncate;

/// Angular step between neighbor candidates: one full six-digit cell, i.e.
/// twice the cell half-width, so each candidate lands outside the original
/// cell.
const NEIGHBOR_STEP_DEG: f64 = 0.05;

/// Compass offsets (lat, lng), scaled by the radius multiplier.
const DIRECTIONS: [(f64, f64); 8] = [
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (1.0, 1.0),
    (1.0, -1.0),
    (-1.0, 1.0),
    (-1.0, -1.0),
];

/// Neighboring tags at the default radius.
pub fn nearby_tags(tag: &str) -> Vec<String> {
    nearby_tags_scaled(tag, 1.0)
}

/// Neighboring tags with the angular step scaled by `radius_multiplier`.
///
/// Deduplicated, original tag first, between 1 and 9 entries. An invalid
/// tag yields an empty vec.
pub fn nearby_tags_scaled(tag: &str, radius_multiplier: f64) -> Vec<String> {
    nearby_tags_with(&PlusCode, tag, radius_multiplier)
}

/// Neighbor generation against a specific code provider.
pub fn nearby_tags_with<P: CodeProvider>(
    provider: &P,
    tag: &str,
    radius_multiplier: f64,
) -> Vec<String> {
    let Some(area) = area::reconstruct_with(provider, tag) else {
        return Vec::new();
    };

    let step = NEIGHBOR_STEP_DEG * radius_multiplier;
    let mut tags = vec![tag.to_ascii_lowercase()];

    for (dlat, dlng) in DIRECTIONS {
        let lat = area.center.latitude + dlat * step;
        let lng = wrap_longitude(area.center.longitude + dlng * step);
        if !(-90.0..=90.0).contains(&lat) {
            // Polar overshoot: no cell there.
            continue;
        }
        if let Ok(neighbor) = truncate::truncate_with(provider, lat, lng, None) {
            if !tags.contains(&neighbor.tag) {
                tags.push(neighbor.tag);
            }
        }
    }

    tags
}

fn wrap_longitude(lng: f64) -> f64 {
    if lng >= 180.0 {
        lng - 360.0
    } else if lng < -180.0 {
        lng + 360.0
    } else {
        lng
    }
}
