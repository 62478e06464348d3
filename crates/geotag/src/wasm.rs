//! WASM bindings for the geotag crate.
//!
//! These bindings allow the tagging subsystem to be used from
//! JavaScript/TypeScript in both browser and Deno environments. Structured
//! results cross the boundary as JSON strings.

use crate::batch::GeoItem;
use wasm_bindgen::prelude::*;

/// Truncate a coordinate into a shareable privacy location.
///
/// # Arguments
/// * `lat` - Latitude in degrees
/// * `lng` - Longitude in degrees
/// * `label` - Optional human annotation
///
/// # Returns
/// JSON string of the privacy location
#[wasm_bindgen]
pub fn tag_location(lat: f64, lng: f64, label: Option<String>) -> Result<String, JsValue> {
    let location = crate::truncate(lat, lng, label.as_deref())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&location)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {e}")))
}

/// Reconstruct the area a tag reveals.
///
/// # Arguments
/// * `tag` - A geo tag
///
/// # Returns
/// JSON string of the area, or "null" for an invalid tag
#[wasm_bindgen]
pub fn tag_area(tag: &str) -> Result<String, JsValue> {
    match crate::reconstruct(tag) {
        Some(area) => serde_json::to_string(&area)
            .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {e}"))),
        None => Ok("null".to_string()),
    }
}

/// Check whether a string is a well-formed geo tag.
#[wasm_bindgen]
pub fn tag_is_valid(tag: &str) -> bool {
    crate::is_valid_tag(tag)
}

/// Extract every geo tag from free text, in order of occurrence.
///
/// # Returns
/// JSON array of lowercase tags
#[wasm_bindgen]
pub fn tags_in_text(text: &str) -> Result<String, JsValue> {
    serde_json::to_string(&crate::extract_tags(text))
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {e}")))
}

/// Neighboring tags for proximity search.
///
/// # Arguments
/// * `tag` - A geo tag
/// * `radius_multiplier` - Scale factor for the neighbor step (1.0 = adjacent cells)
///
/// # Returns
/// JSON array of tags, original first
#[wasm_bindgen]
pub fn tags_nearby(tag: &str, radius_multiplier: f64) -> Result<String, JsValue> {
    serde_json::to_string(&crate::nearby_tags_scaled(tag, radius_multiplier))
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {e}")))
}

/// Check whether a coordinate falls inside a tag's area.
#[wasm_bindgen]
pub fn tag_contains(lat: f64, lng: f64, tag: &str) -> bool {
    crate::contains(lat, lng, tag)
}

/// Check many report markers against a tag's area at once.
///
/// # Arguments
/// * `tag` - A geo tag
/// * `items_json` - JSON array of items with id/latitude/longitude fields
///
/// # Returns
/// JSON array of containment results
#[wasm_bindgen]
pub fn check_report_containment(tag: &str, items_json: &str) -> Result<String, JsValue> {
    let items: Vec<GeoItem> = serde_json::from_str(items_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {e}")))?;

    serde_json::to_string(&crate::batch::check_contained(tag, &items))
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {e}")))
}
