//! Property tests for the privacy tagging core.

use civicpin_geotag::{
    contains, extract_tags, is_valid_tag, nearby_tags, reconstruct, truncate,
};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #[test]
    fn tags_are_always_valid(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
        let location = truncate(lat, lng, None).unwrap();
        prop_assert!(is_valid_tag(&location.tag));
    }

    #[test]
    fn center_round_trips_exactly(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
        let location = truncate(lat, lng, None).unwrap();
        let area = reconstruct(&location.tag).unwrap();
        prop_assert_eq!(area.center.latitude, location.center_lat);
        prop_assert_eq!(area.center.longitude, location.center_lng);
    }

    #[test]
    fn center_is_contained(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
        let location = truncate(lat, lng, None).unwrap();
        prop_assert!(contains(location.center_lat, location.center_lng, &location.tag));
    }

    #[test]
    fn tagging_is_deterministic(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
        let first = truncate(lat, lng, None).unwrap();
        let second = truncate(lat, lng, None).unwrap();
        prop_assert_eq!(first.tag, second.tag);
        prop_assert_eq!(first.full_code, second.full_code);
    }

    #[test]
    fn areas_are_non_degenerate(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
        let location = truncate(lat, lng, None).unwrap();
        let area = reconstruct(&location.tag).unwrap();
        prop_assert!(area.south_west.latitude < area.north_east.latitude);
        prop_assert!(area.south_west.longitude < area.north_east.longitude);
        prop_assert!(area.lat_span() > 0.0 && area.lat_span() < 0.1);
        prop_assert!(area.lng_span() > 0.0 && area.lng_span() < 0.1);
    }

    #[test]
    fn extraction_recovers_embedded_tag(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
        let location = truncate(lat, lng, None).unwrap();
        let text = format!("reported near {} today", location.tag);
        prop_assert_eq!(extract_tags(&text), vec![location.tag.clone()]);
    }

    #[test]
    fn nearby_is_bounded_valid_and_unique(lat in -80.0f64..=80.0, lng in -170.0f64..=170.0) {
        let location = truncate(lat, lng, None).unwrap();
        let tags = nearby_tags(&location.tag);
        prop_assert!(!tags.is_empty() && tags.len() <= 9);
        prop_assert_eq!(&tags[0], &location.tag);
        for tag in &tags {
            prop_assert!(is_valid_tag(tag));
        }
        let unique: HashSet<_> = tags.iter().collect();
        prop_assert_eq!(unique.len(), tags.len());
    }
}
