//! Marker Set Module
//! Derives the displayed marker set from the collection and the filter.

use crate::data::{FilterState, PoiCollection};
use crate::map::viewport::LonLatBounds;

/// Popup label fragment used when a poi has no year.
pub const YEAR_UNKNOWN_LABEL: &str = "year unknown";

/// One displayed map marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub name: String,
    /// Popup text: `"<name> (<year>)"`, with the year-unknown placeholder
    /// when the poi carries no year.
    pub label: String,
    pub lon: f64,
    pub lat: f64,
}

/// Rebuild the full marker set from the current selection. The previous
/// set is always discarded wholesale by the caller, never patched.
pub fn build_markers(collection: &PoiCollection, filter: &FilterState) -> Vec<Marker> {
    filter
        .apply(collection)
        .into_iter()
        .map(|poi| {
            let year = poi
                .year
                .map(|y| y.to_string())
                .unwrap_or_else(|| YEAR_UNKNOWN_LABEL.to_string());
            Marker {
                name: poi.name.clone(),
                label: format!("{} ({})", poi.name, year),
                lon: poi.lon,
                lat: poi.lat,
            }
        })
        .collect()
}

/// Bounds of the current marker set; `None` when it is empty.
pub fn marker_bounds(markers: &[Marker]) -> Option<LonLatBounds> {
    LonLatBounds::from_points(markers.iter().map(|m| (m.lon, m.lat)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{sample_collection, Poi};

    #[test]
    fn test_markers_match_filter() {
        let collection = sample_collection();
        let filter = FilterState::new("X", 2000);
        let markers = build_markers(&collection, &filter);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].name, "B");
        assert_eq!(markers[0].label, "B (2000)");
        assert_eq!(markers[0].lon, 140.0);
        assert_eq!(markers[0].lat, 36.0);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let collection = sample_collection();
        let filter = FilterState::new("X", 1990);
        let first = build_markers(&collection, &filter);
        let second = build_markers(&collection, &filter);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_year_uses_placeholder_label() {
        let collection = PoiCollection::new(vec![Poi {
            name: "Old Well".to_string(),
            area: "X".to_string(),
            year: None,
            lon: 1.0,
            lat: 2.0,
        }]);
        let markers = build_markers(&collection, &FilterState::new("X", 1990));
        assert_eq!(markers[0].label, "Old Well (year unknown)");
    }

    #[test]
    fn test_empty_marker_set_has_no_bounds() {
        let collection = sample_collection();
        let markers = build_markers(&collection, &FilterState::new("nowhere", 2000));
        assert!(markers.is_empty());
        assert_eq!(marker_bounds(&markers), None);
    }

    #[test]
    fn test_marker_bounds_cover_all_markers() {
        let collection = sample_collection();
        let markers = build_markers(&collection, &FilterState::new("X", 1990));
        let bounds = marker_bounds(&markers).unwrap();
        assert_eq!(bounds.min_lon, 139.0);
        assert_eq!(bounds.max_lon, 139.0);
    }
}
