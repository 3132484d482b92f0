//! Export Module
//! Re-filters the dataset and writes the GeoJSON and CSV artifacts.
//!
//! The exporter never reads the displayed marker set; it re-applies the
//! current filter to the full collection.

use crate::data::{FilterState, Poi, PoiCollection};
use anyhow::{Context, Result};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed column order of the tabular artifact.
pub const CSV_HEADER: [&str; 5] = ["name", "area", "year", "lon", "lat"];

/// Paths of the two written artifacts.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFiles {
    pub geojson: PathBuf,
    pub csv: PathBuf,
}

/// Shared stem of both artifact names: `<area>_<year>`.
pub fn artifact_stem(filter: &FilterState) -> String {
    format!("{}_{}", filter.area, filter.year)
}

/// Filtered subset re-wrapped as a FeatureCollection, pretty-printed.
pub fn geojson_payload(collection: &PoiCollection, filter: &FilterState) -> Result<String> {
    let features = filter
        .apply(collection)
        .into_iter()
        .map(poi_to_feature)
        .collect();
    let fc = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };
    serde_json::to_string_pretty(&fc).context("serialize feature collection")
}

fn poi_to_feature(poi: &Poi) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("name".to_string(), poi.name.clone().into());
    properties.insert("area".to_string(), poi.area.clone().into());
    if let Some(year) = poi.year {
        properties.insert("year".to_string(), year.into());
    }
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![poi.lon, poi.lat]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// One row per matching poi under a fixed header. Coordinates print in
/// their shortest form (no trailing `.0`), an unknown year as an empty
/// field.
pub fn csv_payload(collection: &PoiCollection, filter: &FilterState) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER).context("write csv header")?;
    for poi in filter.apply(collection) {
        let year = poi.year.map(|y| y.to_string()).unwrap_or_default();
        let lon = poi.lon.to_string();
        let lat = poi.lat.to_string();
        writer
            .write_record([
                poi.name.as_str(),
                poi.area.as_str(),
                year.as_str(),
                lon.as_str(),
                lat.as_str(),
            ])
            .context("write csv row")?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("finish csv writer: {e}"))?;
    String::from_utf8(bytes).context("csv output is not utf-8")
}

/// Write both artifacts into `dir`. Returns `Ok(None)` without touching
/// the filesystem when no dataset has been loaded.
pub fn write_artifacts(
    collection: Option<&PoiCollection>,
    filter: &FilterState,
    dir: &Path,
) -> Result<Option<ExportedFiles>> {
    let Some(collection) = collection else {
        return Ok(None);
    };

    let stem = artifact_stem(filter);
    let geojson_path = dir.join(format!("{stem}.geojson"));
    let csv_path = dir.join(format!("{stem}.csv"));

    fs::write(&geojson_path, geojson_payload(collection, filter)?)
        .with_context(|| format!("write {}", geojson_path.display()))?;
    fs::write(&csv_path, csv_payload(collection, filter)?)
        .with_context(|| format!("write {}", csv_path.display()))?;

    log::info!(
        "exported {} and {}",
        geojson_path.display(),
        csv_path.display()
    );
    Ok(Some(ExportedFiles {
        geojson: geojson_path,
        csv: csv_path,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_collection;

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("chronomap-export-{name}"));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_artifact_stem_combines_area_and_year() {
        assert_eq!(artifact_stem(&FilterState::new("X", 1990)), "X_1990");
    }

    #[test]
    fn test_csv_payload_matches_expected_text() {
        let collection = sample_collection();
        let csv = csv_payload(&collection, &FilterState::new("X", 2000)).unwrap();
        assert_eq!(csv, "name,area,year,lon,lat\nB,X,2000,140,36\n");
    }

    #[test]
    fn test_csv_unknown_year_is_an_empty_field() {
        let collection = PoiCollection::new(vec![crate::data::Poi {
            name: "Old Well".to_string(),
            area: "X".to_string(),
            year: None,
            lon: 1.5,
            lat: 2.0,
        }]);
        let csv = csv_payload(&collection, &FilterState::new("X", 1990)).unwrap();
        assert_eq!(csv, "name,area,year,lon,lat\nOld Well,X,,1.5,2\n");
    }

    #[test]
    fn test_geojson_payload_is_a_pretty_feature_collection() {
        let collection = sample_collection();
        let payload = geojson_payload(&collection, &FilterState::new("X", 1990)).unwrap();
        // Pretty-printed, and parses back to a one-feature collection.
        assert!(payload.contains('\n'));
        let parsed: geojson::GeoJson = payload.parse().unwrap();
        let geojson::GeoJson::FeatureCollection(fc) = parsed else {
            panic!("expected a feature collection");
        };
        assert_eq!(fc.features.len(), 1);
        let props = fc.features[0].properties.as_ref().unwrap();
        assert_eq!(props["name"], "A");
        assert_eq!(props["year"], 1990);
    }

    #[test]
    fn test_write_artifacts_uses_area_year_names() {
        let dir = test_dir("names");
        let collection = sample_collection();
        let files = write_artifacts(Some(&collection), &FilterState::new("X", 1990), &dir)
            .unwrap()
            .unwrap();
        assert_eq!(files.geojson, dir.join("X_1990.geojson"));
        assert_eq!(files.csv, dir.join("X_1990.csv"));
        assert!(files.geojson.exists());
        assert!(files.csv.exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_export_without_dataset_is_a_no_op() {
        let dir = test_dir("noop");
        let result = write_artifacts(None, &FilterState::new("X", 1990), &dir).unwrap();
        assert!(result.is_none());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_export_of_empty_match_still_writes_header_only_csv() {
        let collection = sample_collection();
        let filter = FilterState::new("X", 1905);
        let csv = csv_payload(&collection, &filter).unwrap();
        assert_eq!(csv, "name,area,year,lon,lat\n");
        let payload = geojson_payload(&collection, &filter).unwrap();
        let parsed: geojson::GeoJson = payload.parse().unwrap();
        let geojson::GeoJson::FeatureCollection(fc) = parsed else {
            panic!("expected a feature collection");
        };
        assert!(fc.features.is_empty());
    }
}
