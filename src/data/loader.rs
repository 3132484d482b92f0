//! GeoJSON Dataset Loader Module
//! Reads the point-of-interest collection and extracts the area list.

use geojson::{Feature, GeoJson, Value};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

/// Fixed location of the dataset, relative to the working directory.
pub const DATA_PATH: &str = "data/pois.geojson";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),
    #[error("Dataset is not a FeatureCollection")]
    NotAFeatureCollection,
}

/// One point of interest. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Poi {
    pub name: String,
    pub area: String,
    /// `None` means the year is unknown; such a poi matches any selected year.
    pub year: Option<i32>,
    pub lon: f64,
    pub lat: f64,
}

/// The loaded dataset. Ordered, written once, read-only for the rest of
/// the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoiCollection {
    pois: Vec<Poi>,
}

impl PoiCollection {
    pub fn new(pois: Vec<Poi>) -> Self {
        Self { pois }
    }

    pub fn pois(&self) -> &[Poi] {
        &self.pois
    }

    pub fn len(&self) -> usize {
        self.pois.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }

    /// Distinct non-empty area names in first-seen order.
    pub fn areas(&self) -> Vec<String> {
        let mut areas: Vec<String> = Vec::new();
        for poi in &self.pois {
            if !poi.area.is_empty() && !areas.contains(&poi.area) {
                areas.push(poi.area.clone());
            }
        }
        areas
    }
}

/// Properties carried by each dataset feature.
#[derive(Deserialize)]
struct PoiProperties {
    name: String,
    area: String,
    #[serde(default, deserialize_with = "year_from_value")]
    year: Option<i32>,
}

/// Normalize the year at the load boundary: accept a JSON integer or an
/// integer-valued string, treat anything else as unknown.
fn year_from_value<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        serde_json::Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    })
}

/// Owns the dataset for the lifetime of the session.
pub struct DataLoader {
    collection: Option<PoiCollection>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self { collection: None }
    }

    /// Read and parse the dataset file.
    pub fn read_file(path: &Path) -> Result<PoiCollection, LoaderError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let geojson = GeoJson::from_reader(reader).map_err(geojson::Error::from)?;
        Self::from_geojson(geojson)
    }

    /// Parse a dataset from in-memory GeoJSON text.
    pub fn parse(raw: &str) -> Result<PoiCollection, LoaderError> {
        let geojson: GeoJson = raw.parse()?;
        Self::from_geojson(geojson)
    }

    fn from_geojson(geojson: GeoJson) -> Result<PoiCollection, LoaderError> {
        let GeoJson::FeatureCollection(fc) = geojson else {
            return Err(LoaderError::NotAFeatureCollection);
        };

        let mut pois = Vec::with_capacity(fc.features.len());
        for feature in fc.features {
            if let Some(poi) = poi_from_feature(feature) {
                pois.push(poi);
            }
        }
        Ok(PoiCollection::new(pois))
    }

    /// Store the collection produced by the background load.
    pub fn set_collection(&mut self, collection: PoiCollection) {
        self.collection = Some(collection);
    }

    pub fn collection(&self) -> Option<&PoiCollection> {
        self.collection.as_ref()
    }

    /// Area list for the dropdown; empty until the dataset has arrived.
    pub fn areas(&self) -> Vec<String> {
        self.collection
            .as_ref()
            .map(|c| c.areas())
            .unwrap_or_default()
    }

    pub fn poi_count(&self) -> usize {
        self.collection.as_ref().map(|c| c.len()).unwrap_or(0)
    }
}

/// Presence checks only: a usable feature has a point geometry, a name,
/// and a non-empty area. Anything else could never be rendered or
/// exported and is skipped.
fn poi_from_feature(feature: Feature) -> Option<Poi> {
    let Some(geometry) = feature.geometry else {
        log::debug!("skipping feature without geometry");
        return None;
    };
    let Value::Point(position) = geometry.value else {
        log::debug!("skipping feature with non-point geometry");
        return None;
    };
    let [lon, lat, ..] = position.as_slice() else {
        log::debug!("skipping feature with malformed point coordinates");
        return None;
    };

    let properties = feature.properties?;
    let properties: PoiProperties =
        match serde_json::from_value(serde_json::Value::Object(properties)) {
            Ok(p) => p,
            Err(e) => {
                log::debug!("skipping feature with unusable properties: {e}");
                return None;
            }
        };
    if properties.area.is_empty() {
        log::debug!("skipping feature {:?} with blank area", properties.name);
        return None;
    }

    Some(Poi {
        name: properties.name,
        area: properties.area,
        year: properties.year,
        lon: *lon,
        lat: *lat,
    })
}
