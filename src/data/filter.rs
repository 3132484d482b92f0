//! Filter Module
//! The area + year selection shared by the renderer and the exporter.

use crate::data::{Poi, PoiCollection};

/// Year slider bounds and initial value.
pub const YEAR_MIN: i32 = 1900;
pub const YEAR_MAX: i32 = 2025;
pub const YEAR_DEFAULT: i32 = 2000;

/// Current user selection. The area is non-empty by construction: it is
/// only ever set by a successful Selection → Map transition.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub area: String,
    pub year: i32,
}

impl FilterState {
    pub fn new(area: impl Into<String>, year: i32) -> Self {
        Self {
            area: area.into(),
            year,
        }
    }

    /// A poi matches when its area equals the selected area and its year
    /// is either unknown or equal to the selected year.
    pub fn matches(&self, poi: &Poi) -> bool {
        poi.area == self.area && poi.year.map_or(true, |y| y == self.year)
    }

    /// The matching subset of the full collection, in dataset order.
    pub fn apply<'a>(&self, collection: &'a PoiCollection) -> Vec<&'a Poi> {
        collection
            .pois()
            .iter()
            .filter(|poi| self.matches(poi))
            .collect()
    }
}
