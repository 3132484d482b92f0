//! Data module - GeoJSON loading and filtering

mod filter;
mod loader;

pub use filter::{FilterState, YEAR_DEFAULT, YEAR_MAX, YEAR_MIN};
pub use loader::{DataLoader, LoaderError, Poi, PoiCollection, DATA_PATH};

#[cfg(test)]
pub(crate) use filter::tests::sample_collection;
