//! Viewport Fitting Module
//! Lon/lat bounds and the Web Mercator math that picks the camera
//! position covering them.

use std::f64::consts::PI;

/// Fractional padding applied around the fitted marker bounds.
pub const FIT_PADDING: f64 = 0.2;

/// Pixel size of one map tile.
const TILE_SIZE: f64 = 256.0;

/// Upper zoom bound applied when fitting; reached by degenerate bounds
/// such as a single marker.
const MAX_FIT_ZOOM: f64 = 17.0;

/// Latitude limit of the Web Mercator projection.
const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;

/// Axis-aligned lon/lat bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LonLatBounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl LonLatBounds {
    /// Bounds of a `(lon, lat)` point set; `None` when the set is empty,
    /// which callers treat as "leave the viewport alone".
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut bounds: Option<LonLatBounds> = None;
        for (lon, lat) in points {
            let b = bounds.get_or_insert(LonLatBounds {
                min_lon: lon,
                min_lat: lat,
                max_lon: lon,
                max_lat: lat,
            });
            b.min_lon = b.min_lon.min(lon);
            b.min_lat = b.min_lat.min(lat);
            b.max_lon = b.max_lon.max(lon);
            b.max_lat = b.max_lat.max(lat);
        }
        bounds
    }

    /// Bounds grown by `fraction` of each span on every side.
    pub fn padded(&self, fraction: f64) -> Self {
        let lon_pad = (self.max_lon - self.min_lon) * fraction;
        let lat_pad = (self.max_lat - self.min_lat) * fraction;
        Self {
            min_lon: self.min_lon - lon_pad,
            min_lat: (self.min_lat - lat_pad).max(-MAX_MERCATOR_LAT),
            max_lon: self.max_lon + lon_pad,
            max_lat: (self.max_lat + lat_pad).min(MAX_MERCATOR_LAT),
        }
    }

    /// `(lon, lat)` midpoint, with the latitude taken in projected space.
    pub fn center(&self) -> (f64, f64) {
        let lon = (self.min_lon + self.max_lon) / 2.0;
        let y = (mercator_y(self.min_lat) + mercator_y(self.max_lat)) / 2.0;
        (lon, mercator_lat(y))
    }
}

/// Zoom level at which `bounds` fits a view of the given pixel size.
///
/// The world is `TILE_SIZE * 2^zoom` pixels wide; longitude maps
/// linearly, latitude through the Mercator projection. The result is the
/// largest zoom satisfying both axes, clamped to the widget's range.
pub fn fit_zoom(bounds: &LonLatBounds, view_width: f64, view_height: f64) -> f64 {
    let span_x = (bounds.max_lon - bounds.min_lon) / 360.0;
    let span_y = mercator_y(bounds.min_lat) - mercator_y(bounds.max_lat);

    let zoom_x = axis_zoom(view_width, span_x);
    let zoom_y = axis_zoom(view_height, span_y);
    zoom_x.min(zoom_y).clamp(0.0, MAX_FIT_ZOOM)
}

/// Zoom at which a world-unit span fills `view_px` pixels. A degenerate
/// span puts no constraint on the axis.
fn axis_zoom(view_px: f64, span_world: f64) -> f64 {
    if span_world <= 0.0 || view_px <= 0.0 {
        return f64::INFINITY;
    }
    (view_px / (TILE_SIZE * span_world)).log2()
}

/// Latitude → vertical world coordinate in `[0, 1]`, north at 0.
fn mercator_y(lat: f64) -> f64 {
    let lat = lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
    (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0
}

/// Inverse of [`mercator_y`], in degrees.
fn mercator_lat(y: f64) -> f64 {
    (PI * (1.0 - 2.0 * y)).sinh().atan().to_degrees()
}
