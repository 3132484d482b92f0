//! Map module - slippy map surface, markers, viewport fitting

mod markers;
pub mod viewport;

pub use markers::{build_markers, marker_bounds, Marker, YEAR_UNKNOWN_LABEL};
pub use viewport::{fit_zoom, LonLatBounds, FIT_PADDING};

use egui::{Align2, Color32, FontId};
use walkers::extras::{Place, Places, Style};
use walkers::sources::OpenStreetMap;
use walkers::{HttpTiles, Map, MapMemory, Position};

/// Fixed initial view, roughly the center of Japan.
pub const DEFAULT_CENTER_LAT: f64 = 35.681;
pub const DEFAULT_CENTER_LON: f64 = 139.767;
pub const DEFAULT_ZOOM: f64 = 6.0;

/// Tile provider credit, drawn over the map corner.
const ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Owns the tile fetcher and the camera of the map widget.
pub struct MapSurface {
    tiles: HttpTiles,
    memory: MapMemory,
    pending_fit: Option<LonLatBounds>,
}

impl MapSurface {
    pub fn new(ctx: egui::Context) -> Self {
        let mut surface = Self {
            tiles: HttpTiles::new(OpenStreetMap, ctx),
            memory: MapMemory::default(),
            pending_fit: None,
        };
        surface.reset_view();
        surface
    }

    /// Put the camera back on the fixed default center and zoom. Called
    /// on every Selection → Map transition.
    pub fn reset_view(&mut self) {
        self.memory
            .center_at(Position::from_lat_lon(DEFAULT_CENTER_LAT, DEFAULT_CENTER_LON));
        if let Err(e) = self.memory.set_zoom(DEFAULT_ZOOM) {
            log::warn!("default zoom rejected: {e:?}");
        }
        self.pending_fit = None;
    }

    /// Ask for a fit over `bounds` on the next draw. `None` (the empty
    /// marker set) leaves the camera where it was.
    pub fn request_fit(&mut self, bounds: Option<LonLatBounds>) {
        if let Some(bounds) = bounds {
            self.pending_fit = Some(bounds);
        }
    }

    /// Draw the map with the given markers, applying any pending fit
    /// now that the view size is known.
    pub fn show(&mut self, ui: &mut egui::Ui, markers: &[Marker]) {
        if let Some(bounds) = self.pending_fit.take() {
            let size = ui.available_size();
            self.fit(&bounds, f64::from(size.x), f64::from(size.y));
        }

        let places: Vec<Place> = markers
            .iter()
            .map(|marker| Place {
                position: Position::from_lat_lon(marker.lat, marker.lon),
                label: marker.label.clone(),
                symbol: '📍',
                style: Style::default(),
            })
            .collect();

        let rect = ui.max_rect();
        ui.add(
            Map::new(
                Some(&mut self.tiles),
                &mut self.memory,
                Position::from_lat_lon(DEFAULT_CENTER_LAT, DEFAULT_CENTER_LON),
            )
            .with_plugin(Places::new(places)),
        );

        ui.painter().text(
            rect.right_bottom() - egui::vec2(6.0, 4.0),
            Align2::RIGHT_BOTTOM,
            ATTRIBUTION,
            FontId::proportional(10.0),
            Color32::from_gray(70),
        );
    }

    fn fit(&mut self, bounds: &LonLatBounds, view_width: f64, view_height: f64) {
        let padded = bounds.padded(FIT_PADDING);
        let (lon, lat) = padded.center();
        self.memory.center_at(Position::from_lat_lon(lat, lon));
        let zoom = fit_zoom(&padded, view_width, view_height);
        if let Err(e) = self.memory.set_zoom(zoom) {
            log::warn!("fit zoom {zoom} rejected: {e:?}");
        }
    }
}
