//! ChronoMap Main Application
//! Owns the dataset, the navigation state machine, the marker set, and
//! the map surface; panels report user actions back as typed enums.

use crate::data::{DataLoader, PoiCollection, DATA_PATH};
use crate::export;
use crate::gui::{MapAction, MapPage, Nav, NavError, Page, SelectionAction, SelectionPage};
use crate::map::{build_markers, marker_bounds, MapSurface, Marker};
use egui::RichText;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// Dataset load result from the background thread
enum LoadResult {
    Complete {
        collection: PoiCollection,
        areas: Vec<String>,
    },
    Error(String),
}

/// Main application window.
pub struct ChronoMapApp {
    loader: DataLoader,
    nav: Nav,
    selection_page: SelectionPage,
    map_page: MapPage,
    map: Option<MapSurface>,
    markers: Vec<Marker>,

    // Async dataset loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl ChronoMapApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            loader: DataLoader::new(),
            nav: Nav::new(),
            selection_page: SelectionPage::new(),
            map_page: MapPage::new(),
            map: None,
            markers: Vec::new(),
            load_rx: None,
            is_loading: false,
        };
        app.start_load();
        app
    }

    /// Kick off the one-time dataset load. The UI stays responsive; the
    /// area dropdown is simply empty until the result arrives.
    fn start_load(&mut self) {
        let (tx, rx) = channel();
        self.load_rx = Some(rx);
        self.is_loading = true;

        let path = PathBuf::from(DATA_PATH);
        thread::spawn(move || {
            let result = match DataLoader::read_file(&path) {
                Ok(collection) => {
                    let areas = collection.areas();
                    LoadResult::Complete { collection, areas }
                }
                Err(e) => LoadResult::Error(e.to_string()),
            };
            let _ = tx.send(result);
        });
    }

    /// Check for dataset loading results
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Complete { collection, areas } => {
                        self.selection_page.set_status(&format!(
                            "Loaded {} places in {} areas",
                            collection.len(),
                            areas.len()
                        ));
                        log::info!("dataset loaded: {} places", collection.len());
                        self.loader.set_collection(collection);
                        self.selection_page.update_areas(areas);
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                    LoadResult::Error(error) => {
                        log::error!("dataset load failed: {error}");
                        self.selection_page.set_status(&format!("Error: {error}"));
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// Handle the go action: commit the filter and switch to the map, or
    /// block with a notification when no area has been chosen.
    fn handle_enter_map(&mut self, ctx: &egui::Context) {
        let area = self.selection_page.selected_area.clone();
        match self.nav.enter_map(&area, self.map_page.year) {
            Ok(()) => {
                let map = self
                    .map
                    .get_or_insert_with(|| MapSurface::new(ctx.clone()));
                map.reset_view();
                self.map_page.set_status("");
                self.rebuild_markers();
            }
            Err(NavError::NoAreaSelected) => {
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Warning)
                    .set_title("ChronoMap")
                    .set_description("Please select an area")
                    .set_buttons(rfd::MessageButtons::Ok)
                    .show();
            }
        }
    }

    /// Discard and rebuild the full marker set from the committed filter,
    /// then fit the viewport when anything matched. An empty match leaves
    /// the camera untouched.
    fn rebuild_markers(&mut self) {
        let (Some(collection), Some(filter)) = (self.loader.collection(), self.nav.filter())
        else {
            self.markers.clear();
            return;
        };
        self.markers = build_markers(collection, filter);
        log::debug!(
            "rendered {} markers for {} @ {}",
            self.markers.len(),
            filter.area,
            filter.year
        );
        if let Some(map) = &mut self.map {
            map.request_fit(marker_bounds(&self.markers));
        }
    }

    /// Handle the download action: re-filter the full collection and
    /// write both artifacts. Silently does nothing with no dataset; a
    /// cancelled directory dialog aborts the export.
    fn handle_export(&mut self) {
        if self.loader.collection().is_none() {
            return;
        }
        let Some(filter) = self.nav.filter().cloned() else {
            return;
        };

        let Some(dir) = rfd::FileDialog::new()
            .set_title("Choose export directory")
            .pick_folder()
        else {
            return; // User cancelled
        };

        match export::write_artifacts(self.loader.collection(), &filter, &dir) {
            Ok(Some(files)) => {
                self.map_page.set_status(&format!(
                    "Exported {} and {}",
                    files.geojson.display(),
                    files.csv.display()
                ));
            }
            Ok(None) => {}
            Err(e) => {
                log::error!("export failed: {e:#}");
                self.map_page.set_status(&format!("Error: export failed: {e:#}"));
            }
        }
    }

    fn show_selection(&mut self, ctx: &egui::Context) {
        let mut action = SelectionAction::None;
        egui::CentralPanel::default().show(ctx, |ui| {
            action = self.selection_page.show(ui);
        });

        if action == SelectionAction::EnterMap {
            self.handle_enter_map(ctx);
        }
    }

    fn show_map(&mut self, ctx: &egui::Context) {
        if self.nav.menu_open() {
            self.show_menu(ctx);
        }

        let area = self
            .nav
            .filter()
            .map(|f| f.area.clone())
            .unwrap_or_default();
        let marker_count = self.markers.len();

        let mut action = MapAction::None;
        egui::TopBottomPanel::top("map_controls").show(ctx, |ui| {
            action = self.map_page.show_controls(ui, &area, marker_count);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(map) = &mut self.map {
                map.show(ui, &self.markers);
            }
        });

        match action {
            MapAction::Back => self.nav.back(),
            MapAction::YearChanged(year) => {
                self.nav.set_year(year);
                self.rebuild_markers();
            }
            MapAction::Export => self.handle_export(),
            MapAction::ToggleMenu => self.nav.toggle_menu(),
            MapAction::None => {}
        }
    }

    /// Side menu opened by the hamburger toggle. Purely informational;
    /// touches neither the filter nor the marker set.
    fn show_menu(&self, ctx: &egui::Context) {
        egui::SidePanel::right("menu")
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.label(RichText::new("☰ Menu").strong());
                ui.separator();
                ui.label(format!("{} places loaded", self.loader.poi_count()));
                ui.label(format!("{} areas", self.loader.areas().len()));
                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!("Dataset: {DATA_PATH}"))
                        .size(11.0)
                        .color(egui::Color32::GRAY),
                );
            });
    }
}

impl eframe::App for ChronoMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();

        // Request repaint while the dataset is still loading
        if self.is_loading {
            ctx.request_repaint();
        }

        match self.nav.page() {
            Page::Selection => self.show_selection(ctx),
            Page::Map => self.show_map(ctx),
        }
    }
}
