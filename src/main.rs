//! ChronoMap - Area & Year Point-of-Interest Map Browser
//!
//! A Rust application for browsing a point-of-interest dataset on a
//! slippy map, filtered by area and year, with GeoJSON and CSV export.

mod data;
mod export;
mod gui;
mod map;

use eframe::egui;
use gui::ChronoMapApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([800.0, 560.0])
            .with_title("ChronoMap"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "ChronoMap",
        options,
        Box::new(|cc| Ok(Box::new(ChronoMapApp::new(cc)))),
    )
}
