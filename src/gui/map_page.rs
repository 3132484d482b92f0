//! Map Page Widget
//! Control strip above the map: back/menu actions, the year slider with
//! its live value label, and the download action.

use crate::data::{YEAR_DEFAULT, YEAR_MAX, YEAR_MIN};
use egui::{Color32, RichText, Slider};

/// Map page state. The slider value is the only input the page owns;
/// the committed filter lives in the navigation state.
pub struct MapPage {
    pub year: i32,
    pub status: String,
}

impl Default for MapPage {
    fn default() -> Self {
        Self {
            year: YEAR_DEFAULT,
            status: String::new(),
        }
    }
}

impl MapPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the control strip. `area` is the committed area shown in the
    /// info line; `marker_count` feeds the status side of the strip.
    pub fn show_controls(
        &mut self,
        ui: &mut egui::Ui,
        area: &str,
        marker_count: usize,
    ) -> MapAction {
        let mut action = MapAction::None;

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("☰").on_hover_text("Menu").clicked() {
                action = MapAction::ToggleMenu;
            }
            if ui.button("← Back").clicked() {
                action = MapAction::Back;
            }

            ui.separator();
            ui.label(RichText::new(format!("Area: {area}")).strong());
            ui.separator();

            let response = ui.add(Slider::new(&mut self.year, YEAR_MIN..=YEAR_MAX).text("Year"));
            if response.changed() {
                action = MapAction::YearChanged(self.year);
            }
            ui.label(
                RichText::new(self.year.to_string())
                    .monospace()
                    .color(Color32::from_rgb(100, 149, 237)),
            );

            ui.separator();
            ui.label(
                RichText::new(format!("{marker_count} shown"))
                    .size(11.0)
                    .color(Color32::GRAY),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⬇ Download").clicked() {
                    action = MapAction::Export;
                }
            });
        });

        if !self.status.is_empty() {
            let status_color = if self.status.contains("Error") {
                Color32::from_rgb(220, 53, 69)
            } else {
                Color32::GRAY
            };
            ui.label(RichText::new(&self.status).size(11.0).color(status_color));
        }
        ui.add_space(4.0);

        action
    }
}

/// Actions triggered by the map page controls
#[derive(Debug, Clone, PartialEq)]
pub enum MapAction {
    None,
    Back,
    YearChanged(i32),
    Export,
    ToggleMenu,
}
