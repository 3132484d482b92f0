//! Selection Page Widget
//! Landing page with the area dropdown and the go action.

use egui::{Color32, ComboBox, RichText};

/// Landing page state: the selectable areas and the pending choice.
pub struct SelectionPage {
    pub areas: Vec<String>,
    pub selected_area: String,
    pub status: String,
}

impl Default for SelectionPage {
    fn default() -> Self {
        Self {
            areas: Vec::new(),
            selected_area: String::new(),
            status: "Loading dataset...".to_string(),
        }
    }
}

impl SelectionPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the dropdown contents once the dataset has arrived.
    pub fn update_areas(&mut self, areas: Vec<String>) {
        self.areas = areas;
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the page.
    pub fn show(&mut self, ui: &mut egui::Ui) -> SelectionAction {
        let mut action = SelectionAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(
                RichText::new("🗺 ChronoMap")
                    .size(28.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Points of interest by area and year")
                    .size(12.0)
                    .color(Color32::GRAY),
            );
            ui.add_space(20.0);
            ui.separator();
            ui.add_space(20.0);

            ui.label(RichText::new("📍 Area").size(14.0).strong());
            ui.add_space(8.0);

            let selected_text = if self.selected_area.is_empty() {
                "Select an area".to_string()
            } else {
                self.selected_area.clone()
            };
            ComboBox::from_id_salt("area_select")
                .width(220.0)
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for area in &self.areas {
                        if ui
                            .selectable_label(self.selected_area == *area, area)
                            .clicked()
                        {
                            self.selected_area = area.clone();
                        }
                    }
                });

            ui.add_space(20.0);

            let button = egui::Button::new(RichText::new("▶ View Map").size(16.0))
                .min_size(egui::vec2(180.0, 35.0));
            if ui.add(button).clicked() {
                action = SelectionAction::EnterMap;
            }

            ui.add_space(20.0);

            let status_color = if self.status.contains("Error") {
                Color32::from_rgb(220, 53, 69)
            } else {
                Color32::GRAY
            };
            ui.label(RichText::new(&self.status).size(11.0).color(status_color));
        });

        action
    }
}

/// Actions triggered by the selection page
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionAction {
    None,
    EnterMap,
}
