//! # Top Panel - Title and Service Status
//!
//! Renders the fixed header with the application title and a clickable
//! indicator showing the result of the last service health check.

use crate::ui::AppState;
use crate::ui::app_state::ServiceStatus;
use crate::ui::view_model::{ACCENT_BLUE, MUTED_TEXT};
use eframe::egui;
use egui::Color32;

pub fn render(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("header").exact_height(72.0).show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;
                    ui.label(egui::RichText::new("SENTIC").size(26.0).strong().color(ACCENT_BLUE));
                    ui.label(egui::RichText::new(".Analyzer").size(26.0).strong());
                });
                ui.label(egui::RichText::new("NEURAL SENTIMENT ANALYSIS").size(11.0).color(MUTED_TEXT));
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (text, color) = match &state.service_status {
                    ServiceStatus::Checking => ("● checking".to_string(), MUTED_TEXT),
                    ServiceStatus::Online(_) => ("● online".to_string(), Color32::from_rgb(52, 211, 153)),
                    ServiceStatus::Unreachable => ("● unreachable".to_string(), Color32::from_rgb(244, 63, 94)),
                };
                let tooltip = match &state.service_status {
                    ServiceStatus::Online(status) => format!("{}\n{}\nClick to re-check", state.base_url, status),
                    _ => format!("{}\nClick to re-check", state.base_url),
                };

                let button = egui::Button::new(egui::RichText::new(text).color(color)).frame(false);
                if ui.add(button).on_hover_text(tooltip).clicked() {
                    state.check_health();
                }
            });
        });
    });
}
