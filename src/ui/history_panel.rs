//! # History Panel
//!
//! Right-side list of the most recent results, newest first. The list is
//! read-only: it mirrors `ViewState::history` and never changes the current result.

use eframe::egui;

use crate::analysis::HISTORY_CAPACITY;
use crate::ui::view_model::{MUTED_TEXT, ViewModel};

pub fn render(ctx: &egui::Context, model: &ViewModel) {
    egui::SidePanel::right("history_right").default_width(300.0).resizable(true).show(ctx, |ui| {
        ui.add_space(8.0);
        ui.heading(format!("History ({}/{})", model.history.len(), HISTORY_CAPACITY));
        ui.separator();

        if model.history.is_empty() {
            ui.label(egui::RichText::new("No analyses yet").color(MUTED_TEXT));
            return;
        }

        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            for row in &model.history {
                ui.push_id(row.id, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&row.time_text).monospace().color(MUTED_TEXT));
                        ui.label(egui::RichText::new(&row.label).strong().color(row.label_color));
                    });
                    ui.label(&row.snippet);
                    ui.separator();
                });
            }
        });
    });
}
