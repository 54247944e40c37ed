//! Result card: label, score, distribution bars and export.

use eframe::egui;

use crate::ui::AppState;
use crate::ui::view_model::{BAR_TRACK, DistributionBar, MUTED_TEXT, ViewModel};

const BAR_HEIGHT: f32 = 6.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, model: &ViewModel) {
    let Some(result) = &model.result else {
        return;
    };

    egui::Frame::group(ui.style()).inner_margin(20.0).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new("SENTIMENT RESULT").size(11.0).strong().color(MUTED_TEXT));
                ui.label(egui::RichText::new(&result.label).size(34.0).strong().color(result.label_color));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new("SCORE").size(11.0).strong().color(MUTED_TEXT));
                    ui.label(egui::RichText::new(&result.score_text).size(22.0).monospace());
                });
            });
        });
        ui.add_space(16.0);

        for bar in &result.bars {
            render_bar(ui, bar);
            ui.add_space(10.0);
        }

        ui.add_space(6.0);
        if ui.button(format!("Export {}", result.export_name)).clicked() {
            state.export_current_result();
        }
    });
}

fn render_bar(ui: &mut egui::Ui, bar: &DistributionBar) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(bar.name.to_uppercase()).size(10.0).strong().color(MUTED_TEXT));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(&bar.percent_text).size(10.0).strong().color(MUTED_TEXT));
        });
    });

    let (track, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), BAR_HEIGHT), egui::Sense::hover());
    let painter = ui.painter_at(track);
    painter.rect_filled(track, BAR_HEIGHT / 2.0, BAR_TRACK);

    let mut fill = track;
    fill.set_width(track.width() * bar.width_percent / 100.0);
    if fill.width() > 0.0 {
        painter.rect_filled(fill, BAR_HEIGHT / 2.0, bar.color);
    }
}
