//! Text input card with the analyze trigger.

use eframe::egui;
use egui::Color32;

use crate::ui::AppState;
use crate::ui::view_model::{ACCENT_BLUE, MUTED_TEXT, ViewModel};

/// Render the input box and the "Compute Vibe" button.
///
/// The button is disabled while a request is in flight; Ctrl/Cmd+Enter in the
/// text box submits as well and goes through the same in-flight check.
pub fn render(ui: &mut egui::Ui, state: &mut AppState, model: &ViewModel) {
    egui::Frame::group(ui.style()).inner_margin(16.0).show(ui, |ui| {
        let edit = egui::TextEdit::multiline(&mut state.view.input)
            .hint_text("Input text for analysis...")
            .desired_rows(8)
            .desired_width(f32::INFINITY)
            .font(egui::TextStyle::Body);
        let response = ui.add(edit);

        let shortcut = response.has_focus() && ui.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter));

        ui.horizontal(|ui| {
            let count_color = if model.char_count_over_limit {
                Color32::from_rgb(244, 63, 94)
            } else {
                MUTED_TEXT
            };
            ui.label(egui::RichText::new(&model.char_count_text).size(11.0).monospace().color(count_color));
        });
        ui.add_space(8.0);

        let button = egui::Button::new(egui::RichText::new(model.button_text).size(16.0).strong().color(Color32::WHITE))
            .fill(ACCENT_BLUE)
            .min_size(egui::vec2(ui.available_width(), 44.0));
        let clicked = ui.add_enabled(model.button_enabled, button).clicked();

        if clicked || shortcut {
            state.submit();
        }
    });
}
