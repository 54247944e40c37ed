//! # View Model
//!
//! Pure derivation of everything the panels draw from a [`ViewState`].
//! The egui panels only lay out what `build` returns, so rendering the same
//! state twice always produces the same output.

use chrono::{Local, TimeZone};
use egui::Color32;

use crate::analysis::{AnalysisResult, MAX_INPUT_CHARS, SentimentLabel, ViewState};
use crate::export::export_file_name;

/// Number of characters of the input shown in a history row.
const HISTORY_SNIPPET_CHARS: usize = 48;

pub const ACCENT_BLUE: Color32 = Color32::from_rgb(59, 130, 246);
pub const MUTED_TEXT: Color32 = Color32::from_rgb(100, 116, 139);
pub const BAR_TRACK: Color32 = Color32::from_rgb(30, 41, 59);

/// One row of the distribution breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionBar {
    pub name: &'static str,
    /// Bar fill in percent, clamped to [0, 100].
    pub width_percent: f32,
    /// Raw value as a whole percentage, e.g. "92%".
    pub percent_text: String,
    pub color: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub label: String,
    pub label_color: Color32,
    pub score_text: String,
    pub bars: [DistributionBar; 3],
    pub export_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub id: i64,
    pub time_text: String,
    pub label: String,
    pub label_color: Color32,
    pub snippet: String,
}

/// Everything the analyzer window shows for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub button_text: &'static str,
    pub button_enabled: bool,
    pub char_count_text: String,
    pub char_count_over_limit: bool,
    pub result: Option<ResultView>,
    pub history: Vec<HistoryRow>,
    pub notice: Option<String>,
}

/// Text colour for a sentiment label.
pub fn label_color(label: SentimentLabel) -> Color32 {
    match label {
        SentimentLabel::Positive => Color32::from_rgb(52, 211, 153), // emerald
        SentimentLabel::Negative => Color32::from_rgb(244, 63, 94),  // rose
        SentimentLabel::Neutral => Color32::from_rgb(148, 163, 184), // slate
    }
}

/// Linear mapping of a distribution component to a bar width in percent.
pub fn bar_width_percent(value: f64) -> f32 {
    (value.clamp(0.0, 1.0) * 100.0) as f32
}

fn bar(name: &'static str, value: f64, color: Color32) -> DistributionBar {
    DistributionBar {
        name,
        width_percent: bar_width_percent(value),
        percent_text: format!("{:.0}%", (value * 100.0).round()),
        color,
    }
}

fn result_view(result: &AnalysisResult) -> ResultView {
    let d = &result.distribution;
    ResultView {
        label: result.label.to_string(),
        label_color: label_color(result.label),
        score_text: format!("{:.1}%", (result.score * 1000.0).round() / 10.0),
        bars: [
            bar("Positive", d.positive, Color32::from_rgb(16, 185, 129)),
            bar("Neutral", d.neutral, Color32::from_rgb(71, 85, 105)),
            bar("Negative", d.negative, Color32::from_rgb(244, 63, 94)),
        ],
        export_name: export_file_name(result),
    }
}

fn snippet(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > HISTORY_SNIPPET_CHARS {
        let cut: String = flat.chars().take(HISTORY_SNIPPET_CHARS).collect();
        format!("{}…", cut)
    } else {
        flat
    }
}

fn history_row(result: &AnalysisResult) -> HistoryRow {
    let time_text = match Local.timestamp_millis_opt(result.id).single() {
        Some(dt) => dt.format("%H:%M:%S").to_string(),
        None => "--:--:--".to_string(),
    };
    HistoryRow {
        id: result.id,
        time_text,
        label: result.label.to_string(),
        label_color: label_color(result.label),
        snippet: snippet(&result.text),
    }
}

/// Build the view model for the given state.
pub fn build(state: &ViewState) -> ViewModel {
    let loading = state.loading();
    let chars = state.input.chars().count();
    ViewModel {
        button_text: if loading { "Analyzing..." } else { "Compute Vibe" },
        button_enabled: !loading,
        char_count_text: format!("{}/{}", chars, MAX_INPUT_CHARS),
        char_count_over_limit: chars > MAX_INPUT_CHARS,
        result: state.current_result.as_ref().map(result_view),
        history: state.history.iter().map(history_row).collect(),
        notice: state.notice.clone(),
    }
}
