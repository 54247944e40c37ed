// UI module for the SENTIC Analyzer
//
// This module organizes the UI into separate components:
// - `top_panel`: Title bar and service status indicator
// - `input_panel`: Text input and the analyze trigger
// - `result_panel`: Current result card with distribution bars and export
// - `history_panel`: Recent results, newest first
// - `view_model`: Pure state-to-view derivation shared by the panels
// - `app_state`: Application state management and main update loop

pub mod app_state;
pub mod history_panel;
pub mod input_panel;
pub mod result_panel;
pub mod top_panel;
pub mod view_model;

use crate::analysis::{AnalysisResponse, SubmitTicket};
use crate::service::ServiceError;

pub use app_state::AppState;

/// Messages from the service worker to the UI.
#[derive(Debug)]
pub enum UIRefreshState {
    AnalysisFinished {
        generation: u64,
        outcome: Result<AnalysisResponse, ServiceError>,
    },
    HealthChecked(Result<String, ServiceError>),
}

/// Commands from the UI to the service worker.
#[derive(Debug)]
pub enum UICommand {
    Analyze(SubmitTicket),
    CheckHealth,
}
