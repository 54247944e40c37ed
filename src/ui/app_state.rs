//! # Application State Management
//!
//! This module implements the central `AppState` struct which owns the
//! analyzer's [`ViewState`] and implements the `eframe::App` trait.
//!
//! ## Responsibilities
//!
//! - Turns user actions (analyze, export, health check) into state changes and worker commands
//! - Processes results from the service worker via `ui_refresh_rx`
//! - Shows the blocking notice window
//! - Coordinates rendering of all UI panels (top, history, input, result)
//! - Persists user settings (last export directory) across application sessions
//!
//! Results and history are deliberately not persisted; they live for one session.

use eframe::egui;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{UICommand, UIRefreshState};
use crate::analysis::{Completion, SubmitRejection, ViewState};
use crate::export;

/// Repaint interval while waiting on the worker.
const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

/// Result of the most recent service health check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceStatus {
    Checking,
    Online(String),
    Unreachable,
}

/// Central application state.
pub struct AppState {
    /// Input, current result, history, loading and notice.
    pub view: ViewState,
    /// Receiver for results from the service worker.
    pub ui_refresh_rx: crate::UIRefreshQueueReceiver,
    /// Sender for commands to the service worker.
    pub ui_command_tx: crate::UICommandQueueSender,
    /// Last known service health.
    pub service_status: ServiceStatus,
    /// Base URL of the service, shown in notices.
    pub base_url: String,
    /// Last directory used for exporting a result.
    pub last_export_dir: Option<String>,
}

/// Settings persisted across application sessions.
#[derive(Default, Serialize, Deserialize)]
struct PersistedSettings {
    last_export_dir: Option<String>,
}

impl AppState {
    /// Create a new AppState, loading persisted settings if available.
    ///
    /// Sends an initial health check so the header shows the service status on start.
    pub fn new(rx: crate::UIRefreshQueueReceiver, tx: crate::UICommandQueueSender, base_url: String, storage: Option<&dyn eframe::Storage>) -> Self {
        let persisted: PersistedSettings = storage.and_then(|s| eframe::get_value(s, "app_settings")).unwrap_or_default();

        let mut state = Self {
            view: ViewState::new(),
            ui_refresh_rx: rx,
            ui_command_tx: tx,
            service_status: ServiceStatus::Checking,
            base_url,
            last_export_dir: persisted.last_export_dir,
        };
        state.check_health();
        state
    }

    /// The single user-facing message for any service failure.
    pub fn unavailable_notice(&self) -> String {
        format!("Backend service unreachable. Ensure the sentiment service is running at {}.", self.base_url)
    }

    /// Submit the current input for analysis.
    pub fn submit(&mut self) {
        let now_ms = chrono::Utc::now().timestamp_millis();
        match self.view.begin_submit(now_ms) {
            Ok(ticket) => {
                let generation = ticket.generation;
                log::debug!("Submitting analysis #{} (generation {})", ticket.id, generation);
                if self.ui_command_tx.send(UICommand::Analyze(ticket)).is_err() {
                    log::error!("Service worker is not running");
                    let notice = self.unavailable_notice();
                    self.view.finish(generation, Err(notice));
                }
            }
            Err(SubmitRejection::EmptyInput) | Err(SubmitRejection::Busy) | Err(SubmitRejection::NoticePending) => {}
            Err(SubmitRejection::TooLong { chars }) => {
                log::warn!("Rejected input of {} characters", chars);
            }
        }
    }

    /// Ask the worker for a fresh health check.
    pub fn check_health(&mut self) {
        if self.ui_command_tx.send(UICommand::CheckHealth).is_ok() {
            self.service_status = ServiceStatus::Checking;
        } else {
            self.service_status = ServiceStatus::Unreachable;
        }
    }

    /// Save the current result as pretty JSON through a native save dialog.
    ///
    /// Cancelling the dialog does nothing; a failed write raises a notice.
    pub fn export_current_result(&mut self) {
        let Some(result) = self.view.current_result.clone() else {
            return;
        };

        let mut dialog = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(export::export_file_name(&result));
        if let Some(dir) = &self.last_export_dir {
            dialog = dialog.set_directory(dir);
        }
        let Some(path) = dialog.save_file() else {
            return;
        };
        if let Some(parent) = path.parent() {
            self.last_export_dir = Some(parent.to_string_lossy().to_string());
        }

        if let Err(e) = export::write_export(&path, &result) {
            log::error!("{:#}", e);
            self.view.notice = Some(format!("Export failed: {:#}", e));
        }
    }

    /// Apply one message from the service worker.
    pub fn apply_refresh(&mut self, msg: UIRefreshState) {
        match msg {
            UIRefreshState::AnalysisFinished { generation, outcome } => {
                // The worker already logged the failure detail
                let notice = self.unavailable_notice();
                let outcome = outcome.map_err(|_| notice);
                if self.view.finish(generation, outcome) == Completion::Stale {
                    log::debug!("Ignored result for generation {}", generation);
                }
            }
            UIRefreshState::HealthChecked(Ok(status)) => {
                self.service_status = ServiceStatus::Online(status);
            }
            UIRefreshState::HealthChecked(Err(_)) => {
                self.service_status = ServiceStatus::Unreachable;
            }
        }
    }

    /// Show the pending notice as a modal; the rest of the window is blocked until it is dismissed.
    fn render_notice(&mut self, ctx: &egui::Context, notice: Option<&str>) {
        let Some(notice) = notice else {
            return;
        };
        let modal = egui::Modal::new(egui::Id::new("alert")).show(ctx, |ui| {
            ui.set_max_width(420.0);
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.label(notice);
                ui.add_space(20.0);
                let ok = ui.button("OK").clicked();
                ui.add_space(10.0);
                ok
            })
            .inner
        });
        if modal.inner || modal.should_close() {
            self.view.dismiss_notice();
        }
    }
}

impl eframe::App for AppState {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedSettings {
            last_export_dir: self.last_export_dir.clone(),
        };
        eframe::set_value(storage, "app_settings", &settings);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(msg) = self.ui_refresh_rx.try_recv() {
            self.apply_refresh(msg);
        }

        // Worker replies arrive without input events, so keep polling while one is due
        if self.view.loading() || self.service_status == ServiceStatus::Checking {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }

        let model = super::view_model::build(&self.view);

        self.render_notice(ctx, model.notice.as_deref());

        super::top_panel::render(ctx, self);
        super::history_panel::render(ctx, &model);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                super::input_panel::render(ui, self, &model);
                ui.add_space(24.0);
                super::result_panel::render(ui, self, &model);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisResponse, Distribution, HISTORY_CAPACITY, SentimentLabel};
    use crate::service::ServiceError;
    use std::sync::mpsc;

    fn app() -> (AppState, mpsc::Receiver<UICommand>) {
        let (_refresh_tx, refresh_rx) = mpsc::channel();
        let (command_tx, command_rx) = mpsc::channel();
        let state = AppState::new(refresh_rx, command_tx, "http://localhost:8000".to_string(), None);
        // Drain the startup health check
        assert!(matches!(command_rx.try_recv(), Ok(UICommand::CheckHealth)));
        (state, command_rx)
    }

    fn response() -> AnalysisResponse {
        AnalysisResponse {
            label: SentimentLabel::Positive,
            score: 0.92,
            distribution: Distribution { positive: 0.92, neutral: 0.06, negative: 0.02 },
        }
    }

    fn take_ticket(rx: &mpsc::Receiver<UICommand>) -> crate::analysis::SubmitTicket {
        match rx.try_recv() {
            Ok(UICommand::Analyze(ticket)) => ticket,
            other => panic!("expected analyze command, got {:?}", other),
        }
    }

    #[test]
    fn submit_sends_exactly_one_command() {
        let (mut state, rx) = app();
        state.view.input = "I love this".to_string();
        state.submit();
        let ticket = take_ticket(&rx);
        assert_eq!(ticket.text, "I love this");
        assert!(state.view.loading());

        // Double click while loading does not reach the worker
        state.submit();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn empty_submit_sends_nothing() {
        let (mut state, rx) = app();
        state.view.input = "  ".to_string();
        state.submit();
        assert!(rx.try_recv().is_err());
        assert!(!state.view.loading());
        assert!(state.view.notice.is_none());
    }

    #[test]
    fn pending_notice_blocks_dispatch_until_dismissed() {
        let (mut state, rx) = app();
        state.view.notice = Some(state.unavailable_notice());
        state.view.input = "again".to_string();
        state.submit();
        assert!(rx.try_recv().is_err());
        assert!(!state.view.loading());

        state.view.dismiss_notice();
        state.submit();
        assert_eq!(take_ticket(&rx).text, "again");
    }

    #[test]
    fn service_error_collapses_into_single_notice() {
        let (mut state, rx) = app();
        state.view.input = "hello".to_string();
        state.submit();
        let ticket = take_ticket(&rx);

        state.apply_refresh(UIRefreshState::AnalysisFinished {
            generation: ticket.generation,
            outcome: Err(ServiceError::MalformedResponse("missing field `distribution`".to_string())),
        });
        assert_eq!(state.view.notice, Some(state.unavailable_notice()));
        assert!(!state.view.loading());
        assert!(state.view.current_result.is_none());
        assert!(state.view.history.is_empty());
        assert_eq!(state.view.input, "hello");
    }

    #[test]
    fn eleven_round_trips_keep_ten_results() {
        let (mut state, rx) = app();
        for n in 0..11 {
            state.view.input = format!("message {}", n);
            state.submit();
            let ticket = take_ticket(&rx);
            state.apply_refresh(UIRefreshState::AnalysisFinished {
                generation: ticket.generation,
                outcome: Ok(response()),
            });
        }
        assert_eq!(state.view.history.len(), HISTORY_CAPACITY);
        assert_eq!(state.view.history.latest().map(|r| r.text.as_str()), Some("message 10"));
        assert_eq!(state.view.history.get(HISTORY_CAPACITY - 1).map(|r| r.text.as_str()), Some("message 1"));
    }

    #[test]
    fn missing_worker_fails_the_submission() {
        let (refresh_tx, refresh_rx) = mpsc::channel::<UIRefreshState>();
        drop(refresh_tx);
        let (command_tx, command_rx) = mpsc::channel();
        drop(command_rx);
        let mut state = AppState::new(refresh_rx, command_tx, "http://localhost:8000".to_string(), None);
        assert_eq!(state.service_status, ServiceStatus::Unreachable);

        state.view.input = "anyone there".to_string();
        state.submit();
        assert!(!state.view.loading());
        assert!(state.view.notice.is_some());
        assert_eq!(state.view.input, "anyone there");
    }

    #[test]
    fn health_results_update_status() {
        let (mut state, _rx) = app();
        assert_eq!(state.service_status, ServiceStatus::Checking);
        state.apply_refresh(UIRefreshState::HealthChecked(Ok("healthy".to_string())));
        assert_eq!(state.service_status, ServiceStatus::Online("healthy".to_string()));
        state.apply_refresh(UIRefreshState::HealthChecked(Err(ServiceError::Status(503))));
        assert_eq!(state.service_status, ServiceStatus::Unreachable);
    }
}
