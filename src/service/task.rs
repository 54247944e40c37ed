//! Background worker executing service calls on behalf of the UI.
//!
//! The worker owns the HTTP client and processes one command at a time, so at
//! most one request is in flight. Results go back to the UI tagged with the
//! generation they were issued for.

use super::client::SentimentService;
use crate::ui::{UICommand, UIRefreshState};
use crate::{UICommandQueueReceiver, UIRefreshQueueSender};

/// Run the worker loop until the UI drops its command sender.
///
/// # Parameters
///
/// * `service` - Backend used to execute requests
/// * `ui_command_rx` - Commands issued by the UI
/// * `ui_refresh_tx` - Channel for sending results back to the UI
pub fn service_task<S: SentimentService>(service: S, ui_command_rx: UICommandQueueReceiver, ui_refresh_tx: UIRefreshQueueSender) {
    log::info!("Service worker started");

    while let Ok(cmd) = ui_command_rx.recv() {
        let update = match cmd {
            UICommand::Analyze(ticket) => {
                let outcome = service.analyze(&ticket.text);
                match &outcome {
                    Ok(response) => log::info!("Analysis #{} finished: {} ({:.4})", ticket.id, response.label, response.score),
                    Err(e) => log::error!("Analysis #{} failed: {}", ticket.id, e),
                }
                UIRefreshState::AnalysisFinished {
                    generation: ticket.generation,
                    outcome,
                }
            }
            UICommand::CheckHealth => {
                let outcome = service.health();
                match &outcome {
                    Ok(status) => log::info!("Service healthy: {}", status),
                    Err(e) => log::warn!("Health check failed: {}", e),
                }
                UIRefreshState::HealthChecked(outcome)
            }
        };

        if ui_refresh_tx.send(update).is_err() {
            break;
        }
    }

    log::info!("Service worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisResponse, Distribution, SentimentLabel, SubmitTicket};
    use crate::service::ServiceError;
    use std::sync::mpsc;
    use std::sync::{Arc, Mutex};

    /// Records every text it is asked to analyze.
    #[derive(Clone, Default)]
    struct RecordingService {
        calls: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl SentimentService for RecordingService {
        fn analyze(&self, text: &str) -> Result<AnalysisResponse, ServiceError> {
            self.calls.lock().unwrap().push(text.to_string());
            if self.fail {
                return Err(ServiceError::Network("connection refused".to_string()));
            }
            Ok(AnalysisResponse {
                label: SentimentLabel::Positive,
                score: 0.92,
                distribution: Distribution { positive: 0.92, neutral: 0.06, negative: 0.02 },
            })
        }

        fn health(&self) -> Result<String, ServiceError> {
            Ok("online".to_string())
        }
    }

    fn ticket(generation: u64, text: &str) -> SubmitTicket {
        SubmitTicket {
            generation,
            id: 1_000 + generation as i64,
            text: text.to_string(),
        }
    }

    fn run(service: RecordingService, commands: Vec<UICommand>) -> Vec<UIRefreshState> {
        let (command_tx, command_rx) = mpsc::channel();
        let (refresh_tx, refresh_rx) = mpsc::channel();
        for cmd in commands {
            command_tx.send(cmd).unwrap();
        }
        drop(command_tx);
        service_task(service, command_rx, refresh_tx);
        refresh_rx.try_iter().collect()
    }

    #[test]
    fn one_request_per_ticket_with_exact_text() {
        let service = RecordingService::default();
        let updates = run(service.clone(), vec![UICommand::Analyze(ticket(1, "I love this"))]);

        assert_eq!(*service.calls.lock().unwrap(), vec!["I love this".to_string()]);
        assert_eq!(updates.len(), 1);
        match &updates[0] {
            UIRefreshState::AnalysisFinished { generation, outcome } => {
                assert_eq!(*generation, 1);
                assert_eq!(outcome.as_ref().unwrap().label, SentimentLabel::Positive);
            }
            other => panic!("unexpected update {:?}", other),
        }
    }

    #[test]
    fn failures_are_reported_with_their_generation() {
        let service = RecordingService { fail: true, ..Default::default() };
        let updates = run(service, vec![UICommand::Analyze(ticket(4, "x"))]);
        match &updates[0] {
            UIRefreshState::AnalysisFinished { generation, outcome } => {
                assert_eq!(*generation, 4);
                assert!(matches!(outcome, Err(ServiceError::Network(_))));
            }
            other => panic!("unexpected update {:?}", other),
        }
    }

    #[test]
    fn commands_are_processed_in_order() {
        let service = RecordingService::default();
        let updates = run(
            service.clone(),
            vec![UICommand::CheckHealth, UICommand::Analyze(ticket(1, "a")), UICommand::Analyze(ticket(2, "b"))],
        );
        assert_eq!(*service.calls.lock().unwrap(), vec!["a".to_string(), "b".to_string()]);
        assert!(matches!(updates[0], UIRefreshState::HealthChecked(Ok(_))));
        assert!(matches!(updates[2], UIRefreshState::AnalysisFinished { generation: 2, .. }));
    }

    #[test]
    fn worker_stops_when_ui_is_gone() {
        let (command_tx, command_rx) = mpsc::channel();
        let (refresh_tx, refresh_rx) = mpsc::channel();
        drop(refresh_rx);
        command_tx.send(UICommand::CheckHealth).unwrap();
        command_tx.send(UICommand::CheckHealth).unwrap();
        // Returns after the first failed send even though the sender is still alive.
        service_task(RecordingService::default(), command_rx, refresh_tx);
    }
}
