//! # Analyzer View State
//!
//! Holds the transient state of the analyzer window (input, current result,
//! history, loading) and implements the submit/complete protocol around the
//! single outstanding request.
//!
//! ## Request protocol
//!
//! `begin_submit` validates the input and performs the in-flight check-and-set.
//! It hands back a [`SubmitTicket`] that the caller forwards to the worker.
//! When the worker answers, `finish` applies the outcome only if its generation
//! matches the pending request; anything else is dropped as stale.
//!
//! All calls happen on the UI thread, so the check-and-set in `begin_submit`
//! cannot interleave with another click.

use super::history::History;
use super::types::{AnalysisResponse, AnalysisResult};

/// Longest input accepted by the analysis service, in characters.
pub const MAX_INPUT_CHARS: usize = 1000;

/// Everything the worker needs to issue one analyze request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    pub generation: u64,
    pub id: i64,
    pub text: String,
}

/// Reasons a submission is refused before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// Input is empty or whitespace only.
    EmptyInput,
    /// A request is already in flight.
    Busy,
    /// Input exceeds [`MAX_INPUT_CHARS`].
    TooLong { chars: usize },
    /// A blocking notice is still waiting to be dismissed.
    NoticePending,
}

/// What `finish` did with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Failed,
    Stale,
}

#[derive(Debug, Clone)]
struct PendingRequest {
    generation: u64,
    id: i64,
    text: String,
}

/// State owned by the analyzer window.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Text currently in the input box.
    pub input: String,
    /// Most recent successful result.
    pub current_result: Option<AnalysisResult>,
    /// Bounded history of successful results, newest first.
    pub history: History,
    /// Blocking notification shown to the user until dismissed.
    pub notice: Option<String>,
    pending: Option<PendingRequest>,
    generation: u64,
    last_id: i64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True strictly while a request is in flight.
    pub fn loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Generation of the in-flight request, if any.
    #[cfg(test)]
    pub fn pending_generation(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.generation)
    }

    /// Try to start an analysis of the current input.
    ///
    /// `now_ms` is the current Unix time in milliseconds and seeds the result id.
    /// Ids are kept strictly increasing even if the clock stalls or goes back.
    /// A rejection for empty input, a busy view or an undismissed notice leaves
    /// the state untouched.
    pub fn begin_submit(&mut self, now_ms: i64) -> Result<SubmitTicket, SubmitRejection> {
        if self.pending.is_some() {
            return Err(SubmitRejection::Busy);
        }
        if self.notice.is_some() {
            return Err(SubmitRejection::NoticePending);
        }
        if self.input.trim().is_empty() {
            return Err(SubmitRejection::EmptyInput);
        }
        let chars = self.input.chars().count();
        if chars > MAX_INPUT_CHARS {
            self.notice = Some(format!("Input is {} characters long; the limit is {}.", chars, MAX_INPUT_CHARS));
            return Err(SubmitRejection::TooLong { chars });
        }

        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;
        self.generation += 1;

        let pending = PendingRequest {
            generation: self.generation,
            id,
            text: self.input.clone(),
        };
        let ticket = SubmitTicket {
            generation: pending.generation,
            id: pending.id,
            text: pending.text.clone(),
        };
        self.pending = Some(pending);
        Ok(ticket)
    }

    /// Apply the outcome of the request with the given generation.
    ///
    /// On success the result becomes current, is prepended to the history and the
    /// input is cleared. On failure only `notice` is set. Either way loading ends.
    pub fn finish(&mut self, generation: u64, outcome: Result<AnalysisResponse, String>) -> Completion {
        let Some(pending) = self.pending.take_if(|p| p.generation == generation) else {
            return Completion::Stale;
        };

        match outcome {
            Ok(response) => {
                let result = AnalysisResult::from_response(pending.id, pending.text, response);
                self.history.push(result.clone());
                self.current_result = Some(result);
                self.input.clear();
                Completion::Applied
            }
            Err(message) => {
                self.notice = Some(message);
                Completion::Failed
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
