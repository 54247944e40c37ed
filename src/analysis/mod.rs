//! Analysis module: result types, bounded history and the view state machine.
//!
//! Nothing in here touches the network or egui; the UI drives `ViewState`
//! and the service worker produces the responses it consumes.

pub mod history;
pub mod types;
pub mod view_state;

pub use history::{HISTORY_CAPACITY, History};
pub use types::{AnalysisResponse, AnalysisResult, Distribution, SentimentLabel};
pub use view_state::{Completion, MAX_INPUT_CHARS, SubmitRejection, SubmitTicket, ViewState};
