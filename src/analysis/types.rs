//! Type definitions for sentiment analysis results.

use serde::{Deserialize, Serialize};

/// Sentiment class assigned by the remote classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
            SentimentLabel::Negative => write!(f, "Negative"),
        }
    }
}

/// Three-way probability-like breakdown returned by the classifier.
///
/// Components are expected in [0, 1] and to sum to roughly 1, but neither is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

/// Response body of the `/api/v1/analyze` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub label: SentimentLabel,
    pub score: f64,
    pub distribution: Distribution,
}

/// One completed classification together with the text that produced it.
///
/// This is also the exact shape written by the JSON export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Client-side identifier, a Unix timestamp in milliseconds taken at submission.
    pub id: i64,
    /// The submitted input as typed.
    pub text: String,
    pub label: SentimentLabel,
    pub score: f64,
    pub distribution: Distribution,
}

impl AnalysisResult {
    /// Stamp a service response with the submission's id and original text.
    pub fn from_response(id: i64, text: String, response: AnalysisResponse) -> Self {
        Self {
            id,
            text,
            label: response.label,
            score: response.score,
            distribution: response.distribution,
        }
    }
}
