//! HTTP client for the sentiment analysis service.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::ServiceConfig;
use crate::analysis::AnalysisResponse;

/// Failures talking to the analysis service.
///
/// The variants are kept apart for logging; the user sees the same notice for all of them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("failed to create HTTP client: {0}")]
    ClientSetup(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("service returned HTTP {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// JSON body of an analyze request.
#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Operations the worker needs from a sentiment backend.
pub trait SentimentService {
    /// Classify one piece of text.
    fn analyze(&self, text: &str) -> Result<AnalysisResponse, ServiceError>;

    /// Query the service's health endpoint, returning its status message.
    fn health(&self) -> Result<String, ServiceError>;
}

/// Client for the sentiment analysis HTTP API.
pub struct SentimentClient {
    client: Client,
    config: ServiceConfig,
}

impl SentimentClient {
    /// Create a new SentimentClient with the given configuration.
    pub fn new(config: ServiceConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ServiceError::ClientSetup(e.to_string()))?;

        Ok(Self { client, config })
    }
}

impl SentimentService for SentimentClient {
    fn analyze(&self, text: &str) -> Result<AnalysisResponse, ServiceError> {
        let url = self.config.analyze_url();

        log::info!("Sending analyze request to {} ({} chars)", url, text.chars().count());

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&AnalyzeRequest { text })
            .send()
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| ServiceError::Network(e.to_string()))?;
        parse_analysis(status, &body)
    }

    fn health(&self) -> Result<String, ServiceError> {
        let url = self.config.health_url();
        log::debug!("Checking service health at {}", url);

        let response = self.client.get(&url).send().map_err(|e| ServiceError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|e| ServiceError::Network(e.to_string()))?;
        parse_health(status, &body)
    }
}

fn check_status(status: u16) -> Result<(), ServiceError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ServiceError::Status(status))
    }
}

/// Validate an analyze response.
///
/// Anything that does not deserialize into [`AnalysisResponse`] is rejected,
/// so a 200 with a missing `distribution` never reaches the view.
pub fn parse_analysis(status: u16, body: &str) -> Result<AnalysisResponse, ServiceError> {
    check_status(status)?;
    serde_json::from_str(body).map_err(|e| ServiceError::MalformedResponse(e.to_string()))
}

pub fn parse_health(status: u16, body: &str) -> Result<String, ServiceError> {
    check_status(status)?;
    serde_json::from_str::<HealthResponse>(body)
        .map(|h| h.status)
        .map_err(|e| ServiceError::MalformedResponse(e.to_string()))
}
