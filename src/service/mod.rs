//! Service module for talking to the sentiment analysis HTTP API.
//!
//! The UI never calls the network directly: it posts commands to the worker in
//! `task`, which executes them through a [`SentimentService`].

pub mod client;
pub mod config;
pub mod task;

pub use client::{SentimentClient, SentimentService, ServiceError};
pub use config::{DEFAULT_CONFIG_FILE, ServiceConfig};
pub use task::service_task;
