use anyhow::Context;
use eframe::egui;
use env_logger::Builder;
use log::{LevelFilter, info};
use std::path::Path;
use std::sync::mpsc;
use std::thread;

mod analysis;
mod export;
mod service;
mod ui;

use service::{DEFAULT_CONFIG_FILE, SentimentClient, ServiceConfig, service_task};
use ui::{AppState, UICommand, UIRefreshState};

pub type UIRefreshQueueSender = mpsc::Sender<UIRefreshState>;
pub type UIRefreshQueueReceiver = mpsc::Receiver<UIRefreshState>;
pub type UICommandQueueSender = mpsc::Sender<UICommand>;
pub type UICommandQueueReceiver = mpsc::Receiver<UICommand>;

fn main() -> anyhow::Result<()> {
    // Logging setup
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some("sentic_analyzer"), LevelFilter::Debug)
        .init();

    info!("Starting up");

    let config = ServiceConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE));
    info!("Using sentiment service at {} (timeout {}s)", config.base_url, config.timeout_secs);

    let base_url = config.base_url.clone();
    let client = SentimentClient::new(config).context("Failed to set up the sentiment service client")?;

    let (ui_refresh_tx, ui_refresh_rx) = mpsc::channel::<UIRefreshState>();
    let (ui_command_tx, ui_command_rx) = mpsc::channel::<UICommand>();

    // Network calls run on a dedicated worker so the UI thread never blocks
    let _worker_handle = thread::Builder::new()
        .name("analysis-worker".to_string())
        .spawn(move || service_task(client, ui_command_rx, ui_refresh_tx))
        .context("Failed to spawn analysis worker thread")?;

    // Start the GUI on the main thread (required on macOS)
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SENTIC.Analyzer")
            .with_inner_size([1000.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "SENTIC.Analyzer",
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(AppState::new(ui_refresh_rx, ui_command_tx, base_url, cc.storage)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("GUI terminated with an error: {}", e))?;

    info!("Shutting down");
    Ok(())
}
