mod app;
mod components;
mod screens;
mod theme;
mod utils;

use anyhow::Context;
use bloodbank_config::ClientConfig;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn run() -> anyhow::Result<()> {
    setup_logging();

    let config = ClientConfig::from_env();
    let core = bloodbank_app_core::build_application(&config)
        .context("Failed to initialise the application")?;

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([760.0, 520.0])
            .with_title("Blood Donation Management System"),
        ..Default::default()
    };

    eframe::run_native(
        "Bloodbank",
        options,
        Box::new(move |cc| {
            theme::setup(&cc.egui_ctx);
            Ok(Box::new(app::BloodbankUiApp::new(core)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("UI event loop failed: {e}"))
}
