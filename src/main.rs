// main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod assessment;
#[cfg(feature = "camera")]
mod camera;
mod chart;
mod config;
mod error;
mod image_source;
mod json_loader;
mod recommend;
mod session;
mod skin;
mod ui_pages;

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<(), eframe::Error> {
    let (config, config_err) = config::AppConfig::load_or_default();
    init_logging(&config.log_level);
    if let Some(e) = config_err {
        tracing::warn!(error = %e, "using default configuration");
    }
    tracing::info!(path = %config::default_path().display(), "SkinMatch starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([800.0, 600.0])
            .with_title("Advanced Skincare Recommender"),
        centered: true,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "SkinMatch",
        options,
        Box::new(|cc| Ok(Box::new(app::SkinMatchApp::new(cc, config)))),
    )
}
