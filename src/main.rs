mod app;
mod config;
mod error;
mod upload;
mod utils;

use eframe::CreationContext;
use tracing_subscriber::EnvFilter;

use crate::app::DealUploader;
use crate::config::Config;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([560.0, 680.0])
            .with_min_inner_size([420.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Deal Document Extractor",
        options,
        Box::new(move |cc: &CreationContext| Box::new(DealUploader::new(cc, config))),
    )
}
