//! Main application entry point.

use std::path::Path;

mod app;
mod config;
mod dispatcher;

use app::DeckApp;
use config::AppConfig;

fn main() -> eframe::Result {
    env_logger::init();
    log::info!("Starting MolDeck");

    let config = AppConfig::load(Path::new("moldeck.json")).unwrap_or_else(|e| {
        log::error!("{e}");
        std::process::exit(2);
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size([config.width, config.height]),
        ..Default::default()
    };

    eframe::run_native(
        "moldeck",
        options,
        Box::new(move |_cc| {
            let app = DeckApp::new(config)?;
            Ok(Box::new(app))
        }),
    )
}
