// src/main.rs
use anyhow::Result;
use eframe::egui;

mod analysis;
mod app;
mod engine;
mod state;
mod ui;

use app::SentiscopeApp;

fn main() -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([860.0, 900.0])
            .with_title("Sentiscope"),
        ..Default::default()
    };

    eframe::run_native(
        "Sentiscope",
        options,
        Box::new(|_cc| Box::new(SentiscopeApp::new())),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
