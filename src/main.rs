mod app;
mod classifier;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::RustySonarApp;
use config::AppConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 720.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Sonar – Mine vs Rock",
        options,
        Box::new(move |_cc| Ok(Box::new(RustySonarApp::new(&config)))),
    )
}
