mod app;
mod chart;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::IspaDashApp;
use eframe::egui;

/// The fixed dataset loaded at startup, relative to the working directory.
const DATA_FILE: &str = "ispa.json";

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "ISPA Dash – Case Dashboard",
        options,
        Box::new(|_cc| {
            let mut app = IspaDashApp::default();
            app.state.load_from_path(Path::new(DATA_FILE));
            Ok(Box::new(app))
        }),
    )
}
