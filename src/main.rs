// main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use formviz::app::FormVizApp;
use formviz::logging;

fn main() -> Result<(), eframe::Error> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([900.0, 600.0]),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "FormViz",
        options,
        Box::new(|cc| Ok(Box::new(FormVizApp::new(cc)))),
    )
}
