//! Vitals Sweep - Animated physiological signal dashboard
//!
//! Loads heart rate, GSR and cortisol readings from a CSV export and sweeps a
//! fixed-size window across them, redrawing one chart per signal.

mod charts;
mod config;
mod data;
mod export;
mod gui;
mod stats;
mod sweep;

use eframe::egui;
use gui::VitalsApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Vitals Sweep"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Vitals Sweep",
        options,
        Box::new(|cc| Ok(Box::new(VitalsApp::new(cc)))),
    )
}
