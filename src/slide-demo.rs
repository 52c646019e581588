//! Slide-to-unlock demo application
//!
//! Hosts one slide control in an eframe window:
//! - Optional JSON configuration path as the first argument
//! - Settings panel driving every public setter of the control
//! - Unlock counter fed through a weakly registered listener
//!
//! The application is built with a small module tree:
//! - `demo/` - Application state and the settings panel

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;

mod demo;

use demo::DemoApp;

/// Entry point that installs logging and launches the demo window.
fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 420.0])
            .with_title("Slide to Unlock"),
        ..Default::default()
    };

    eframe::run_native(
        "Slide to Unlock",
        options,
        Box::new(move |cc| Ok(Box::new(DemoApp::new(cc, config_path)))),
    )
}
