//! GUI implemented with egui/eframe

pub mod app;
pub mod components;
pub mod constants;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use eframe::{egui, NativeOptions};

use self::app::PortfolioApp;
use self::constants::*;

/// Launch the viewer window. Blocks until the window closes.
pub fn run_gui(storage_path: Option<PathBuf>, reduced_motion: bool) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(PortfolioApp::new(cc, storage_path, reduced_motion)))),
    )
    .map_err(|err| anyhow!("Failed to launch viewer: {err}"))
}
