// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! ROI Viewer - webcam region-of-interest previewer.
//!
//! A desktop application that streams a webcam feed into floating preview
//! windows, one per configured rectangular region of interest.

mod app;
mod io;
mod models;
mod settings;
mod ui;
mod util;

use app::RoiViewerApp;
use io::camera::CameraSource;
use anyhow::Result;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Without a camera there is nothing to show.
    let camera = CameraSource::open(settings::CAMERA_INDEX)?;

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings::MAIN_WINDOW_WIDTH, settings::MAIN_WINDOW_HEIGHT])
            .with_maximized(true)
            .with_title("ROI Viewer UI"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "ROI Viewer UI",
        options,
        Box::new(move |_cc| Ok(Box::new(RoiViewerApp::new(camera)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
