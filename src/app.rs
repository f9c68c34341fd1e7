// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns the camera, the applied ROI set, the floating stream
//! windows, and the configuration dialog. A capture tick runs inside the
//! update loop at the configured frame rate; each new frame bumps a serial
//! that tells the stream windows to re-render.

use crate::io::camera::CameraSource;
use crate::models::roi::{RoiRect, RoiSet};
use crate::settings;
use crate::ui::config_dialog::{ConfigAction, RoiConfigDialog};
use crate::ui::stream_window::{self, RoiStreamWindow};
use image::RgbImage;
use std::time::{Duration, Instant};

/// Main application state.
pub struct RoiViewerApp {
    /// Open capture device.
    camera: CameraSource,

    /// ROIs currently applied to the stream windows.
    rois: RoiSet,

    /// One floating stream window per displayed ROI.
    stream_windows: Vec<RoiStreamWindow>,

    /// Open configuration dialog, if any.
    config_dialog: Option<RoiConfigDialog>,

    /// Most recent captured frame.
    last_frame: Option<RgbImage>,

    /// Bumped once per captured frame; stream windows re-render on change.
    frame_serial: u64,

    /// When the last capture tick ran.
    last_tick: Option<Instant>,

    /// Bumped on every stream-window rebuild so their window Ids reset.
    window_generation: u64,
}

impl RoiViewerApp {
    /// Create the application around an already-open camera.
    pub fn new(camera: CameraSource) -> Self {
        let rois = RoiSet::new(settings::DEFAULT_ROI);
        let stream_windows = stream_window::build_stream_windows(rois.rects(), 0);
        Self {
            camera,
            rois,
            stream_windows,
            config_dialog: None,
            last_frame: None,
            frame_serial: 0,
            last_tick: None,
            window_generation: 0,
        }
    }

    /// Interval between capture ticks.
    fn tick_interval() -> Duration {
        Duration::from_millis(1000 / settings::CAMERA_FPS)
    }

    /// Capture one frame if the tick interval elapsed.
    ///
    /// A tick that yields no decodable frame is skipped until the next one.
    fn run_capture_tick(&mut self) {
        let due = match self.last_tick {
            Some(last) => last.elapsed() >= Self::tick_interval(),
            None => true,
        };
        if !due {
            return;
        }
        self.last_tick = Some(Instant::now());

        if let Some(frame) = self.camera.grab() {
            self.last_frame = Some(frame);
            self.frame_serial += 1;
        }
    }

    /// Tear down the current stream windows and build a fresh cascade.
    fn rebuild_stream_windows(&mut self, rects: &[RoiRect]) {
        self.window_generation += 1;
        self.stream_windows = stream_window::build_stream_windows(rects, self.window_generation);
        log::info!("Rebuilt {} stream windows", self.stream_windows.len());
    }

    /// Open the configuration dialog seeded with a fresh snapshot.
    ///
    /// Does nothing while a dialog is already open, or when no frame can
    /// be captured to preview against.
    fn open_config_dialog(&mut self) {
        if self.config_dialog.is_some() {
            return;
        }
        let snapshot = match self.camera.grab() {
            Some(frame) => frame,
            None => return,
        };
        self.config_dialog = Some(RoiConfigDialog::new(
            snapshot,
            &self.rois,
            self.window_generation,
        ));
        log::info!("Opened ROI configuration dialog");
    }

    /// Route one dialog action into application state.
    fn handle_config_action(&mut self, action: ConfigAction) {
        match action {
            ConfigAction::Preview(rects) => {
                self.rebuild_stream_windows(&rects);
            }
            ConfigAction::Apply(rects) => {
                match self.rois.replace_all(rects) {
                    Ok(()) => log::info!("Applied {} ROIs", self.rois.rects().len()),
                    Err(e) => log::error!("Rejected ROI update: {}", e),
                }
                let rects = self.rois.to_vec();
                self.rebuild_stream_windows(&rects);
                self.config_dialog = None;
            }
            ConfigAction::Cancel => {
                // Discard any previewed state and restore the applied set.
                let rects = self.rois.to_vec();
                self.rebuild_stream_windows(&rects);
                self.config_dialog = None;
                log::info!("ROI configuration cancelled");
            }
            ConfigAction::None => {}
        }
    }
}

impl eframe::App for RoiViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_capture_tick();

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("ROI", |ui| {
                    // Only one configuration dialog at a time.
                    let dialog_open = self.config_dialog.is_some();
                    if ui
                        .add_enabled(!dialog_open, egui::Button::new("Configure ROI"))
                        .clicked()
                    {
                        self.open_config_dialog();
                        ui.close_menu();
                    }
                });
            });
        });

        // The central area stays empty; the streams live in their own windows.
        egui::CentralPanel::default().show(ctx, |_ui| {});

        // Configuration dialog
        let mut dialog_action = ConfigAction::None;
        if let Some(dialog) = &mut self.config_dialog {
            dialog_action = dialog.show(ctx);
        }
        self.handle_config_action(dialog_action);

        // Floating stream windows
        let frame = self.last_frame.as_ref();
        for window in &mut self.stream_windows {
            window.show(ctx, frame, self.frame_serial);
        }

        // Schedule the next capture tick.
        let elapsed = self
            .last_tick
            .map_or(Duration::ZERO, |last| last.elapsed());
        ctx.request_repaint_after(Self::tick_interval().saturating_sub(elapsed));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.stream_windows.clear();
        self.camera.release();
        log::info!("Shut down");
    }
}
