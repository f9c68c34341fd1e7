// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! ROI configuration dialog.
//!
//! This module provides the editor for the ROI set: numeric fields per
//! rectangle, add/remove buttons, and a preview pane that draws the staged
//! rectangles over a frame snapshot. Edits are validated against the
//! maximum frame bounds before they reach either preview; applying hands
//! the staged set back to the application in one step.

use crate::models::roi::{RoiRect, RoiSet};
use crate::settings;
use crate::util::geometry::{self, RegionError};
use crate::util::{color, image_ops};
use image::RgbImage;

/// Result of showing the configuration dialog for one frame.
pub enum ConfigAction {
    None,
    /// The staged rectangles changed; the caller should preview them.
    Preview(Vec<RoiRect>),
    /// The user applied the staged rectangles.
    Apply(Vec<RoiRect>),
    /// The dialog was closed without applying.
    Cancel,
}

/// Modal editor for the ROI set, with a live preview of staged changes.
pub struct RoiConfigDialog {
    /// Rectangles being edited; committed only on apply.
    staged: RoiSet,

    /// Last staged state that passed validation; this is what the preview
    /// pane draws and what `Preview` actions carry.
    previewed: Vec<RoiRect>,

    /// Frame snapshot shown under the rectangles.
    snapshot: RgbImage,

    /// Texture for the snapshot, created on first show.
    snapshot_texture: Option<egui::TextureHandle>,

    /// Keeps the window Id distinct per opening.
    generation: u64,
}

impl RoiConfigDialog {
    /// Create a dialog editing a copy of `rois` over the given snapshot.
    pub fn new(snapshot: RgbImage, rois: &RoiSet, generation: u64) -> Self {
        Self {
            staged: rois.clone(),
            previewed: rois.to_vec(),
            snapshot,
            snapshot_texture: None,
            generation,
        }
    }

    /// Show the dialog window.
    ///
    /// Closing it via the title bar is reported as [`ConfigAction::Cancel`].
    pub fn show(&mut self, ctx: &egui::Context) -> ConfigAction {
        let mut action = ConfigAction::None;
        let mut open = true;

        egui::Window::new("ROI Configuration")
            .id(egui::Id::new(("roi_config", self.generation)))
            .default_pos(egui::pos2(200.0, 200.0))
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                action = self.show_content(ui);
            });

        if !open {
            return ConfigAction::Cancel;
        }
        action
    }

    fn show_content(&mut self, ui: &mut egui::Ui) -> ConfigAction {
        let mut action = ConfigAction::None;

        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.set_min_width(250.0);

                ui.horizontal(|ui| {
                    if ui.button("Add ROI").clicked() {
                        self.staged.add(settings::DEFAULT_ROI);
                        self.previewed = self.staged.to_vec();
                        log::info!("Added ROI, staged total: {}", self.staged.rects().len());
                        action = ConfigAction::Preview(self.previewed.clone());
                    }
                    if ui.button("Remove ROI").clicked() {
                        let last = self.staged.rects().len() - 1;
                        match self.staged.remove(last) {
                            Ok(_) => {
                                self.previewed = self.staged.to_vec();
                                log::info!(
                                    "Removed ROI, staged total: {}",
                                    self.staged.rects().len()
                                );
                                action = ConfigAction::Preview(self.previewed.clone());
                            }
                            Err(e) => {
                                rfd::MessageDialog::new()
                                    .set_level(rfd::MessageLevel::Warning)
                                    .set_title("Cannot Remove")
                                    .set_description(e.to_string())
                                    .set_buttons(rfd::MessageButtons::Ok)
                                    .show();
                            }
                        }
                    }
                });

                ui.separator();

                if let Some(edited) = self.show_roi_grid(ui) {
                    // Rows are laid out from the staged set each frame, so
                    // `edited` names exactly the row the user touched.
                    let rect = self.staged.rects()[edited];
                    match geometry::validate_region(
                        &rect,
                        settings::MAX_WIDTH,
                        settings::MAX_HEIGHT,
                    ) {
                        Ok(()) => {
                            self.previewed = self.staged.to_vec();
                            action = ConfigAction::Preview(self.previewed.clone());
                        }
                        Err(e) => warn_invalid_roi(edited, &e),
                    }
                }

                ui.separator();

                if ui.button("Apply ROI Changes").clicked() {
                    match self.validate_staged() {
                        Ok(()) => {
                            log::info!("Applying {} ROIs", self.staged.rects().len());
                            action = ConfigAction::Apply(self.staged.to_vec());
                        }
                        Err((index, e)) => warn_invalid_roi(index, &e),
                    }
                }
            });

            ui.separator();

            self.show_preview(ui);
        });

        action
    }

    /// Show the editable grid of staged rectangles.
    ///
    /// Returns the index of the row that changed this frame, if any.
    fn show_roi_grid(&mut self, ui: &mut egui::Ui) -> Option<usize> {
        let mut edited = None;

        egui::Grid::new("roi_grid")
            .num_columns(5)
            .spacing([8.0, 4.0])
            .striped(true)
            .show(ui, |ui| {
                ui.label("ROI");
                ui.label("x");
                ui.label("y");
                ui.label("w");
                ui.label("h");
                ui.end_row();

                for (index, rect) in self.staged.rects_mut().iter_mut().enumerate() {
                    ui.label(format!("ROI{}", index + 1));
                    let mut changed = false;
                    changed |= ui
                        .add(egui::DragValue::new(&mut rect.x).range(0..=settings::MAX_WIDTH))
                        .changed();
                    changed |= ui
                        .add(egui::DragValue::new(&mut rect.y).range(0..=settings::MAX_HEIGHT))
                        .changed();
                    changed |= ui
                        .add(egui::DragValue::new(&mut rect.width).range(0..=settings::MAX_WIDTH))
                        .changed();
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut rect.height).range(0..=settings::MAX_HEIGHT),
                        )
                        .changed();
                    ui.end_row();

                    if changed {
                        edited = Some(index);
                    }
                }
            });

        edited
    }

    /// Validate every staged rectangle against the maximum frame bounds.
    ///
    /// Returns the first failing row index and its reason.
    fn validate_staged(&self) -> Result<(), (usize, RegionError)> {
        for (index, rect) in self.staged.rects().iter().enumerate() {
            geometry::validate_region(rect, settings::MAX_WIDTH, settings::MAX_HEIGHT)
                .map_err(|e| (index, e))?;
        }
        Ok(())
    }

    /// Display size of the snapshot fitted into the preview pane, using the
    /// same arithmetic the stream windows resize with.
    fn preview_display_size(&self, pane: egui::Vec2) -> egui::Vec2 {
        let (w, h) = image_ops::fit_within(
            self.snapshot.width(),
            self.snapshot.height(),
            pane.x as u32,
            pane.y as u32,
        );
        egui::vec2(w as f32, h as f32)
    }

    /// Draw the snapshot with the previewed rectangles outlined over it.
    fn show_preview(&mut self, ui: &mut egui::Ui) {
        let pane_size = preview_pane_size();
        let (pane, _response) = ui.allocate_exact_size(pane_size, egui::Sense::hover());

        if self.snapshot_texture.is_none() {
            self.snapshot_texture = Some(ui.ctx().load_texture(
                format!("roi_config_snapshot_{}", self.generation),
                image_ops::to_color_image(&self.snapshot),
                egui::TextureOptions::LINEAR,
            ));
        }

        let painter = ui.painter();
        painter.rect_filled(pane, 0.0, egui::Color32::BLACK);

        // Fit the snapshot into the pane without distortion.
        let display = self.preview_display_size(pane_size);
        let image_rect =
            egui::Rect::from_min_size(pane.min + (pane_size - display) / 2.0, display);

        if let Some(texture) = &self.snapshot_texture {
            painter.image(
                texture.id(),
                image_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }

        // Outline each rectangle in its index color, scaled into the
        // displayed image.
        let scale_x = display.x / self.snapshot.width() as f32;
        let scale_y = display.y / self.snapshot.height() as f32;
        let clipped = painter.with_clip_rect(pane);
        for (index, rect) in self.previewed.iter().enumerate() {
            let outline = egui::Rect::from_min_size(
                image_rect.min + egui::vec2(rect.x as f32 * scale_x, rect.y as f32 * scale_y),
                egui::vec2(rect.width as f32 * scale_x, rect.height as f32 * scale_y),
            );
            clipped.rect_stroke(
                outline,
                0.0,
                egui::Stroke::new(2.0, color::color_for_index(index)),
            );
        }

        painter.rect_stroke(pane, 0.0, egui::Stroke::new(1.0, egui::Color32::GRAY));
    }
}

/// Size of the preview pane, held at the maximum frame aspect.
fn preview_pane_size() -> egui::Vec2 {
    let width = settings::ROI_WIDGET_SIZE;
    egui::vec2(
        width,
        width * settings::MAX_HEIGHT as f32 / settings::MAX_WIDTH as f32,
    )
}

/// Pop the warning dialog for a rejected rectangle, naming the 1-based row.
fn warn_invalid_roi(index: usize, error: &RegionError) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Warning)
        .set_title(error.title())
        .set_description(format!("ROI {}: {}", index + 1, error))
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
