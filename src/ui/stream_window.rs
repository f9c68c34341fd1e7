// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Floating per-ROI stream windows.
//!
//! Each configured ROI gets one movable, resizable window that displays
//! the cropped region letterboxed over black, framed by a border in the
//! ROI's assigned color. Windows re-render only when a new frame arrived
//! or the window was resized, and keep showing their last bitmap while
//! the rectangle is transiently invalid for the current frame.

use crate::models::roi::RoiRect;
use crate::settings;
use crate::util::{color, geometry, image_ops};
use image::RgbImage;

/// Top-left cascade position for the window at `index`.
///
/// The first window lands one step in from the offset origin, each later
/// window a further step down and to the right.
pub fn cascade_position(index: usize) -> egui::Pos2 {
    let step = settings::STREAM_WINDOW_OFFSET * (index as f32 + 2.0);
    egui::pos2(step, step)
}

/// Create one stream window per rectangle, in display order.
pub fn build_stream_windows(rects: &[RoiRect], generation: u64) -> Vec<RoiStreamWindow> {
    rects
        .iter()
        .enumerate()
        .map(|(index, rect)| RoiStreamWindow::new(index, generation, *rect))
        .collect()
}

/// A floating window streaming one ROI.
pub struct RoiStreamWindow {
    /// Position of this window's ROI within the displayed set.
    index: usize,

    /// Rebuild generation; part of the window Id so recreated windows
    /// return to their cascade positions.
    generation: u64,

    /// The rectangle this window streams.
    rect: RoiRect,

    /// Border color identifying the ROI.
    color: egui::Color32,

    /// Texture holding the last rendered bitmap.
    texture: Option<egui::TextureHandle>,

    /// Frame serial the texture was rendered from.
    painted_serial: u64,

    /// Video area size the texture was rendered at.
    painted_size: (u32, u32),
}

impl RoiStreamWindow {
    /// Create the window for the ROI at `index`.
    pub fn new(index: usize, generation: u64, rect: RoiRect) -> Self {
        Self {
            index,
            generation,
            rect,
            color: color::color_for_index(index),
            texture: None,
            painted_serial: 0,
            painted_size: (0, 0),
        }
    }

    /// Show the window, refreshing its bitmap when a new frame arrived or
    /// the window was resized.
    pub fn show(&mut self, ctx: &egui::Context, frame: Option<&RgbImage>, frame_serial: u64) {
        egui::Window::new(format!("ROI {} Stream", self.index + 1))
            .id(egui::Id::new(("roi_stream", self.generation, self.index)))
            .default_pos(cascade_position(self.index))
            .default_size([settings::STREAM_WINDOW_DEFAULT_SIZE; 2])
            .min_width(settings::STREAM_WINDOW_MIN_SIZE)
            .min_height(settings::STREAM_WINDOW_MIN_SIZE)
            .resizable(true)
            .collapsible(false)
            .show(ctx, |ui| {
                self.show_content(ui, frame, frame_serial);
            });
    }

    /// Fill the window with the bordered video area.
    fn show_content(&mut self, ui: &mut egui::Ui, frame: Option<&RgbImage>, frame_serial: u64) {
        let (outer, _response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
        let inner = outer.shrink(settings::STREAM_BORDER_WIDTH);

        let target = (
            inner.width().max(0.0).floor() as u32,
            inner.height().max(0.0).floor() as u32,
        );
        if target.0 > 0 && target.1 > 0 {
            self.refresh_texture(ui, frame, frame_serial, target);
        }

        let painter = ui.painter();
        painter.rect_filled(outer, 0.0, egui::Color32::BLACK);
        if let Some(texture) = &self.texture {
            let image_rect = egui::Rect::from_center_size(inner.center(), texture.size_vec2());
            painter.with_clip_rect(inner).image(
                texture.id(),
                image_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
        // Stroke inset by half its width so the border stays fully inside.
        painter.rect_stroke(
            outer.shrink(settings::STREAM_BORDER_WIDTH / 2.0),
            0.0,
            egui::Stroke::new(settings::STREAM_BORDER_WIDTH, self.color),
        );
    }

    /// Re-render the bitmap if the frame serial advanced or the video area
    /// changed size.
    ///
    /// The rectangle is re-checked against the current frame first; an
    /// invalid rectangle keeps the previous bitmap on screen.
    fn refresh_texture(
        &mut self,
        ui: &egui::Ui,
        frame: Option<&RgbImage>,
        frame_serial: u64,
        target: (u32, u32),
    ) {
        if frame_serial == self.painted_serial && target == self.painted_size {
            return;
        }
        let frame = match frame {
            Some(frame) => frame,
            None => return,
        };
        if geometry::validate_region(&self.rect, frame.width() as i32, frame.height() as i32)
            .is_err()
        {
            return;
        }

        let bitmap = image_ops::render_region(frame, &self.rect, target.0, target.1);
        match &mut self.texture {
            Some(texture) => texture.set(bitmap, egui::TextureOptions::LINEAR),
            None => {
                self.texture = Some(ui.ctx().load_texture(
                    format!("roi_stream_{}_{}", self.generation, self.index),
                    bitmap,
                    egui::TextureOptions::LINEAR,
                ));
            }
        }
        self.painted_serial = frame_serial;
        self.painted_size = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cascade_positions_step_by_offset() {
        assert_eq!(cascade_position(0), egui::pos2(100.0, 100.0));
        assert_eq!(cascade_position(1), egui::pos2(150.0, 150.0));
        assert_eq!(cascade_position(2), egui::pos2(200.0, 200.0));
    }

    #[test]
    fn test_build_one_window_per_rect() {
        let rects = [RoiRect::new(0, 0, 10, 10), RoiRect::new(5, 5, 20, 20)];
        let windows = build_stream_windows(&rects, 1);

        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].rect, rects[0]);
        assert_eq!(windows[1].rect, rects[1]);
    }

    #[test]
    fn test_windows_take_index_colors() {
        let rects = [
            RoiRect::new(0, 0, 10, 10),
            RoiRect::new(5, 5, 20, 20),
            RoiRect::new(9, 9, 30, 30),
        ];
        let windows = build_stream_windows(&rects, 0);

        for (index, window) in windows.iter().enumerate() {
            assert_eq!(window.color, color::color_for_index(index));
        }
        assert_ne!(windows[0].color, windows[1].color);
        assert_ne!(windows[1].color, windows[2].color);
    }

    fn uploads_texture(output: &egui::FullOutput, id: egui::TextureId) -> bool {
        output
            .textures_delta
            .set
            .iter()
            .any(|(set_id, _)| *set_id == id)
    }

    #[test]
    fn test_unchanged_serial_keeps_last_bitmap() {
        let ctx = egui::Context::default();
        let mut window = RoiStreamWindow::new(0, 0, RoiRect::new(0, 0, 4, 4));
        let red = RgbImage::from_pixel(8, 8, image::Rgb([255, 0, 0]));
        let blue = RgbImage::from_pixel(8, 8, image::Rgb([0, 0, 255]));

        // First pass renders the frame into a fresh texture.
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            window.show(ctx, Some(&red), 1);
        });
        let texture_id = window.texture.as_ref().unwrap().id();
        assert!(uploads_texture(&output, texture_id));
        assert_eq!(window.painted_serial, 1);
        let painted_size = window.painted_size;
        assert!(painted_size.0 > 0 && painted_size.1 > 0);

        // A different frame under the same serial is not re-rendered.
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            window.show(ctx, Some(&blue), 1);
        });
        assert!(!uploads_texture(&output, texture_id));
        assert_eq!(window.painted_serial, 1);
        assert_eq!(window.painted_size, painted_size);

        // Advancing the serial re-renders into the same texture.
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            window.show(ctx, Some(&blue), 2);
        });
        assert!(uploads_texture(&output, texture_id));
        assert_eq!(window.painted_serial, 2);
    }

    #[test]
    fn test_invalid_rect_keeps_last_bitmap() {
        let ctx = egui::Context::default();
        // The rect fills an 8x8 frame exactly, so a smaller frame rejects it.
        let mut window = RoiStreamWindow::new(0, 0, RoiRect::new(0, 0, 8, 8));
        let full = RgbImage::from_pixel(8, 8, image::Rgb([255, 0, 0]));
        let shrunk = RgbImage::from_pixel(4, 4, image::Rgb([0, 255, 0]));

        let output = ctx.run(egui::RawInput::default(), |ctx| {
            window.show(ctx, Some(&full), 1);
        });
        let texture_id = window.texture.as_ref().unwrap().id();
        assert!(uploads_texture(&output, texture_id));

        // The rect no longer fits the new frame; the old bitmap stays up and
        // the window remains ready to re-render once a fitting frame arrives.
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            window.show(ctx, Some(&shrunk), 2);
        });
        assert!(!uploads_texture(&output, texture_id));
        assert!(window.texture.is_some());
        assert_eq!(window.painted_serial, 1);
    }
}
