// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Frame cropping, scaling, and letterboxing.
//!
//! This module turns a captured frame and an ROI rectangle into the bitmap
//! a stream window displays: crop the region, scale it to fit the target
//! area without distortion, and center it on a black canvas.

use crate::models::roi::RoiRect;
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

/// Largest size that fits inside `max_w` x `max_h` while keeping the
/// `src_w`:`src_h` aspect ratio.
///
/// The relatively larger source axis fills its target exactly; the other
/// scales proportionally and never exceeds its target. Upscaling is
/// allowed. Both source dimensions must be nonzero.
pub fn fit_within(src_w: u32, src_h: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    // Compare src_w/src_h against max_w/max_h without going through floats.
    if src_w as u64 * max_h as u64 >= src_h as u64 * max_w as u64 {
        let height = (src_h as u64 * max_w as u64 + src_w as u64 / 2) / src_w as u64;
        (max_w, (height as u32).max(1))
    } else {
        let width = (src_w as u64 * max_h as u64 + src_h as u64 / 2) / src_h as u64;
        ((width as u32).max(1), max_h)
    }
}

/// Crop the pixels covered by `rect` out of `frame`.
///
/// The rectangle must already be validated against the frame bounds.
pub fn crop_region(frame: &RgbImage, rect: &RoiRect) -> RgbImage {
    imageops::crop_imm(
        frame,
        rect.x as u32,
        rect.y as u32,
        rect.width as u32,
        rect.height as u32,
    )
    .to_image()
}

/// Scale `image` to fit inside `target_w` x `target_h`, keeping its aspect ratio.
pub fn resize_to_fit(image: &RgbImage, target_w: u32, target_h: u32) -> RgbImage {
    let (w, h) = fit_within(image.width(), image.height(), target_w, target_h);
    imageops::resize(image, w, h, FilterType::Triangle)
}

/// Scale `image` to fit `target_w` x `target_h` and center it on black.
///
/// The result is always exactly `target_w` x `target_h`.
pub fn letterbox(image: &RgbImage, target_w: u32, target_h: u32) -> RgbImage {
    let scaled = resize_to_fit(image, target_w, target_h);
    let mut canvas = RgbImage::from_pixel(target_w, target_h, Rgb([0, 0, 0]));
    let x = (target_w - scaled.width()) / 2;
    let y = (target_h - scaled.height()) / 2;
    imageops::overlay(&mut canvas, &scaled, x as i64, y as i64);
    canvas
}

/// Wrap an RGB frame in the texture-upload format egui expects.
pub fn to_color_image(frame: &RgbImage) -> egui::ColorImage {
    let size = [frame.width() as usize, frame.height() as usize];
    egui::ColorImage::from_rgb(size, frame.as_raw())
}

/// Letterboxed view of `rect` within `frame`, rendered at the given size.
pub fn render_region(
    frame: &RgbImage,
    rect: &RoiRect,
    target_w: u32,
    target_h: u32,
) -> egui::ColorImage {
    let cropped = crop_region(frame, rect);
    let boxed = letterbox(&cropped, target_w, target_h);
    to_color_image(&boxed)
}
