// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application-wide configuration constants.
//!
//! This module collects the startup defaults in one place: main window
//! dimensions, camera selection, ROI coordinate bounds, and the geometry
//! of the floating stream windows.

use crate::models::roi::RoiRect;

/// Main window width in logical points.
pub const MAIN_WINDOW_WIDTH: f32 = 1920.0;

/// Main window height in logical points.
pub const MAIN_WINDOW_HEIGHT: f32 = 1080.0;

/// Width of the preview pane in the configuration dialog.
pub const ROI_WIDGET_SIZE: f32 = 1200.0;

/// Index of the capture device opened at startup.
pub const CAMERA_INDEX: u32 = 0;

/// Target capture rate in frames per second.
pub const CAMERA_FPS: u64 = 30;

/// Rectangle assigned to newly added ROIs.
pub const DEFAULT_ROI: RoiRect = RoiRect::new(50, 50, 100, 100);

/// Maximum expected frame width; ROI coordinates are validated against it.
pub const MAX_WIDTH: i32 = 1920;

/// Maximum expected frame height; ROI coordinates are validated against it.
pub const MAX_HEIGHT: i32 = 1080;

/// Minimum size of a stream window.
pub const STREAM_WINDOW_MIN_SIZE: f32 = 200.0;

/// Initial size of a stream window.
pub const STREAM_WINDOW_DEFAULT_SIZE: f32 = 400.0;

/// Cascade step between consecutive stream windows.
pub const STREAM_WINDOW_OFFSET: f32 = 50.0;

/// Width of the colored border framing a stream window's video area.
pub const STREAM_BORDER_WIDTH: f32 = 3.0;

/// Hue step between consecutive ROI colors, in degrees.
pub const COLOR_ANGLE: u16 = 137;
