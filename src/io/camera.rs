// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Webcam capture.
//!
//! This module wraps the platform capture backend behind a small surface:
//! open a device by index, pull decoded RGB frames one at a time, and
//! release the stream on shutdown.

use anyhow::{Context, Result};
use image::RgbImage;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;

/// An open capture device streaming RGB frames.
pub struct CameraSource {
    camera: Camera,
}

impl CameraSource {
    /// Open the device at `index` and start streaming.
    pub fn open(index: u32) -> Result<Self> {
        let requested =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestFrameRate);
        let mut camera = Camera::new(CameraIndex::Index(index), requested)
            .with_context(|| format!("Failed to open camera {}", index))?;
        camera
            .open_stream()
            .with_context(|| format!("Failed to start camera {} stream", index))?;

        let resolution = camera.resolution();
        log::info!(
            "Opened camera {} at {}x{}",
            index,
            resolution.width(),
            resolution.height()
        );

        Ok(Self { camera })
    }

    /// Pull one frame, decoded to interleaved RGB.
    ///
    /// Returns `None` when no frame is available or decoding fails; the
    /// caller simply tries again on its next tick.
    pub fn grab(&mut self) -> Option<RgbImage> {
        let frame = self.camera.frame().ok()?;
        frame.decode_image::<RgbFormat>().ok()
    }

    /// Stop streaming. Failures are logged and otherwise ignored.
    pub fn release(&mut self) {
        match self.camera.stop_stream() {
            Ok(()) => log::info!("Camera stream stopped"),
            Err(e) => log::warn!("Failed to stop camera stream: {}", e),
        }
    }
}
