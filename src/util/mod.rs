// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Utility functions for validation, colors, and image processing.

pub mod color;
pub mod geometry;
pub mod image_ops;
