// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the ROI viewer.

pub mod config_dialog;
pub mod stream_window;
