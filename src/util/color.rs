// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Per-ROI display colors.
//!
//! Each ROI takes its hue by stepping 137 degrees (close to the golden
//! angle) around the color wheel per index, so neighboring ROIs stay
//! visually distinct and the assignment is stable across rebuilds.

use crate::settings;

/// Hue in degrees for the ROI at `index`.
pub fn hue_for_index(index: usize) -> u16 {
    ((index as u64 * settings::COLOR_ANGLE as u64) % 360) as u16
}

/// Fully saturated display color for the ROI at `index`.
pub fn color_for_index(index: usize) -> egui::Color32 {
    let hue = hue_for_index(index) as f32 / 360.0;
    egui::ecolor::Hsva::new(hue, 1.0, 1.0, 1.0).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_hues_step_by_angle() {
        assert_eq!(hue_for_index(0), 0);
        assert_eq!(hue_for_index(1), 137);
        assert_eq!(hue_for_index(2), 274);
        assert_eq!(hue_for_index(3), 51); // 411 wraps past 360
    }

    #[test]
    fn test_assignment_is_deterministic() {
        for i in 0..16 {
            assert_eq!(hue_for_index(i), hue_for_index(i));
            assert_eq!(color_for_index(i), color_for_index(i));
        }
    }

    #[test]
    fn test_full_cycle_has_distinct_hues() {
        // 137 shares no factors with 360, so hues only repeat after a
        // full cycle of 360 indices.
        let mut seen = std::collections::HashSet::new();
        for i in 0..360 {
            assert!(seen.insert(hue_for_index(i)));
        }
        assert_eq!(hue_for_index(360), hue_for_index(0));
    }

    #[test]
    fn test_consecutive_colors_differ() {
        for i in 0..32 {
            assert_ne!(color_for_index(i), color_for_index(i + 1));
        }
    }
}
