// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! ROI rectangle validation.
//!
//! This module checks candidate rectangles against a target coordinate
//! space and reports the first failed check in a fixed order: dimensions,
//! then position, then bounds.

use crate::models::roi::RoiRect;
use thiserror::Error;

/// Reason a rectangle was rejected.
///
/// The `Display` text is the body shown in warning dialogs; `title`
/// supplies the matching dialog title.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegionError {
    #[error("Width and height must be greater than 0")]
    InvalidDimensions,
    #[error("Position cannot be negative")]
    InvalidPosition,
    #[error("Region extends beyond image boundaries")]
    OutOfBounds,
}

impl RegionError {
    /// Dialog title matching this failure.
    pub fn title(&self) -> &'static str {
        match self {
            RegionError::InvalidDimensions => "Invalid Dimensions",
            RegionError::InvalidPosition => "Invalid Position",
            RegionError::OutOfBounds => "ROI Out of Bounds",
        }
    }
}

/// Check that `rect` describes a non-empty region lying fully inside a
/// `frame_width` x `frame_height` coordinate space.
pub fn validate_region(
    rect: &RoiRect,
    frame_width: i32,
    frame_height: i32,
) -> Result<(), RegionError> {
    if rect.width <= 0 || rect.height <= 0 {
        return Err(RegionError::InvalidDimensions);
    }
    if rect.x < 0 || rect.y < 0 {
        return Err(RegionError::InvalidPosition);
    }
    // Widen before adding so extreme coordinates cannot overflow i32.
    if rect.x as i64 + rect.width as i64 > frame_width as i64
        || rect.y as i64 + rect.height as i64 > frame_height as i64
    {
        return Err(RegionError::OutOfBounds);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_region_passes() {
        let rect = RoiRect::new(50, 50, 100, 100);
        assert!(validate_region(&rect, 1920, 1080).is_ok());
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(
            validate_region(&RoiRect::new(0, 0, 0, 100), 1920, 1080),
            Err(RegionError::InvalidDimensions)
        );
        assert_eq!(
            validate_region(&RoiRect::new(0, 0, 100, 0), 1920, 1080),
            Err(RegionError::InvalidDimensions)
        );
    }

    #[test]
    fn test_negative_position_rejected() {
        assert_eq!(
            validate_region(&RoiRect::new(-1, 0, 100, 100), 1920, 1080),
            Err(RegionError::InvalidPosition)
        );
        assert_eq!(
            validate_region(&RoiRect::new(0, -1, 100, 100), 1920, 1080),
            Err(RegionError::InvalidPosition)
        );
    }

    #[test]
    fn test_dimension_check_runs_first() {
        // Dimensions and position are both invalid; the dimension failure wins.
        assert_eq!(
            validate_region(&RoiRect::new(-5, -5, 0, 0), 1920, 1080),
            Err(RegionError::InvalidDimensions)
        );
    }

    #[test]
    fn test_position_check_runs_before_bounds() {
        // Position and bounds are both invalid; the position failure wins.
        assert_eq!(
            validate_region(&RoiRect::new(-1, 0, 3000, 100), 1920, 1080),
            Err(RegionError::InvalidPosition)
        );
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        // 1900 + 100 exceeds a 1920-wide frame.
        assert_eq!(
            validate_region(&RoiRect::new(1900, 1000, 100, 100), 1920, 1080),
            Err(RegionError::OutOfBounds)
        );
    }

    #[test]
    fn test_exact_fit_is_in_bounds() {
        assert!(validate_region(&RoiRect::new(0, 0, 1920, 1080), 1920, 1080).is_ok());
        assert!(validate_region(&RoiRect::new(1820, 980, 100, 100), 1920, 1080).is_ok());
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        assert_eq!(
            validate_region(&RoiRect::new(i32::MAX, 0, i32::MAX, 10), 1920, 1080),
            Err(RegionError::OutOfBounds)
        );
    }

    #[test]
    fn test_titles_match_reasons() {
        assert_eq!(RegionError::InvalidDimensions.title(), "Invalid Dimensions");
        assert_eq!(RegionError::InvalidPosition.title(), "Invalid Position");
        assert_eq!(RegionError::OutOfBounds.title(), "ROI Out of Bounds");
    }
}
