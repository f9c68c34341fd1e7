// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! ROI data structures.
//!
//! This module defines the rectangle describing a region of interest and
//! the ordered set of rectangles the application displays. The set always
//! holds at least one rectangle; mutations that would empty it are refused.

use thiserror::Error;

/// An axis-aligned rectangle in frame pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoiRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl RoiRect {
    /// Create a rectangle from its top-left corner and size.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Errors produced by [`RoiSet`] mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoiSetError {
    #[error("At least one ROI must remain.")]
    MinimumSize,
    #[error("ROI list must not be empty")]
    EmptyReplacement,
}

/// An ordered collection of ROI rectangles.
///
/// Element position determines display order, the assigned color, and the
/// paired stream window.
#[derive(Debug, Clone)]
pub struct RoiSet {
    rects: Vec<RoiRect>,
}

impl RoiSet {
    /// Create a set containing a single rectangle.
    pub fn new(initial: RoiRect) -> Self {
        Self {
            rects: vec![initial],
        }
    }

    /// Append a rectangle at the end of the set.
    pub fn add(&mut self, rect: RoiRect) {
        self.rects.push(rect);
    }

    /// Remove and return the rectangle at `index`.
    ///
    /// Fails without modifying the set when only one rectangle remains.
    pub fn remove(&mut self, index: usize) -> Result<RoiRect, RoiSetError> {
        if self.rects.len() <= 1 {
            return Err(RoiSetError::MinimumSize);
        }
        Ok(self.rects.remove(index))
    }

    /// Replace the whole set in one step.
    pub fn replace_all(&mut self, rects: Vec<RoiRect>) -> Result<(), RoiSetError> {
        if rects.is_empty() {
            return Err(RoiSetError::EmptyReplacement);
        }
        self.rects = rects;
        Ok(())
    }

    /// Rectangles in display order.
    pub fn rects(&self) -> &[RoiRect] {
        &self.rects
    }

    /// Mutable access to the rectangles; the length is fixed through this view.
    pub fn rects_mut(&mut self) -> &mut [RoiRect] {
        &mut self.rects
    }

    /// Copy the rectangles into a plain vector.
    pub fn to_vec(&self) -> Vec<RoiRect> {
        self.rects.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_set_has_one_rect() {
        let set = RoiSet::new(RoiRect::new(50, 50, 100, 100));
        assert_eq!(set.rects(), &[RoiRect::new(50, 50, 100, 100)]);
    }

    #[test]
    fn test_remove_refuses_last_rect() {
        let mut set = RoiSet::new(RoiRect::new(50, 50, 100, 100));
        assert_eq!(set.remove(0), Err(RoiSetError::MinimumSize));
        assert_eq!(set.rects().len(), 1);
    }

    #[test]
    fn test_remove_returns_rect() {
        let mut set = RoiSet::new(RoiRect::new(0, 0, 10, 10));
        set.add(RoiRect::new(20, 20, 30, 30));

        let removed = set.remove(1);
        assert_eq!(removed, Ok(RoiRect::new(20, 20, 30, 30)));
        assert_eq!(set.rects().len(), 1);
    }

    #[test]
    fn test_replace_all_rejects_empty() {
        let mut set = RoiSet::new(RoiRect::new(0, 0, 10, 10));
        assert_eq!(set.replace_all(Vec::new()), Err(RoiSetError::EmptyReplacement));
        assert_eq!(set.rects().len(), 1);
    }

    #[test]
    fn test_replace_all_swaps_contents() {
        let mut set = RoiSet::new(RoiRect::new(0, 0, 10, 10));
        let rects = vec![RoiRect::new(1, 2, 3, 4), RoiRect::new(5, 6, 7, 8)];

        assert!(set.replace_all(rects.clone()).is_ok());
        assert_eq!(set.rects(), rects.as_slice());
    }
}
