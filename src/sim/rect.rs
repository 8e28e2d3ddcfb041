//! Axis-aligned block geometry
//!
//! Canvas coordinates: origin at the top-left, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// A block rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Rgba,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: Rgba) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top-left corner
    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Same rect shifted horizontally
    pub fn offset_x(&self, dx: f32) -> Self {
        Self {
            x: self.x + dx,
            ..*self
        }
    }
}

/// Length of the horizontal intersection of two rects (0 when they miss or only touch)
#[inline]
pub fn overlap(a: &Rect, b: &Rect) -> f32 {
    span_overlap(a.left(), a.right(), b.left(), b.right())
}

/// Intersection length of two spans `[a0, a1]` and `[b0, b1]`
#[inline]
pub fn span_overlap(a0: f32, a1: f32, b0: f32, b1: f32) -> f32 {
    (a1.min(b1) - a0.max(b0)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(x: f32, width: f32) -> Rect {
        Rect::new(x, 0.0, width, 30.0, [1.0; 4])
    }

    #[test]
    fn test_partial_overlap() {
        let base = rect(100.0, 200.0);
        let moving = rect(150.0, 200.0);
        assert_eq!(overlap(&moving, &base), 150.0);
    }

    #[test]
    fn test_disjoint_is_zero() {
        let base = rect(100.0, 200.0);
        assert_eq!(overlap(&rect(310.0, 200.0), &base), 0.0);
        assert_eq!(overlap(&rect(0.0, 50.0), &base), 0.0);
    }

    #[test]
    fn test_edge_touching_is_zero() {
        let base = rect(100.0, 200.0);
        assert_eq!(overlap(&rect(300.0, 200.0), &base), 0.0);
        assert_eq!(overlap(&rect(0.0, 100.0), &base), 0.0);
    }

    #[test]
    fn test_containment_is_smaller_width() {
        let outer = rect(0.0, 400.0);
        let inner = rect(120.0, 75.0);
        assert_eq!(overlap(&outer, &inner), 75.0);
        assert_eq!(overlap(&inner, &outer), 75.0);
    }

    #[test]
    fn test_offset_x_keeps_size() {
        let r = rect(10.0, 20.0).offset_x(-4.0);
        assert_eq!(r.x, 6.0);
        assert_eq!(r.size(), Vec2::new(20.0, 30.0));
    }

    proptest! {
        #[test]
        fn prop_overlap_symmetric(
            ax in -500.0f32..500.0, aw in 0.0f32..400.0,
            bx in -500.0f32..500.0, bw in 0.0f32..400.0,
        ) {
            let a = rect(ax, aw);
            let b = rect(bx, bw);
            prop_assert_eq!(overlap(&a, &b), overlap(&b, &a));
        }

        #[test]
        fn prop_overlap_bounded(
            ax in -500.0f32..500.0, aw in 0.0f32..400.0,
            bx in -500.0f32..500.0, bw in 0.0f32..400.0,
        ) {
            let o = overlap(&rect(ax, aw), &rect(bx, bw));
            prop_assert!(o >= 0.0);
            prop_assert!(o <= aw.min(bw) + 1e-3);
        }
    }
}
