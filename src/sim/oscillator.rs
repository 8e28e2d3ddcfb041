//! Horizontal motion of the moving block
//!
//! The block slides `speed` pixels per tick and bounces off both canvas edges.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::color::Rgba;

/// The block currently sliding above the tower
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oscillator {
    /// Left edge
    pub x: f32,
    /// Row the block slides along
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// +1 moving right, -1 moving left
    pub direction: f32,
    /// Color stored on the block when it is placed
    pub color: Rgba,
}

impl Oscillator {
    /// Spawn at the left edge moving right
    pub fn spawn(y: f32, width: f32, height: f32, color: Rgba) -> Self {
        Self {
            x: 0.0,
            y,
            width,
            height,
            direction: 1.0,
            color,
        }
    }

    /// Advance one tick, reflecting at the canvas bounds
    pub fn step(&mut self, speed: f32, canvas_width: f32) {
        self.x += speed * self.direction;

        if self.x <= 0.0 || self.x + self.width >= canvas_width {
            self.direction = -self.direction;
            self.x = self.x.min(canvas_width - self.width).max(0.0);
        }
    }

    /// Current footprint as a rect
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CANVAS: f32 = 400.0;

    #[test]
    fn test_moves_right_from_spawn() {
        let mut osc = Oscillator::spawn(540.0, 200.0, 30.0, [1.0; 4]);
        osc.step(2.0, CANVAS);
        assert_eq!(osc.x, 2.0);
        assert_eq!(osc.direction, 1.0);
    }

    #[test]
    fn test_bounces_off_right_edge() {
        let mut osc = Oscillator::spawn(540.0, 200.0, 30.0, [1.0; 4]);
        osc.x = 197.0;
        osc.step(5.0, CANVAS);
        assert_eq!(osc.x, 200.0);
        assert_eq!(osc.direction, -1.0);

        osc.step(5.0, CANVAS);
        assert_eq!(osc.x, 195.0);
    }

    #[test]
    fn test_bounces_off_left_edge() {
        let mut osc = Oscillator::spawn(540.0, 100.0, 30.0, [1.0; 4]);
        osc.x = 3.0;
        osc.direction = -1.0;
        osc.step(5.0, CANVAS);
        assert_eq!(osc.x, 0.0);
        assert_eq!(osc.direction, 1.0);
    }

    #[test]
    fn test_full_width_block_stays_put() {
        let mut osc = Oscillator::spawn(540.0, CANVAS, 30.0, [1.0; 4]);
        for _ in 0..10 {
            osc.step(3.0, CANVAS);
            assert_eq!(osc.x, 0.0);
        }
    }

    proptest! {
        #[test]
        fn prop_stays_inside_canvas(
            width in 1.0f32..=400.0,
            speed in 0.1f32..=8.0,
            ticks in 1usize..2000,
        ) {
            let mut osc = Oscillator::spawn(0.0, width, 30.0, [1.0; 4]);
            for _ in 0..ticks {
                osc.step(speed, CANVAS);
                prop_assert!(osc.x >= 0.0);
                prop_assert!(osc.x <= CANVAS - width + 1e-3);
                prop_assert!(osc.direction == 1.0 || osc.direction == -1.0);
            }
        }
    }
}
