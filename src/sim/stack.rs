//! The tower of placed blocks

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;
use crate::color::Rgba;

/// Placed blocks, base first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockStack {
    blocks: Vec<Rect>,
}

impl BlockStack {
    /// A stack holding only the base block, centered on the bottom edge
    pub fn with_base(tuning: &Tuning, color: Rgba) -> Self {
        let base = Rect::new(
            tuning.canvas_width / 2.0 - tuning.block_width / 2.0,
            tuning.canvas_height - tuning.block_height,
            tuning.block_width,
            tuning.block_height,
            color,
        );
        Self { blocks: vec![base] }
    }

    /// Append a placed block
    pub fn push(&mut self, block: Rect) {
        self.blocks.push(block);
    }

    /// Top of the tower
    pub fn top(&self) -> Option<&Rect> {
        self.blocks.last()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[Rect] {
        &self.blocks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rect> {
        self.blocks.iter()
    }

    /// Row y for the next block to land on top
    pub fn next_row_y(&self, tuning: &Tuning) -> f32 {
        tuning.canvas_height - (self.blocks.len() as f32 + 1.0) * tuning.block_height
    }
}
