//! Data-driven game balance
//!
//! Every field falls back to the constants in [`crate::consts`], so a config
//! only needs to name what it changes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::settings::Settings;

#[derive(Error, Debug, PartialEq)]
pub enum TuningError {
    #[error("Config is not valid JSON: {0}")]
    Parse(String),
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("Initial block width {block} does not fit the canvas width {canvas}")]
    BlockWiderThanCanvas { block: f32, canvas: f32 },
    #[error("Max speed {max} is below the initial speed {initial}")]
    SpeedRange { initial: f32, max: f32 },
    #[error("Wobble interval must be positive, got {0}")]
    WobbleInterval(f64),
}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        TuningError::Parse(err.to_string())
    }
}

/// Game balance and geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub block_width: f32,
    pub block_height: f32,
    pub initial_speed: f32,
    pub speed_step: f32,
    pub max_speed: f32,
    pub score_per_block: u64,
    pub wobble_interval_ms: f64,
    pub wobble_step: f32,
    pub wobble_amplitude: f32,
    pub wobble_limit: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            initial_speed: START_SPEED,
            speed_step: SPEED_STEP,
            max_speed: MAX_SPEED,
            score_per_block: SCORE_PER_BLOCK,
            wobble_interval_ms: WOBBLE_INTERVAL_MS,
            wobble_step: WOBBLE_STEP,
            wobble_amplitude: WOBBLE_AMPLITUDE,
            wobble_limit: WOBBLE_LIMIT,
        }
    }
}

impl Tuning {
    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("block_width", self.block_width),
            ("block_height", self.block_height),
            ("initial_speed", self.initial_speed),
            ("wobble_step", self.wobble_step),
            ("wobble_limit", self.wobble_limit),
        ];
        for (field, value) in positive {
            // `!(v > 0)` also catches NaN
            if !(value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }
        let non_negative = [
            ("speed_step", self.speed_step),
            ("wobble_amplitude", self.wobble_amplitude),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(TuningError::Negative { field, value });
            }
        }
        if self.block_width > self.canvas_width {
            return Err(TuningError::BlockWiderThanCanvas {
                block: self.block_width,
                canvas: self.canvas_width,
            });
        }
        if self.max_speed < self.initial_speed {
            return Err(TuningError::SpeedRange {
                initial: self.initial_speed,
                max: self.max_speed,
            });
        }
        if !(self.wobble_interval_ms > 0.0) {
            return Err(TuningError::WobbleInterval(self.wobble_interval_ms));
        }
        Ok(())
    }
}

/// Everything the page can configure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub tuning: Tuning,
    pub settings: Settings,
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.tuning.validate()?;
        Ok(config)
    }
}
