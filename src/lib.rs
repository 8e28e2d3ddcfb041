//! Stack Blocks - a block stacking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (overlap, stack, oscillator, game state)
//! - `renderer`: Scene building and the WebGPU rendering pipeline
//! - `persistence`: High score storage (LocalStorage on web)
//! - `tuning`: Data-driven game balance
//! - `game`: Owner object tying simulation, storage, audio and settings together

pub mod audio;
pub mod color;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use color::{ColorMode, ColorScheme, Rgba};
pub use game::Game;
pub use highscores::HighScore;
pub use settings::Settings;
pub use tuning::{GameConfig, Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions (logical pixels)
    pub const CANVAS_WIDTH: f32 = 400.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Block defaults
    pub const BLOCK_WIDTH: f32 = 200.0;
    pub const BLOCK_HEIGHT: f32 = 30.0;

    /// Moving block speed (pixels per tick)
    pub const START_SPEED: f32 = 2.0;
    /// Speed added after each successful placement
    pub const SPEED_STEP: f32 = 0.1;
    /// Speed never exceeds this
    pub const MAX_SPEED: f32 = 8.0;

    /// Points per placed block
    pub const SCORE_PER_BLOCK: u64 = 10;

    /// Game over wobble: one step every 50 ms
    pub const WOBBLE_INTERVAL_MS: f64 = 50.0;
    pub const WOBBLE_STEP: f32 = 0.3;
    pub const WOBBLE_AMPLITUDE: f32 = 2.0;
    /// Wobble stops once its phase passes this
    pub const WOBBLE_LIMIT: f32 = 10.0;
}
