//! Game state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::oscillator::Oscillator;
use super::stack::BlockStack;
use crate::color::{ColorMode, ColorScheme};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Waiting for the first start command
    #[default]
    Idle,
    /// Block sliding, placements accepted
    Running,
    /// Run ended on a missed placement
    GameOver,
}

/// Things that happened during a command or tick, drained by the owner
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A fresh run began
    Started,
    /// A block landed; `overlap` is its new width
    Placed { overlap: f32, score: u64 },
    /// The run ended
    GameOver { score: u64, new_best: bool },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    /// Moving block speed (pixels per tick)
    pub speed: f32,
    pub stack: BlockStack,
    /// Sliding block, present while running
    pub moving: Option<Oscillator>,
    /// Best score seen, raised when a run beats it
    pub best_score: u64,
    /// Simulation tick counter for the current run
    pub time_ticks: u64,
    /// Color policy for newly spawned blocks
    pub color_scheme: ColorScheme,
    /// Wall clock used for time-based colors
    pub clock_ms: f64,
    /// Pending events (oldest first)
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Create an idle game showing just the base block
    pub fn new(tuning: Tuning, seed: u64, best_score: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let base_color = ColorMode::RandomPalette.pick(&mut rng, 0.0);
        Self {
            stack: BlockStack::with_base(&tuning, base_color),
            speed: tuning.initial_speed,
            tuning,
            phase: GamePhase::Idle,
            score: 0,
            moving: None,
            best_score,
            time_ticks: 0,
            color_scheme: ColorScheme::Classic,
            clock_ms: 0.0,
            events: Vec::new(),
            rng,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Reset stack, score and speed, then enter Running with a new moving block
    pub fn begin_run(&mut self) {
        let base_color = ColorMode::RandomPalette.pick(&mut self.rng, self.clock_ms);
        self.stack = BlockStack::with_base(&self.tuning, base_color);
        self.score = 0;
        self.speed = self.tuning.initial_speed;
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
        self.spawn_moving(self.tuning.block_width);
        self.events.push(GameEvent::Started);
    }

    /// Put a new block at the left edge, one row above the tower
    pub fn spawn_moving(&mut self, width: f32) {
        let color = self
            .color_scheme
            .spawn_mode()
            .pick(&mut self.rng, self.clock_ms);
        let y = self.stack.next_row_y(&self.tuning);
        self.moving = Some(Oscillator::spawn(y, width, self.tuning.block_height, color));
    }

    /// Enter GameOver, raising the best score if beaten
    pub fn end_run(&mut self) {
        self.phase = GamePhase::GameOver;
        let new_best = self.score > self.best_score;
        if new_best {
            self.best_score = self.score;
        }
        self.events.push(GameEvent::GameOver {
            score: self.score,
            new_best,
        });
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
