//! Game over wobble
//!
//! After a miss the tower sways for a moment. The sway is stepped from the
//! main loop at a fixed interval, so it never races the simulation, and it
//! only displaces blocks at draw time; the stack itself is left untouched.

use crate::tuning::Tuning;

#[derive(Debug, Clone, Default)]
pub struct Wobble {
    /// Accumulated phase, grows by `step` each interval
    phase: f32,
    /// Horizontal displacement per block, base first
    offsets: Vec<f32>,
    /// Time not yet consumed by a whole step
    accumulator: f64,
    active: bool,
    interval_ms: f64,
    step: f32,
    amplitude: f32,
    limit: f32,
}

impl Wobble {
    /// Start swaying a tower of `block_count` blocks
    pub fn start(block_count: usize, tuning: &Tuning) -> Self {
        Self {
            phase: 0.0,
            offsets: vec![0.0; block_count],
            accumulator: 0.0,
            active: true,
            interval_ms: tuning.wobble_interval_ms,
            step: tuning.wobble_step,
            amplitude: tuning.wobble_amplitude,
            limit: tuning.wobble_limit,
        }
    }

    /// Advance by elapsed wall time, returns true while still running
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        if !self.active {
            return false;
        }
        self.accumulator += dt_ms.max(0.0);

        while self.active && self.accumulator >= self.interval_ms {
            self.accumulator -= self.interval_ms;
            self.phase += self.step;
            for (i, offset) in self.offsets.iter_mut().enumerate() {
                *offset += (self.phase + i as f32).sin() * self.amplitude;
            }
            if self.phase > self.limit {
                self.active = false;
            }
        }

        self.active
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Displacement of block `index` (0 for blocks the wobble never saw)
    pub fn offset(&self, index: usize) -> f32 {
        self.offsets.get(index).copied().unwrap_or(0.0)
    }

    pub fn offsets(&self) -> &[f32] {
        &self.offsets
    }
}
