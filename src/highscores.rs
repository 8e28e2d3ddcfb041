//! High score tracking
//!
//! A single best score that only ever goes up, written through a
//! [`ScoreStore`] whenever it is beaten.

use crate::persistence::ScoreStore;

/// Best score plus the store it is persisted to
#[derive(Debug, Clone, Default)]
pub struct HighScore<S: ScoreStore> {
    best: u64,
    store: S,
}

impl<S: ScoreStore> HighScore<S> {
    /// Load the stored value
    pub fn load(store: S) -> Self {
        let best = store.load();
        log::info!("Loaded high score {}", best);
        Self { best, store }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Check if a score would set a new record
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Record a finished run's score, saving it when it beats the best.
    /// Returns true when the record changed.
    pub fn submit(&mut self, score: u64) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        self.store.save(score);
        true
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
