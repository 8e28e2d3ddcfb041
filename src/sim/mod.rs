//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod oscillator;
pub mod rect;
pub mod stack;
pub mod state;
pub mod tick;
pub mod wobble;

pub use oscillator::Oscillator;
pub use rect::{Rect, overlap, span_overlap};
pub use stack::BlockStack;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{PlaceOutcome, TickInput, place, restart, start, tick};
pub use wobble::Wobble;
