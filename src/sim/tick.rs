//! Commands and the per-frame simulation tick
//!
//! Commands are applied before motion so a placement always sees the block
//! where the player last saw it.

use super::rect::{Rect, overlap};
use super::state::{GameEvent, GamePhase, GameState};

/// One-shot commands collected between frames
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start button
    pub start: bool,
    /// Click/tap/space on the canvas
    pub place: bool,
    /// Restart button on the game over panel
    pub restart: bool,
}

/// Result of a placement attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaceOutcome {
    /// Not running, nothing happened
    Ignored,
    /// Block landed with the given width
    Placed { overlap: f32 },
    /// Block missed the tower, run over
    Missed,
}

/// Begin a run from Idle (or from GameOver, which acts as a restart)
pub fn start(state: &mut GameState) -> bool {
    if state.phase == GamePhase::Running {
        return false;
    }
    state.begin_run();
    log::info!("Run started");
    true
}

/// Return to Running with a fresh tower; only valid after a game over
pub fn restart(state: &mut GameState) -> bool {
    if state.phase != GamePhase::GameOver {
        return false;
    }
    state.begin_run();
    log::info!("Run restarted");
    true
}

/// Freeze the moving block against the top of the tower
pub fn place(state: &mut GameState) -> PlaceOutcome {
    if state.phase != GamePhase::Running {
        return PlaceOutcome::Ignored;
    }
    let (Some(moving), Some(top)) = (state.moving, state.stack.top().copied()) else {
        return PlaceOutcome::Ignored;
    };

    let current = moving.rect();
    let width = overlap(&current, &top);

    // Touching edges count as a miss
    if width <= 0.0 {
        state.moving = None;
        state.end_run();
        log::info!("Missed at x={:.1}, final score {}", current.x, state.score);
        return PlaceOutcome::Missed;
    }

    // Frozen where it stopped, narrowed to the overlap
    let landed = Rect::new(current.x, current.y, width, current.height, current.color);
    state.stack.push(landed);

    let tuning = &state.tuning;
    state.score += tuning.score_per_block;
    state.speed = (state.speed + tuning.speed_step).min(tuning.max_speed);
    state.spawn_moving(width);

    state.events.push(GameEvent::Placed {
        overlap: width,
        score: state.score,
    });
    log::debug!(
        "Placed block {} width={:.1} speed={:.2}",
        state.stack.len(),
        width,
        state.speed
    );

    PlaceOutcome::Placed { overlap: width }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.start {
        start(state);
    }
    if input.restart {
        restart(state);
    }
    if input.place {
        place(state);
    }

    // Stopped runs never move
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    let canvas_width = state.tuning.canvas_width;
    let speed = state.speed;
    if let Some(moving) = state.moving.as_mut() {
        moving.step(speed, canvas_width);
    }
}
