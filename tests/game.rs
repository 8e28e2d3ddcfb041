// Integration tests (native) for the `stack-blocks` crate.
// These drive the `Game` owner with an in-memory store and a recording sound
// sink, so they run under `cargo test` on the host.

use stack_blocks::audio::{SoundEffect, SoundSink};
use stack_blocks::persistence::{MemoryStore, ScoreStore};
use stack_blocks::sim::GamePhase;
use stack_blocks::{Game, GameConfig, Settings};

#[derive(Default)]
struct Recorder {
    played: Vec<SoundEffect>,
}

impl SoundSink for Recorder {
    fn play(&mut self, effect: SoundEffect, _volume: f32) {
        self.played.push(effect);
    }
}

fn new_game(store: MemoryStore) -> Game<MemoryStore, Recorder> {
    Game::new(GameConfig::default(), store, Recorder::default(), 2024)
}

fn set_x(game: &mut Game<MemoryStore, Recorder>, x: f32) {
    game.state.moving.as_mut().expect("moving block").x = x;
}

/// Start a run and advance one frame
fn started(store: MemoryStore) -> Game<MemoryStore, Recorder> {
    let mut game = new_game(store);
    game.press_start();
    game.frame(16.0);
    assert_eq!(game.phase(), GamePhase::Running);
    game
}

#[test]
fn idle_until_started() {
    let mut game = new_game(MemoryStore::new());
    game.press_place();
    game.frame(16.0);
    assert_eq!(game.phase(), GamePhase::Idle);
    assert_eq!(game.state.stack.len(), 1);
    assert!(game.state.moving.is_none());
}

#[test]
fn placement_scores_and_beeps_once() {
    let mut game = started(MemoryStore::new());
    set_x(&mut game, 150.0);
    game.press_place();
    game.frame(32.0);

    assert_eq!(game.score(), 10);
    assert_eq!(game.state.stack.len(), 2);
    assert_eq!(game.state.stack.top().unwrap().width, 150.0);
    assert_eq!(game.sound().played, vec![SoundEffect::Place]);

    // No further beeps without further placements
    for i in 0..10 {
        game.frame(48.0 + i as f64 * 16.0);
    }
    assert_eq!(game.sound().played.len(), 1);
}

#[test]
fn miss_ends_run_and_saves_record() {
    let mut game = started(MemoryStore::new());
    set_x(&mut game, 150.0);
    game.press_place();
    game.frame(32.0);

    // Top spans 150..300, a 150 wide block at 390 misses
    set_x(&mut game, 390.0);
    game.press_place();
    game.frame(48.0);

    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.state.stack.len(), 2);
    assert_eq!(game.high_score(), 10);
    assert_eq!(game.store().raw(), Some("10"));
    assert_eq!(
        game.sound().played,
        vec![SoundEffect::Place, SoundEffect::HighScore]
    );
    assert!(game.wobble().is_some_and(|w| w.is_active()));
}

#[test]
fn high_score_never_decreases() {
    let mut game = started(MemoryStore::with_raw("500"));
    assert_eq!(game.high_score(), 500);

    set_x(&mut game, 150.0);
    game.press_place();
    game.frame(32.0);
    set_x(&mut game, 390.0);
    game.press_place();
    game.frame(48.0);

    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.high_score(), 500);
    assert_eq!(game.store().writes, 0);
    assert_eq!(game.store().load(), 500);
    assert_eq!(game.sound().played.last(), Some(&SoundEffect::GameOver));
}

#[test]
fn record_is_shared_between_sim_and_store() {
    let mut game = started(MemoryStore::with_raw("40"));
    assert_eq!(game.state.best_score, 40);

    for (i, x) in [100.0, 100.0, 100.0, 100.0, 100.0].into_iter().enumerate() {
        set_x(&mut game, x);
        game.press_place();
        game.frame(32.0 + i as f64 * 16.0);
    }
    assert_eq!(game.score(), 50);
    set_x(&mut game, 390.0);
    game.press_place();
    game.frame(200.0);

    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.high_score(), 50);
    assert_eq!(game.state.best_score, game.high_score());
    assert_eq!(game.store().load(), 50);
    assert_eq!(game.sound().played.last(), Some(&SoundEffect::HighScore));
}

#[test]
fn restart_resets_run() {
    let mut game = started(MemoryStore::new());

    // Restart is ignored while running
    game.press_restart();
    game.frame(20.0);
    assert_eq!(game.phase(), GamePhase::Running);

    set_x(&mut game, 120.0);
    game.press_place();
    game.frame(32.0);
    set_x(&mut game, 0.0);
    game.state.moving.as_mut().unwrap().width = 50.0;
    game.press_place();
    game.frame(48.0);
    assert_eq!(game.phase(), GamePhase::GameOver);

    game.press_restart();
    game.frame(64.0);
    assert_eq!(game.phase(), GamePhase::Running);
    assert_eq!(game.state.stack.len(), 1);
    assert_eq!(game.score(), 0);
    assert_eq!(game.state.speed, 2.0);
    assert!(game.wobble().is_none());
    assert_eq!(game.high_score(), 10);
}

#[test]
fn wobble_runs_on_main_clock_and_stops() {
    let mut game = started(MemoryStore::new());
    set_x(&mut game, 390.0);
    game.press_place();
    game.frame(32.0);
    assert_eq!(game.phase(), GamePhase::GameOver);

    let base_x = game.state.stack.blocks()[0].x;
    let mut t = 32.0;
    while game.wobble().is_some_and(|w| w.is_active()) {
        t += 16.0;
        game.frame(t);
        assert!(t < 10_000.0, "wobble never stopped");
    }
    // ~34 steps of 50ms
    assert!(t >= 1700.0);
    // Only the drawing moves, the stack does not
    assert_eq!(game.state.stack.blocks()[0].x, base_x);
    assert_eq!(game.state.stack.len(), 1);
}

#[test]
fn muted_game_is_silent() {
    let mut game = started(MemoryStore::new());
    assert!(!game.toggle_sound());
    set_x(&mut game, 150.0);
    game.press_place();
    game.frame(32.0);
    set_x(&mut game, 390.0);
    game.press_place();
    game.frame(48.0);

    assert_eq!(game.score(), 10);
    assert!(game.sound().played.is_empty());
}

#[test]
fn reduced_motion_skips_wobble() {
    let config = GameConfig {
        settings: Settings {
            reduced_motion: true,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut game = Game::new(config, MemoryStore::new(), Recorder::default(), 1);
    game.press_start();
    game.frame(16.0);
    set_x(&mut game, 390.0);
    game.press_place();
    game.frame(32.0);

    assert_eq!(game.phase(), GamePhase::GameOver);
    assert!(game.wobble().is_none());
}

#[test]
fn rainbow_toggle_affects_next_spawn() {
    let mut game = started(MemoryStore::new());
    let classic = game.state.moving.unwrap().color;
    assert!(game.toggle_rainbow());

    set_x(&mut game, 100.0);
    game.press_place();
    game.frame(32.0);

    // Placed block kept the color it spawned with
    assert_eq!(game.state.stack.top().unwrap().color, classic);
    let next = game.state.moving.unwrap().color;
    assert!(stack_blocks::color::colors::PALETTE.contains(&next));
}

#[test]
fn scene_does_not_touch_state() {
    let mut game = started(MemoryStore::new());
    set_x(&mut game, 150.0);
    game.press_place();
    game.frame(32.0);

    let before_blocks = game.state.stack.blocks().to_vec();
    let before_moving = game.state.moving;
    let scene = game.scene(1234.0);

    assert!(scene.texts().any(|t| t == "Score: 10"));
    assert_eq!(game.state.stack.blocks(), before_blocks.as_slice());
    assert_eq!(game.state.moving, before_moving);
}
