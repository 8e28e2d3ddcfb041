//! Game owner
//!
//! Holds the simulation state together with its collaborators (high score
//! store, sound, settings, wobble). The browser shell keeps one `Game` behind
//! an `Rc<RefCell<_>>` and hands that handle to every input listener, so all
//! commands and frames go through this type.

use crate::audio::{SoundEffect, SoundSink};
use crate::highscores::HighScore;
use crate::persistence::ScoreStore;
use crate::renderer::scene::{self, Scene, SceneView};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, Wobble, tick};
use crate::tuning::GameConfig;

pub struct Game<S: ScoreStore, A: SoundSink> {
    pub state: GameState,
    pub settings: Settings,
    high_score: HighScore<S>,
    sound: A,
    wobble: Option<Wobble>,
    /// Commands queued since the last frame
    input: TickInput,
    last_time: f64,
}

impl<S: ScoreStore, A: SoundSink> Game<S, A> {
    pub fn new(config: GameConfig, store: S, sound: A, seed: u64) -> Self {
        let high_score = HighScore::load(store);
        // Sim copy of the record starts from the stored value
        let mut state = GameState::new(config.tuning, seed, high_score.best());
        state.color_scheme = config.settings.color_scheme();
        Self {
            state,
            settings: config.settings,
            high_score,
            sound,
            wobble: None,
            input: TickInput::default(),
            last_time: 0.0,
        }
    }

    /// Queue the start command
    pub fn press_start(&mut self) {
        self.input.start = true;
    }

    /// Queue a placement
    pub fn press_place(&mut self) {
        self.input.place = true;
    }

    /// Queue a restart
    pub fn press_restart(&mut self) {
        self.input.restart = true;
    }

    pub fn toggle_rainbow(&mut self) -> bool {
        let on = self.settings.toggle_rainbow();
        self.state.color_scheme = self.settings.color_scheme();
        log::info!("Rainbow mode: {}", on);
        on
    }

    pub fn toggle_sound(&mut self) -> bool {
        let on = self.settings.toggle_sound();
        log::info!("Sound: {}", on);
        on
    }

    /// Run one frame: apply queued commands, advance the simulation and the
    /// game over wobble.
    pub fn frame(&mut self, time_ms: f64) {
        let dt = if self.last_time > 0.0 {
            (time_ms - self.last_time).max(0.0)
        } else {
            0.0
        };
        self.last_time = time_ms;
        self.state.clock_ms = time_ms;

        let input = std::mem::take(&mut self.input);
        tick(&mut self.state, &input);
        self.handle_events();

        if let Some(wobble) = self.wobble.as_mut() {
            wobble.advance(dt);
        }
    }

    fn handle_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Started => {
                    self.wobble = None;
                }
                GameEvent::Placed { .. } => {
                    self.play(SoundEffect::Place);
                }
                GameEvent::GameOver { score, new_best } => {
                    let record = self.high_score.submit(score);
                    // The persisted record is authoritative
                    self.state.best_score = self.high_score.best();
                    if record != new_best {
                        log::warn!(
                            "Record flag mismatch: sim {} store {}",
                            new_best,
                            record
                        );
                    }
                    log::info!(
                        "Game over: score {} (best {}{})",
                        score,
                        self.high_score.best(),
                        if record { ", new record" } else { "" }
                    );
                    if !self.settings.reduced_motion {
                        self.wobble = Some(Wobble::start(self.state.stack.len(), &self.state.tuning));
                    }
                    self.play(if record {
                        SoundEffect::HighScore
                    } else {
                        SoundEffect::GameOver
                    });
                }
            }
        }
    }

    fn play(&mut self, effect: SoundEffect) {
        if self.settings.sound_enabled {
            self.sound.play(effect, self.settings.effective_volume());
        }
    }

    /// Drawing commands for the current state
    pub fn scene(&self, time_ms: f64) -> Scene {
        scene::build(&SceneView {
            state: &self.state,
            wobble: self.wobble.as_ref(),
            scheme: self.settings.color_scheme(),
            time_ms,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best()
    }

    pub fn wobble(&self) -> Option<&Wobble> {
        self.wobble.as_ref()
    }

    pub fn store(&self) -> &S {
        self.high_score.store()
    }

    pub fn sound(&self) -> &A {
        &self.sound
    }

    /// Mutable access to the sound sink (the shell resumes audio on gestures)
    pub fn sound_mut(&mut self) -> &mut A {
        &mut self.sound
    }
}
