//! Stack Blocks entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement, KeyboardEvent, PointerEvent};

    use stack_blocks::audio::AudioManager;
    use stack_blocks::persistence::LocalStorageStore;
    use stack_blocks::renderer::RenderState;
    use stack_blocks::sim::GamePhase;
    use stack_blocks::{Game, GameConfig};

    const ACTIVE_BUTTON: &str = "rgba(255, 255, 255, 0.4)";
    const INACTIVE_BUTTON: &str = "rgba(255, 255, 255, 0.2)";

    /// Browser-side app: the game plus everything that only exists on the web
    struct App {
        game: Game<LocalStorageStore, AudioManager>,
        render_state: Option<RenderState>,
        /// Phase seen by the last HUD update
        last_phase: GamePhase,
    }

    impl App {
        fn new(config: GameConfig, seed: u64) -> Self {
            Self {
                game: Game::new(config, LocalStorageStore::new(), AudioManager::new(), seed),
                render_state: None,
                last_phase: GamePhase::Idle,
            }
        }

        /// Render the current frame
        fn render(&mut self, time: f64) {
            let scene = self.game.scene(time);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&scene) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
            if let Some(el) = document().and_then(|d| d.get_element_by_id("scoreOverlay")) {
                let text = scene.texts().collect::<Vec<_>>().join(" ");
                el.set_text_content(Some(&text));
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let Some(document) = document() else { return };

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&self.game.score().to_string()));
            }
            if let Some(el) = document.get_element_by_id("highScore") {
                el.set_text_content(Some(&self.game.high_score().to_string()));
            }

            let phase = self.game.phase();
            if phase == self.last_phase {
                return;
            }
            self.last_phase = phase;

            if phase == GamePhase::GameOver {
                if let Some(el) = document.get_element_by_id("finalScore") {
                    el.set_text_content(Some(&self.game.score().to_string()));
                }
                if let Some(el) = document.get_element_by_id("finalHighScore") {
                    el.set_text_content(Some(&self.game.high_score().to_string()));
                }
                set_display(&document, "gameOver", "block");
            } else {
                set_display(&document, "gameOver", "none");
            }
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn set_display(document: &Document, id: &str, display: &str) {
        if let Some(el) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let _ = el.style().set_property("display", display);
        }
    }

    fn set_button_active(id: &str, active: bool) {
        if let Some(el) = document()
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let bg = if active { ACTIVE_BUTTON } else { INACTIVE_BUTTON };
            let _ = el.style().set_property("background", bg);
        }
    }

    /// Page config from `<script id="stack-config" type="application/json">`
    fn load_config(document: &Document) -> GameConfig {
        let Some(json) = document
            .get_element_by_id("stack-config")
            .and_then(|el| el.text_content())
        else {
            return GameConfig::default();
        };
        match GameConfig::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded page config");
                config
            }
            Err(e) => {
                log::warn!("Invalid page config, using defaults: {}", e);
                GameConfig::default()
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Stack Blocks starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("gameCanvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #gameCanvas element");
            return;
        };

        let config = load_config(&document);
        let logical = (config.tuning.canvas_width, config.tuning.canvas_height);
        let rainbow = config.settings.rainbow;
        let sound = config.settings.sound_enabled;

        // Backing store at device resolution, scene stays in logical pixels
        let dpr = window.device_pixel_ratio();
        let width = (logical.0 as f64 * dpr) as u32;
        let height = (logical.1 as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App::new(config, seed)));
        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {}", e);
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height, logical).await {
            Ok(render_state) => app.borrow_mut().render_state = Some(render_state),
            Err(e) => {
                log::error!("Failed to create device: {}", e);
                return;
            }
        }

        set_button_active("rainbowBtn", rainbow);
        set_button_active("soundBtn", sound);

        setup_input_handlers(&canvas, app.clone());
        setup_buttons(app.clone());

        request_animation_frame(app);

        log::info!("Stack Blocks running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Pointer/touch on canvas places the block
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                event.prevent_default();
                let mut a = app.borrow_mut();
                a.game.sound_mut().resume();
                a.game.press_place();
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let window = match web_sys::window() {
                Some(w) => w,
                None => return,
            };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                match event.key().as_str() {
                    " " | "Enter" => {
                        event.prevent_default();
                        a.game.sound_mut().resume();
                        a.game.press_place();
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn on_click(id: &str, handler: impl FnMut(web_sys::MouseEvent) + 'static) {
        let Some(btn) = document().and_then(|d| d.get_element_by_id(id)) else {
            log::warn!("Missing #{} button", id);
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(handler);
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(app: Rc<RefCell<App>>) {
        {
            let app = app.clone();
            on_click("startBtn", move |_| {
                let mut a = app.borrow_mut();
                a.game.sound_mut().resume();
                a.game.press_start();
            });
        }
        {
            let app = app.clone();
            on_click("restartBtn", move |_| {
                let mut a = app.borrow_mut();
                a.game.sound_mut().resume();
                a.game.press_restart();
            });
        }
        {
            let app = app.clone();
            on_click("rainbowBtn", move |_| {
                let on = app.borrow_mut().game.toggle_rainbow();
                set_button_active("rainbowBtn", on);
            });
        }
        on_click("soundBtn", move |_| {
            let on = app.borrow_mut().game.toggle_sound();
            set_button_active("soundBtn", on);
        });
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.game.frame(time);
            a.render(time);
            a.update_hud();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Stack Blocks (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    demo_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless run: press place whenever the block is over the tower's center
#[cfg(not(target_arch = "wasm32"))]
fn demo_run() {
    use stack_blocks::audio::Silent;
    use stack_blocks::persistence::MemoryStore;
    use stack_blocks::sim::GamePhase;
    use stack_blocks::{Game, GameConfig};

    let mut game = Game::new(GameConfig::default(), MemoryStore::new(), Silent, 7);
    game.press_start();

    let mut time = 0.0;
    for frame in 0..20_000u32 {
        time += 1000.0 / 60.0;

        if let (Some(moving), Some(top)) = (game.state.moving, game.state.stack.top().copied()) {
            let centered = (moving.x + moving.width / 2.0) - (top.x + top.width / 2.0);
            // Drift a little later each level so the tower eventually falls
            if centered.abs() < 1.0 + frame as f32 * 0.002 {
                game.press_place();
            }
        }

        game.frame(time);
        if game.phase() == GamePhase::GameOver {
            break;
        }
    }

    println!(
        "Demo finished: score {} with {} blocks, high score {}",
        game.score(),
        game.state.stack.len(),
        game.high_score()
    );
}
