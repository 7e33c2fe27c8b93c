//! Frogger entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::KeyboardEvent;

    use frogger::renderer::{Scene, SvgRenderer};
    use frogger::sim::{Event, GameState, reduce};
    use frogger::{Autopilot, Settings, input};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: SvgRenderer,
        autopilot: Option<Autopilot>,
        settings: Settings,
    }

    impl Game {
        fn dispatch(&mut self, event: Event) {
            let state = std::mem::take(&mut self.state);
            self.state = reduce(state, event);
        }

        /// One clock period: tick, let the autopilot move, redraw
        fn step(&mut self) {
            self.dispatch(Event::Tick);
            if let Some(event) = self.autopilot.as_mut().and_then(|a| a.next_input(&self.state)) {
                self.dispatch(event);
            }
            self.render();
        }

        fn render(&self) {
            if let Err(e) = self.renderer.render(&Scene::from_state(&self.state)) {
                log::warn!("Render error: {:?}", e);
            }
        }

        fn toggle_autopilot(&mut self) {
            self.autopilot = match self.autopilot {
                Some(_) => None,
                None => Some(new_autopilot(&self.settings)),
            };
            log::info!("Autopilot: {}", self.autopilot.is_some());
        }
    }

    fn new_autopilot(settings: &Settings) -> Autopilot {
        Autopilot::new(js_sys::Date::now() as u64, settings.autopilot_move_every)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let settings = Settings::load();
        if let Some(level) = settings.level_filter().to_level() {
            if let Err(e) = console_log::init_with_level(level) {
                web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
            }
        }

        log::info!("Frogger starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let container = document
            .get_element_by_id("game")
            .or_else(|| document.body().map(Into::into))
            .ok_or("no container element")?;

        let state = GameState::new();
        let renderer = SvgRenderer::new(document, &container, state.canvas_size)?;
        let autopilot = settings.autopilot.then(|| new_autopilot(&settings));
        let interval = settings.tick_interval_ms;

        let game = Rc::new(RefCell::new(Game {
            state,
            renderer,
            autopilot,
            settings,
        }));
        game.borrow().render();

        setup_keyboard(&window, game.clone())?;
        start_clock(&window, game, interval)?;

        log::info!("Frogger running! (tick every {} ms)", interval);
        Ok(())
    }

    fn setup_keyboard(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut g = game.borrow_mut();
            if event.code() == "KeyP" && !event.repeat() {
                g.toggle_autopilot();
                return;
            }
            if let Some(e) = input::key_event(&event.code(), event.repeat()) {
                event.prevent_default();
                g.dispatch(e);
                g.render();
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn start_clock(window: &web_sys::Window, game: Rc<RefCell<Game>>, interval_ms: u32) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut()>::new(move || {
            game.borrow_mut().step();
        });
        window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms as i32,
        )?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use frogger::sim::GameState;
    use frogger::{Autopilot, Settings};

    let settings = Settings::load();
    env_logger::Builder::new()
        .filter_level(settings.level_filter())
        .parse_default_env()
        .init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(0);

    log::info!("Frogger (native) starting...");
    log::info!(
        "Autopilot demo: {} ticks, seed {}, a move every {} ticks",
        settings.demo_ticks,
        seed,
        settings.autopilot_move_every
    );

    let mut pilot = Autopilot::new(seed, settings.autopilot_move_every);
    let state = pilot.session(GameState::new(), settings.demo_ticks);

    log::info!(
        "Demo finished: stage {}, score {}, high score {}, lives {}, targets {}",
        state.stage,
        state.points,
        state.high_score,
        state.lives,
        state.targets_filled
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
