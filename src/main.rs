//! Nebula Strike entry point
//!
//! Wires the simulation, renderer and audio into the page on WASM. Natively
//! it runs a headless autopilot game and logs a summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, KeyboardEvent};

    use nebula_strike::audio::{AudioManager, SoundEffect};
    use nebula_strike::consts::TICK_INTERVAL_MS;
    use nebula_strike::persistence::LocalStore;
    use nebula_strike::platform::{Action, InputState, PageHide, PlatformError};
    use nebula_strike::renderer::Renderer;
    use nebula_strike::sim::{GameEvent, GamePhase, GameState, tick};
    use nebula_strike::{HighScore, Settings};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Renderer,
        ctx: CanvasRenderingContext2d,
        score_label: Option<Element>,
        input: InputState,
        audio: AudioManager,
        settings: Settings,
        high_score: HighScore,
        store: LocalStore,
    }

    impl Game {
        /// One timer callback: advance, draw, then react to what happened
        fn step(&mut self) {
            self.renderer.advance();
            let input = self.input.take_tick_input();
            tick(&mut self.state, &input);
            self.renderer.render(&mut self.ctx, &self.state);

            for event in self.state.take_events() {
                self.handle_event(&event);
            }
        }

        fn handle_event(&mut self, event: &GameEvent) {
            if let Some(effect) = SoundEffect::for_event(event) {
                self.audio.play(effect);
            }

            match event {
                GameEvent::ScoreChanged(score) => self.update_score_label(*score),
                GameEvent::HighScoreBeaten(score) => {
                    if self.high_score.record(*score) {
                        self.high_score.save(&mut self.store);
                    }
                }
                GameEvent::PauseToggled(paused) => {
                    log::info!("{}", if *paused { "Paused" } else { "Resumed" });
                }
                GameEvent::Restarted => log::info!("Game restarted"),
                _ => {}
            }
        }

        fn update_score_label(&self, score: u64) {
            if let Some(label) = &self.score_label {
                label.set_text_content(Some(&format!("Score: {}", score)));
            }
        }

        fn toggle_mute(&mut self) {
            let muted = self.settings.toggle_mute();
            self.audio.set_volume(self.settings.effective_volume());
            self.settings.save(&mut self.store);
            log::info!("Sound {}", if muted { "muted" } else { "unmuted" });
        }

        /// Switch to the next quality preset and apply it immediately
        fn cycle_quality(&mut self) {
            let quality = self.settings.cycle_quality();
            self.renderer.background.set_quality(quality);
            self.state.set_particle_cap(self.settings.max_particles());
            self.settings.save(&mut self.store);
            log::info!("Quality set to {}", quality.as_str());
        }

        /// Pause if a run is in progress and forget held keys
        fn auto_pause(&mut self, reason: &str) {
            self.input.release_all();
            if self.settings.pause_on_blur && self.state.phase == GamePhase::Playing {
                self.input.request_pause();
                log::info!("Auto-paused ({})", reason);
            }
        }
    }

    pub fn run() -> Result<(), PlatformError> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Nebula Strike starting...");

        let window = web_sys::window().ok_or(PlatformError::NoWindow)?;
        let document = window.document().ok_or(PlatformError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| PlatformError::MissingElement("gameCanvas".into()))?
            .dyn_into()
            .map_err(|_| PlatformError::WrongElementType("gameCanvas".into(), "canvas"))?;
        canvas.set_width(nebula_strike::consts::CANVAS_WIDTH as u32);
        canvas.set_height(nebula_strike::consts::CANVAS_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or(PlatformError::NoContext)?
            .dyn_into()
            .map_err(|_| PlatformError::NoContext)?;

        let score_label = document.get_element_by_id("score");
        if score_label.is_none() {
            log::warn!("No #score element - score label disabled");
        }

        let store = LocalStore::open();
        let settings = Settings::load(&store);
        let high_score = HighScore::load(&store);

        let seed = js_sys::Date::now() as u64;
        let mut state = GameState::new(seed, high_score.best);
        state.set_particle_cap(settings.max_particles());
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state,
            renderer: Renderer::new(seed, settings.quality),
            ctx,
            score_label,
            input: InputState::new(),
            audio: AudioManager::new(settings.effective_volume()),
            settings,
            high_score,
            store,
        }));
        game.borrow().update_score_label(0);

        setup_input_handlers(&window, game.clone());
        setup_auto_pause(&window, &document, game.clone());
        start_game_loop(&window, game)?;

        log::info!("Nebula Strike running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        // Keydown
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                // Browsers only allow audio after a user gesture
                g.audio.resume();

                let Some(action) = g.input.key_down(&event.key(), event.repeat()) else {
                    return;
                };
                event.prevent_default();
                if event.repeat() {
                    return;
                }
                match action {
                    Action::ToggleMute => g.toggle_mute(),
                    Action::CycleQuality => g.cycle_quality(),
                    _ => {}
                }
            });
            let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyup
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().input.key_up(&event.key()).is_some() {
                    event.prevent_default();
                }
            });
            let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(window: &web_sys::Window, document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    game.borrow_mut().auto_pause("tab hidden");
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().auto_pause("window blur");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Drive the game from a repeating timer. The timer is cleared when the
    /// page is unloaded; pages kept in the back/forward cache keep it.
    fn start_game_loop(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), PlatformError> {
        let closure = Closure::<dyn FnMut()>::new(move || {
            game.borrow_mut().step();
        });
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            TICK_INTERVAL_MS,
        )?;
        closure.forget();

        let window_clone = window.clone();
        let teardown = Closure::<dyn FnMut(_)>::new(move |event: web_sys::PageTransitionEvent| {
            if PageHide::from_persisted(event.persisted()).stops_game_loop() {
                window_clone.clear_interval_with_handle(handle);
                log::info!("Game loop stopped");
            }
        });
        let _ = window.add_event_listener_with_callback("pagehide", teardown.as_ref().unchecked_ref());
        teardown.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use nebula_strike::HighScore;
    use nebula_strike::consts::TICKS_PER_SECOND;
    use nebula_strike::persistence::MemoryStore;
    use nebula_strike::sim::{EnemyKind, GameEvent, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Nebula Strike (native) starting...");
    log::info!("The playable game is the WASM build; running a headless autopilot game");

    let mut args = std::env::args().skip(1);
    let seed = parse_arg(args.next(), "seed", 42u64);
    let max_ticks = parse_arg(args.next(), "ticks", 5 * 60 * TICKS_PER_SECOND as u64);

    let mut store = MemoryStore::new();
    let mut high_score = HighScore::load(&store);
    let mut state = GameState::new(seed, high_score.best);
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    let mut kills = [0u32; 3];
    let mut shots = 0u32;
    let mut power_ups = 0u32;
    let mut hits_taken = 0u32;

    while state.time_ticks < max_ticks && !state.is_game_over() {
        tick(&mut state, &input);
        for event in state.take_events() {
            match event {
                GameEvent::Shot => shots += 1,
                GameEvent::EnemyDestroyed { kind, .. } => {
                    let slot = match kind {
                        EnemyKind::Red => 0,
                        EnemyKind::Orange => 1,
                        EnemyKind::Purple => 2,
                    };
                    kills[slot] += 1;
                }
                GameEvent::PowerUpCollected(kind) => {
                    power_ups += 1;
                    log::debug!("Collected {:?} at tick {}", kind, state.time_ticks);
                }
                GameEvent::PlayerDamaged => hits_taken += 1,
                GameEvent::HighScoreBeaten(score) => {
                    if high_score.record(score) {
                        high_score.save(&mut store);
                    }
                }
                _ => {}
            }
        }
    }

    let seconds = state.time_ticks as f64 / TICKS_PER_SECOND as f64;
    log::info!(
        "Run over after {:.1}s ({}): score {}, best {}",
        seconds,
        if state.is_game_over() { "ship destroyed" } else { "tick limit" },
        state.score,
        high_score.best
    );
    log::info!(
        "Kills: {} red, {} orange, {} purple | volleys {} | power-ups {} | hits taken {}",
        kills[0],
        kills[1],
        kills[2],
        shots,
        power_ups,
        hits_taken
    );
}

/// Parse an optional positional argument, keeping the default on garbage
#[cfg(not(target_arch = "wasm32"))]
fn parse_arg<T: std::str::FromStr + Copy + std::fmt::Display>(
    arg: Option<String>,
    name: &str,
    default: T,
) -> T {
    match arg {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Invalid {} {:?}, using {}", name, raw, default);
            default
        }),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
