//! Artillery Duel entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlInputElement, PointerEvent};

    use artillery_duel::MatchSettings;
    use artillery_duel::platform::ViewportTransform;
    use artillery_duel::sim::{Match, PointerAction, TickInput, tick};
    use artillery_duel::snapshot::FrameSnapshot;

    // Drawing is done by the page; hand it each frame if it registered a hook
    #[wasm_bindgen(inline_js = "
        export function draw_frame(json) {
            if (typeof window.drawArtilleryFrame === 'function') {
                window.drawArtilleryFrame(json);
            }
        }
    ")]
    extern "C" {
        fn draw_frame(json: &str);
    }

    /// Game instance holding all state
    struct Game {
        state: Match,
        input: TickInput,
        canvas: HtmlCanvasElement,
    }

    impl Game {
        fn new(canvas: HtmlCanvasElement, settings: MatchSettings, seed: u64) -> Self {
            let state = Match::new(canvas.width() as f32, canvas.height() as f32, settings, seed);
            Self {
                state,
                input: TickInput::default(),
                canvas,
            }
        }

        /// Client coordinates -> playfield
        fn to_playfield(&self, event: &PointerEvent) -> glam::Vec2 {
            let rect = self.canvas.get_bounding_client_rect();
            let transform = ViewportTransform {
                rect_left: rect.left() as f32,
                rect_top: rect.top() as f32,
                rect_width: rect.width() as f32,
                rect_height: rect.height() as f32,
                canvas_width: self.canvas.width() as f32,
                canvas_height: self.canvas.height() as f32,
            };
            transform.to_playfield(event.client_x() as f32, event.client_y() as f32)
        }

        /// Run one simulation tick, then hand the frame to the page
        fn frame(&mut self) {
            tick(&mut self.state, &self.input);
            self.input.clear();

            for event in self.state.drain_events() {
                log::debug!("{:?}", event);
            }

            draw_frame(&FrameSnapshot::capture(&self.state).to_json());
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Artillery Duel starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        fit_canvas(&canvas);

        let settings = read_settings().unwrap_or_default();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(canvas.clone(), settings, seed)));
        log::info!("Game initialized with seed: {}", seed);

        setup_pointer_handlers(&canvas, game.clone());
        setup_restart_button(game.clone());
        setup_settings_inputs(game.clone());
        setup_resize(game.clone());

        request_animation_frame(game);

        log::info!("Artillery Duel running!");
    }

    /// Match the backing store to the displayed size
    fn fit_canvas(canvas: &HtmlCanvasElement) {
        let w = canvas.client_width().max(1) as u32;
        let h = canvas.client_height().max(1) as u32;
        canvas.set_width(w);
        canvas.set_height(h);
    }

    fn input_element(id: &str) -> Option<HtmlInputElement> {
        web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into()
            .ok()
    }

    /// Current values of the setup inputs, corrected in place when invalid
    fn read_settings() -> Option<MatchSettings> {
        let distance = input_element("distance")?;
        let hilliness = input_element("hilliness")?;
        let settings = MatchSettings::from_raw(&distance.value(), &hilliness.value());
        distance.set_value(&settings.player_distance_percent.to_string());
        hilliness.set_value(&settings.hilliness.to_string());
        Some(settings)
    }

    fn setup_pointer_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Pointer down - start aiming unless over an overlaid control
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let over_control = event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    .and_then(|el| el.closest("[data-ui-control]").ok().flatten())
                    .is_some();
                let mut g = game.borrow_mut();
                let pos = g.to_playfield(&event);
                g.input
                    .pointer
                    .push(PointerAction::Down { pos, over_control });
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer move
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let mut g = game.borrow_mut();
                let pos = g.to_playfield(&event);
                g.input.pointer.push(PointerAction::Move { pos });
            });
            let _ = canvas
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer up - fire or cancel
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let mut g = game.borrow_mut();
                let pos = g.to_playfield(&event);
                g.input.pointer.push(PointerAction::Up { pos });
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().input.restart = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_settings_inputs(game: Rc<RefCell<Game>>) {
        for id in ["distance", "hilliness"] {
            let Some(input) = input_element(id) else {
                log::warn!("Settings input #{} missing", id);
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if let Some(settings) = read_settings() {
                    game.borrow_mut().input.settings = Some(settings);
                }
            });
            let _ =
                input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut g = game.borrow_mut();
            fit_canvas(&g.canvas);
            let size = (g.canvas.width() as f32, g.canvas.height() as f32);
            g.input.resize = Some(size);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Artillery Duel (native) starting...");
    log::info!("Native mode is headless - build for wasm32 for the playable web version");

    let winner = headless_duel(2024);
    println!(
        "Headless duel finished: {}",
        winner.map_or("no winner", |w| w.label())
    );
}

/// Play a scripted duel with canned drag gestures and return the winner
#[cfg(not(target_arch = "wasm32"))]
fn headless_duel(seed: u64) -> Option<artillery_duel::sim::PlayerId> {
    use artillery_duel::MatchSettings;
    use artillery_duel::sim::{GamePhase, Match, MatchEvent, PointerAction, TickInput, tick};
    use glam::Vec2;

    // Pull vectors for a right-facing shooter, mirrored for the other side
    const PULLS: [(f32, f32); 6] = [
        (80.0, -80.0),
        (95.0, -70.0),
        (70.0, -95.0),
        (110.0, -60.0),
        (60.0, -110.0),
        (100.0, -90.0),
    ];
    const MAX_SHOTS: usize = 60;
    const MAX_TICKS_PER_SHOT: usize = 2_000;

    let mut state = Match::new(800.0, 600.0, MatchSettings::default(), seed);

    for shot in 0..MAX_SHOTS {
        let (px, py) = PULLS[shot % PULLS.len()];
        let pull = Vec2::new(px * state.current_player().facing(), py);
        let anchor = state
            .current_player()
            .cannon_origin(&state.terrain, state.scale());

        let mut input = TickInput {
            pointer: vec![
                PointerAction::Down {
                    pos: anchor,
                    over_control: false,
                },
                PointerAction::Move { pos: anchor - pull },
                PointerAction::Up { pos: anchor - pull },
            ],
            ..Default::default()
        };

        for _ in 0..MAX_TICKS_PER_SHOT {
            tick(&mut state, &input);
            input.clear();

            for event in state.drain_events() {
                match event {
                    MatchEvent::Hit { target, part, damage } => {
                        log::info!("{} took {} ({:?})", target.label(), damage, part)
                    }
                    other => log::debug!("{:?}", other),
                }
            }

            if state.phase == GamePhase::Aiming || state.is_over() {
                break;
            }
        }

        if state.is_over() {
            break;
        }
    }

    state.winner
}
