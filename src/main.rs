//! Mud Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use mud_dash::render::{Canvas2d, draw_frame};
    use mud_dash::score::LocalStore;
    use mud_dash::sim::Simulation;
    use mud_dash::tuning::Tuning;

    /// Game instance holding all state
    struct Game {
        sim: Simulation<LocalStore>,
        surface: Canvas2d,
        last_time: f64,
    }

    impl Game {
        /// Run one frame: advance by elapsed wall time, paint the snapshot
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            self.last_time = time;

            let frame = self.sim.advance(dt);
            draw_frame(&mut self.surface, &frame);
        }

        /// Jump key down edge; restarts instead when the run has ended
        fn press(&mut self) {
            if self.sim.game_over() {
                self.sim.reset();
            } else {
                self.sim.on_jump_pressed();
            }
        }

        fn release(&mut self) {
            self.sim.on_jump_released();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Mud Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Fill the window
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx = canvas
            .get_context("2d")
            .expect("context request failed")
            .expect("no 2d context")
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .expect("not a 2d context");
        let surface = Canvas2d::new(ctx, width as f32, height as f32);

        let tuning = Tuning::load();
        let seed = js_sys::Date::now() as u64;
        let sim = Simulation::new(tuning, width as f32, height as f32, seed, LocalStore::new());
        log::info!("Game initialized with seed: {seed}");

        let game = Rc::new(RefCell::new(Game {
            sim,
            surface,
            last_time: 0.0,
        }));

        setup_input_handlers(&canvas, game.clone());
        request_animation_frame(game);

        log::info!("Mud Dash running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Keyboard: Space down starts/extends a jump (or restarts), up releases
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == "Space" {
                    event.prevent_default();
                    game.borrow_mut().press();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == "Space" {
                    game.borrow_mut().release();
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch: press while touching, release on lift
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().press();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().release();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use mud_dash::consts::SIM_DT;
    use mud_dash::score::MemoryStore;
    use mud_dash::sim::Simulation;
    use mud_dash::tuning::Tuning;

    env_logger::init();
    log::info!("Mud Dash (native) starting...");
    log::info!("Run with `trunk serve` for the playable web version");

    // Headless demo: hop on a timer until something connects
    let mut sim = Simulation::new(Tuning::load(), 800.0, 600.0, 0xDA5, MemoryStore::new());
    let mut frame = sim.advance(0.0);
    log::debug!("World ground level: {}", frame.ground_level);
    for i in 0..(60 * 60) {
        if i % 45 == 0 {
            sim.on_jump_pressed();
        }
        if i % 45 == 20 {
            sim.on_jump_released();
        }
        frame = sim.advance(SIM_DT);
        if frame.game_over {
            break;
        }
    }

    println!(
        "Headless run ended: score {} (high score {}), game over: {}",
        frame.score, frame.high_score, frame.game_over
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
