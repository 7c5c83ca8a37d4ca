//! Rebound entry point
//!
//! Handles platform-specific initialization and runs the game loop: pointer
//! events steer the paddle, a one-shot timer re-armed after every tick
//! drives the simulation, and render intents flow to the active backend.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use rebound::consts::*;
    use rebound::renderer::{CanvasRenderer, Renderer};
    use rebound::sim::{tick, ArenaConfig, GamePhase, GameState};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Rebound starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        document.set_title("Rebound");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Match the drawing buffer to the element so arena coordinates are
        // CSS pixel coordinates
        let width = (canvas.client_width().max(1)) as u32;
        let height = (canvas.client_height().max(1)) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let config = ArenaConfig {
            width: width as f32,
            height: height as f32,
        };
        let renderer = CanvasRenderer::new(canvas.clone()).expect("no 2d canvas context");
        let state = GameState::new(config);
        let game = Rc::new(RefCell::new(Game { state, renderer }));

        {
            let mut g = game.borrow_mut();
            let scene = g.state.initial_scene();
            g.renderer.apply_all(&scene);
        }

        setup_input_handlers(&canvas, game.clone());
        setup_resize_handler(&canvas, game.clone());

        // Start the tick loop
        schedule_tick(game);

        log::info!("Rebound running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Pointer motion steers the paddle; event-driven, so the next tick
        // simply sees wherever the last event put it
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let mut g = game.borrow_mut();
            let intent = g.state.aim_paddle(event.offset_x() as f32);
            g.renderer.apply(&intent);
        });
        let _ = canvas
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let width = (canvas.client_width().max(1)) as u32;
            let height = (canvas.client_height().max(1)) as u32;
            canvas.set_width(width);
            canvas.set_height(height);

            let mut g = game.borrow_mut();
            let intents = g.state.resize(width as f32, height as f32);
            g.renderer.apply_all(&intents);
        });
        let _ =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Arm a one-shot timer for the next tick. The callback re-arms only
    /// while the game is still in play, so reaching a terminal phase simply
    /// stops the loop.
    fn schedule_tick(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let callback = Closure::once_into_js(move || {
            let mut intents = Vec::new();
            let playing = {
                let mut g = game.borrow_mut();
                tick(&mut g.state, &mut intents);
                g.renderer.apply_all(&intents);
                g.state.phase == GamePhase::Playing
            };
            if playing {
                schedule_tick(game);
            } else if let Ok(snapshot) = serde_json::to_string(&game.borrow().state) {
                log::debug!("final state: {snapshot}");
            }
        });
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref::<js_sys::Function>(),
                TICK_INTERVAL_MS as i32,
            )
            .expect("failed to arm tick timer");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::Duration;

    use rebound::consts::TICK_INTERVAL_MS;
    use rebound::renderer::{Renderer, ShapeScene};
    use rebound::sim::{tick, ArenaConfig, GamePhase, GameState};

    /// Safety cap so a demo that settles into a block-free orbit still ends
    const MAX_DEMO_TICKS: u32 = 10_000;

    env_logger::init();
    log::info!("Rebound (native) starting headless demo...");

    let mut state = GameState::new(ArenaConfig::default());
    let mut scene = ShapeScene::default();
    scene.apply_all(&state.initial_scene());

    let mut intents = Vec::new();
    let mut ticks = 0u32;
    while state.phase == GamePhase::Playing && ticks < MAX_DEMO_TICKS {
        // Autopilot: keep the paddle centered under the ball
        let aim = state.aim_paddle(state.ball.pos.x);
        scene.apply(&aim);

        intents.clear();
        tick(&mut state, &mut intents);
        scene.apply_all(&intents);
        ticks += 1;

        std::thread::sleep(Duration::from_millis(TICK_INTERVAL_MS as u64));
    }

    log::debug!(
        "final state: {}",
        serde_json::to_string(&state).unwrap_or_default()
    );
    println!(
        "{:?} after {} ticks, {} blocks left, {} shapes in the scene",
        state.phase,
        ticks,
        state.blocks.live_count(),
        scene.len()
    );
}
