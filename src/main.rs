//! Lost in Space entry point
//!
//! The browser build drives a [`Session`](lost_in_space::Session) from DOM
//! timers and key events. The native build runs a headless game on a
//! synthetic clock with the autopilot at the controls and prints a summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, Window};

    use lost_in_space::consts::FRAME_INTERVAL_MS;
    use lost_in_space::{Session, Settings, Surface, Tuning};

    const CANVAS_ID: &str = "game_area";

    /// Session plus the context it draws into
    struct Game {
        session: Session,
        ctx: CanvasRenderingContext2d,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Lost in Space starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;

        let surface = Surface::new(canvas.width() as f32, canvas.height() as f32);
        let seed = js_sys::Date::now() as u64;
        let mut session = Session::new(surface, Tuning::default(), Settings::default(), seed);
        session.start(js_sys::Date::now());

        let game = Rc::new(RefCell::new(Game { session, ctx }));
        setup_input_handlers(&window, game.clone())?;
        start_frame_timer(&window, game.clone())?;
        start_wave_timer(&window, game)?;

        log::info!("Lost in Space running!");
        Ok(())
    }

    fn setup_input_handlers(window: &Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                // Fire and toggles act once per physical press
                if event.repeat() {
                    return;
                }
                if game.borrow_mut().session.key_down(&event.key()) {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().session.key_up(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    /// Step and draw at the nominal frame rate
    fn start_frame_timer(window: &Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut g = game.borrow_mut();
            let Game { session, ctx } = &mut *g;
            session.frame(js_sys::Date::now(), ctx);
        });
        window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            FRAME_INTERVAL_MS as i32,
        )?;
        closure.forget();
        Ok(())
    }

    /// Spawn waves on their own timer, unsynchronized with frames
    fn start_wave_timer(window: &Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let interval_ms = game.borrow().session.state().tuning.wave_interval_ms;
        let closure = Closure::<dyn FnMut()>::new(move || {
            game.borrow_mut().session.spawn_wave();
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
mod native {
    use clap::Parser;
    use std::path::PathBuf;

    use lost_in_space::consts::{FRAME_INTERVAL_MS, SURFACE_HEIGHT, SURFACE_WIDTH};
    use lost_in_space::render::Recorder;
    use lost_in_space::{Session, Settings, Surface, Tuning};

    #[derive(Parser, Debug)]
    #[command(name = "lost-in-space")]
    #[command(about = "Headless Lost in Space run on a synthetic clock")]
    struct Cli {
        /// Frames to simulate at the nominal frame rate
        #[arg(long, default_value_t = 3_600)]
        frames: u64,
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// JSON tuning file (missing keys keep their defaults)
        #[arg(long)]
        tuning: Option<PathBuf>,
        #[arg(long, default_value_t = SURFACE_WIDTH)]
        width: f32,
        #[arg(long, default_value_t = SURFACE_HEIGHT)]
        height: f32,
        /// Leave the ship idle instead of handing it to the autopilot
        #[arg(long)]
        no_autopilot: bool,
        /// Keep running after game over or victory
        #[arg(long)]
        run_out: bool,
    }

    fn load_tuning(path: Option<&PathBuf>) -> Tuning {
        let Some(path) = path else {
            return Tuning::default();
        };
        match Tuning::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::error!("Failed to load tuning from {}: {e}; using defaults", path.display());
                Tuning::default()
            }
        }
    }

    pub fn run() {
        let cli = Cli::parse();
        let tuning = load_tuning(cli.tuning.as_ref());

        let surface = if cli.width > 0.0 && cli.height > 0.0 {
            Surface::new(cli.width, cli.height)
        } else {
            log::warn!("Invalid surface {}x{}, using default", cli.width, cli.height);
            Surface::default()
        };

        let mut session = Session::new(surface, tuning, Settings::default(), cli.seed);
        if !cli.no_autopilot {
            session.toggle_autopilot();
        }

        let mut canvas = Recorder::new();
        session.start(0.0);
        for frame in 0..cli.frames {
            let now = frame as f64 * FRAME_INTERVAL_MS;
            session.poll_waves(now);
            session.frame(now, &mut canvas);
            if !cli.run_out && !session.state().phase().is_running() {
                break;
            }
        }
        log::info!(
            "Last frame: {} draw commands over {} frames",
            canvas.commands().len(),
            canvas.frames()
        );

        match serde_json::to_string_pretty(&session.summary()) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize summary: {e}"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main
}
