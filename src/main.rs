//! Greedy Goblin entry point
//!
//! Wires the game loop to the browser: canvas 2D context, sprite assets,
//! keyboard and on-screen arrow input, start button and score HUD. Native
//! builds run a short headless session instead.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlButtonElement, HtmlCanvasElement};

    use greedy_goblin::audio::WebAudio;
    use greedy_goblin::consts::{SURFACE_H, SURFACE_W};
    use greedy_goblin::platform::{CanvasSurface, load_sprite_image};
    use greedy_goblin::sim::{ActionKey, Game};
    use greedy_goblin::{HighScores, Settings};

    /// Everything the browser shell owns
    struct App {
        game: Game,
        surface: CanvasSurface,
        audio: WebAudio,
        scores: HighScores,
        /// For detecting the Playing -> GameOver edge
        was_playing: bool,
    }

    /// Wall clock for timer deadlines
    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Greedy Goblin starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(SURFACE_W as u32);
        canvas.set_height(SURFACE_H as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("2d context unavailable")
            .expect("2d context missing")
            .dyn_into()
            .expect("not a 2d context");

        let surface = CanvasSurface::new(
            ctx,
            load_sprite_image("assets/greedy_goblin/goblin_catch.png").expect("goblin sprite"),
            load_sprite_image("assets/greedy_goblin/coin.png").expect("coin sprite"),
            load_sprite_image("assets/greedy_goblin/skull.png").expect("skull sprite"),
            load_sprite_image("assets/greedy_goblin/game_over.png").expect("game over sprite"),
        );

        let settings = Settings::load();
        let audio = WebAudio::new(&settings);

        let seed = js_sys::Date::now() as u64;
        log::info!("Session seed: {seed}");

        let app = Rc::new(RefCell::new(App {
            game: Game::new(seed),
            surface,
            audio,
            scores: HighScores::load(),
            was_playing: false,
        }));

        {
            let mut a = app.borrow_mut();
            let App {
                game,
                surface,
                audio,
                ..
            } = &mut *a;
            game.mount(surface, audio);
        }

        setup_keyboard(app.clone());
        setup_arrow_buttons(&document, app.clone());
        setup_start_button(&document, app.clone());

        request_animation_frame(app);

        log::info!("Greedy Goblin running!");
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(key) = ActionKey::from_key_event(&event.key().to_lowercase()) {
                    app.borrow_mut().game.key_pressed(key, now_ms());
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(key) = ActionKey::from_key_event(&event.key().to_lowercase()) {
                    app.borrow_mut().game.key_released(key, now_ms());
                }
            });
            let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// On-screen arrows: mouse and touch feed the same UI key, and the
    /// tracker dedups the double press a touch generates
    fn setup_arrow_buttons(document: &web_sys::Document, app: Rc<RefCell<App>>) {
        let wire = |id: &str, key: ActionKey, app: Rc<RefCell<App>>| {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("missing arrow button #{id}");
                return;
            };

            for event in ["mousedown", "touchstart"] {
                let app = app.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                    app.borrow_mut().game.key_pressed(key, now_ms());
                });
                let _ = btn.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
                closure.forget();
            }

            for event in ["mouseup", "mouseleave", "touchend"] {
                let app = app.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                    app.borrow_mut().game.key_released(key, now_ms());
                });
                let _ = btn.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
                closure.forget();
            }
        };

        wire("btn-left", ActionKey::UiLeft, app.clone());
        wire("btn-right", ActionKey::UiRight, app);
    }

    fn setup_start_button(document: &web_sys::Document, app: Rc<RefCell<App>>) {
        let Some(btn) = document.get_element_by_id("start-btn") else {
            log::warn!("missing start button");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let mut a = app.borrow_mut();
            let App {
                game,
                surface,
                audio,
                ..
            } = &mut *a;
            game.start(now_ms(), surface, audio);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            frame(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            let App {
                game,
                surface,
                audio,
                scores,
                was_playing,
            } = &mut *a;

            game.advance(now_ms(), surface, audio);

            // Record the run the moment it ends
            if *was_playing && game.is_game_over() {
                if let Some(rank) = scores.add_score(game.score(), js_sys::Date::now()) {
                    log::info!("Run ranked #{rank} with {} coins", game.score());
                    scores.save();
                }
            }
            *was_playing = game.is_playing();

            update_hud(game, scores);
        }

        request_animation_frame(app);
    }

    fn update_hud(game: &Game, scores: &HighScores) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(el) = document.get_element_by_id("score-value") {
            el.set_text_content(Some(&game.score().to_string()));
        }

        if let Some(el) = document.get_element_by_id("best-value") {
            if let Some(best) = scores.top_score() {
                el.set_text_content(Some(&best.to_string()));
            }
        }

        if let Some(btn) = document
            .get_element_by_id("start-btn")
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        {
            btn.set_disabled(game.is_playing());
        }
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
    env_logger::init();
    log::info!("Greedy Goblin (native) starting...");
    log::info!("Native mode is headless - build for wasm32 for the playable version");

    demo_session();
}

/// Scripted headless run: hold right and let the session play out
#[cfg(not(target_arch = "wasm32"))]
fn demo_session() {
    use greedy_goblin::audio::NullAudio;
    use greedy_goblin::sim::{ActionKey, Game};
    use greedy_goblin::surface::RecordingSurface;

    let mut game = Game::new(0x60B11);
    let mut surface = RecordingSurface::new();

    game.mount(&mut surface, &NullAudio);
    game.start(0.0, &mut surface, &NullAudio);
    game.key_pressed(ActionKey::ArrowRight, 0.0);

    let mut t = 0.0;
    while game.is_playing() && t < 60_000.0 {
        t += 16.0;
        game.advance(t, &mut surface, &NullAudio);
    }

    println!(
        "Session ended after {:.1}s with {} coins caught ({} draw calls recorded)",
        t / 1000.0,
        game.score(),
        surface.ops.len()
    );
}
