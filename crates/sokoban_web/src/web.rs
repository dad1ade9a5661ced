use sokoban_games::{Level, SIZE};
use wasm_bindgen::prelude::*;

mod canvas;
mod dom;
mod engine;
mod game;
mod input;
mod sprite;
mod storage;

use engine::Engine;
use game::WebGame;

/// Entry point called from `static/index.js` once the module is loaded.
#[wasm_bindgen]
pub fn run() {
    console_error_panic_hook::set_once();
    // A second `run()` keeps the logger from the first one.
    let _ = console_log::init_with_level(log::Level::Info);

    let settings = storage::load_settings();

    let canvas = match dom::get_canvas(&settings.canvas_id) {
        Ok(c) => c,
        Err(e) => {
            log::error!("sokoban: {e}");
            return;
        }
    };
    canvas.set_width(SIZE);
    canvas.set_height(SIZE);

    let level = settings.load_level().unwrap_or_else(|e| {
        log::warn!("stored level rejected ({e}), using the built-in one");
        Level::example()
    });

    let game = match WebGame::new(level, &settings) {
        Ok(g) => g,
        Err(e) => {
            log::error!("sokoban: {e}");
            return;
        }
    };

    let frames_per_sec = settings.frames_per_sec;
    wasm_bindgen_futures::spawn_local(async move {
        match Engine::start(canvas, game, frames_per_sec).await {
            Ok(()) => log::info!("sokoban: engine started"),
            Err(e) => log::error!("sokoban: engine failed to start: {e}"),
        }
    });
}
