use std::cell::RefCell;
use std::rc::Rc;

use sokoban_games::{FrameClock, Time};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::dom;
use super::input;
use crate::events::Event;

type FrameCallback = Closure<dyn FnMut(f64)>;

pub(super) trait Runnable {
    fn update(&mut self, time: &Time, evt: Option<Event>);
    fn draw(&self, canvas: &web_sys::HtmlCanvasElement);
}

fn request_animation_frame(callback: &FrameCallback) -> Result<i32, String> {
    dom::window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(|_| "requestAnimationFrame threw".to_string())
}

pub(super) struct Engine;

impl Engine {
    /// Runs `runnable` at a fixed update rate and draws it once per animation frame.
    ///
    /// Returns once the first frame is scheduled; the loop keeps itself alive by
    /// re-requesting a frame from inside its own callback.
    pub(super) async fn start(
        canvas: web_sys::HtmlCanvasElement,
        mut runnable: impl Runnable + 'static,
        frames_per_sec: f64,
    ) -> Result<(), String> {
        let mut events = input::listen(&canvas)?;
        let mut clock = FrameClock::with_rate(dom::now(), frames_per_sec);

        let f: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let g = f.clone();

        *g.borrow_mut() = Some(Closure::new(move |perf: f64| {
            let steps = clock.advance(perf);
            for _ in 0..steps {
                let evt = events.process();
                runnable.update(&clock.time, evt);
            }
            runnable.draw(&canvas);

            if let Some(cb) = f.borrow().as_ref() {
                if let Err(e) = request_animation_frame(cb) {
                    log::error!("engine stopped: {e}");
                }
            }
        }));

        let scheduled = g.borrow().as_ref().map(request_animation_frame);
        match scheduled {
            Some(r) => r.map(|_| ()),
            None => Err("frame callback missing".to_string()),
        }
    }
}
