use futures::channel::mpsc::Sender;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::dom;
use crate::events::{send, Event, EventQueue};

fn install_click_handler(
    canvas: &web_sys::HtmlCanvasElement,
    mut sender: Sender<Event>,
) {
    let target = canvas.clone();
    let click_handler: Closure<dyn FnMut(web_sys::MouseEvent)> =
        Closure::new(move |evt: web_sys::MouseEvent| {
            let e = Event::click(
                (evt.offset_x(), evt.offset_y()),
                (target.client_width(), target.client_height()),
                (target.width(), target.height()),
            );
            send(&mut sender, e);
        });
    canvas.set_onclick(Some(click_handler.as_ref().unchecked_ref()));
    // Handlers live as long as the page.
    click_handler.forget();
}

fn install_key_handler(mut sender: Sender<Event>) -> Result<(), String> {
    let key_handler: Closure<dyn FnMut(web_sys::KeyboardEvent)> =
        Closure::new(move |evt: web_sys::KeyboardEvent| {
            if let Some(e) = Event::from_key(&evt.key()) {
                // Arrow keys would otherwise scroll the page.
                evt.prevent_default();
                send(&mut sender, e);
            }
        });
    dom::document()?
        .add_event_listener_with_callback("keydown", key_handler.as_ref().unchecked_ref())
        .map_err(|_| "events: addEventListener(keydown) threw".to_string())?;
    key_handler.forget();
    Ok(())
}

/// Wires canvas clicks and document key presses into an `EventQueue`.
pub(super) fn listen(canvas: &web_sys::HtmlCanvasElement) -> Result<EventQueue, String> {
    let (sender, queue) = EventQueue::new();
    install_click_handler(canvas, sender.clone());
    install_key_handler(sender)?;
    Ok(queue)
}
