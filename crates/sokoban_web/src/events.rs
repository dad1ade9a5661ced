//! Input events and the bounded queue the DOM handlers feed.

use futures::channel::mpsc::{channel, Receiver, Sender};
use sokoban_games::Direction;

pub const CHANNEL_CAPACITY: usize = 10;

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Pointer click, in canvas (backing store) pixels.
    Click { x: f64, y: f64 },
    Key(Direction),
    Undo,
    Restart,
}

impl Event {
    pub fn from_key(key: &str) -> Option<Self> {
        if let Some(dir) = Direction::from_key(key) {
            return Some(Event::Key(dir));
        }
        match key {
            "u" | "U" | "Backspace" => Some(Event::Undo),
            "r" | "R" | "Escape" => Some(Event::Restart),
            _ => None,
        }
    }

    /// Builds a click from `MouseEvent.offsetX/Y`, which are in CSS pixels.
    ///
    /// When CSS shrinks or stretches the canvas the offsets are rescaled to the
    /// canvas' own pixel grid, which is what the board's cell size is measured in.
    pub fn click(offset: (i32, i32), css_size: (i32, i32), canvas_size: (u32, u32)) -> Self {
        let scale = |offset: i32, css: i32, canvas: u32| {
            if css > 0 {
                offset as f64 * canvas as f64 / css as f64
            } else {
                offset as f64
            }
        };
        Event::Click {
            x: scale(offset.0, css_size.0, canvas_size.0),
            y: scale(offset.1, css_size.1, canvas_size.1),
        }
    }
}

/// Queues an event. A full queue drops it; returns whether it was queued.
pub fn send(sender: &mut Sender<Event>, evt: Event) -> bool {
    match sender.try_send(evt) {
        Ok(()) => true,
        Err(e) => {
            log::debug!("dropping input event: {e}");
            false
        }
    }
}

/// Receiving end of the input queue, drained once per fixed update.
pub struct EventQueue {
    receiver: Receiver<Event>,
}

impl EventQueue {
    pub fn new() -> (Sender<Event>, Self) {
        let (sender, receiver) = channel::<Event>(CHANNEL_CAPACITY);
        (sender, Self { receiver })
    }

    /// Drains the queue and returns the most recent event, if any.
    pub fn process(&mut self) -> Option<Event> {
        let mut evt = None;
        while let Ok(Some(e)) = self.receiver.try_next() {
            evt = Some(e);
        }
        evt
    }
}
