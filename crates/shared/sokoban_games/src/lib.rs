//! Browser-free Sokoban rules.
//!
//! Everything here runs natively so the move rules can be tested and scripted
//! without a canvas. The `sokoban_web` crate layers rendering and input on top.

pub mod board;
pub mod clock;
pub mod geom;
pub mod level;

// WASM-safe monotonic time shim for the play timer.
pub(crate) mod time;

pub use board::{Board, MoveOutcome};
pub use clock::{FrameClock, Time, FRAMES_PER_SEC, FRAME_LENGTH, GRID_CELLS, SIZE};
pub use geom::{Direction, Location, Size};
pub use level::{Level, LevelError};
