//! Fixed-timestep pacing for the render loop.
//!
//! The browser hands us `performance.now()` timestamps once per animation frame;
//! the game itself advances in fixed `FRAME_LENGTH` updates.

use crate::time::{Duration, Instant};

pub const FRAMES_PER_SEC: f64 = 30.0;
pub const FRAME_LENGTH: f64 = 1.0 / FRAMES_PER_SEC;

/// Canvas side in pixels.
pub const SIZE: u32 = 800;

/// Minimum number of grid cells drawn per side.
pub const GRID_CELLS: u32 = 8;

/// Upper bound on fixed updates run for a single animation frame.
pub const MAX_CATCH_UP: u32 = 10;

/// Cells per side needed to show a level of the given dimensions.
pub fn grid_cells(level_w: usize, level_h: usize) -> u32 {
    GRID_CELLS.max(level_w as u32).max(level_h as u32)
}

/// Pixel size of one cell on a `SIZE` canvas.
pub fn cell_size(cells: u32) -> f64 {
    SIZE as f64 / cells.max(1) as f64
}

#[derive(Debug, Clone)]
pub struct Time {
    /// Timestamp of the previous animation frame, in milliseconds.
    pub last_frame: f64,
    /// Seconds elapsed between the two most recent frames.
    pub delta: f64,
}

#[derive(Debug, Clone)]
pub struct FrameClock {
    pub time: Time,
    frame_length: f64,
    accumulated: f64,
}

impl FrameClock {
    pub fn new(now_ms: f64) -> Self {
        Self::with_rate(now_ms, FRAMES_PER_SEC)
    }

    pub fn with_rate(now_ms: f64, frames_per_sec: f64) -> Self {
        let frames_per_sec = if frames_per_sec.is_finite() {
            frames_per_sec.clamp(1.0, 240.0)
        } else {
            FRAMES_PER_SEC
        };
        Self {
            time: Time {
                last_frame: now_ms,
                delta: 0.0,
            },
            frame_length: 1.0 / frames_per_sec,
            accumulated: 0.0,
        }
    }

    /// Records a new frame timestamp and returns how many fixed updates are due.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        self.time.delta = ((now_ms - self.time.last_frame) / 1000.0).max(0.0);
        self.accumulated += self.time.delta;

        let mut steps = 0;
        while self.accumulated > self.frame_length {
            self.accumulated -= self.frame_length;
            steps += 1;
        }
        if steps > MAX_CATCH_UP {
            // Drop the backlog (e.g. after the tab was hidden).
            steps = MAX_CATCH_UP;
            self.accumulated = 0.0;
        }

        self.time.last_frame = now_ms;
        steps
    }
}

/// Wall-clock time spent on the current attempt. Can be paused and resumed.
#[derive(Debug, Clone)]
pub struct PlayTimer {
    started_at: Instant,
    banked: Duration,
    running: bool,
}

impl PlayTimer {
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
            banked: Duration::ZERO,
            running: true,
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            self.banked += self.started_at.elapsed();
            self.running = false;
        }
    }

    /// Continues counting from where `stop` left off.
    pub fn resume(&mut self) {
        if !self.running {
            self.started_at = Instant::now();
            self.running = true;
        }
    }

    pub fn is_stopped(&self) -> bool {
        !self.running
    }

    pub fn elapsed(&self) -> Duration {
        if self.running {
            self.banked + self.started_at.elapsed()
        } else {
            self.banked
        }
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs()
    }
}

impl Default for PlayTimer {
    fn default() -> Self {
        Self::start()
    }
}
