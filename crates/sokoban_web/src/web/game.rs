use sokoban_games::clock::{cell_size, grid_cells};
use sokoban_games::{Level, Time, SIZE};

use super::canvas::{self, DrawOptions};
use super::engine::Runnable;
use super::sprite::Sprite;
use super::storage;
use crate::events::Event;
use crate::session::Session;
use crate::settings::{Progress, Settings};

pub(super) struct WebGame {
    session: Session,
    cell_size: f64,
    background: Box<dyn Sprite>,
    show_hints: bool,
    progress: Progress,
}

impl WebGame {
    pub(super) fn new(level: Level, settings: &Settings) -> Result<Self, String> {
        let cells = grid_cells(level.width(), level.height());
        let session = Session::new(level);
        let background = canvas::render_background(&session.board, cells, SIZE)?;

        Ok(Self {
            session,
            cell_size: cell_size(cells),
            background,
            show_hints: settings.show_hints,
            progress: storage::load_progress(),
        })
    }
}

impl Runnable for WebGame {
    fn update(&mut self, _time: &Time, evt: Option<Event>) {
        let Some(evt) = evt else {
            return;
        };
        let Some(solve) = self.session.handle(evt, self.cell_size) else {
            return;
        };

        log::info!(
            "solved in {} moves, {} pushes, {}s",
            solve.moves,
            solve.pushes,
            solve.secs
        );
        let level_text = self.session.level_text().to_string();
        if self.progress.record_solve(&level_text, solve.moves, solve.pushes) {
            log::info!("new best for this level");
        }
        storage::save_progress(&self.progress);
    }

    fn draw(&self, target: &web_sys::HtmlCanvasElement) {
        let best = self
            .progress
            .best_for(self.session.level_text())
            .map(|r| r.best_moves);
        let status = self.session.status_line(best);
        let opts = DrawOptions {
            cell_size: self.cell_size,
            side: SIZE as f64,
            show_hints: self.show_hints,
            status: &status,
        };
        let result = canvas::context2d(target).and_then(|ctx| {
            canvas::draw_board(&ctx, &self.session.board, &*self.background, &opts)
        });
        if let Err(e) = result {
            log::warn!("draw failed: {e}");
        }
    }
}
