use sokoban_games::clock::PlayTimer;
use sokoban_games::{Board, Level, Location};

use crate::events::Event;

/// A finished attempt, reported once per attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solve {
    pub moves: u32,
    pub pushes: u32,
    pub secs: u64,
}

/// One attempt at a level: the board, its timer, and whether the solve was counted.
///
/// An attempt lasts until `Event::Restart`; undoing out of a solved position and
/// solving again does not count a second solve.
pub struct Session {
    pub board: Board,
    pub timer: PlayTimer,
    level_text: String,
    solve_recorded: bool,
}

impl Session {
    pub fn new(level: Level) -> Self {
        Self {
            level_text: level.to_text(),
            board: Board::new(level),
            timer: PlayTimer::start(),
            solve_recorded: false,
        }
    }

    /// Canonical text of the level, used as its progress key.
    pub fn level_text(&self) -> &str {
        &self.level_text
    }

    pub fn handle(&mut self, evt: Event, cell_size: f64) -> Option<Solve> {
        match evt {
            Event::Click { x, y } => {
                if let Some(outcome) = self.board.handle_click(Location::new(x, y), cell_size) {
                    log::debug!("click move: {}", outcome.as_str());
                }
            }
            Event::Key(dir) => {
                let outcome = self.board.apply_move(dir);
                log::debug!("key move {:?}: {}", dir, outcome.as_str());
            }
            Event::Undo => {
                if !self.board.undo() {
                    log::debug!("nothing to undo");
                }
            }
            Event::Restart => {
                self.board.restart();
                self.timer = PlayTimer::start();
                self.solve_recorded = false;
                log::info!("level restarted");
            }
        }

        if !self.board.is_solved() {
            // Play continued past a solve (undo or pushing a block off its goal).
            self.timer.resume();
            return None;
        }

        self.timer.stop();
        if self.solve_recorded {
            return None;
        }
        self.solve_recorded = true;
        Some(Solve {
            moves: self.board.moves,
            pushes: self.board.pushes,
            secs: self.timer.elapsed_secs(),
        })
    }

    pub fn status_line(&self, best_moves: Option<u32>) -> String {
        let mut s = format!(
            "moves {}  pushes {}  time {}s",
            self.board.moves,
            self.board.pushes,
            self.timer.elapsed_secs()
        );
        if let Some(best) = best_moves {
            s.push_str(&format!("  best {best}"));
        }
        if self.board.is_solved() {
            s.push_str("  solved!");
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sokoban_games::Direction;

    const CORRIDOR: &str = "OOOOOO\nO px.O\nOOOOOO";

    fn session() -> Session {
        Session::new(Level::parse(CORRIDOR).unwrap())
    }

    #[test]
    fn solve_is_reported_once() {
        let mut s = session();
        let solve = s.handle(Event::Key(Direction::Right), 100.0);
        assert_eq!(
            solve.map(|v| (v.moves, v.pushes)),
            Some((1, 1))
        );
        assert!(s.timer.is_stopped());

        // Walking into the wall keeps the board solved; nothing new is reported.
        assert_eq!(s.handle(Event::Key(Direction::Right), 100.0), None);
    }

    #[test]
    fn undo_then_resolve_counts_one_solve_and_resumes_the_timer() {
        let mut s = session();
        assert!(s.handle(Event::Key(Direction::Right), 100.0).is_some());

        assert_eq!(s.handle(Event::Undo, 100.0), None);
        assert!(!s.board.is_solved());
        assert!(!s.timer.is_stopped());

        assert_eq!(s.handle(Event::Key(Direction::Right), 100.0), None);
        assert!(s.board.is_solved());
        assert!(s.timer.is_stopped());
    }

    #[test]
    fn restart_begins_a_new_attempt() {
        let mut s = session();
        assert!(s.handle(Event::Key(Direction::Right), 100.0).is_some());

        assert_eq!(s.handle(Event::Restart, 100.0), None);
        assert_eq!((s.board.moves, s.board.pushes), (0, 0));
        assert!(!s.timer.is_stopped());

        assert!(s.handle(Event::Key(Direction::Right), 100.0).is_some());
    }

    #[test]
    fn clicks_use_the_cell_size() {
        let mut s = session();
        // Player at (2,1); 50px cells, so (175, 75) is cell (3,1).
        assert!(s.handle(Event::Click { x: 175.0, y: 75.0 }, 50.0).is_some());
    }

    #[test]
    fn status_line_mentions_best_and_solved() {
        let mut s = session();
        assert!(s.status_line(None).starts_with("moves 0  pushes 0"));
        s.handle(Event::Key(Direction::Right), 100.0);
        let line = s.status_line(Some(1));
        assert!(line.contains("best 1"));
        assert!(line.ends_with("solved!"));
    }
}
