use crate::geom::{Direction, Location};
use crate::level::{render_rows, Level};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Blocked,
    Moved,
    Pushed,
}

impl MoveOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            MoveOutcome::Blocked => "blocked",
            MoveOutcome::Moved => "moved",
            MoveOutcome::Pushed => "pushed",
        }
    }
}

/// Snapshot taken before every successful move, for `undo`.
#[derive(Debug, Clone)]
struct Step {
    player: Location,
    // Index into `blocks` and where that block was before the push.
    pushed: Option<(usize, Location)>,
}

/// A level in play.
#[derive(Debug, Clone)]
pub struct Board {
    level: Level,
    blocks: Vec<Location>,
    pub player: Location,
    pub moves: u32,
    pub pushes: u32,
    history: Vec<Step>,
}

impl Board {
    pub fn new(level: Level) -> Self {
        Self {
            blocks: level.blocks.clone(),
            player: level.player,
            level,
            moves: 0,
            pushes: 0,
            history: Vec::new(),
        }
    }

    pub fn walls(&self) -> &[Location] {
        &self.level.walls
    }

    pub fn goals(&self) -> &[Location] {
        &self.level.goals
    }

    pub fn blocks(&self) -> &[Location] {
        &self.blocks
    }

    pub fn try_move(&self, dir: Direction) -> bool {
        let new_loc = self.player.move_to(dir);
        if self.level.walls.contains(&new_loc) {
            return false;
        }
        if self.blocks.contains(&new_loc) {
            let behind = new_loc.move_to(dir);
            if self.level.walls.contains(&behind) || self.blocks.contains(&behind) {
                return false;
            }
        }
        true
    }

    pub fn apply_move(&mut self, dir: Direction) -> MoveOutcome {
        if !self.try_move(dir) {
            return MoveOutcome::Blocked;
        }

        let new_loc = self.player.move_to(dir);
        let mut step = Step {
            player: self.player,
            pushed: None,
        };

        if let Some(i) = self.blocks.iter().position(|b| *b == new_loc) {
            step.pushed = Some((i, new_loc));
            self.blocks[i] = new_loc.move_to(dir);
            self.pushes += 1;
        }

        self.player = new_loc;
        self.moves += 1;
        let outcome = if step.pushed.is_some() {
            MoveOutcome::Pushed
        } else {
            MoveOutcome::Moved
        };
        self.history.push(step);
        outcome
    }

    /// Destination cells of every legal move, in `Direction::ALL` order.
    pub fn valid_moves(&self) -> Vec<Location> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.try_move(*d))
            .map(|d| self.player.move_to(d))
            .collect()
    }

    /// Moves toward the clicked cell when it neighbours the player.
    pub fn handle_click(&mut self, pixel: Location, cell_size: f64) -> Option<MoveOutcome> {
        let cell = pixel.to_cell(cell_size);
        let dir = self.player.direction_to(&cell)?;
        Some(self.apply_move(dir))
    }

    pub fn is_solved(&self) -> bool {
        self.blocks.iter().all(|b| self.level.goals.contains(b))
    }

    /// Reverts the last successful move. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(step) = self.history.pop() else {
            return false;
        };
        if let Some((i, from)) = step.pushed {
            self.blocks[i] = from;
            self.pushes -= 1;
        }
        self.player = step.player;
        self.moves -= 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn restart(&mut self) {
        self.blocks = self.level.blocks.clone();
        self.player = self.level.player;
        self.moves = 0;
        self.pushes = 0;
        self.history.clear();
    }

    /// Applies a `UDLR` move script. Chars that are not moves are skipped.
    pub fn play_script(&mut self, script: &str) -> Vec<MoveOutcome> {
        script
            .chars()
            .filter_map(Direction::from_char)
            .map(|d| self.apply_move(d))
            .collect()
    }

    /// Current position in the level text format.
    pub fn to_text(&self) -> String {
        render_rows(
            self.level.width(),
            self.level.height(),
            &self.level.walls,
            &self.level.goals,
            &self.blocks,
            self.player,
        )
    }
}
