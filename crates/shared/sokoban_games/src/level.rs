//! Plain-text level format.
//!
//! One row per line, one cell per char:
//!
//! | char | cell |
//! |------|------|
//! | `O`  | wall |
//! | `.`  | goal |
//! | `x`  | block |
//! | `X`  | block on a goal |
//! | `p`  | player |
//! | `P`  | player on a goal |
//!
//! Any other char is floor.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geom::Location;

const EXAMPLE: &str = "  OOOOO
OOO   O
O.px  O
OOO x.O
O.OOx O
O O . OO
Ox Xxx.O
O   .  O
OOOOOOOO";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("level is empty")]
    Empty,
    #[error("level has no player (`p` or `P`)")]
    MissingPlayer,
    #[error("level has more than one player: ({}, {}) and ({}, {})", .first.0, .first.1, .second.0, .second.1)]
    MultiplePlayers {
        first: (usize, usize),
        second: (usize, usize),
    },
    #[error("level has {blocks} blocks but {goals} goals")]
    GoalMismatch { blocks: usize, goals: usize },
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Level {
    pub walls: Vec<Location>,
    pub goals: Vec<Location>,
    pub blocks: Vec<Location>,
    pub player: Location,
    width: usize,
    height: usize,
}

impl Level {
    pub fn parse(s: &str) -> Result<Self, LevelError> {
        let mut walls = Vec::new();
        let mut goals = Vec::new();
        let mut blocks = Vec::new();
        let mut player: Option<(usize, usize)> = None;
        let mut width = 0;
        let mut height = 0;

        for (y, line) in s.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            // Blank rows at the end do not count.
            if !line.trim().is_empty() {
                height = y + 1;
            }
            width = width.max(line.trim_end().chars().count());

            for (x, c) in line.chars().enumerate() {
                let loc = Location::new(x as f64, y as f64);
                match c {
                    'O' => walls.push(loc),
                    '.' => goals.push(loc),
                    'x' => blocks.push(loc),
                    'X' => {
                        blocks.push(loc);
                        goals.push(loc);
                    }
                    'p' | 'P' => {
                        if let Some(first) = player {
                            return Err(LevelError::MultiplePlayers {
                                first,
                                second: (x, y),
                            });
                        }
                        player = Some((x, y));
                        if c == 'P' {
                            goals.push(loc);
                        }
                    }
                    _ => {}
                }
            }
        }

        if height == 0 || width == 0 {
            return Err(LevelError::Empty);
        }
        let (px, py) = player.ok_or(LevelError::MissingPlayer)?;
        if blocks.len() != goals.len() {
            return Err(LevelError::GoalMismatch {
                blocks: blocks.len(),
                goals: goals.len(),
            });
        }

        Ok(Self {
            walls,
            goals,
            blocks,
            player: Location::new(px as f64, py as f64),
            width,
            height,
        })
    }

    /// The built-in level shipped with the game.
    pub fn example() -> Self {
        match Self::parse(EXAMPLE) {
            Ok(level) => level,
            Err(e) => unreachable!("built-in level is invalid: {e}"),
        }
    }

    /// Width in cells (longest row, trailing floor ignored).
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Renders back to the text format. Trailing floor on each row is dropped.
    pub fn to_text(&self) -> String {
        render_rows(
            self.width,
            self.height,
            &self.walls,
            &self.goals,
            &self.blocks,
            self.player,
        )
    }
}

pub(crate) fn render_rows(
    width: usize,
    height: usize,
    walls: &[Location],
    goals: &[Location],
    blocks: &[Location],
    player: Location,
) -> String {
    let mut rows = Vec::with_capacity(height);
    for y in 0..height {
        let mut row = String::with_capacity(width);
        for x in 0..width {
            let loc = Location::new(x as f64, y as f64);
            let goal = goals.contains(&loc);
            let c = if walls.contains(&loc) {
                'O'
            } else if blocks.contains(&loc) {
                if goal {
                    'X'
                } else {
                    'x'
                }
            } else if player == loc {
                if goal {
                    'P'
                } else {
                    'p'
                }
            } else if goal {
                '.'
            } else {
                ' '
            };
            row.push(c);
        }
        rows.push(row.trim_end().to_string());
    }
    rows.join("\n")
}
