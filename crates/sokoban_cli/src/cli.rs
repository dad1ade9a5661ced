use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use sokoban_games::{Board, Level, LevelError, MoveOutcome};
use thiserror::Error;
use tracing::{debug, info};

pub const USAGE: &str = "usage:
  sokoban-cli show [FILE]
  sokoban-cli check FILE
  sokoban-cli play [--level FILE] MOVES     (MOVES is a string of U/D/L/R)";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {source}", .path.display())]
    Level {
        path: PathBuf,
        #[source]
        source: LevelError,
    },
    #[error("invalid move {0:?} (expected U, D, L or R)")]
    BadMove(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show { level: Option<PathBuf> },
    Check { level: PathBuf },
    Play { level: Option<PathBuf>, moves: String },
    Help,
}

pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let Some((cmd, rest)) = args.split_first() else {
        return Ok(Command::Help);
    };

    match cmd.as_str() {
        "help" | "-h" | "--help" => Ok(Command::Help),
        "show" => match rest {
            [] => Ok(Command::Show { level: None }),
            [path] => Ok(Command::Show {
                level: Some(PathBuf::from(path)),
            }),
            _ => Err(CliError::Usage("show takes at most one FILE".to_string())),
        },
        "check" => match rest {
            [path] => Ok(Command::Check {
                level: PathBuf::from(path),
            }),
            _ => Err(CliError::Usage("check takes exactly one FILE".to_string())),
        },
        "play" => {
            let mut level = None;
            let mut moves = None;
            let mut it = rest.iter();
            while let Some(arg) = it.next() {
                if arg == "--level" {
                    let path = it
                        .next()
                        .ok_or_else(|| CliError::Usage("--level needs a FILE".to_string()))?;
                    level = Some(PathBuf::from(path));
                } else if moves.is_none() {
                    moves = Some(arg.clone());
                } else {
                    return Err(CliError::Usage(format!("unexpected argument {arg:?}")));
                }
            }
            let moves = moves.ok_or_else(|| CliError::Usage("play needs MOVES".to_string()))?;
            Ok(Command::Play { level, moves })
        }
        other => Err(CliError::Usage(format!("unknown command {other:?}"))),
    }
}

fn load_level(path: Option<&Path>) -> Result<Level, CliError> {
    let Some(path) = path else {
        return Ok(Level::example());
    };
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let level = Level::parse(&text).map_err(|source| CliError::Level {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), w = level.width(), h = level.height(), "level loaded");
    Ok(level)
}

fn validate_moves(moves: &str) -> Result<(), CliError> {
    match moves
        .chars()
        .find(|c| !c.is_whitespace() && sokoban_games::Direction::from_char(*c).is_none())
    {
        Some(c) => Err(CliError::BadMove(c)),
        None => Ok(()),
    }
}

/// Runs a command and returns the text to print on success.
pub fn run(command: Command) -> Result<String, CliError> {
    let mut out = String::new();
    match command {
        Command::Help => {
            let _ = writeln!(out, "{USAGE}");
        }
        Command::Show { level } => {
            let level = load_level(level.as_deref())?;
            let _ = writeln!(out, "{}x{}", level.width(), level.height());
            let _ = writeln!(out, "{}", level.to_text());
        }
        Command::Check { level: path } => {
            let level = load_level(Some(&path))?;
            let _ = writeln!(
                out,
                "{}: ok ({}x{}, {} blocks)",
                path.display(),
                level.width(),
                level.height(),
                level.blocks.len()
            );
        }
        Command::Play { level, moves } => {
            validate_moves(&moves)?;
            let mut board = Board::new(load_level(level.as_deref())?);
            let outcomes = board.play_script(&moves);
            for (i, o) in outcomes.iter().enumerate() {
                debug!(step = i + 1, outcome = o.as_str(), "move");
            }
            let blocked = outcomes
                .iter()
                .filter(|o| **o == MoveOutcome::Blocked)
                .count();

            let _ = writeln!(out, "{}", board.to_text());
            let _ = writeln!(
                out,
                "moves {}  pushes {}  blocked {}  solved {}",
                board.moves,
                board.pushes,
                blocked,
                if board.is_solved() { "yes" } else { "no" }
            );
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    fn temp_level(name: &str, text: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("sokoban-cli-{}-{name}.txt", std::process::id()));
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_args(&[]).unwrap(), Command::Help);
        assert_eq!(parse_args(&args("show")).unwrap(), Command::Show { level: None });
        assert_eq!(
            parse_args(&args("play --level a.txt RRU")).unwrap(),
            Command::Play {
                level: Some(PathBuf::from("a.txt")),
                moves: "RRU".to_string()
            }
        );
        assert_eq!(
            parse_args(&args("play LL")).unwrap(),
            Command::Play {
                level: None,
                moves: "LL".to_string()
            }
        );
    }

    #[test]
    fn rejects_bad_usage() {
        assert!(matches!(parse_args(&args("check")), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(&args("play")), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(&args("play --level")), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(&args("play R L")), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(&args("fly")), Err(CliError::Usage(_))));
    }

    #[test]
    fn show_prints_the_built_in_level() {
        let out = run(Command::Show { level: None }).unwrap();
        assert!(out.starts_with("8x9\n"));
        assert!(out.contains("O.px  O"));
    }

    #[test]
    fn play_reports_a_solve() {
        let path = temp_level("solve", "OOOOOO\nOpx .O\nOOOOOO\n");
        let out = run(Command::Play {
            level: Some(path.clone()),
            moves: "R R R".to_string(),
        })
        .unwrap();
        fs::remove_file(&path).ok();

        assert!(out.contains("O  pXO"));
        assert!(out.contains("moves 2  pushes 2  blocked 1  solved yes"));
    }

    #[test]
    fn play_rejects_unknown_moves() {
        let err = run(Command::Play {
            level: None,
            moves: "RQ".to_string(),
        })
        .unwrap_err();
        assert!(matches!(err, CliError::BadMove('Q')));
    }

    #[test]
    fn check_reports_level_errors_with_the_path() {
        let path = temp_level("broken", "OOOO\nO x.O\nOOOO\n");
        let err = run(Command::Check { level: path.clone() }).unwrap_err();
        fs::remove_file(&path).ok();

        assert!(matches!(
            err,
            CliError::Level {
                source: LevelError::MissingPlayer,
                ..
            }
        ));
        assert!(err.to_string().contains("no player"));
    }

    #[test]
    fn shipped_level_file_matches_the_built_in_level() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../levels/example.txt");
        assert_eq!(load_level(Some(&path)).unwrap(), Level::example());
    }

    #[test]
    fn missing_files_are_io_errors() {
        let err = run(Command::Check {
            level: PathBuf::from("/definitely/not/here.txt"),
        })
        .unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }
}
