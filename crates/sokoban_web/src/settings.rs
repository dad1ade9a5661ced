use serde::{Deserialize, Serialize};

use sokoban_games::{Level, LevelError, FRAMES_PER_SEC};

pub const LOCALSTORAGE_SETTINGS_KEY: &str = "sokoban.settings.v1";
pub const LOCALSTORAGE_PROGRESS_KEY: &str = "sokoban.progress.v1";

pub const DEFAULT_CANVAS_ID: &str = "sokoban-canvas";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_canvas_id")]
    pub canvas_id: String,
    #[serde(default = "default_frames_per_sec")]
    pub frames_per_sec: f64,
    /// Outline the cells the player can move to.
    #[serde(default = "default_true")]
    pub show_hints: bool,
    /// Level text to play instead of the built-in one.
    #[serde(default)]
    pub level: Option<String>,
}

fn default_canvas_id() -> String {
    DEFAULT_CANVAS_ID.to_string()
}

fn default_frames_per_sec() -> f64 {
    FRAMES_PER_SEC
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_id: default_canvas_id(),
            frames_per_sec: default_frames_per_sec(),
            show_hints: true,
            level: None,
        }
    }
}

impl Settings {
    /// Parses stored settings; anything unreadable falls back to defaults.
    pub fn from_json(raw: Option<&str>) -> Self {
        match raw.map(|r| serde_json::from_str::<Settings>(r)) {
            Some(Ok(s)) => s,
            Some(Err(e)) => {
                log::warn!("ignoring stored settings: {e}");
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// The configured level, or the built-in one when unset.
    pub fn load_level(&self) -> Result<Level, LevelError> {
        match self.level.as_deref() {
            Some(text) => Level::parse(text),
            None => Ok(Level::example()),
        }
    }
}

/// Best results per level, keyed by level text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub version: u32,
    #[serde(default)]
    pub levels: Vec<LevelRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelRecord {
    pub level: String,
    pub best_moves: u32,
    pub best_pushes: u32,
    #[serde(default)]
    pub solves: u32,
}

impl Progress {
    pub const VERSION: u32 = 1;

    pub fn from_json(raw: Option<&str>) -> Self {
        let parsed = raw.and_then(|r| serde_json::from_str::<Progress>(r).ok());
        match parsed {
            Some(p) if p.version == Self::VERSION => p,
            _ => Self {
                version: Self::VERSION,
                levels: Vec::new(),
            },
        }
    }

    pub fn best_for(&self, level_text: &str) -> Option<&LevelRecord> {
        self.levels.iter().find(|r| r.level == level_text)
    }

    /// Records a solve. Returns true when it beats the stored move count.
    pub fn record_solve(&mut self, level_text: &str, moves: u32, pushes: u32) -> bool {
        if let Some(r) = self.levels.iter_mut().find(|r| r.level == level_text) {
            r.solves += 1;
            if moves < r.best_moves || (moves == r.best_moves && pushes < r.best_pushes) {
                r.best_moves = moves;
                r.best_pushes = pushes;
                return true;
            }
            return false;
        }
        self.levels.push(LevelRecord {
            level: level_text.to_string(),
            best_moves: moves,
            best_pushes: pushes,
            solves: 1,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let s = Settings::from_json(Some(r#"{"show_hints": false}"#));
        assert!(!s.show_hints);
        assert_eq!(s.canvas_id, DEFAULT_CANVAS_ID);
        assert_eq!(s.frames_per_sec, FRAMES_PER_SEC);
        assert_eq!(s.level, None);
    }

    #[test]
    fn bad_json_falls_back() {
        assert_eq!(Settings::from_json(Some("{not json")), Settings::default());
        assert_eq!(Settings::from_json(None), Settings::default());
    }

    #[test]
    fn level_override() {
        let mut s = Settings::default();
        assert_eq!(s.load_level().unwrap(), Level::example());

        s.level = Some("OOOOO\nOpx.O\nOOOOO".to_string());
        assert_eq!(s.load_level().unwrap().width(), 5);

        s.level = Some("OOO".to_string());
        assert_eq!(s.load_level(), Err(LevelError::MissingPlayer));
    }

    #[test]
    fn progress_keeps_the_best_solve() {
        let mut p = Progress::from_json(None);
        assert!(p.record_solve("L1", 40, 10));
        assert!(!p.record_solve("L1", 45, 5));
        assert!(p.record_solve("L1", 40, 8));
        assert!(p.record_solve("L2", 12, 3));

        let r = p.best_for("L1").unwrap();
        assert_eq!((r.best_moves, r.best_pushes, r.solves), (40, 8, 3));

        let raw = serde_json::to_string(&p).unwrap();
        assert_eq!(Progress::from_json(Some(&raw)), p);
    }

    #[test]
    fn progress_from_another_version_is_discarded() {
        let p = Progress::from_json(Some(r#"{"version": 0, "levels": []}"#));
        assert_eq!(p.version, Progress::VERSION);
        assert!(p.levels.is_empty());
    }
}
