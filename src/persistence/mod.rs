//! Best-score persistence
//!
//! The simulation treats storage as a collaborator behind [`BestScoreStore`]:
//! a single integer, read once at startup and written through whenever it
//! increases. Writes are best-effort; a failed save is logged and dropped,
//! never surfaced to the game loop.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;

/// File name under the platform data directory
const BEST_SCORE_FILE: &str = "skyflap_best.json";

/// Single-value store for the best score
pub trait BestScoreStore {
    /// Read the persisted best score; absent or unparseable data is 0
    fn load(&self) -> u32;
    /// Persist a new best score (fire-and-forget)
    fn save(&mut self, best: u32);
}

/// Best score persisted as a JSON integer in the platform data directory
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Locate (and create) the platform data directory
    pub fn new() -> io::Result<Self> {
        let dirs = ProjectDirs::from("", "", "skyflap").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "could not determine data directory")
        })?;
        fs::create_dir_all(dirs.data_dir())?;
        Ok(Self {
            path: dirs.data_dir().join(BEST_SCORE_FILE),
        })
    }

    /// Store backed by an explicit file path
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl BestScoreStore for FileStore {
    fn load(&self) -> u32 {
        let Ok(text) = fs::read_to_string(&self.path) else {
            log::info!("no best score on disk, starting fresh");
            return 0;
        };
        match serde_json::from_str(&text) {
            Ok(best) => {
                log::info!("loaded best score {best}");
                best
            }
            Err(err) => {
                log::warn!("ignoring unparseable best score: {err}");
                0
            }
        }
    }

    fn save(&mut self, best: u32) {
        if let Ok(json) = serde_json::to_string(&best) {
            if let Err(err) = fs::write(&self.path, json) {
                log::warn!("failed to persist best score: {err}");
            }
        }
    }
}

/// In-memory store for tests and as a fallback when no data directory exists
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub best: u32,
}

impl MemoryStore {
    pub fn new(best: u32) -> Self {
        Self { best }
    }
}

impl BestScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.best
    }

    fn save(&mut self, best: u32) {
        self.best = best;
    }
}
