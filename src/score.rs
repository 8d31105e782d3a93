use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "snake-arcade";
const SCORE_FILE_NAME: &str = "scores.json";

/// Failures at the high-score persistence boundary.
///
/// Callers treat every variant as non-fatal: reads fall back to 0 and
/// writes are best-effort.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("score file i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("score file is not valid json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Persistence capability for the single high-score value.
///
/// The game loop receives this as an injected collaborator; the core never
/// knows where the number lives.
pub trait HighScoreStore {
    /// Reads the stored high score, falling back to 0 when the value is
    /// absent or unreadable.
    fn load_or_default(&self) -> u32;

    /// Writes a new high score.
    fn save(&mut self, score: u32) -> Result<(), ScoreError>;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// JSON-file-backed store under the platform data directory.
#[derive(Debug)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    /// Creates a store at the platform-correct default location.
    #[must_use]
    pub fn at_default_location() -> Self {
        let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        base.push(APP_DIR_NAME);
        base.push(SCORE_FILE_NAME);
        Self { path: base }
    }

    /// Creates a store at an explicit path.
    #[must_use]
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Result<u32, ScoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };

        let file: ScoreFile = serde_json::from_str(&raw)?;
        Ok(file.high_score)
    }

    fn write(&self, score: u32) -> Result<(), ScoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&ScoreFile { high_score: score })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load_or_default(&self) -> u32 {
        self.read().unwrap_or(0)
    }

    fn save(&mut self, score: u32) -> Result<(), ScoreError> {
        self.write(score)
    }
}

/// In-memory store for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryHighScoreStore {
    pub stored: u32,
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load_or_default(&self) -> u32 {
        self.stored
    }

    fn save(&mut self, score: u32) -> Result<(), ScoreError> {
        self.stored = score;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{FileHighScoreStore, HighScoreStore};

    #[test]
    fn score_round_trips_through_the_file() {
        let path = unique_test_path("round_trip");
        let mut store = FileHighScoreStore::at_path(&path);

        store.save(420).expect("score save should succeed");
        assert_eq!(store.load_or_default(), 420);

        cleanup_test_path(&path);
    }

    #[test]
    fn missing_score_file_reads_as_zero() {
        let store = FileHighScoreStore::at_path(unique_test_path("missing"));
        assert_eq!(store.load_or_default(), 0);
    }

    #[test]
    fn malformed_score_file_reads_as_zero() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        let store = FileHighScoreStore::at_path(&path);
        assert_eq!(store.load_or_default(), 0);

        cleanup_test_path(&path);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("snake-arcade-score-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
