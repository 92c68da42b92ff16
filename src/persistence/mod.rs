//! Storage collaborators for history, high score and settings
//!
//! Backends:
//! - `FileStorage`: one file per key (native)
//! - `LocalStorage`: browser `window.localStorage` (wasm32)
//! - `MemoryStorage`: in-process map for tests and headless hosts
//!
//! [`Persistence`] sits between the session and a backend. It never lets a
//! storage failure reach the simulation: missing data decodes to an empty
//! history or a zero score, and failed writes are logged and dropped.

use std::fmt;

use crate::history::{self, RunRecord};

mod memory;
pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

#[cfg(target_arch = "wasm32")]
mod local;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

/// Storage key of the run history
pub const HISTORY_KEY: &str = "flappy_go_history";
/// Storage key of the high score
pub const HIGH_SCORE_KEY: &str = "flappy_go_highscore";
/// Storage key of the player settings
pub const SETTINGS_KEY: &str = "flappy_go_settings";

/// Failure reported by a storage backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing store does not exist on this platform/session
    Unavailable,
    /// Reading a key failed
    Read { key: String, reason: String },
    /// Writing a key failed
    Write { key: String, reason: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "storage unavailable"),
            Self::Read { key, reason } => write!(f, "failed to read {key}: {reason}"),
            Self::Write { key, reason } => write!(f, "failed to write {key}: {reason}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// A durable key/value text store
pub trait Storage {
    /// Load the value stored under `key`; `Ok(None)` if nothing was ever saved
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Best-effort history/high score persistence over a [`Storage`]
#[derive(Debug)]
pub struct Persistence<S: Storage> {
    storage: S,
}

impl<S: Storage> Persistence<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    fn load_text(&self, key: &str) -> Option<String> {
        match self.storage.load(key) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("{e}; using defaults");
                None
            }
        }
    }

    fn save_text(&mut self, key: &str, value: &str) {
        if let Err(e) = self.storage.save(key, value) {
            log::warn!("{e}; keeping in-memory state only");
        }
    }

    /// Load the run history (empty if missing or unreadable)
    pub fn load_history(&self) -> Vec<RunRecord> {
        let records = self
            .load_text(HISTORY_KEY)
            .map(|text| history::decode_history(&text))
            .unwrap_or_default();
        log::info!("Loaded {} past runs", records.len());
        records
    }

    pub fn save_history(&mut self, records: &[RunRecord]) {
        self.save_text(HISTORY_KEY, &history::encode_history(records));
        log::debug!("History saved ({} runs)", records.len());
    }

    /// Load the high score (0 if missing or unreadable)
    pub fn load_high_score(&self) -> u32 {
        self.load_text(HIGH_SCORE_KEY)
            .map(|text| history::decode_score(&text))
            .unwrap_or(0)
    }

    pub fn save_high_score(&mut self, score: u32) {
        self.save_text(HIGH_SCORE_KEY, &history::encode_score(score));
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_data_is_empty() {
        let persistence = Persistence::new(MemoryStorage::new());
        assert!(persistence.load_history().is_empty());
        assert_eq!(persistence.load_high_score(), 0);
    }

    #[test]
    fn test_history_and_score_survive() {
        let mut persistence = Persistence::new(MemoryStorage::new());
        let records = vec![RunRecord {
            name: "Otto".into(),
            score: 7,
            tags: vec!["crown".into()],
        }];
        persistence.save_history(&records);
        persistence.save_high_score(7);

        let persistence = Persistence::new(persistence.into_storage());
        assert_eq!(persistence.load_history(), records);
        assert_eq!(persistence.load_high_score(), 7);
    }

    #[test]
    fn test_failures_are_swallowed() {
        let mut persistence = Persistence::new(MemoryStorage::unavailable());
        persistence.save_high_score(3);
        persistence.save_history(&[]);
        assert_eq!(persistence.load_high_score(), 0);
        assert!(persistence.load_history().is_empty());
    }

    #[test]
    fn test_corrupt_high_score_reads_zero() {
        let mut storage = MemoryStorage::new();
        storage.save(HIGH_SCORE_KEY, "garbage").unwrap();
        assert_eq!(Persistence::new(storage).load_high_score(), 0);
    }
}
