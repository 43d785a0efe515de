//! High score persistence
//!
//! The simulation only needs a scalar key-value store that survives restarts.
//! On the web that is LocalStorage; tests and the native bin use an in-memory
//! map. Store failures never reach the game: a failed read is treated as
//! "no score yet" and a failed write is dropped.

use std::collections::HashMap;

/// Key under which the high score is persisted
pub const HIGH_SCORE_KEY: &str = "highScore";

/// Scalar key-value persistence capability
pub trait ScoreStore {
    /// Read a stored value, `None` if absent or unreadable
    fn get(&self, key: &str) -> Option<u64>;
    /// Persist a value; failures are silently dropped
    fn set(&mut self, key: &str, value: u64);
}

/// In-memory store for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<u64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u64) {
        self.values.insert(key.to_string(), value);
    }
}

/// LocalStorage-backed store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStore {
    fn get(&self, key: &str) -> Option<u64> {
        let storage = Self::storage()?;
        let raw = storage.get_item(key).ok()??;
        match raw.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring unparseable stored value for {key:?}: {raw:?}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: u64) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, &value.to_string()).is_err() {
                log::warn!("Failed to persist {key:?}");
            }
        } else {
            log::warn!("LocalStorage unavailable, {key:?} not persisted");
        }
    }
}
