//! High score storage
//!
//! The whole on-disk contract is one key holding one decimal integer.
//! Anything missing or unreadable loads as 0.

#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// LocalStorage key for the high score
pub const HIGH_SCORE_KEY: &str = "stackBlocksHighScore";

/// Where the high score lives between sessions
pub trait ScoreStore {
    /// Stored high score, 0 when absent or malformed
    fn load(&self) -> u64;
    /// Overwrite the stored high score
    fn save(&mut self, score: u64);
}

/// Parse a stored value; tolerates whitespace and float formatting
pub fn parse_score(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if let Ok(score) = raw.parse::<u64>() {
        return Some(score);
    }
    // Older pages may have written the number through JS number formatting
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v.floor() as u64),
        _ => None,
    }
}

/// In-process store (native builds and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<String>,
    /// Number of saves, for tests
    pub writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a raw stored string
    pub fn with_raw(raw: &str) -> Self {
        Self {
            value: Some(raw.to_string()),
            writes: 0,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> u64 {
        let Some(raw) = self.value.as_deref() else {
            return 0;
        };
        parse_score(raw).unwrap_or_else(|| {
            log::warn!("Ignoring malformed high score {:?}", raw);
            0
        })
    }

    fn save(&mut self, score: u64) {
        self.value = Some(score.to_string());
        self.writes += 1;
    }
}
