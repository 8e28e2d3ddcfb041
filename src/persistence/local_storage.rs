//! Browser LocalStorage backend

use web_sys::Storage;

use super::{HIGH_SCORE_KEY, ScoreStore, parse_score};

/// High score kept in `window.localStorage`
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorageStore {
    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable - high score will not persist");
        }
        Self { storage }
    }
}

impl ScoreStore for LocalStorageStore {
    fn load(&self) -> u64 {
        let Some(storage) = &self.storage else {
            return 0;
        };
        match storage.get_item(HIGH_SCORE_KEY) {
            Ok(Some(raw)) => parse_score(&raw).unwrap_or_else(|| {
                log::warn!("Ignoring malformed high score {:?}", raw);
                0
            }),
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("Failed to read high score: {:?}", e);
                0
            }
        }
    }

    fn save(&mut self, score: u64) {
        if let Some(storage) = &self.storage {
            if storage.set_item(HIGH_SCORE_KEY, &score.to_string()).is_ok() {
                log::info!("High score saved ({})", score);
            } else {
                log::warn!("Failed to save high score");
            }
        }
    }
}
