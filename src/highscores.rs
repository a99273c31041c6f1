//! Best score tracking
//!
//! A single value persisted to LocalStorage.

use serde::{Deserialize, Serialize};

/// Highest winning score seen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BestScore {
    pub score: u64,
}

impl BestScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "color_flood_best_score";

    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score would replace the current best
    pub fn qualifies(&self, score: u64) -> bool {
        score > 0 && score > self.score
    }

    /// Record a finished game's score. Returns true on a new best.
    pub fn record(&mut self, score: u64) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        log::info!("New best score: {} (was {})", score, self.score);
        self.score = score;
        true
    }

    /// Get the best score (if any game has been won)
    pub fn get(&self) -> Option<u64> {
        (self.score > 0).then_some(self.score)
    }

    /// Load the best score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        match crate::platform::storage_get(Self::STORAGE_KEY).map(|s| s.parse::<u64>()) {
            Some(Ok(score)) => {
                log::info!("Loaded best score {}", score);
                Self { score }
            }
            Some(Err(e)) => {
                log::warn!("Ignoring unreadable best score: {}", e);
                Self::new()
            }
            None => {
                log::info!("No best score found, starting fresh");
                Self::new()
            }
        }
    }

    /// Save the best score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        if crate::platform::storage_set(Self::STORAGE_KEY, &self.score.to_string()) {
            log::info!("Best score saved ({})", self.score);
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
