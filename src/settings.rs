//! Game settings and preferences
//!
//! Persisted separately from the best score in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Board size choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BoardSize {
    #[default]
    Small,
    Large,
}

impl BoardSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardSize::Small => "12x12",
            BoardSize::Large => "16x16",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "small" | "12" | "12x12" => Some(BoardSize::Small),
            "large" | "16" | "16x16" => Some(BoardSize::Large),
            _ => None,
        }
    }

    /// Edge length in tiles
    pub fn dimension(&self) -> usize {
        match self {
            BoardSize::Small => SMALL_BOARD,
            BoardSize::Large => LARGE_BOARD,
        }
    }

    /// Moves allowed before the game is lost
    pub fn max_moves(&self) -> u32 {
        crate::max_moves_for(self.dimension())
    }

    /// The other size (the size button flips between the two)
    pub fn toggled(&self) -> Self {
        match self {
            BoardSize::Small => BoardSize::Large,
            BoardSize::Large => BoardSize::Small,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub board_size: BoardSize,
    /// Number of colors in play (2..=6)
    #[serde(default = "default_palette_size")]
    pub palette_size: u8,
}

fn default_palette_size() -> u8 {
    PALETTE_SIZE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: BoardSize::Small,
            palette_size: PALETTE_SIZE,
        }
    }
}

impl Settings {
    /// Create settings for a board size
    pub fn with_board_size(board_size: BoardSize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    /// Palette size clamped to the playable range
    pub fn effective_palette_size(&self) -> u8 {
        self.palette_size.clamp(MIN_PALETTE_SIZE, PALETTE_SIZE)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "color_flood_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let Some(json) = crate::platform::storage_get(Self::STORAGE_KEY) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from LocalStorage");
                settings
            }
            Err(e) => {
                log::warn!("Discarding unreadable settings: {}", e);
                Self::default()
            }
        }
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        match serde_json::to_string(self) {
            Ok(json) => {
                if crate::platform::storage_set(Self::STORAGE_KEY, &json) {
                    log::info!("Settings saved");
                }
            }
            Err(e) => log::warn!("Could not serialize settings: {}", e),
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
