//! Color Flood - a flood-it style grid puzzle
//!
//! Core modules:
//! - `sim`: Deterministic game logic (grid, flood engine, session state)
//! - `palette`: Named tile colors
//! - `platform`: Browser/native platform abstraction
//! - `settings`: Player preferences
//! - `highscores`: Best score tracking

pub mod highscores;
pub mod palette;
pub mod platform;
pub mod settings;
pub mod sim;

pub use highscores::BestScore;
pub use palette::PaletteColor;
pub use settings::{BoardSize, Settings};

/// Game configuration constants
pub mod consts {
    /// Default (small) board dimension
    pub const SMALL_BOARD: usize = 12;
    /// Large board dimension
    pub const LARGE_BOARD: usize = 16;

    /// Move limits for the two stock board sizes
    pub const SMALL_BOARD_MAX_MOVES: u32 = 22;
    pub const LARGE_BOARD_MAX_MOVES: u32 = 30;

    /// Number of colors in the full palette
    pub const PALETTE_SIZE: u8 = 6;
    /// Smallest playable palette
    pub const MIN_PALETTE_SIZE: u8 = 2;

    /// Scoring
    pub const WIN_BASE_SCORE: u64 = 1000;
    pub const REMAINING_MOVE_BONUS: u64 = 50;
    pub const LARGE_BOARD_BONUS: u64 = 500;
}

/// Move limit for an arbitrary board dimension.
///
/// The stock sizes use hand-tuned limits; other sizes scale the small-board
/// ratio (22 moves per 12 cells of edge), rounding up.
#[inline]
pub fn max_moves_for(size: usize) -> u32 {
    use consts::*;
    match size {
        SMALL_BOARD => SMALL_BOARD_MAX_MOVES,
        LARGE_BOARD => LARGE_BOARD_MAX_MOVES,
        n => {
            let scaled = (n * SMALL_BOARD_MAX_MOVES as usize).div_ceil(SMALL_BOARD);
            scaled.max(1) as u32
        }
    }
}

/// Percentage of `total` covered by `part`, rounded to nearest
#[inline]
pub fn percent_of(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}
