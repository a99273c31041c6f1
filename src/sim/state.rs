//! Game state and core session types
//!
//! Everything a session needs lives here, so a seed plus the list of chosen
//! colors reproduces a game exactly.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::error::{FloodError, RegionDefect};
use super::flood::{FloodedSet, compute_initial_region};
use super::grid::{Color, Coord, Grid};
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Board dealt, no color chosen yet
    NotStarted,
    /// At least one move made, moves remain and the board is not covered
    InProgress,
    /// Region covers the whole board
    Won,
    /// Move limit reached with cells left over
    Lost,
}

impl GamePhase {
    /// Whether the session still accepts moves
    pub fn is_playable(&self) -> bool {
        matches!(self, GamePhase::NotStarted | GamePhase::InProgress)
    }
}

/// Why a color choice was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Game already won or lost
    GameOver,
    /// Region already has this color
    SameColor,
    /// Index outside the palette in play
    OutOfPalette,
}

/// Things that happened during a turn, for whatever is drawing the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    NewGame { seed: u64, size: usize },
    MoveRejected { color: Color, reason: RejectReason },
    RegionGrew { color: Color, added: usize, region: usize },
    Won { moves: u32, score: u64 },
    Lost { moves: u32, flooded_percent: u32 },
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    /// Board seed for reproducibility
    pub rng_state: RngState,
    /// Current phase
    pub phase: GamePhase,
    /// Moves made this game
    pub moves: u32,
    /// Move limit for this board
    pub max_moves: u32,
    /// Score (non-zero only after a win)
    pub score: u64,
    grid: Grid,
    flooded: FloodedSet,
}

/// Serialized session; board and region are checked against each other
#[derive(Deserialize)]
struct RawGameState {
    rng_state: RngState,
    phase: GamePhase,
    moves: u32,
    max_moves: u32,
    score: u64,
    grid: Grid,
    flooded: FloodedSet,
}

impl TryFrom<RawGameState> for GameState {
    type Error = FloodError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let (grid, flooded) = (raw.grid, raw.flooded);
        if flooded.size() != grid.size() {
            return Err(FloodError::DimensionMismatch {
                grid: grid.size(),
                set: flooded.size(),
            });
        }
        if !flooded.contains_index(0) {
            return Err(RegionDefect::MissingOrigin.into());
        }
        let origin_color = grid.color_at(0);
        if let Some(&index) = flooded
            .indices()
            .iter()
            .find(|&&i| grid.color_at(i) != origin_color)
        {
            return Err(RegionDefect::ColorMismatch { index }.into());
        }

        Ok(Self {
            rng_state: raw.rng_state,
            phase: raw.phase,
            moves: raw.moves,
            max_moves: raw.max_moves,
            score: raw.score,
            grid,
            flooded,
        })
    }
}

impl GameState {
    /// Deal a fresh random board using the given settings
    pub fn new(seed: u64, settings: &Settings) -> Result<Self, FloodError> {
        let rng_state = RngState::new(seed);
        let grid = Grid::random(
            settings.board_size.dimension(),
            settings.effective_palette_size(),
            &mut rng_state.to_rng(),
        )?;
        let mut state = Self::with_grid(grid, settings.board_size.max_moves())?;
        state.rng_state = rng_state;
        log::info!(
            "New {} game (seed {}), starting region {} cells",
            settings.board_size.as_str(),
            seed,
            state.flooded.len()
        );
        Ok(state)
    }

    /// Session over a prepared board (any size)
    pub fn with_grid(grid: Grid, max_moves: u32) -> Result<Self, FloodError> {
        let flooded = compute_initial_region(&grid, Coord::ORIGIN)?;
        let mut state = Self {
            rng_state: RngState::new(0),
            phase: GamePhase::NotStarted,
            moves: 0,
            max_moves,
            score: 0,
            grid,
            flooded,
        };
        // A board dealt fully flooded is won with every move to spare
        if state.flooded.is_complete() {
            state.phase = GamePhase::Won;
            state.score = state.win_score();
        }
        Ok(state)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn flooded(&self) -> &FloodedSet {
        &self.flooded
    }

    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }

    /// Color of the flooded region (the origin's color)
    pub fn region_color(&self) -> Color {
        self.grid.color_at(0)
    }

    pub fn moves_left(&self) -> u32 {
        self.max_moves.saturating_sub(self.moves)
    }

    /// Share of the board flooded, rounded percent
    pub fn flooded_percent(&self) -> u32 {
        crate::percent_of(self.flooded.len(), self.grid.cell_count())
    }

    /// Colors that make a legal move right now
    pub fn available_colors(&self) -> Vec<Color> {
        if !self.phase.is_playable() {
            return Vec::new();
        }
        let current = self.region_color();
        (0..self.grid.palette_size())
            .filter(|&c| c != current)
            .collect()
    }

    /// Check a color choice without applying it
    pub fn validate_move(&self, color: Color) -> Result<(), RejectReason> {
        if !self.phase.is_playable() {
            return Err(RejectReason::GameOver);
        }
        if color >= self.grid.palette_size() {
            return Err(RejectReason::OutOfPalette);
        }
        if color == self.region_color() {
            return Err(RejectReason::SameColor);
        }
        Ok(())
    }

    /// Board and region, mutably, for the turn logic
    pub(crate) fn board_mut(&mut self) -> (&mut Grid, &mut FloodedSet) {
        (&mut self.grid, &mut self.flooded)
    }

    /// Score for a win with the current move count
    pub fn win_score(&self) -> u64 {
        let remaining = self.moves_left() as u64;
        let size_bonus = if self.grid.size() == LARGE_BOARD {
            LARGE_BOARD_BONUS
        } else {
            0
        };
        WIN_BASE_SCORE + remaining * REMAINING_MOVE_BONUS + size_bonus
    }
}
