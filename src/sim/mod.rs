//! Deterministic game logic
//!
//! All gameplay lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order
//! - No rendering or platform dependencies

pub mod autoplay;
pub mod error;
pub mod flood;
pub mod grid;
pub mod state;
pub mod turn;

pub use autoplay::{choose_color, preview_gain};
pub use error::{FloodError, GridDefect, RegionDefect};
pub use flood::{FloodedSet, compute_initial_region, expand_region};
pub use grid::{Color, Coord, Grid};
pub use state::{GameEvent, GamePhase, GameState, RejectReason, RngState};
pub use turn::{TurnInput, play};
