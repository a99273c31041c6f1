//! Greedy autoplay
//!
//! Picks the color that floods the most cells this turn. Used for the idle
//! demo and as a hint.

use super::error::FloodError;
use super::flood::expand_region;
use super::grid::Color;
use super::state::GameState;

/// Choose the next color for `state`, or None when no move is legal.
///
/// Ties go to the lowest color index. While the game is playable the region
/// has a non-empty edge whose colors are all candidates, so the winner always
/// absorbs at least one cell.
pub fn choose_color(state: &GameState) -> Result<Option<Color>, FloodError> {
    let mut best: Option<(Color, usize)> = None;
    for color in state.available_colors() {
        let gain = preview_gain(state, color)?;
        if best.is_none_or(|(_, g)| gain > g) {
            best = Some((color, gain));
        }
    }

    if let Some((color, gain)) = best {
        log::debug!("Autoplay picks color {} (+{})", color, gain);
    }
    Ok(best.map(|(color, _)| color))
}

/// Cells a color would absorb, computed on a scratch copy
pub fn preview_gain(state: &GameState, color: Color) -> Result<usize, FloodError> {
    let mut grid = state.grid().clone();
    let mut flooded = state.flooded().clone();
    grid.paint(flooded.indices().iter().copied(), color)?;
    expand_region(&grid, &mut flooded, color)
}
