//! Turn handling
//!
//! Applies one player input to a session and reports what happened.

use super::error::FloodError;
use super::flood::expand_region;
use super::grid::Color;
use super::state::{GameEvent, GamePhase, GameState};
use crate::settings::Settings;

/// Input commands for a single turn (deterministic)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnInput {
    /// Repaint the region with a palette color
    SelectColor(Color),
    /// Deal a new board with the current settings
    NewGame { seed: u64 },
    /// Flip between the small and large board, then deal
    ToggleBoardSize { seed: u64 },
}

/// Apply one input to the session.
///
/// Illegal color choices are reported as `MoveRejected` and leave the state
/// untouched; only engine contract violations surface as errors. Toggling the
/// board size only updates `settings` in memory; persisting it is up to the
/// caller.
pub fn play(
    state: &mut GameState,
    settings: &mut Settings,
    input: &TurnInput,
) -> Result<Vec<GameEvent>, FloodError> {
    let mut events = Vec::new();

    match *input {
        TurnInput::SelectColor(color) => select_color(state, color, &mut events)?,
        TurnInput::NewGame { seed } => deal(state, settings, seed, &mut events)?,
        TurnInput::ToggleBoardSize { seed } => {
            settings.board_size = settings.board_size.toggled();
            deal(state, settings, seed, &mut events)?;
        }
    }

    Ok(events)
}

fn deal(
    state: &mut GameState,
    settings: &Settings,
    seed: u64,
    events: &mut Vec<GameEvent>,
) -> Result<(), FloodError> {
    *state = GameState::new(seed, settings)?;
    events.push(GameEvent::NewGame {
        seed,
        size: state.grid().size(),
    });
    if state.phase == GamePhase::Won {
        events.push(GameEvent::Won {
            moves: 0,
            score: state.score,
        });
    }
    Ok(())
}

fn select_color(
    state: &mut GameState,
    color: Color,
    events: &mut Vec<GameEvent>,
) -> Result<(), FloodError> {
    if let Err(reason) = state.validate_move(color) {
        log::debug!("Ignoring color {}: {:?}", color, reason);
        events.push(GameEvent::MoveRejected { color, reason });
        return Ok(());
    }

    let (grid, flooded) = state.board_mut();
    grid.paint(flooded.indices().iter().copied(), color)?;
    let added = expand_region(grid, flooded, color)?;
    let region = flooded.len();
    let complete = flooded.is_complete();

    state.moves += 1;
    state.phase = GamePhase::InProgress;
    events.push(GameEvent::RegionGrew {
        color,
        added,
        region,
    });

    if complete {
        state.phase = GamePhase::Won;
        state.score = state.win_score();
        log::info!("Board cleared in {} moves, score {}", state.moves, state.score);
        events.push(GameEvent::Won {
            moves: state.moves,
            score: state.score,
        });
    } else if state.moves >= state.max_moves {
        state.phase = GamePhase::Lost;
        let flooded_percent = state.flooded_percent();
        log::info!(
            "Out of moves after {}, {}% flooded",
            state.moves,
            flooded_percent
        );
        events.push(GameEvent::Lost {
            moves: state.moves,
            flooded_percent,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::BoardSize;
    use crate::sim::grid::{Coord, Grid};
    use crate::sim::state::RejectReason;

    fn session(rows: &[&[Color]], palette: u8, max_moves: u32) -> GameState {
        GameState::with_grid(Grid::from_rows(palette, rows).unwrap(), max_moves).unwrap()
    }

    #[test]
    fn test_select_color_grows_and_wins() {
        let mut settings = Settings::default();
        let mut state = session(&[&[0, 1], &[1, 1]], 2, 5);
        assert_eq!(state.phase, GamePhase::NotStarted);

        let events = play(&mut state, &mut settings, &TurnInput::SelectColor(1)).unwrap();
        assert_eq!(
            events,
            vec![
                GameEvent::RegionGrew {
                    color: 1,
                    added: 3,
                    region: 4
                },
                GameEvent::Won {
                    moves: 1,
                    score: 1000 + 4 * 50
                },
            ]
        );
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(state.score, 1200);
    }

    #[test]
    fn test_rejected_moves_do_not_count() {
        let mut settings = Settings::default();
        let mut state = session(&[&[0, 1], &[1, 2]], 3, 5);

        let events = play(&mut state, &mut settings, &TurnInput::SelectColor(0)).unwrap();
        assert_eq!(
            events,
            vec![GameEvent::MoveRejected {
                color: 0,
                reason: RejectReason::SameColor
            }]
        );
        let events = play(&mut state, &mut settings, &TurnInput::SelectColor(7)).unwrap();
        assert!(matches!(
            events[0],
            GameEvent::MoveRejected {
                reason: RejectReason::OutOfPalette,
                ..
            }
        ));
        assert_eq!(state.moves, 0);
        assert_eq!(state.phase, GamePhase::NotStarted);
    }

    #[test]
    fn test_move_without_growth_still_counts() {
        let mut settings = Settings::default();
        let mut state = session(&[&[0, 1], &[1, 1]], 3, 5);

        let events = play(&mut state, &mut settings, &TurnInput::SelectColor(2)).unwrap();
        assert_eq!(
            events,
            vec![GameEvent::RegionGrew {
                color: 2,
                added: 0,
                region: 1
            }]
        );
        assert_eq!(state.moves, 1);
        assert_eq!(state.phase, GamePhase::InProgress);
        assert_eq!(state.grid().get(Coord::ORIGIN), Some(2));
    }

    #[test]
    fn test_running_out_of_moves_loses() {
        let mut settings = Settings::default();
        let mut state = session(&[&[0, 1, 2], &[1, 2, 0], &[2, 0, 1]], 3, 2);

        play(&mut state, &mut settings, &TurnInput::SelectColor(1)).unwrap();
        assert_eq!(state.phase, GamePhase::InProgress);
        let events = play(&mut state, &mut settings, &TurnInput::SelectColor(2)).unwrap();
        assert_eq!(state.phase, GamePhase::Lost);
        assert_eq!(
            events.last(),
            Some(&GameEvent::Lost {
                moves: 2,
                flooded_percent: 67
            })
        );
        assert_eq!(state.score, 0);

        let events = play(&mut state, &mut settings, &TurnInput::SelectColor(0)).unwrap();
        assert!(matches!(
            events[0],
            GameEvent::MoveRejected {
                reason: RejectReason::GameOver,
                ..
            }
        ));
        assert_eq!(state.moves, 2);
    }

    #[test]
    fn test_win_on_last_move_beats_loss() {
        let mut settings = Settings::default();
        let mut state = session(&[&[0, 1], &[1, 1]], 2, 1);
        let events = play(&mut state, &mut settings, &TurnInput::SelectColor(1)).unwrap();
        assert!(matches!(events.last(), Some(GameEvent::Won { score: 1000, .. })));
        assert_eq!(state.phase, GamePhase::Won);
    }

    #[test]
    fn test_new_game_and_toggle() {
        let mut settings = Settings::default();
        let mut state = GameState::new(3, &settings).unwrap();

        let events = play(&mut state, &mut settings, &TurnInput::ToggleBoardSize { seed: 9 }).unwrap();
        assert_eq!(events, vec![GameEvent::NewGame { seed: 9, size: 16 }]);
        assert_eq!(settings.board_size, BoardSize::Large);
        // Only the in-memory copy changes
        assert_eq!(settings.palette_size, Settings::default().palette_size);
        assert_eq!(Settings::load().board_size, BoardSize::Small);
        assert_eq!(state.max_moves, 30);
        assert_eq!(state.seed(), 9);

        let events = play(&mut state, &mut settings, &TurnInput::NewGame { seed: 10 }).unwrap();
        assert_eq!(events, vec![GameEvent::NewGame { seed: 10, size: 16 }]);
        assert_eq!(state.moves, 0);
    }
}
