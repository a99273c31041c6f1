use color_flood::sim::{
    Coord, FloodError, GameEvent, GamePhase, GameState, Grid, GridDefect, TurnInput,
    compute_initial_region, expand_region, play,
};
use color_flood::{BoardSize, Settings};

#[test]
fn uniform_three_by_three_floods_all_nine() {
    let grid = Grid::filled(3, 2, 0).unwrap();
    let set = compute_initial_region(&grid, Coord::new(0, 0)).unwrap();
    assert_eq!(set.len(), 9);
    for row in 0..3 {
        for col in 0..3 {
            assert!(set.contains(Coord::new(row, col)));
        }
    }
}

#[test]
fn recolor_absorbs_matching_neighbors() {
    let mut grid = Grid::from_rows(2, &[[0, 1], [1, 1]]).unwrap();
    let mut set = compute_initial_region(&grid, Coord::ORIGIN).unwrap();
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![Coord::new(0, 0)]);

    grid.paint(set.indices().to_vec(), 1).unwrap();
    expand_region(&grid, &mut set, 1).unwrap();
    assert_eq!(set.len(), 4);
    assert!(set.is_complete());
}

#[test]
fn remote_island_is_not_a_candidate() {
    let grid = Grid::from_rows(
        2,
        &[[0, 1, 1, 1], [1, 1, 1, 1], [1, 1, 1, 1], [1, 1, 1, 0]],
    )
    .unwrap();
    let mut set = compute_initial_region(&grid, Coord::ORIGIN).unwrap();
    let added = expand_region(&grid, &mut set, 0).unwrap();
    assert_eq!(added, 0);
    assert_eq!(set.len(), 1);
    assert!(!set.contains(Coord::new(3, 3)));
}

#[test]
fn contract_violations_are_errors() {
    let grid = Grid::filled(2, 2, 0).unwrap();
    assert!(matches!(
        compute_initial_region(&grid, Coord::new(0, 2)),
        Err(FloodError::InvalidCoordinate { row: 0, col: 2, size: 2 })
    ));
    assert!(matches!(
        Grid::filled(0, 2, 0),
        Err(FloodError::InvalidGrid {
            reason: GridDefect::ZeroDimension
        })
    ));
    let msg = FloodError::InvalidCoordinate { row: 5, col: 1, size: 4 }.to_string();
    assert_eq!(msg, "coordinate (5, 1) outside 4x4 grid");
}

#[test]
fn win_is_reached_regardless_of_color_order() {
    // Checkerboard of three colors: any order that keeps changing color wins
    let rows: Vec<Vec<u8>> = (0..5)
        .map(|r| (0..5).map(|c| ((r + c) % 3) as u8).collect())
        .collect();
    let orders: [&[u8]; 2] = [&[1, 2, 0], &[2, 0, 1]];

    for order in orders {
        let grid = Grid::from_rows(3, &rows).unwrap();
        let mut state = GameState::with_grid(grid, 100).unwrap();
        let mut settings = Settings::default();
        let mut step = 0;
        while state.phase.is_playable() {
            let color = order[step % order.len()];
            step += 1;
            if color == state.region_color() {
                continue;
            }
            play(&mut state, &mut settings, &TurnInput::SelectColor(color)).unwrap();
        }
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(state.flooded().len(), 25);
        assert!(state.score >= 1000);
    }
}

#[test]
fn full_session_through_turn_inputs() {
    let mut settings = Settings::with_board_size(BoardSize::Small);
    let mut state = GameState::new(2024, &settings).unwrap();

    let events = play(
        &mut state,
        &mut settings,
        &TurnInput::ToggleBoardSize { seed: 77 },
    )
    .unwrap();
    assert_eq!(events, vec![GameEvent::NewGame { seed: 77, size: 16 }]);

    let mut last_len = state.flooded().len();
    while let Some(color) = color_flood::sim::choose_color(&state).unwrap() {
        play(&mut state, &mut settings, &TurnInput::SelectColor(color)).unwrap();
        assert!(state.flooded().len() >= last_len);
        last_len = state.flooded().len();
    }
    assert!(!state.phase.is_playable());
    assert!(state.moves <= 30);
    match state.phase {
        GamePhase::Won => assert!(state.flooded().is_complete()),
        GamePhase::Lost => assert_eq!(state.moves, 30),
        other => panic!("unexpected phase {:?}", other),
    }
}
