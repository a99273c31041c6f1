//! Color Flood entry point
//!
//! Native builds play a seeded game with the greedy autoplayer and print the
//! board after every move. Usage: `color-flood [seed] [size]`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use color_flood::sim::{GameEvent, GameState, Grid, TurnInput, choose_color, play};
    use color_flood::{BestScore, BoardSize, PaletteColor, Settings, max_moves_for};
    use rand::SeedableRng;

    color_flood::platform::init_logging();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random);
    let size_arg = args.next();

    let mut settings = Settings::load();
    let custom_size = match size_arg.as_deref() {
        None => None,
        Some(s) => match BoardSize::from_str(s) {
            Some(size) => {
                settings.board_size = size;
                None
            }
            None => s.parse::<usize>().ok(),
        },
    };

    let state = match custom_size {
        Some(n) => Grid::random(
            n,
            settings.effective_palette_size(),
            &mut rand_pcg::Pcg32::seed_from_u64(seed),
        )
        .and_then(|grid| GameState::with_grid(grid, max_moves_for(n))),
        None => GameState::new(seed, &settings),
    };
    let mut state = match state {
        Ok(state) => state,
        Err(e) => {
            log::error!("Could not start game: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("Color Flood (native) seed {}", seed);
    println!("{}", state.grid());

    let mut best = BestScore::load();
    loop {
        let turn = choose_color(&state).and_then(|pick| match pick {
            Some(color) => play(&mut state, &mut settings, &TurnInput::SelectColor(color))
                .map(|events| Some((color, events))),
            None => Ok(None),
        });
        let (color, events) = match turn {
            Ok(Some(turn)) => turn,
            Ok(None) => break,
            Err(e) => {
                log::error!("Move failed: {}", e);
                std::process::exit(1);
            }
        };

        let name = PaletteColor::from_index(color).map(|c| c.name()).unwrap_or("?");
        println!(
            "Move {}/{}: {} ({}% flooded)",
            state.moves,
            state.max_moves,
            name,
            state.flooded_percent()
        );
        println!("{}", state.grid());

        for event in events {
            match event {
                GameEvent::Won { moves, score } => {
                    println!("Cleared the board in {} moves! Score: {}", moves, score);
                    if best.record(score) {
                        best.save();
                    }
                }
                GameEvent::Lost {
                    moves,
                    flooded_percent,
                } => {
                    println!(
                        "Game over: used all {} moves, {}% of the board flooded",
                        moves, flooded_percent
                    );
                }
                _ => {}
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser build is driven through the library
}
