/// Entry point and game loop.

mod config;
mod domain;
mod sim;
mod ui;

use std::io::{self, BufRead};

use config::GameConfig;
use domain::jump;
use domain::player::Player;
use sim::layout;
use sim::stats::{self, GameRecord};
use sim::turn;
use sim::world::{GameState, Phase};
use ui::input;
use ui::renderer::Renderer;

fn main() {
    let config = GameConfig::load();
    let renderer = Renderer::new();

    renderer.banner();

    let layout = match layout::load_layout(&config.buildings_file) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("Cannot start the game: {e}");
            return;
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let name = match input::prompt_player_name(&mut input) {
        Ok(name) => name,
        Err(e) => {
            eprintln!("Input error: {e}");
            return;
        }
    };

    let mut state = GameState::new(layout.row, layout.exit_portal_index, Player::new(&name));

    if let Err(e) = game_loop(&mut state, &mut input, &renderer) {
        eprintln!("Game error: {e}");
        return;
    }

    renderer.outcome(&state);

    let record = GameRecord {
        name: &state.player.name,
        turns_played: state.turns_played,
        final_charge: state.player.charge,
        fuel_cells_found: state.fuel_cells_found,
        won: state.player.has_won,
    };
    if let Err(e) = stats::append_record(&config.stats_file, &record) {
        eprintln!(
            "Warning: could not record the outcome in {}: {e}",
            config.stats_file.display(),
        );
    }
}

/// One iteration per turn. Won/Lost are checked at the top, so a finished
/// game never prompts again; the closing frame shows the final skyline.
fn game_loop<R: BufRead>(
    state: &mut GameState,
    input: &mut R,
    renderer: &Renderer,
) -> io::Result<()> {
    while state.phase() == Phase::Playing {
        renderer.frame(state)?;

        let range = jump::jump_range(&state.row, state.player.position);
        let direction =
            input::prompt_jump_direction(input, state.player.position, range, state.row.len())?;

        let events = turn::play_turn(state, direction);
        renderer.narrate(&events);
    }

    renderer.frame(state)
}
