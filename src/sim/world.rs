/// GameState: the complete snapshot of a running game.
///
/// All per-turn operations take the state explicitly; there is no ambient
/// shared row or player. The rng lives here too: one seeded generator for
/// the whole game, injected into every mutation call, so a fixed seed
/// replays a whole game deterministically.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::building::Building;
use crate::domain::player::Player;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Playing,
    Won,
    Lost,
}

pub struct GameState {
    /// The ordered row of buildings. Length is fixed after load.
    pub row: Vec<Building>,
    /// Index of the one building carrying the exit portal.
    pub exit_portal_index: usize,
    pub player: Player,
    /// 1-indexed turn counter; 0 until the first turn starts.
    pub turns_played: u32,
    pub fuel_cells_found: u32,
    pub rng: StdRng,
}

impl GameState {
    pub fn new(row: Vec<Building>, exit_portal_index: usize, player: Player) -> Self {
        GameState::with_rng(row, exit_portal_index, player, StdRng::from_entropy())
    }

    /// Seedable constructor so tests can replay exact mutation sequences.
    pub fn with_rng(
        row: Vec<Building>,
        exit_portal_index: usize,
        player: Player,
        rng: StdRng,
    ) -> Self {
        GameState {
            row,
            exit_portal_index,
            player,
            turns_played: 0,
            fuel_cells_found: 0,
            rng,
        }
    }

    /// Tallest rooftop in the row right now. 0 for an empty row.
    pub fn max_height(&self) -> u32 {
        self.row.iter().map(|b| b.height).max().unwrap_or(0)
    }

    /// The state machine view of the player flags.
    /// Won and Lost are terminal: the turn loop checks this at the top of
    /// each iteration and exits before prompting again.
    pub fn phase(&self) -> Phase {
        if self.player.has_won {
            Phase::Won
        } else if self.player.has_lost {
            Phase::Lost
        } else {
            Phase::Playing
        }
    }
}
