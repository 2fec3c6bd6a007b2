/// Presentation layer: banner, per-turn frame, narration, outcome.
///
/// The skyline is drawn top-down, one `[ ]` block per floor, with the
/// rooftop cell showing who or what sits there:
///   `*P*` player   `(E)` exit portal   `(W)` web
///   `FRZ` frozen   `(F)` fuel cell
/// Marker priority is exactly that order when flags coincide.
///
/// Styling goes through crossterm and is queued per frame, flushed once.
/// Colors are only applied on a tty; the text content is identical
/// either way.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    tty::IsTty,
};

use crate::domain::building::Building;
use crate::sim::event::TurnEvent;
use crate::sim::world::GameState;

pub struct Renderer {
    use_color: bool,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            use_color: io::stdout().is_tty(),
        }
    }

    pub fn banner(&self) {
        println!("=========================================================================================");
        println!("|                         WELCOME TO NOWHERE WHERE NO ONE ESCAPES                       |");
        println!("| You are quested to try and escape using the jumper device available in Nowhere        |");
        println!("| The cost of this device isn't free! But let's discuss payment if you manage to escape |");
        println!("| Remember the following if you wish to survive:                                        |");
        println!("| - the device will only allow you to jump short distances                              |");
        println!("| - the jump distance is based on the height difference of the buildings jumped         |");
        println!("| - the building heights change frequently over time                                    |");
        println!("| - fuel cells found on the rooftops can refuel the device for a short while            |");
        println!("| - stay far away from the frozen buildings                                             |");
        println!("| - look out for the Nowhere police webs                                                |");
        println!("| Lastly the Underground Guild takes no responsibility and provides no guarantees       |");
        println!("| Should you survive, we will come to collect! Good Luck!                               |");
        println!();
    }

    /// HUD + skyline for the current state.
    pub fn frame(&self, state: &GameState) -> io::Result<()> {
        let mut out = io::stdout();

        queue!(
            out,
            Print("================== Jumper Game ==================\n"),
            Print(format!("Player: {}\n", state.player.name)),
            Print(format!("Charge: {}\n", state.player.charge)),
            Print(format!("Turn: {}\n", state.turns_played)),
            Print(format!("Current Building: {}\n", state.player.position + 1)),
        )?;

        let max = state.max_height();
        for floor in (0..=max).rev() {
            for (i, building) in state.row.iter().enumerate() {
                if building.height > floor {
                    queue!(out, Print("[ ]"))?;
                } else if building.height == floor {
                    let is_player = i == state.player.position;
                    let text = rooftop_marker(building, is_player);
                    match marker_color(building, is_player) {
                        Some(color) if self.use_color => {
                            queue!(out, SetForegroundColor(color), Print(text), ResetColor)?;
                        }
                        _ => queue!(out, Print(text))?,
                    }
                } else {
                    queue!(out, Print("   "))?;
                }
            }
            queue!(out, Print("\n"))?;
        }

        queue!(out, Print("=============================================\n"))?;
        out.flush()
    }

    /// Narrative lines for what the turn did. Committed jumps and portal
    /// landings stay silent here; the frame and the outcome screen carry
    /// those.
    pub fn narrate(&self, events: &[TurnEvent]) {
        for event in events {
            match event {
                TurnEvent::WebHit => {
                    println!();
                    println!("Oops! You landed on a web and got caught by the Nowhere Police.");
                }
                TurnEvent::FrozenLanding => {
                    println!();
                    println!("The building is frozen. Skipping a turn...");
                }
                TurnEvent::FuelCellFound { recharged } => {
                    println!();
                    println!(
                        "You found a fuel cell on the roof. Your jumper device is recharged by {recharged} points."
                    );
                }
                TurnEvent::InsufficientCharge { .. } => {
                    println!();
                    println!("Not enough charge to make the jump.");
                }
                TurnEvent::ChargeDepleted => {
                    println!();
                    println!("You have zero charge");
                }
                TurnEvent::Jumped { .. } | TurnEvent::PortalReached => {}
            }
        }
    }

    pub fn outcome(&self, state: &GameState) {
        println!();
        println!("Game Over!");
        if state.player.has_won {
            println!(
                "Congratulations, {}! You reached the exit portal and won the game!",
                state.player.name,
            );
        } else {
            println!("Sorry, {}. You lost the game.", state.player.name);
        }
        println!("Final statistics:");
        println!("Player: {}", state.player.name);
        println!("Final Charge Level: {}", state.player.charge);
    }
}

/// The three-character rooftop cell for a building.
pub fn rooftop_marker(building: &Building, is_player: bool) -> &'static str {
    if is_player {
        "*P*"
    } else if building.has_exit_portal {
        "(E)"
    } else if building.has_web {
        "(W)"
    } else if building.is_frozen {
        "FRZ"
    } else if building.has_fuel_cell {
        "(F)"
    } else {
        "   "
    }
}

fn marker_color(building: &Building, is_player: bool) -> Option<Color> {
    if is_player {
        Some(Color::Yellow)
    } else if building.has_exit_portal {
        Some(Color::Green)
    } else if building.has_web {
        Some(Color::Magenta)
    } else if building.is_frozen {
        Some(Color::Cyan)
    } else if building.has_fuel_cell {
        Some(Color::DarkYellow)
    } else {
        None
    }
}

/// The skyline as plain strings, top floor first. The frame renderer
/// follows the same cell logic; this exists for tests and diagnostics.
#[allow(dead_code)]
pub fn skyline_rows(row: &[Building], player_position: usize) -> Vec<String> {
    let max = row.iter().map(|b| b.height).max().unwrap_or(0);
    let mut rows = Vec::with_capacity(max as usize + 1);
    for floor in (0..=max).rev() {
        let mut line = String::with_capacity(row.len() * 3);
        for (i, building) in row.iter().enumerate() {
            if building.height > floor {
                line.push_str("[ ]");
            } else if building.height == floor {
                line.push_str(rooftop_marker(building, i == player_position));
            } else {
                line.push_str("   ");
            }
        }
        rows.push(line);
    }
    rows
}
