/// One full turn: jump → landing effects → environment mutation.
///
/// Landing effects run in a fixed order; later effects see the state the
/// earlier ones left behind:
///   1. Web        (-5 charge, web cleared)
///   2. Freeze     (-1 charge; the turn-skip line is cosmetic only)
///   3. Exit portal (win, unless the portal building is frozen this turn)
///   4. Fuel cell  (+5 charge, cell cleared, found-count up)
///   5. Zero-charge loss check
/// All five run unconditionally and independently.
///
/// The environment mutates afterwards, and only while the game is still on.

use crate::domain::jump::{self, Direction, JumpOutcome};
use crate::sim::event::TurnEvent;
use crate::sim::mutate;
use crate::sim::world::{GameState, Phase};

pub fn play_turn(state: &mut GameState, direction: Direction) -> Vec<TurnEvent> {
    let mut events = Vec::new();
    state.turns_played += 1;

    match jump::resolve_jump(direction, &state.row, &mut state.player) {
        JumpOutcome::InsufficientCharge { cost } => {
            // No move, no landing effects: the device died mid-prompt.
            events.push(TurnEvent::InsufficientCharge { cost });
            return events;
        }
        JumpOutcome::Committed { from, to, cost } => {
            events.push(TurnEvent::Jumped { from, to, cost });
        }
    }

    resolve_landing(state, &mut events);

    if state.phase() == Phase::Playing {
        mutate::mutate_environment(state);
    }

    events
}

fn resolve_landing(state: &mut GameState, events: &mut Vec<TurnEvent>) {
    let here = state.player.position;

    if state.row[here].has_web {
        state.player.consume_charge(5);
        state.row[here].has_web = false;
        events.push(TurnEvent::WebHit);
    }

    if state.row[here].is_frozen {
        state.player.consume_charge(1);
        events.push(TurnEvent::FrozenLanding);
    }

    if here == state.exit_portal_index && !state.row[here].is_frozen {
        state.player.has_won = true;
        events.push(TurnEvent::PortalReached);
    }

    if state.row[here].has_fuel_cell {
        state.player.recharge(5);
        state.row[here].has_fuel_cell = false;
        state.fuel_cells_found += 1;
        events.push(TurnEvent::FuelCellFound { recharged: 5 });
    }

    if state.player.charge == 0 {
        state.player.has_lost = true;
        events.push(TurnEvent::ChargeDepleted);
    }
}
