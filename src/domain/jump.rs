/// Jump rules: legality, cost, resolution.
///
/// The jump range for a turn equals the height of the building the player
/// currently occupies. Legality is checked by the prompt loop BEFORE
/// resolution; `resolve_jump` assumes a pre-validated direction and only
/// computes the outcome (its bounds clamp is a final safety net).

use crate::domain::building::Building;
use crate::domain::player::Player;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Left,
    Right,
    Stay,
}

/// Why a direction is not jumpable this turn.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum JumpRefusal {
    /// position - range would land before the first building.
    TooFarLeft,
    /// position + range would land past the last building.
    TooFarRight,
}

/// Outcome of a resolved jump.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum JumpOutcome {
    /// Position committed and cost deducted.
    Committed { from: usize, to: usize, cost: u32 },
    /// Charge below cost: no move, the game is lost.
    InsufficientCharge { cost: u32 },
}

/// Range the device allows this turn: the current building's height.
pub fn jump_range(row: &[Building], position: usize) -> u32 {
    row[position].height
}

/// Is `direction` feasible from `position` with the given range?
/// `Stay` ignores range entirely.
pub fn can_jump(
    direction: Direction,
    position: usize,
    range: u32,
    row_len: usize,
) -> Result<(), JumpRefusal> {
    let range = range as usize;
    match direction {
        Direction::Left if position < range => Err(JumpRefusal::TooFarLeft),
        Direction::Right if position + range >= row_len => Err(JumpRefusal::TooFarRight),
        _ => Ok(()),
    }
}

/// Resolve a pre-validated jump: compute the target, charge the cost,
/// commit the move, or refuse it whole if the device can't pay.
///
/// Cost = |height(current) - height(target)| + 1. The +1 applies even when
/// the heights match, so `Stay` is never free.
pub fn resolve_jump(direction: Direction, row: &[Building], player: &mut Player) -> JumpOutcome {
    let from = player.position;
    let range = jump_range(row, from) as usize;

    let to = match direction {
        Direction::Stay => from,
        Direction::Left => from.saturating_sub(range),
        Direction::Right => (from + range).min(row.len() - 1),
    };

    let cost = row[from].height.abs_diff(row[to].height) + 1;

    if player.charge >= cost {
        player.consume_charge(cost);
        player.position = to;
        JumpOutcome::Committed { from, to, cost }
    } else {
        player.has_lost = true;
        JumpOutcome::InsufficientCharge { cost }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_of(heights: &[u32]) -> Vec<Building> {
        heights.iter().map(|&h| Building::bare(h)).collect()
    }

    fn player_at(position: usize, charge: u32) -> Player {
        let mut p = Player::new("Kestrel");
        p.position = position;
        p.charge = charge;
        p
    }

    #[test]
    fn range_is_current_building_height() {
        let row = row_of(&[3, 1, 4]);
        assert_eq!(jump_range(&row, 0), 3);
        assert_eq!(jump_range(&row, 2), 4);
    }

    #[test]
    fn left_refused_when_it_would_undershoot() {
        assert_eq!(can_jump(Direction::Left, 1, 2, 5), Err(JumpRefusal::TooFarLeft));
        assert_eq!(can_jump(Direction::Left, 2, 2, 5), Ok(()));
    }

    #[test]
    fn right_refused_when_it_would_overshoot() {
        assert_eq!(can_jump(Direction::Right, 3, 2, 5), Err(JumpRefusal::TooFarRight));
        assert_eq!(can_jump(Direction::Right, 2, 2, 5), Ok(()));
    }

    #[test]
    fn stay_ignores_range() {
        assert_eq!(can_jump(Direction::Stay, 0, 99, 1), Ok(()));
    }

    #[test]
    fn resolved_position_never_leaves_row() {
        // Even without pre-validation the clamp holds the row bounds.
        let row = row_of(&[9, 2, 2]);
        for dir in [Direction::Left, Direction::Right, Direction::Stay] {
            for pos in 0..row.len() {
                let mut p = player_at(pos, 20);
                resolve_jump(dir, &row, &mut p);
                assert!(p.position < row.len());
            }
        }
    }

    #[test]
    fn cost_is_height_delta_plus_one() {
        let row = row_of(&[2, 5, 1]);
        let mut p = player_at(0, 20);
        assert_eq!(
            resolve_jump(Direction::Right, &row, &mut p),
            JumpOutcome::Committed { from: 0, to: 2, cost: 2 },
        );
        assert_eq!(p.charge, 18);
    }

    #[test]
    fn stay_is_never_free() {
        let row = row_of(&[4, 4]);
        let mut p = player_at(0, 10);
        assert_eq!(
            resolve_jump(Direction::Stay, &row, &mut p),
            JumpOutcome::Committed { from: 0, to: 0, cost: 1 },
        );
        assert_eq!(p.charge, 9);
    }

    #[test]
    fn equal_height_move_costs_exactly_one() {
        let row = row_of(&[2, 9, 2]);
        let mut p = player_at(0, 10);
        assert_eq!(
            resolve_jump(Direction::Right, &row, &mut p),
            JumpOutcome::Committed { from: 0, to: 2, cost: 1 },
        );
    }

    #[test]
    fn insufficient_charge_rejects_whole_move() {
        let row = row_of(&[1, 0, 3]);
        let mut p = player_at(0, 1);
        // Cost to reach index 1: |1-0|+1 = 2, charge is 1.
        assert_eq!(
            resolve_jump(Direction::Right, &row, &mut p),
            JumpOutcome::InsufficientCharge { cost: 2 },
        );
        assert_eq!(p.position, 0);
        assert_eq!(p.charge, 1);
        assert!(p.has_lost);
    }

    #[test]
    fn exact_charge_commits_to_zero() {
        let row = row_of(&[1, 2]);
        let mut p = player_at(0, 2);
        assert_eq!(
            resolve_jump(Direction::Right, &row, &mut p),
            JumpOutcome::Committed { from: 0, to: 1, cost: 2 },
        );
        assert_eq!(p.charge, 0);
        // Loss from hitting zero is the turn controller's call, not ours.
        assert!(!p.has_lost);
    }
}
