/// Blocking line prompts.
///
/// Bad input never escapes this module: both prompts loop until the line
/// is acceptable, so the sim layer only ever sees a valid name and a
/// range-feasible direction. The parse/validate helpers are split out from
/// the read loops so the rules are testable without a terminal.

use std::io::{self, BufRead, Write};

use crate::domain::jump::{can_jump, Direction, JumpRefusal};

pub const NAME_MIN: usize = 3;
pub const NAME_MAX: usize = 12;

pub fn name_is_valid(name: &str) -> bool {
    (NAME_MIN..=NAME_MAX).contains(&name.chars().count())
}

pub fn parse_direction(word: &str) -> Option<Direction> {
    match word.trim().to_lowercase().as_str() {
        "left" => Some(Direction::Left),
        "right" => Some(Direction::Right),
        "stay" => Some(Direction::Stay),
        _ => None,
    }
}

/// Ask for the player's name until it fits the 3-12 character rule.
pub fn prompt_player_name<R: BufRead>(input: &mut R) -> io::Result<String> {
    loop {
        print!("Enter your name (between {NAME_MIN} and {NAME_MAX} characters): ");
        io::stdout().flush()?;

        let line = read_line(input)?;
        let name = line.trim();
        if name_is_valid(name) {
            return Ok(name.to_string());
        }
        println!("Invalid name length. Please enter a valid name.");
    }
}

/// Ask for a jump direction until one is feasible for the current range
/// and position. Infeasible left/right get their specific message.
pub fn prompt_jump_direction<R: BufRead>(
    input: &mut R,
    position: usize,
    range: u32,
    row_len: usize,
) -> io::Result<Direction> {
    loop {
        println!("Choose your jump direction: left, right, or stay");

        let line = read_line(input)?;
        let direction = match parse_direction(&line) {
            Some(d) => d,
            None => continue,
        };

        match can_jump(direction, position, range, row_len) {
            Ok(()) => return Ok(direction),
            Err(JumpRefusal::TooFarLeft) => {
                println!("Can't jump that far left. Choose again.");
            }
            Err(JumpRefusal::TooFarRight) => {
                println!("Can't jump that far right. Choose again.");
            }
        }
    }
}

/// One line from the reader; EOF (closed stdin) is an error, since the
/// game cannot continue without input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(line)
}
