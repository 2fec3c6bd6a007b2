/// End-of-game statistics sink.
///
/// Records are appended, never overwritten, one block per completed game.
/// The field order is load-bearing: other tools read this file, so keep it
/// exactly as-is.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

pub struct GameRecord<'a> {
    pub name: &'a str,
    pub turns_played: u32,
    pub final_charge: u32,
    pub fuel_cells_found: u32,
    pub won: bool,
}

pub fn append_record(path: &Path, record: &GameRecord) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "Player Name: {}", record.name)?;
    writeln!(file, "Number of turns played: {}", record.turns_played)?;
    writeln!(file, "Charge level: {}", record.final_charge)?;
    writeln!(file, "Number of fuel cells found: {}", record.fuel_cells_found)?;
    writeln!(file, "Win status: {}", if record.won { "Won" } else { "Lost" })?;
    Ok(())
}
