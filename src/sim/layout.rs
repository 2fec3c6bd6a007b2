/// Building-row loader.
///
/// ## Record format (one building per line, comma-separated):
///   ```text
///   height:int, has_exit_portal:bool, has_fuel_cell:bool, has_web:bool, is_frozen:bool
///   ```
///
/// Malformed lines are warned about and skipped; the row is whatever
/// parsed. What is NOT tolerated is a row the game cannot run on: no
/// buildings at all, or anything other than exactly one exit portal.
/// Those are configuration errors reported before the game starts.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::domain::building::Building;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("could not read building layout '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("building layout contains no buildings")]
    EmptyRow,
    #[error("building layout has no exit portal")]
    NoExitPortal,
    #[error("building layout has {0} exit portals, expected exactly one")]
    MultipleExitPortals(usize),
}

/// A validated row plus the index of its one exit-portal building.
pub struct Layout {
    pub row: Vec<Building>,
    pub exit_portal_index: usize,
}

pub fn load_layout(path: &Path) -> Result<Layout, LayoutError> {
    let text = fs::read_to_string(path).map_err(|source| LayoutError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_layout(&text)
}

pub fn parse_layout(text: &str) -> Result<Layout, LayoutError> {
    let mut row = Vec::new();

    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_record(line) {
            Some(building) => row.push(building),
            None => {
                eprintln!(
                    "Warning: skipping malformed building record on line {}: {line}",
                    number + 1,
                );
            }
        }
    }

    validate(row)
}

fn parse_record(line: &str) -> Option<Building> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 5 {
        return None;
    }
    let height = fields[0].parse::<u32>().ok()?;
    let has_exit_portal = fields[1].parse::<bool>().ok()?;
    let has_fuel_cell = fields[2].parse::<bool>().ok()?;
    let has_web = fields[3].parse::<bool>().ok()?;
    let is_frozen = fields[4].parse::<bool>().ok()?;
    Some(Building::new(
        height,
        has_exit_portal,
        has_fuel_cell,
        has_web,
        is_frozen,
    ))
}

fn validate(row: Vec<Building>) -> Result<Layout, LayoutError> {
    if row.is_empty() {
        return Err(LayoutError::EmptyRow);
    }

    let portals: Vec<usize> = row
        .iter()
        .enumerate()
        .filter(|(_, b)| b.has_exit_portal)
        .map(|(i, _)| i)
        .collect();

    match portals.as_slice() {
        [index] => Ok(Layout {
            exit_portal_index: *index,
            row,
        }),
        [] => Err(LayoutError::NoExitPortal),
        many => Err(LayoutError::MultipleExitPortals(many.len())),
    }
}
