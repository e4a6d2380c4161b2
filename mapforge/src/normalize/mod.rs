//! Per-kind record normalizers.
//!
//! Each normalizer turns the raw rows of one table (or, for containers,
//! three joined tables) into validated records. A row is accepted whole or
//! rejected whole: any failing field drops the row with a `warn!` naming
//! the row index and the rule it broke, and compilation continues.

use mapforge_data::Vec3;

mod container;
mod island;
mod spawner;
mod teleporter;

pub use container::{ContainerTables, normalize_containers};
pub use island::normalize_islands;
pub use spawner::normalize_spawners;
pub use teleporter::normalize_teleporters;

/// Fetch a cell, trimmed; rows shorter than the schema read as empty cells
/// so ragged exports fall into the ordinary required-field rejection path.
pub(crate) fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(|s| s.trim()).unwrap_or("")
}

/// Parse an asset id cell: decimal digits only.
pub(crate) fn parse_id(cell: &str) -> Option<u32> {
    if cell.is_empty() || !cell.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    cell.parse().ok()
}

/// Parse one signed decimal coordinate, truncating any fractional part
/// toward zero (`"1.9"` → 1, `"-1.9"` → -1).
pub(crate) fn parse_coord(cell: &str) -> Option<i32> {
    let (sign, digits) = match cell.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1i64, cell.strip_prefix('+').unwrap_or(cell)),
    };
    let integer = match digits.split_once('.') {
        Some((whole, frac)) => {
            if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            whole
        },
        None => digits,
    };
    if integer.is_empty() || !integer.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: i64 = integer.parse().ok()?;
    i32::try_from(sign * value).ok()
}

/// Parse a position cell: exactly three signed decimal numbers separated by
/// single spaces. Fewer or more components reject the cell; nothing is
/// truncated or padded.
pub(crate) fn parse_position(cell: &str) -> Option<Vec3> {
    let mut parts = cell.split(' ');
    let x = parse_coord(parts.next()?)?;
    let y = parse_coord(parts.next()?)?;
    let z = parse_coord(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some(Vec3::new(x, y, z))
}
