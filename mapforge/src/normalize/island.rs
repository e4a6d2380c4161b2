use log::warn;

use mapforge_data::IslandRecord;

use crate::lookups::Lookups;
use crate::table::Row;

use super::{cell, parse_id, parse_position};

/// Normalize island rows: `[id, dimension, position, rotation, boss-name?]`.
/// The island table carries no header row. A blank boss cell leaves the
/// record without a boss; a non-blank name must resolve through the boss
/// catalog.
pub fn normalize_islands(rows: &[Row], lookups: &Lookups) -> Vec<IslandRecord> {
    let mut records = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let Some(id) = parse_id(cell(row, 0)) else {
            warn!("island row {index}: invalid id '{}'", cell(row, 0));
            continue;
        };
        let dimension = cell(row, 1);
        if dimension.is_empty() {
            warn!("island row {index}: missing dimension");
            continue;
        }
        let Some(position) = parse_position(cell(row, 2)) else {
            warn!("island row {index}: invalid position '{}'", cell(row, 2));
            continue;
        };
        let Ok(rotation) = cell(row, 3).parse::<f64>() else {
            warn!("island row {index}: invalid rotation '{}'", cell(row, 3));
            continue;
        };
        let boss_name = cell(row, 4);
        let boss_id = if boss_name.is_empty() {
            None
        } else {
            match lookups.bosses.get(boss_name) {
                Some(id) => Some(*id),
                None => {
                    warn!("island row {index}: unknown boss '{boss_name}'");
                    continue;
                },
            }
        };
        records.push(IslandRecord {
            id,
            dimension: dimension.to_string(),
            position,
            rotation,
            boss_id,
        });
    }
    records
}
