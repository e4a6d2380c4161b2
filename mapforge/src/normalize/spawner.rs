use log::warn;

use mapforge_data::SpawnerRecord;

use crate::classify::{POTENTIAL_COLUMNS, classify_spawn_potentials};
use crate::table::Row;

use super::{cell, parse_id, parse_position};

/// Column offsets of the seven tuning integers in the spawner schema.
const TUNING_COLUMNS: [usize; 7] = [21, 22, 23, 24, 25, 26, 27];

/// Normalize spawner rows. The spawner table is 28 columns wide and its
/// first row is a header: id at 0, dimension at 4, position at 5, the four
/// spawn-potential cell pairs at the classifier's fixed offsets, hp at 20,
/// then the tuning integers.
pub fn normalize_spawners(rows: &[Row]) -> Vec<SpawnerRecord> {
    let mut records = Vec::new();
    for (index, row) in rows.iter().enumerate().skip(1) {
        let Some(id) = parse_id(cell(row, 0)) else {
            warn!("spawner row {index}: invalid id '{}'", cell(row, 0));
            continue;
        };
        let dimension = cell(row, 4);
        if dimension.is_empty() {
            warn!("spawner row {index}: missing dimension");
            continue;
        }
        let Some(position) = parse_position(cell(row, 5)) else {
            warn!("spawner row {index}: invalid position '{}'", cell(row, 5));
            continue;
        };
        let pairs: Vec<(&str, &str)> = POTENTIAL_COLUMNS
            .iter()
            .map(|&(id_col, weight_col)| (cell(row, id_col), cell(row, weight_col)))
            .collect();
        let Some(spawn_potentials) = classify_spawn_potentials(&pairs) else {
            warn!("spawner row {index}: invalid spawn potentials");
            continue;
        };
        let Ok(hp) = cell(row, 20).parse::<u32>() else {
            warn!("spawner row {index}: invalid hp '{}'", cell(row, 20));
            continue;
        };
        let mut tuning = [0u32; 7];
        let mut ok = true;
        for (slot, &col) in tuning.iter_mut().zip(TUNING_COLUMNS.iter()) {
            match cell(row, col).parse::<u32>() {
                Ok(v) => *slot = v,
                Err(_) => {
                    warn!("spawner row {index}: invalid tuning value '{}' (column {col})", cell(row, col));
                    ok = false;
                    break;
                },
            }
        }
        if !ok {
            continue;
        }
        let [spawn_count, spawn_range, delay, min_spawn_delay, max_spawn_delay, max_nearby_entities, required_player_range] =
            tuning;
        records.push(SpawnerRecord {
            id,
            dimension: dimension.to_string(),
            position,
            hp,
            spawn_potentials,
            spawn_count,
            spawn_range,
            delay,
            min_spawn_delay,
            max_spawn_delay,
            max_nearby_entities,
            required_player_range,
        });
    }
    records
}
