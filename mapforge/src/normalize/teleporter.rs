use log::warn;

use mapforge_data::{TeleporterRecord, Vec3};

use crate::lookups::Lookups;
use crate::table::Row;

use super::{cell, parse_coord, parse_id};

/// Normalize teleporter rows:
/// `[id, group, where, dimension, x, y, z, activation-label, color-label]`
/// with a header row. The `where` column is informational only. Unlike the
/// other kinds the coordinates arrive in three separate cells. Activation
/// and color labels must appear in the injected vocabularies; the color
/// cell may be blank.
pub fn normalize_teleporters(rows: &[Row], lookups: &Lookups) -> Vec<TeleporterRecord> {
    let mut records = Vec::new();
    for (index, row) in rows.iter().enumerate().skip(1) {
        let Some(id) = parse_id(cell(row, 0)) else {
            warn!("teleporter row {index}: invalid id '{}'", cell(row, 0));
            continue;
        };
        let group = cell(row, 1);
        if group.is_empty() {
            warn!("teleporter row {index}: missing group");
            continue;
        }
        let dimension = cell(row, 3);
        if dimension.is_empty() {
            warn!("teleporter row {index}: missing dimension");
            continue;
        }
        let coords = (
            parse_coord(cell(row, 4)),
            parse_coord(cell(row, 5)),
            parse_coord(cell(row, 6)),
        );
        let (Some(x), Some(y), Some(z)) = coords else {
            warn!(
                "teleporter row {index}: invalid position '{} {} {}'",
                cell(row, 4),
                cell(row, 5),
                cell(row, 6)
            );
            continue;
        };
        let activation_label = cell(row, 7);
        let Some(activation_state) = lookups.activation_states.get(activation_label).copied() else {
            warn!("teleporter row {index}: unknown activation state '{activation_label}'");
            continue;
        };
        let color_label = cell(row, 8);
        let color = if color_label.is_empty() {
            None
        } else {
            match lookups.colors.get(color_label).copied() {
                Some(color) => Some(color),
                None => {
                    warn!("teleporter row {index}: unknown color '{color_label}'");
                    continue;
                },
            }
        };
        records.push(TeleporterRecord {
            id,
            dimension: dimension.to_string(),
            position: Vec3::new(x, y, z),
            group: group.to_string(),
            activation_state,
            color,
        });
    }
    records
}
