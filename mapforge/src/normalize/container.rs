use log::warn;

use mapforge_data::{BlockDescriptor, ContainerAsset, ContainerKind, ItemStack, PhysicalContainer, Vec3};

use crate::CompileError;
use crate::classify::classify_item_content;
use crate::table::Row;

use super::{cell, parse_coord, parse_id};

/// The three joined container tables, none of which carries a header row.
pub struct ContainerTables {
    /// `[asset_id, uuid, name, kind, loot_table]`
    pub assets: Vec<Row>,
    /// `[container_id, asset_id, dimension, x, y, z, block_id, facing,
    /// waterlogged, chest_type]`
    pub containers: Vec<Row>,
    /// `[row_id, asset_id, slot, item, quantity]`
    pub items: Vec<Row>,
}

/// Normalize container assets by joining the three tables on asset id.
///
/// A malformed asset row is rejected row-scoped; anything wrong inside an
/// asset's joined rows (unclassifiable item cell, bad slot, malformed block
/// row) aborts that one asset and is counted in the returned failure tally,
/// which feeds the run's exit status.
pub fn normalize_containers(tables: &ContainerTables) -> (Vec<ContainerAsset>, usize) {
    let mut records = Vec::new();
    let mut failed = 0usize;
    for (index, asset) in tables.assets.iter().enumerate() {
        let join_key = cell(asset, 0);
        let Some(asset_id) = parse_id(join_key) else {
            warn!("container asset row {index}: invalid id '{join_key}'");
            continue;
        };
        let kind = match cell(asset, 3) {
            "fixed" => ContainerKind::Fixed,
            "random" => ContainerKind::Random,
            other => {
                warn!("container asset row {index}: unknown kind '{other}'");
                continue;
            },
        };
        match build_asset(asset_id, kind, cell(asset, 4), join_key, tables) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("container asset {asset_id}: {e}");
                failed += 1;
            },
        }
    }
    (records, failed)
}

fn build_asset(
    asset_id: u32,
    kind: ContainerKind,
    loot_table: &str,
    join_key: &str,
    tables: &ContainerTables,
) -> Result<ContainerAsset, CompileError> {
    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());

    let mut containers = Vec::new();
    let mut dimension = String::new();
    for row in tables.containers.iter().filter(|r| cell(r, 1) == join_key) {
        let id = parse_id(cell(row, 0)).ok_or_else(|| CompileError::BadContainerRow {
            detail: format!("invalid container id '{}'", cell(row, 0)),
        })?;
        let coord = |col: usize| {
            parse_coord(cell(row, col)).ok_or_else(|| CompileError::BadContainerRow {
                detail: format!("invalid coordinate '{}'", cell(row, col)),
            })
        };
        let position = Vec3::new(coord(3)?, coord(4)?, coord(5)?);
        let block_id = cell(row, 6);
        if block_id.is_empty() {
            return Err(CompileError::BadContainerRow {
                detail: "missing block id".to_string(),
            });
        }
        if dimension.is_empty() {
            dimension = cell(row, 2).to_string();
        }
        containers.push(PhysicalContainer {
            id,
            position,
            block: BlockDescriptor {
                block_id: block_id.to_string(),
                facing: non_empty(cell(row, 7)),
                waterlogged: match cell(row, 8) {
                    "0" => Some(false),
                    "1" => Some(true),
                    _ => None,
                },
                chest_type: non_empty(cell(row, 9)),
            },
        });
    }

    // Item cells are classified for every kind so a corrupt cell cannot
    // hide behind a `random` asset; only the Fixed emitter consumes them.
    let mut items = Vec::new();
    for row in tables.items.iter().filter(|r| cell(r, 1) == join_key) {
        let slot_cell = cell(row, 2);
        let slot = slot_cell
            .parse::<u8>()
            .ok()
            .filter(|slot| *slot < 54)
            .ok_or_else(|| CompileError::InvalidSlot {
                cell: slot_cell.to_string(),
            })?;
        let content = classify_item_content(cell(row, 3))?;
        let quantity_cell = cell(row, 4);
        let quantity = quantity_cell
            .parse::<u32>()
            .map_err(|_| CompileError::InvalidQuantity {
                cell: quantity_cell.to_string(),
            })?;
        items.push(ItemStack { slot, quantity, content });
    }

    Ok(ContainerAsset {
        asset_id,
        kind,
        dimension,
        containers,
        loot_table: loot_table.to_string(),
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapforge_data::ItemContent;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn tables() -> ContainerTables {
        ContainerTables {
            assets: vec![row(&["1", "uuid-1", "buried cache", "fixed", ""])],
            containers: vec![row(&[
                "10", "1", "overworld", "4", "60", "-3", "minecraft:chest", "NORTH", "0", "single",
            ])],
            items: vec![row(&["1", "1", "0", "artifact:42", "1"])],
        }
    }

    #[test]
    fn joined_tables_normalize_into_one_asset() {
        let (records, failed) = normalize_containers(&tables());
        assert_eq!(failed, 0);
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.asset_id, 1);
        assert_eq!(record.kind, ContainerKind::Fixed);
        assert_eq!(record.dimension, "overworld");
        assert_eq!(record.containers.len(), 1);
        assert_eq!(record.containers[0].position, Vec3::new(4, 60, -3));
        assert_eq!(record.containers[0].block.facing.as_deref(), Some("NORTH"));
        assert_eq!(record.containers[0].block.waterlogged, Some(false));
        assert_eq!(record.items[0].content, ItemContent::Artifact { id: 42 });
    }

    #[test]
    fn unclassifiable_item_cell_fails_the_asset() {
        let mut t = tables();
        t.items = vec![row(&["1", "1", "0", "???", "1"])];
        let (records, failed) = normalize_containers(&t);
        assert!(records.is_empty());
        assert_eq!(failed, 1);
    }

    #[test]
    fn out_of_range_slot_fails_the_asset() {
        let mut t = tables();
        t.items = vec![row(&["1", "1", "54", "artifact:1", "1"])];
        let (records, failed) = normalize_containers(&t);
        assert!(records.is_empty());
        assert_eq!(failed, 1);
    }

    #[test]
    fn random_assets_still_classify_their_item_rows() {
        let mut t = tables();
        t.assets = vec![row(&["1", "uuid-1", "cache", "random", "chests/common"])];
        t.items = vec![row(&["1", "1", "0", "???", "1"])];
        let (records, failed) = normalize_containers(&t);
        assert!(records.is_empty());
        assert_eq!(failed, 1);
    }

    #[test]
    fn unknown_kind_rejects_only_that_row() {
        let mut t = tables();
        t.assets.push(row(&["2", "uuid-2", "cache", "mystery", ""]));
        let (records, failed) = normalize_containers(&t);
        assert_eq!(records.len(), 1);
        assert_eq!(failed, 0);
    }
}
