use std::path::PathBuf;

use mapforge_data::{
    AssetKind, BlockDescriptor, ContainerAsset, ContainerKind, ItemContent, ItemStack, PhysicalContainer, Vec3,
};

use crate::CompileError;
use crate::split::split_double;

use super::script::Script;
use super::{Artifact, padded_id};

/// Per-block payload after any double-container split.
enum Payload {
    Items(Vec<ItemStack>),
    /// `None` keeps the field as a commented-out placeholder.
    Loot(Option<String>),
}

/// Emit register artifacts for one container asset, one per physical block.
///
/// Containers skip the storage-guard pattern: the register script is
/// combined and guards itself with a chunk-loaded check on its own
/// position. A Fixed asset with two blocks has its flattened item list
/// split between them; a Random asset with two blocks shares one loot
/// table, defaulting a blank cell to the literal `"empty"` (the
/// single-block case instead omits the field — asymmetry preserved from
/// the source schema).
pub fn emit_container(asset: &ContainerAsset) -> Result<Vec<Artifact>, CompileError> {
    let loot = || {
        let cell = asset.loot_table.trim();
        (!cell.is_empty()).then(|| cell.to_string())
    };

    let entries: Vec<(&PhysicalContainer, Payload)> = match asset.containers.as_slice() {
        [single] => match asset.kind {
            ContainerKind::Fixed => vec![(single, Payload::Items(asset.items.clone()))],
            ContainerKind::Random => vec![(single, Payload::Loot(loot()))],
        },
        [first, second] => match asset.kind {
            ContainerKind::Fixed => {
                let (first_items, second_items) = split_double(first, second, &asset.items)?;
                vec![
                    (first, Payload::Items(first_items)),
                    (second, Payload::Items(second_items)),
                ]
            },
            ContainerKind::Random => {
                let table = loot().unwrap_or_else(|| "empty".to_string());
                vec![
                    (first, Payload::Loot(Some(table.clone()))),
                    (second, Payload::Loot(Some(table))),
                ]
            },
        },
        other => {
            return Err(CompileError::ContainerCount { count: other.len() });
        },
    };

    Ok(entries
        .into_iter()
        .map(|(block, payload)| register_artifact(block, payload))
        .collect())
}

fn register_artifact(block: &PhysicalContainer, payload: Payload) -> Artifact {
    let id = padded_id(block.id, AssetKind::Container.id_width());
    let mut script = Script::new("asset:container");
    script.doc(
        &format!("asset:container/{id}/register"),
        "Container definition data",
        "function",
        &format!("asset:container/{id}/"),
    );
    script.blank();
    script.line(format!("execute unless loaded {} run return 1", block.position));
    script.blank();
    script.set("ID (int)", "ID", &block.id.to_string());
    script.set("Pos ([int] @ 3)", "Pos", &render_position(block.position));
    script.set("Block (id(block))", "Block", &render_block(&block.block));
    script.blank();
    script.comment("Only one of LootTable / Items may be set");
    let (loot, items) = match payload {
        Payload::Items(items) => (None, Some(render_items(&items))),
        Payload::Loot(table) => (table.map(|t| format!("\"{t}\"")), None),
    };
    script.set_optional("LootTable (id(loot_table)) (optional)", "LootTable", loot.as_deref());
    script.set_optional("Items (ItemStack[]) (optional)", "Items", items.as_deref());

    Artifact {
        path: PathBuf::from(format!("container/{id}/register.mcfunction")),
        text: script.into_text(),
    }
}

fn render_position(position: Vec3) -> String {
    format!("[{}, {}, {}]", position.x, position.y, position.z)
}

/// Pre-quoted block descriptor: id plus bracketed state qualifiers, values
/// lowercased. The brackets are kept even when no qualifier is present.
fn render_block(block: &BlockDescriptor) -> String {
    let mut qualifiers = Vec::new();
    if let Some(facing) = &block.facing {
        qualifiers.push(format!("facing={}", facing.to_lowercase()));
    }
    if let Some(waterlogged) = block.waterlogged {
        qualifiers.push(format!("waterlogged={waterlogged}"));
    }
    if let Some(chest_type) = &block.chest_type {
        qualifiers.push(format!("type={}", chest_type.to_lowercase()));
    }
    format!("\"{}[{}]\"", block.block_id, qualifiers.join(","))
}

fn render_items(items: &[ItemStack]) -> String {
    let parts: Vec<String> = items.iter().map(render_stack).collect();
    format!("[{}]", parts.join(","))
}

fn render_stack(item: &ItemStack) -> String {
    match &item.content {
        ItemContent::Vanilla { id, tag } => {
            let tag = tag.as_ref().map(|t| format!(",tag:{t}")).unwrap_or_default();
            format!(
                "{{Slot:{}b,Item:{{id:\"{id}\",Count:{}b{tag}}}}}",
                item.slot, item.quantity
            )
        },
        ItemContent::Preset { id } => {
            format!(
                "{{Slot:{}b,Item:{{PresetItem:\"{id}\",Count:{}b}}}}",
                item.slot, item.quantity
            )
        },
        ItemContent::Artifact { id } => format!("{{Slot:{}b,Item:{id}}}", item.slot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(id: u32, x: i32, facing: Option<&str>) -> PhysicalContainer {
        PhysicalContainer {
            id,
            position: Vec3::new(x, 60, -3),
            block: BlockDescriptor {
                block_id: "minecraft:chest".into(),
                facing: facing.map(str::to_string),
                waterlogged: Some(false),
                chest_type: None,
            },
        }
    }

    fn stack(slot: u8, content: ItemContent) -> ItemStack {
        ItemStack { slot, quantity: 1, content }
    }

    fn fixed_asset(containers: Vec<PhysicalContainer>, items: Vec<ItemStack>) -> ContainerAsset {
        ContainerAsset {
            asset_id: 1,
            kind: ContainerKind::Fixed,
            dimension: "overworld".into(),
            containers,
            loot_table: String::new(),
            items,
        }
    }

    #[test]
    fn single_fixed_container_renders_items_and_no_loot_table() {
        let asset = fixed_asset(
            vec![block(10, 4, Some("NORTH"))],
            vec![
                stack(0, ItemContent::Vanilla { id: "minecraft:stone".into(), tag: Some("{Foo:1}".into()) }),
                stack(1, ItemContent::Preset { id: "gold_sword".into() }),
                stack(2, ItemContent::Artifact { id: 42 }),
            ],
        );
        let artifacts = emit_container(&asset).unwrap();
        assert_eq!(artifacts.len(), 1);
        let text = &artifacts[0].text;
        assert_eq!(artifacts[0].path.to_str().unwrap(), "container/010/register.mcfunction");
        assert!(text.contains("execute unless loaded 4 60 -3 run return 1"));
        assert!(text.contains("Block set value \"minecraft:chest[facing=north,waterlogged=false]\""));
        assert!(text.contains("# data modify storage asset:container LootTable set value <unset>"));
        assert!(text.contains(
            "Items set value [{Slot:0b,Item:{id:\"minecraft:stone\",Count:1b,tag:{Foo:1}}},\
             {Slot:1b,Item:{PresetItem:\"gold_sword\",Count:1b}},{Slot:2b,Item:42}]"
        ));
    }

    #[test]
    fn double_fixed_container_splits_the_inventory() {
        let asset = fixed_asset(
            vec![block(10, 0, Some("NORTH")), block(11, 1, Some("NORTH"))],
            vec![stack(0, ItemContent::Artifact { id: 1 }), stack(27, ItemContent::Artifact { id: 2 })],
        );
        let artifacts = emit_container(&asset).unwrap();
        assert_eq!(artifacts.len(), 2);
        // Block 10 at the lesser x with NORTH facing owns the high half.
        assert!(artifacts[0].text.contains("Items set value [{Slot:0b,Item:2}]"));
        assert!(artifacts[1].text.contains("Items set value [{Slot:0b,Item:1}]"));
    }

    #[test]
    fn double_random_defaults_blank_loot_table_to_empty() {
        let mut asset = fixed_asset(vec![block(10, 0, None), block(11, 1, None)], Vec::new());
        asset.kind = ContainerKind::Random;
        let artifacts = emit_container(&asset).unwrap();
        for artifact in &artifacts {
            assert!(artifact.text.contains("LootTable set value \"empty\""));
            assert!(artifact.text.contains("# data modify storage asset:container Items set value <unset>"));
        }
    }

    #[test]
    fn single_random_omits_a_blank_loot_table_instead() {
        let mut asset = fixed_asset(vec![block(10, 0, None)], Vec::new());
        asset.kind = ContainerKind::Random;
        let artifacts = emit_container(&asset).unwrap();
        assert!(artifacts[0].text.contains("# data modify storage asset:container LootTable set value <unset>"));
    }

    #[test]
    fn three_blocks_are_a_configuration_error() {
        let asset = fixed_asset(
            vec![block(1, 0, None), block(2, 1, None), block(3, 2, None)],
            Vec::new(),
        );
        assert!(matches!(
            emit_container(&asset),
            Err(CompileError::ContainerCount { count: 3 })
        ));
    }

    #[test]
    fn zero_blocks_are_a_configuration_error() {
        let asset = fixed_asset(Vec::new(), Vec::new());
        assert!(matches!(
            emit_container(&asset),
            Err(CompileError::ContainerCount { count: 0 })
        ));
    }
}
