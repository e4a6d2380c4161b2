//! End-to-end runs over a temporary directory tree: the compiler is a pure
//! function of its input tables, so re-running it must reproduce the output
//! byte for byte.

use std::fs;
use std::path::Path;

use mapforge::compile_kind;
use mapforge::lookups::Lookups;
use mapforge_data::AssetKind;

fn write_input(dir: &Path) {
    fs::write(dir.join("island.csv"), "7,overworld,100 64 -50,90,\n").unwrap();
    fs::write(
        dir.join("loot_assets.csv"),
        "1,a81f,buried cache,fixed,\n2,a820,ruin chest,random,\n",
    )
    .unwrap();
    fs::write(
        dir.join("loot_asset_containers.csv"),
        concat!(
            "10,1,overworld,0,60,-3,minecraft:chest,NORTH,0,left\n",
            "11,1,overworld,1,60,-3,minecraft:chest,NORTH,0,right\n",
            "12,2,overworld,8,61,5,minecraft:barrel,,,\n",
        ),
    )
    .unwrap();
    fs::write(
        dir.join("loot_asset_items.csv"),
        "1,1,0,artifact:42,1\n2,1,27,minecraft:stone{Foo:1},3\n",
    )
    .unwrap();
}

fn snapshot(root: &Path) -> Vec<(String, Vec<u8>)> {
    fn walk(dir: &Path, root: &Path, out: &mut Vec<(String, Vec<u8>)>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(&path, root, out);
            } else {
                let rel = path.strip_prefix(root).unwrap().to_str().unwrap().to_string();
                out.push((rel, fs::read(&path).unwrap()));
            }
        }
    }
    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}

#[test]
fn rerunning_the_compiler_is_byte_identical() {
    let input = tempfile::tempdir().unwrap();
    write_input(input.path());
    let lookups = Lookups::default();

    let output_a = tempfile::tempdir().unwrap();
    let output_b = tempfile::tempdir().unwrap();
    for output in [&output_a, &output_b] {
        for kind in [AssetKind::Island, AssetKind::Container] {
            let report = compile_kind(kind, input.path(), output.path(), &lookups).unwrap();
            assert_eq!(report.failed_assets, 0);
        }
    }

    let a = snapshot(output_a.path());
    let b = snapshot(output_b.path());
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn compiled_tree_is_partitioned_by_kind_and_padded_id() {
    let input = tempfile::tempdir().unwrap();
    write_input(input.path());
    let output = tempfile::tempdir().unwrap();
    let lookups = Lookups::default();

    compile_kind(AssetKind::Island, input.path(), output.path(), &lookups).unwrap();
    let report = compile_kind(AssetKind::Container, input.path(), output.path(), &lookups).unwrap();
    assert_eq!(report.artifacts, 3);

    assert!(output.path().join("island/07/.mcfunction").is_file());
    assert!(output.path().join("island/07/register.mcfunction").is_file());
    assert!(output.path().join("container/010/register.mcfunction").is_file());
    assert!(output.path().join("container/011/register.mcfunction").is_file());
    assert!(output.path().join("container/012/register.mcfunction").is_file());

    // The double chest at (0..1, 60, -3) faces north, so the block with the
    // greater x owns slots 0..27.
    let low_owner = fs::read_to_string(output.path().join("container/011/register.mcfunction")).unwrap();
    assert!(low_owner.contains("Items set value [{Slot:0b,Item:42}]"));
    let high_owner = fs::read_to_string(output.path().join("container/010/register.mcfunction")).unwrap();
    assert!(high_owner.contains("Items set value [{Slot:0b,Item:{id:\"minecraft:stone\",Count:3b,tag:{Foo:1}}}]"));

    // The single random barrel left its loot table blank, so the field is
    // only a commented-out placeholder.
    let barrel = fs::read_to_string(output.path().join("container/012/register.mcfunction")).unwrap();
    assert!(barrel.contains("# data modify storage asset:container LootTable set value <unset>"));
}

#[test]
fn missing_table_is_fatal_to_the_run() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let err = compile_kind(AssetKind::Island, input.path(), output.path(), &Lookups::default());
    assert!(err.is_err());
}
