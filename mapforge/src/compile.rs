//! Per-kind compilation pipelines and the run driver.

use std::path::Path;

use log::{info, warn};

use mapforge_data::{AssetKind, AssetRecord, validate_assets};

use crate::CompileError;
use crate::emit::{Artifact, emit_container, emit_island, emit_spawner, emit_teleporter};
use crate::lookups::Lookups;
use crate::normalize::{ContainerTables, normalize_containers, normalize_islands, normalize_spawners, normalize_teleporters};
use crate::sink::write_artifacts;
use crate::table::read_table;

/// Outcome of compiling one asset kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompileReport {
    /// Artifacts written to the output tree.
    pub artifacts: usize,
    /// Assets that failed classification or configuration and were skipped.
    /// Any non-zero count makes the run's exit status fatal.
    pub failed_assets: usize,
}

/// Compile one asset kind from the tables under `input` into the function
/// tree under `output`.
pub fn compile_kind(
    kind: AssetKind,
    input: &Path,
    output: &Path,
    lookups: &Lookups,
) -> Result<CompileReport, CompileError> {
    let (records, mut failed) = normalize_kind(kind, input, lookups)?;

    for error in validate_assets(&records) {
        warn!("{}: {error}", kind.name());
    }

    let mut artifacts: Vec<Artifact> = Vec::new();
    for record in &records {
        match emit_record(record) {
            Ok(mut batch) => artifacts.append(&mut batch),
            Err(e) => {
                warn!("{} {}: {e}", kind.name(), record.id());
                failed += 1;
            },
        }
    }

    write_artifacts(output, &artifacts)?;
    info!(
        "{}: wrote {} artifacts ({} records, {} failed)",
        kind.name(),
        artifacts.len(),
        records.len(),
        failed
    );
    Ok(CompileReport {
        artifacts: artifacts.len(),
        failed_assets: failed,
    })
}

fn normalize_kind(
    kind: AssetKind,
    input: &Path,
    lookups: &Lookups,
) -> Result<(Vec<AssetRecord>, usize), CompileError> {
    match kind {
        AssetKind::Island => {
            let rows = read_table(&input.join("island.csv"))?;
            let records = normalize_islands(&rows, lookups)
                .into_iter()
                .map(AssetRecord::Island)
                .collect();
            Ok((records, 0))
        },
        AssetKind::Spawner => {
            let rows = read_table(&input.join("spawner.csv"))?;
            let records = normalize_spawners(&rows)
                .into_iter()
                .map(AssetRecord::Spawner)
                .collect();
            Ok((records, 0))
        },
        AssetKind::Teleporter => {
            let rows = read_table(&input.join("teleporter.csv"))?;
            let records = normalize_teleporters(&rows, lookups)
                .into_iter()
                .map(AssetRecord::Teleporter)
                .collect();
            Ok((records, 0))
        },
        AssetKind::Container => {
            let tables = ContainerTables {
                assets: read_table(&input.join("loot_assets.csv"))?,
                containers: read_table(&input.join("loot_asset_containers.csv"))?,
                items: read_table(&input.join("loot_asset_items.csv"))?,
            };
            let (records, failed) = normalize_containers(&tables);
            Ok((records.into_iter().map(AssetRecord::Container).collect(), failed))
        },
    }
}

fn emit_record(record: &AssetRecord) -> Result<Vec<Artifact>, CompileError> {
    match record {
        AssetRecord::Island(r) => Ok(emit_island(r)),
        AssetRecord::Spawner(r) => Ok(emit_spawner(r)),
        AssetRecord::Teleporter(r) => Ok(emit_teleporter(r)),
        AssetRecord::Container(r) => emit_container(r),
    }
}
