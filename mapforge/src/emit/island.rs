use mapforge_data::{AssetKind, IslandRecord};

use super::{Artifact, Registrar};

/// Emit the guard and register artifacts for one island.
pub fn emit_island(record: &IslandRecord) -> Vec<Artifact> {
    let registrar = Registrar::new(AssetKind::Island);
    let guard = registrar.guard(
        record.id,
        &record.dimension,
        record.position,
        "Checks whether this island still needs to be registered",
    );

    let mut script = registrar.begin_register(
        record.id,
        &record.dimension,
        record.position,
        "Island definition data",
    );
    script.set("ID (int)", "ID", &record.id.to_string());
    script.set("Rotation (float)", "Rotation", &format!("{}f", record.rotation));
    script.set_optional(
        "Boss ID (int) (optional)",
        "BossID",
        record.boss_id.map(|v| v.to_string()).as_deref(),
    );

    vec![guard, registrar.finish_register(record.id, script)]
}
