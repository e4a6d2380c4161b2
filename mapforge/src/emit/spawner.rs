use mapforge_data::{AssetKind, SpawnPotentials, SpawnerRecord};

use super::{Artifact, Registrar};

/// Emit the guard and register artifacts for one spawner.
pub fn emit_spawner(record: &SpawnerRecord) -> Vec<Artifact> {
    let registrar = Registrar::new(AssetKind::Spawner);
    let guard = registrar.guard(
        record.id,
        &record.dimension,
        record.position,
        "Checks whether this spawner still needs to be registered",
    );

    let mut script = registrar.begin_register(
        record.id,
        &record.dimension,
        record.position,
        "Spawner definition data",
    );
    script.set("ID (int)", "ID", &record.id.to_string());
    script.set(
        "HP (int) the spawner breaks after this many of its mobs are killed",
        "HP",
        &record.hp.to_string(),
    );
    script.set(
        "SpawnPotentials (int[] | {Id: int, Weight: int}[]) mob asset ids to spawn",
        "SpawnPotentials",
        &render_potentials(&record.spawn_potentials),
    );
    script.set("SpawnCount (int) mobs per spawn attempt", "SpawnCount", &record.spawn_count.to_string());
    script.set("SpawnRange (int) radius mobs may appear in", "SpawnRange", &record.spawn_range.to_string());
    script.set("Delay (int) ticks before the first spawn", "Delay", &record.delay.to_string());
    script.set("MinSpawnDelay (int)", "MinSpawnDelay", &record.min_spawn_delay.to_string());
    script.set("MaxSpawnDelay (int)", "MaxSpawnDelay", &record.max_spawn_delay.to_string());
    script.set(
        "MaxNearbyEntities (int)",
        "MaxNearbyEntities",
        &record.max_nearby_entities.to_string(),
    );
    script.set(
        "RequiredPlayerRange (int) spawning starts with a player inside this range // distance <= 100",
        "RequiredPlayerRange",
        &record.required_player_range.to_string(),
    );

    vec![guard, registrar.finish_register(record.id, script)]
}

/// Render the potentials literal. The homogeneous shape stays a plain id
/// list; the weighted shape materializes every entry.
fn render_potentials(potentials: &SpawnPotentials) -> String {
    match potentials {
        SpawnPotentials::Homogeneous(ids) => {
            let parts: Vec<String> = ids.iter().map(u32::to_string).collect();
            format!("[{}]", parts.join(","))
        },
        SpawnPotentials::Weighted(entries) => {
            let parts: Vec<String> = entries
                .iter()
                .map(|e| format!("{{Id:{},Weight:{}}}", e.id, e.weight))
                .collect();
            format!("[{}]", parts.join(","))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapforge_data::{SpawnEntry, Vec3};

    fn record(potentials: SpawnPotentials) -> SpawnerRecord {
        SpawnerRecord {
            id: 12,
            dimension: "overworld".into(),
            position: Vec3::new(10, 65, -4),
            hp: 5,
            spawn_potentials: potentials,
            spawn_count: 2,
            spawn_range: 4,
            delay: 0,
            min_spawn_delay: 200,
            max_spawn_delay: 800,
            max_nearby_entities: 6,
            required_player_range: 16,
        }
    }

    #[test]
    fn homogeneous_potentials_render_as_a_plain_list() {
        assert_eq!(render_potentials(&SpawnPotentials::Homogeneous(vec![1, 2])), "[1,2]");
    }

    #[test]
    fn weighted_potentials_render_every_entry() {
        let potentials = SpawnPotentials::Weighted(vec![
            SpawnEntry { id: 1, weight: 3 },
            SpawnEntry { id: 2, weight: 1 },
        ]);
        assert_eq!(render_potentials(&potentials), "[{Id:1,Weight:3},{Id:2,Weight:1}]");
    }

    #[test]
    fn spawner_register_carries_every_tuning_field() {
        let artifacts = emit_spawner(&record(SpawnPotentials::Homogeneous(vec![4])));
        let register = &artifacts[1];
        assert_eq!(register.path.to_str().unwrap(), "spawner/012/register.mcfunction");
        for key in [
            "ID set value 12",
            "HP set value 5",
            "SpawnPotentials set value [4]",
            "SpawnCount set value 2",
            "SpawnRange set value 4",
            "Delay set value 0",
            "MinSpawnDelay set value 200",
            "MaxSpawnDelay set value 800",
            "MaxNearbyEntities set value 6",
            "RequiredPlayerRange set value 16",
        ] {
            assert!(register.text.contains(key), "missing {key}");
        }
        assert!(register.text.ends_with("function asset:spawner/common/register\n"));
    }
}
