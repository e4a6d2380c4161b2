use mapforge_data::{AssetKind, TeleporterRecord};

use super::{Artifact, Registrar};

/// Emit the guard and register artifacts for one teleporter.
pub fn emit_teleporter(record: &TeleporterRecord) -> Vec<Artifact> {
    let registrar = Registrar::new(AssetKind::Teleporter);
    let guard = registrar.guard(
        record.id,
        &record.dimension,
        record.position,
        "Checks whether this teleporter still needs to be registered",
    );

    let mut script = registrar.begin_register(
        record.id,
        &record.dimension,
        record.position,
        "Teleporter definition data",
    );
    script.set("ID (int)", "ID", &record.id.to_string());
    script.set("GroupID (string)", "GroupID", &format!("\"{}\"", record.group));
    script.set(
        "Default activation state (\"Activate\" | \"VisibleDeactivate\" | \"InvisibleDeactivate\")",
        "ActivationState",
        &format!("\"{}\"", record.activation_state.as_str()),
    );
    script.set_optional(
        "Beacon color (\"white\" | \"aqua\") (optional)",
        "Color",
        record.color.map(|c| format!("\"{}\"", c.as_str())).as_deref(),
    );

    vec![guard, registrar.finish_register(record.id, script)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapforge_data::{ActivationState, TeleporterColor, Vec3};

    #[test]
    fn teleporter_register_quotes_its_string_fields() {
        let record = TeleporterRecord {
            id: 31,
            dimension: "the_end".into(),
            position: Vec3::new(0, 70, 12),
            group: "hub".into(),
            activation_state: ActivationState::VisibleDeactivate,
            color: Some(TeleporterColor::White),
        };
        let artifacts = emit_teleporter(&record);
        let guard = &artifacts[0];
        assert_eq!(guard.path.to_str().unwrap(), "teleporter/031/.mcfunction");
        assert!(guard.text.contains("DPR[{D:the_end,X:0,Y:70,Z:12}]"));

        let register = &artifacts[1];
        assert!(register.text.contains("GroupID set value \"hub\""));
        assert!(register.text.contains("ActivationState set value \"VisibleDeactivate\""));
        assert!(register.text.contains("Color set value \"white\""));
    }

    #[test]
    fn absent_color_emits_a_placeholder() {
        let record = TeleporterRecord {
            id: 2,
            dimension: "overworld".into(),
            position: Vec3::new(0, 0, 0),
            group: "ruins".into(),
            activation_state: ActivationState::Activate,
            color: None,
        };
        let register = &emit_teleporter(&record)[1];
        assert!(register.text.contains("# data modify storage asset:teleporter Color set value <unset>"));
    }
}
