//! Duplicate-prevention registrar: the two-stage check-then-register
//! pattern shared by the guarded asset kinds.
//!
//! The guard runs unconditionally on an external trigger and may fire any
//! number of times; registration happens at most once per spatial key
//! because the register function's first act is to append the key the
//! guard checks. Callers must not bypass the guard.

use std::path::PathBuf;

use mapforge_data::{AssetKind, Vec3};

use super::script::{Script, guard_line, spatial_key_literal};
use super::{Artifact, padded_id};

pub(crate) struct Registrar {
    kind: AssetKind,
}

impl Registrar {
    pub fn new(kind: AssetKind) -> Self {
        Self { kind }
    }

    /// Storage namespace all of this kind's mutations target.
    pub fn namespace(&self) -> String {
        format!("asset:{}", self.kind.name())
    }

    fn function_root(&self, id: u32) -> String {
        format!("asset:{}/{}", self.kind.name(), padded_id(id, self.kind.id_width()))
    }

    /// Guard artifact for one record.
    pub fn guard(&self, id: u32, dimension: &str, position: Vec3, description: &str) -> Artifact {
        let root = self.function_root(id);
        let mut script = Script::new(self.namespace());
        script.doc(
            &format!("{root}/"),
            description,
            "tag/function",
            &format!("asset:{}/register", self.kind.name()),
        );
        script.line(guard_line(
            &self.namespace(),
            dimension,
            position,
            &format!("{root}/register"),
        ));
        Artifact {
            path: PathBuf::from(format!(
                "{}/{}/.mcfunction",
                self.kind.name(),
                padded_id(id, self.kind.id_width())
            )),
            text: script.into_text(),
        }
    }

    /// Start the register script: doc header plus the append that makes the
    /// whole pattern idempotent. The caller adds its field writes and then
    /// calls [`Registrar::finish_register`].
    pub fn begin_register(&self, id: u32, dimension: &str, position: Vec3, description: &str) -> Script {
        let root = self.function_root(id);
        let mut script = Script::new(self.namespace());
        script.doc(&format!("{root}/register"), description, "function", &format!("{root}/"));
        script.blank();
        script.append(
            "Claim this position in the duplicate-prevention registry",
            "DPR",
            &spatial_key_literal(dimension, position),
        );
        script.blank();
        script
    }

    /// Close the register script with the kind's shared continuation and
    /// wrap it into an artifact.
    pub fn finish_register(&self, id: u32, mut script: Script) -> Artifact {
        script.blank();
        script.line(format!("function asset:{}/common/register", self.kind.name()));
        Artifact {
            path: PathBuf::from(format!(
                "{}/{}/register.mcfunction",
                self.kind.name(),
                padded_id(id, self.kind.id_width())
            )),
            text: script.into_text(),
        }
    }
}
