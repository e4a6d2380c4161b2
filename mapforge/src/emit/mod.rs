//! Script emitters: render typed records into named text artifacts.

use std::path::PathBuf;

mod container;
mod island;
mod registrar;
mod script;
mod spawner;
mod teleporter;

pub use container::emit_container;
pub use island::emit_island;
pub use script::{GUARD_RADIUS, Script, guard_line, spatial_key_literal};
pub use spawner::emit_spawner;
pub use teleporter::emit_teleporter;

pub(crate) use registrar::Registrar;

/// One generated text file, addressed relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub text: String,
}

/// Zero-padded decimal id used in output paths and function ids.
pub(crate) fn padded_id(id: u32, width: usize) -> String {
    format!("{id:0width$}")
}
