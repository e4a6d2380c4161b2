//! Lookup tables injected into the normalizers.
//!
//! The boss catalog and the teleporter label vocabularies are configuration,
//! not code: they are passed into the normalizers at construction so tests
//! can substitute fixtures, and they can be overridden from a TOML file.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use mapforge_data::{ActivationState, TeleporterColor};

use crate::CompileError;

/// Immutable lookup configuration consumed by the normalizers.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Lookups {
    /// Boss catalog: human-readable boss name → boss id.
    pub bosses: BTreeMap<String, u32>,
    /// Closed vocabulary for the teleporter activation-state cell.
    pub activation_states: BTreeMap<String, ActivationState>,
    /// Closed vocabulary for the teleporter color cell.
    pub colors: BTreeMap<String, TeleporterColor>,
}

impl Default for Lookups {
    fn default() -> Self {
        let mut activation_states = BTreeMap::new();
        activation_states.insert("activate".to_string(), ActivationState::Activate);
        activation_states.insert("visible-deactivate".to_string(), ActivationState::VisibleDeactivate);
        activation_states.insert("invisible-deactivate".to_string(), ActivationState::InvisibleDeactivate);

        let mut colors = BTreeMap::new();
        colors.insert("white".to_string(), TeleporterColor::White);
        colors.insert("aqua".to_string(), TeleporterColor::Aqua);

        Self {
            bosses: BTreeMap::new(),
            activation_states,
            colors,
        }
    }
}

impl Lookups {
    /// Load overrides from a TOML file. Missing sections keep their
    /// defaults.
    pub fn from_toml_path(path: &Path) -> Result<Self, CompileError> {
        let text = fs::read_to_string(path).map_err(|e| CompileError::LookupsLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&text).map_err(|e| CompileError::LookupsLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_closed_vocabularies() {
        let lookups = Lookups::default();
        assert_eq!(lookups.activation_states.len(), 3);
        assert_eq!(lookups.colors.len(), 2);
        assert!(lookups.bosses.is_empty());
    }

    #[test]
    fn toml_overrides_merge_over_nothing_else() {
        let parsed: Lookups = toml::from_str(
            r#"
            [bosses]
            "Stone Golem" = 3

            [activation_states]
            on = "Activate"
            "#,
        )
        .expect("lookups parse");
        assert_eq!(parsed.bosses.get("Stone Golem"), Some(&3));
        // A present section replaces the default table wholesale.
        assert_eq!(parsed.activation_states.len(), 1);
        assert_eq!(parsed.activation_states.get("on"), Some(&ActivationState::Activate));
        // An absent section keeps its default.
        assert_eq!(parsed.colors.len(), 2);
    }
}
