use std::collections::HashSet;
use std::fmt;

use crate::{AssetRecord, SpatialKey};

/// Cross-record problem found in a batch of normalized assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: u32 },
    DuplicateSpatialKey { kind: &'static str, id: u32, key: SpatialKey },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id {id}")
            },
            ValidationError::DuplicateSpatialKey { kind, id, key } => {
                write!(
                    f,
                    "{kind} {id} reuses spatial key ({} {})",
                    key.dimension, key.position
                )
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check uniqueness invariants across one kind's records: ids must be
/// unique, and no two records may claim the same spatial key (the guard
/// scripts would otherwise race for one registry entry).
pub fn validate_assets(records: &[AssetRecord]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();
    let mut keys = HashSet::new();
    for record in records {
        let kind = record.kind().name();
        if !ids.insert(record.id()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: record.id(),
            });
        }
        for key in record.spatial_keys() {
            if !keys.insert(key.clone()) {
                errors.push(ValidationError::DuplicateSpatialKey {
                    kind,
                    id: record.id(),
                    key,
                });
            }
        }
    }
    errors
}
