//! Shared data model for mapforge asset records.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_assets};
