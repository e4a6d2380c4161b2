//! mapforge: compiles spreadsheet-exported asset tables into registration
//! functions for the in-game asset registry.
//!
//! Each asset kind (island, spawner, teleporter, container) has a fixed CSV
//! schema. The pipeline is one-way per kind:
//! table rows → normalizer → classifiers / slot splitter → emitter → sink.
//! Every generated script registers one object's metadata into a
//! storage-backed key-value store keyed by dimension plus position, guarded
//! so registration happens at most once per spatial key.

pub mod classify;
pub mod compile;
pub mod emit;
pub mod lookups;
pub mod normalize;
pub mod sink;
pub mod split;
pub mod table;

use std::path::PathBuf;

use thiserror::Error;

pub use compile::{CompileReport, compile_kind};
pub use emit::Artifact;
pub use lookups::Lookups;

/// Errors raised while compiling asset tables.
///
/// Table and artifact I/O failures are fatal to the run. The remaining
/// variants are scoped to a single asset: the driver logs them, skips the
/// asset, and keeps compiling.
#[derive(Debug, Error)]
pub enum CompileError {
    /// A source table could not be opened or read.
    #[error("cannot read table '{path}': {source}")]
    TableRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    /// A generated artifact could not be written.
    #[error("cannot write artifact '{path}': {source}")]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The lookup configuration file could not be read or parsed.
    #[error("cannot load lookups from '{path}': {message}")]
    LookupsLoad { path: PathBuf, message: String },
    /// An item cell matched none of the known item grammars. Failing closed
    /// here keeps a typo from silently corrupting inventory contents.
    #[error("unrecognized item cell '{cell}'")]
    UnknownItem { cell: String },
    /// A slot cell was missing, non-numeric, or outside 0..54.
    #[error("invalid item slot '{cell}'")]
    InvalidSlot { cell: String },
    /// An item quantity cell was missing or non-numeric.
    #[error("invalid item quantity '{cell}'")]
    InvalidQuantity { cell: String },
    /// A physical-container row carried a malformed required field. This is
    /// asset-fatal rather than row-scoped: dropping one block of a double
    /// chest would silently re-shape the asset.
    #[error("invalid container block row: {detail}")]
    BadContainerRow { detail: String },
    /// A double container's first block carried a facing the splitter does
    /// not support.
    #[error("unsupported container facing '{facing}'")]
    UnsupportedFacing { facing: String },
    /// A container asset referenced a physical-block count other than 1 or 2.
    #[error("expected 1 or 2 physical containers, found {count}")]
    ContainerCount { count: usize },
}
