//! Output sink: writes named artifacts under the output root, creating
//! parent directories as needed. Any failure here is fatal to the run.

use std::fs;
use std::path::Path;

use crate::CompileError;
use crate::emit::Artifact;

pub fn write_artifacts(root: &Path, artifacts: &[Artifact]) -> Result<(), CompileError> {
    for artifact in artifacts {
        let path = root.join(&artifact.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| CompileError::ArtifactWrite {
                path: path.clone(),
                source,
            })?;
        }
        fs::write(&path, &artifact.text).map_err(|source| CompileError::ArtifactWrite { path, source })?;
    }
    Ok(())
}
