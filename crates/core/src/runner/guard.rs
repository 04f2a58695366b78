use std::path::Path;

use crate::toolchain::Toolchain;

/// Remove the toolchain's build artifact if one was produced.
///
/// Only native executables are removed; class files and scripts stay.
pub fn cleanup(toolchain: &Toolchain) {
    let Some(artifact) = toolchain.artifact() else {
        tracing::trace!("Nothing to clean up for {} toolchain", toolchain.kind());
        return;
    };
    remove_artifact(artifact);
}

fn remove_artifact(path: &Path) {
    if !path.exists() {
        tracing::debug!("Artifact {:?} was never created", path);
        return;
    }
    match std::fs::remove_file(path) {
        Ok(()) => tracing::debug!("Removed artifact {:?}", path),
        Err(e) => tracing::warn!("Failed to remove artifact {:?}: {}", path, e),
    }
}

/// Runs [`cleanup`] when dropped, so every exit path of the pipeline cleans up
pub struct ArtifactGuard<'a> {
    toolchain: &'a Toolchain,
}

impl<'a> ArtifactGuard<'a> {
    pub fn new(toolchain: &'a Toolchain) -> Self {
        Self { toolchain }
    }
}

impl Drop for ArtifactGuard<'_> {
    fn drop(&mut self) {
        cleanup(self.toolchain);
    }
}
