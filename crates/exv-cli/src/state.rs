//! # State File
//!
//! The registry snapshot on disk, as pretty-printed JSON. Writes go to a
//! sibling temporary file that is then renamed over the target, so an
//! interrupted write never leaves a truncated state file behind.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};

use exv_registry::{ExporterRegistry, RegistrySnapshot};

/// Handle on the registry state file.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    /// Handle for the state file at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the snapshot.
    pub fn load_snapshot(&self) -> anyhow::Result<RegistrySnapshot> {
        if !self.exists() {
            bail!(
                "state file {} not found; run `exv init` first",
                self.path.display()
            );
        }
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read state file {}", self.path.display()))?;
        RegistrySnapshot::from_json(&raw)
            .with_context(|| format!("corrupt state file {}", self.path.display()))
    }

    /// Read the snapshot and restore a registry from it.
    pub fn load(&self) -> anyhow::Result<ExporterRegistry> {
        let snapshot = self.load_snapshot()?;
        tracing::debug!(
            path = %self.path.display(),
            admin = %snapshot.admin,
            exporters = snapshot.exporters.len(),
            "loaded registry state"
        );
        Ok(ExporterRegistry::from_snapshot(snapshot))
    }

    /// Write the snapshot.
    pub fn save_snapshot(&self, snapshot: &RegistrySnapshot) -> anyhow::Result<()> {
        let json = snapshot.to_json_pretty()?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        std::fs::write(&tmp, json)
            .with_context(|| format!("failed to write {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("failed to replace state file {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "saved registry state");
        Ok(())
    }

    /// Write the current state of `registry`.
    pub fn save(&self, registry: &ExporterRegistry) -> anyhow::Result<()> {
        self.save_snapshot(&registry.snapshot())
    }
}
