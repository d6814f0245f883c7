//! # Show Subcommand
//!
//! Prints the full state and its digest.

use serde::Serialize;

use exv_registry::RegistrySnapshot;

use crate::state::StateFile;

/// Output of `exv show`.
#[derive(Debug, Serialize)]
pub struct ShowOutput {
    /// `sha256:<hex>` digest of the canonical snapshot.
    pub digest: String,
    /// The registry state.
    pub snapshot: RegistrySnapshot,
}

/// Read the state file and fingerprint it.
pub fn run(state: &StateFile) -> anyhow::Result<ShowOutput> {
    let snapshot = state.load_snapshot()?;
    let digest = snapshot.digest()?.to_string();
    Ok(ShowOutput { digest, snapshot })
}
