//! # Init Subcommand
//!
//! Deploys a fresh registry: writes a state file holding the admin and an
//! empty exporter map.

use anyhow::bail;
use clap::Args;

use exv_core::Principal;
use exv_registry::RegistrySnapshot;

use crate::state::StateFile;

/// Arguments for the init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Principal that deploys the registry and becomes its admin.
    #[arg(long)]
    pub admin: Principal,

    /// Overwrite an existing state file.
    #[arg(long)]
    pub force: bool,
}

/// Create the state file.
pub fn run(args: &InitArgs, state: &StateFile) -> anyhow::Result<RegistrySnapshot> {
    if state.exists() && !args.force {
        bail!(
            "state file {} already exists; pass --force to overwrite",
            state.path().display()
        );
    }
    let snapshot = RegistrySnapshot::genesis(args.admin.clone());
    state.save_snapshot(&snapshot)?;
    tracing::info!(path = %state.path().display(), admin = %args.admin, "registry initialized");
    Ok(snapshot)
}
