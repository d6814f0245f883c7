//! # Transfer-Admin Subcommand

use clap::Args;

use exv_core::Principal;
use exv_registry::{CallResponse, TxContext};

use crate::config::CliConfig;
use crate::state::StateFile;

/// Arguments for the transfer-admin subcommand.
#[derive(Args, Debug)]
pub struct TransferAdminArgs {
    /// Principal submitting the call. Falls back to the config `sender`.
    #[arg(long)]
    pub sender: Option<Principal>,

    /// Current ledger height.
    #[arg(long)]
    pub height: u64,

    /// Principal that becomes admin.
    #[arg(long)]
    pub new_admin: Principal,
}

/// Submit `transfer-admin`.
pub fn run(
    args: &TransferAdminArgs,
    state: &StateFile,
    config: &CliConfig,
) -> anyhow::Result<CallResponse> {
    let ctx = TxContext::new(config.sender(args.sender.as_ref())?, args.height);
    let mut registry = state.load()?;
    let response = CallResponse::from(registry.transfer_admin(&ctx, args.new_admin.clone()));
    if response.is_ok() {
        state.save(&registry)?;
    }
    Ok(response)
}
