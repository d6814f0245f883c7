//! # Exporter Subcommands
//!
//! `verify`, `deactivate` and `status`. Each loads the registry, makes one
//! call, and persists the state only if the call committed.

use clap::Args;

use exv_core::Principal;
use exv_registry::{CallResponse, TxContext};

use crate::config::CliConfig;
use crate::state::StateFile;

/// Arguments for the verify subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Principal submitting the call. Falls back to the config `sender`.
    #[arg(long)]
    pub sender: Option<Principal>,

    /// Current ledger height.
    #[arg(long)]
    pub height: u64,

    /// Exporter to verify.
    #[arg(long)]
    pub exporter: Principal,

    /// Registered company name.
    #[arg(long)]
    pub company_name: String,

    /// Country of registration.
    #[arg(long)]
    pub country: String,
}

/// Arguments for the deactivate subcommand.
#[derive(Args, Debug)]
pub struct DeactivateArgs {
    /// Principal submitting the call. Falls back to the config `sender`.
    #[arg(long)]
    pub sender: Option<Principal>,

    /// Current ledger height.
    #[arg(long)]
    pub height: u64,

    /// Exporter to deactivate.
    #[arg(long)]
    pub exporter: Principal,
}

/// Arguments for the status subcommand.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Exporter to look up.
    #[arg(long)]
    pub exporter: Principal,
}

/// Submit `verify-exporter`.
pub fn verify(
    args: &VerifyArgs,
    state: &StateFile,
    config: &CliConfig,
) -> anyhow::Result<CallResponse> {
    let ctx = TxContext::new(config.sender(args.sender.as_ref())?, args.height);
    let mut registry = state.load()?;
    let result = registry.verify_exporter(
        &ctx,
        args.exporter.clone(),
        args.company_name.as_str(),
        args.country.as_str(),
    );
    let response = CallResponse::from(result);
    if response.is_ok() {
        state.save(&registry)?;
    }
    Ok(response)
}

/// Submit `deactivate-exporter`.
pub fn deactivate(
    args: &DeactivateArgs,
    state: &StateFile,
    config: &CliConfig,
) -> anyhow::Result<CallResponse> {
    let ctx = TxContext::new(config.sender(args.sender.as_ref())?, args.height);
    let mut registry = state.load()?;
    let response = CallResponse::from(registry.deactivate_exporter(&ctx, &args.exporter));
    if response.is_ok() {
        state.save(&registry)?;
    }
    Ok(response)
}

/// Query `is-verified-exporter`. Never writes.
pub fn status(args: &StatusArgs, state: &StateFile) -> anyhow::Result<CallResponse> {
    let registry = state.load()?;
    Ok(CallResponse::from(registry.is_verified_exporter(&args.exporter)))
}
