//! # exv-cli — Exporter Registry Command-Line Interface
//!
//! Stands in for the ledger: keeps the registry state in a local JSON file,
//! takes the sender and height as flags, and prints the ABI response of
//! each call on stdout.
//!
//! ## Subcommands
//!
//! - `init` — create a state file with an admin and no exporters
//! - `verify` — `verify-exporter`
//! - `deactivate` — `deactivate-exporter`
//! - `status` — `is-verified-exporter`
//! - `transfer-admin` — `transfer-admin`
//! - `show` — dump the state and its digest
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers delegate to `exv-registry`; no registry logic here.
//! - The state file is only rewritten after a call commits.

pub mod admin;
pub mod config;
pub mod exporter;
pub mod init;
pub mod show;
pub mod state;
