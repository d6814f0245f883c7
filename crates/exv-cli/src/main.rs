//! # exv CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules. Responses go to
//! stdout as JSON; logs go to stderr.

use std::path::PathBuf;

use clap::Parser;

use exv_cli::config::CliConfig;
use exv_cli::state::StateFile;

/// Exporter verification registry CLI.
///
/// Keeps the registry state in a local file and submits calls against it
/// as if they came from the ledger.
#[derive(Parser, Debug)]
#[command(name = "exv", version, about)]
struct Cli {
    /// Registry state file. Defaults to the config value, then `exv-state.json`.
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// YAML config file with defaults for `state` and `sender`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Create a new registry state file.
    Init(exv_cli::init::InitArgs),
    /// Verify an exporter (admin only).
    Verify(exv_cli::exporter::VerifyArgs),
    /// Deactivate a verified exporter (admin only).
    Deactivate(exv_cli::exporter::DeactivateArgs),
    /// Check whether an exporter's verification is in force.
    Status(exv_cli::exporter::StatusArgs),
    /// Hand the admin role to another principal (admin only).
    TransferAdmin(exv_cli::admin::TransferAdminArgs),
    /// Print the registry state and its digest.
    Show,
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    let state = StateFile::new(config.state_path(cli.state.as_deref()));

    let output = match &cli.command {
        Commands::Init(args) => serde_json::to_string_pretty(&exv_cli::init::run(args, &state)?)?,
        Commands::Verify(args) => {
            serde_json::to_string(&exv_cli::exporter::verify(args, &state, &config)?)?
        }
        Commands::Deactivate(args) => {
            serde_json::to_string(&exv_cli::exporter::deactivate(args, &state, &config)?)?
        }
        Commands::Status(args) => serde_json::to_string(&exv_cli::exporter::status(args, &state)?)?,
        Commands::TransferAdmin(args) => {
            serde_json::to_string(&exv_cli::admin::run(args, &state, &config)?)?
        }
        Commands::Show => serde_json::to_string_pretty(&exv_cli::show::run(&state)?)?,
    };
    println!("{output}");

    Ok(())
}
