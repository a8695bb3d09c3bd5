//! Job Harvest CLI - search job portals from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute search, identity and saved-job commands via the shared crates.
//! - Format and display results (table, JSON, CSV).
//!
//! Does NOT handle:
//! - Search lifecycle logic (see `crates/app`).
//! - HTTP details (see `crates/client` and `crates/store`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` values can feed
//!   clap's env-backed arguments.
//! - Every exit path goes through a structured [`error::ExitCode`].

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use args::Cli;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use harvest_config::ConfigLoader;

#[tokio::main]
async fn main() {
    // Load .env BEFORE CLI parsing so clap env defaults can read .env values
    let loader = match ConfigLoader::new().load_dotenv() {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load environment: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    // Environment first, explicit CLI overrides on top.
    let loader = match loader.from_env() {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load configuration from environment: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let mut loader = loader;
    if let Some(ref url) = cli.api_url {
        loader = loader.with_api_url(url.clone());
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(secs));
    }
    if let Some(ref url) = cli.store_url {
        loader = loader.with_store_url(url.clone());
    }

    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    tracing::debug!(
        api_url = %config.search.base_url,
        store_url = %config.store.base_url,
        "Configuration loaded"
    );

    let exit_code = match run_command(cli, config).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
