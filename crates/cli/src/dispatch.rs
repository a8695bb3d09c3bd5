//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main`).

use anyhow::Result;

use harvest_config::Config;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::error::ExitCode;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli, config: Config) -> Result<ExitCode> {
    match cli.command {
        Commands::Search {
            title,
            location,
            output,
            save,
        } => commands::search::run(config, title, location, output, save).await,
        Commands::Login => commands::auth::login(config).await,
        Commands::Signup { name } => commands::auth::signup(config, name).await,
        Commands::Logout => commands::auth::logout(config).await,
        Commands::Saved { output } => commands::saved::run(config, output).await,
    }
}
