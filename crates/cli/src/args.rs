//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not handle config loading (see `main`).

use clap::{Parser, Subcommand};

use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "harvest")]
#[command(about = "Job Harvest - search job portals from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  harvest search 'Backend Engineer' -l Remote\n  harvest search 'Data Analyst' -o json\n  harvest login\n  harvest search 'Backend Engineer' --save 1\n  harvest saved -o csv\n"
)]
pub struct Cli {
    /// Base URL of the job aggregation service (e.g., http://127.0.0.1:8000)
    #[arg(long, global = true, env = "HARVEST_API_URL")]
    pub api_url: Option<String>,

    /// Search request timeout in seconds
    #[arg(long, global = true, env = "HARVEST_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Base URL of the store service holding identities and saved jobs
    #[arg(long, global = true, env = "HARVEST_STORE_URL")]
    pub store_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search job portals for a title and optional location
    Search {
        /// The job title to search for
        title: String,

        /// Location filter (empty means anywhere)
        #[arg(short, long, default_value = "")]
        location: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,

        /// Save the Nth listing (1-based) after a successful search;
        /// requires a signed-in session
        #[arg(long, value_name = "N")]
        save: Option<usize>,
    },

    /// Sign in with the configured credentials (HARVEST_EMAIL / HARVEST_PASSWORD)
    Login,

    /// Create an account with the configured credentials and a display name
    Signup {
        /// Display name recorded on the user profile
        #[arg(long)]
        name: String,
    },

    /// Sign out and discard the persisted session
    Logout,

    /// List the signed-in user's saved jobs
    Saved {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_search_with_location() {
        let cli = Cli::try_parse_from([
            "harvest", "search", "Backend Engineer", "-l", "Remote", "-o", "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Search {
                title,
                location,
                output,
                save,
            } => {
                assert_eq!(title, "Backend Engineer");
                assert_eq!(location, "Remote");
                assert_eq!(output, OutputFormat::Json);
                assert!(save.is_none());
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_cli_location_defaults_to_empty() {
        let cli = Cli::try_parse_from(["harvest", "search", "Backend Engineer"]).unwrap();
        match cli.command {
            Commands::Search { location, .. } => assert_eq!(location, ""),
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_cli_signup_requires_name() {
        assert!(Cli::try_parse_from(["harvest", "signup"]).is_err());
        assert!(Cli::try_parse_from(["harvest", "signup", "--name", "User"]).is_ok());
    }
}
