//! The saved command: list the signed-in user's saved jobs.

use anyhow::Result;

use harvest_config::Config;

use crate::commands::{SIGN_IN_HINT, signed_in_store};
use crate::error::ExitCode;
use crate::formatters::{OutputFormat, format_saved_jobs};

pub async fn run(config: Config, output: OutputFormat) -> Result<ExitCode> {
    let Some((store, persisted)) = signed_in_store(&config)? else {
        eprintln!("{}", SIGN_IN_HINT);
        return Ok(ExitCode::AuthenticationFailed);
    };

    let saved = store.saved_jobs(&persisted.user_id).await?;
    println!("{}", format_saved_jobs(&saved, output)?);
    Ok(ExitCode::Success)
}
