//! The `tfkey` command: load flags, render, write, confirm.

use crate::cli::Cli;
use crate::error::{Result, TfkeyError};
use crate::params::RenderParameters;
use crate::render::{OUTPUT_FILE, render_to_dir};
use std::path::PathBuf;

/// Run the command against the current working directory.
pub fn run(cli: Cli) -> Result<()> {
    let params = RenderParameters::from_cli(cli)?;

    let cwd = std::env::current_dir().map_err(|source| TfkeyError::FileCreateError {
        path: PathBuf::from(OUTPUT_FILE),
        source,
    })?;
    render_to_dir(&params, &cwd)?;

    println!("{} file created successfully.", OUTPUT_FILE);
    Ok(())
}
