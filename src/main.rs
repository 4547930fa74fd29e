//! tfkey: render a Terraform AWS key-pair declaration to `test.tf`.
//!
//! This is the main entry point for the `tfkey` CLI. It parses arguments,
//! runs the command, and handles errors with proper exit codes.

mod cli;
mod commands;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod params;
pub mod render;
pub mod template;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
