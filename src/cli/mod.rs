//! CLI argument parsing for tfkey.
//!
//! Uses clap derive macros for declarative argument definitions. Options keep
//! their camelCase names and may be spelled Go-style with a single dash
//! (`-publicKeyPath`); see [`normalize_args`]. As with Go's `flag` package,
//! option values may start with `-`, and parsing stops at the first argument
//! that is not a flag.

mod normalize;

pub use normalize::normalize_args;

use clap::{CommandFactory, Parser};
use std::ffi::OsString;

/// Default provider region when `-awsRegion` is not given.
pub const DEFAULT_REGION: &str = "us-west-2";

/// tfkey: render a Terraform AWS key-pair declaration to `test.tf`.
///
/// Writes a provider block, an `aws_key_pair` resource referencing the public
/// key file, and an output exposing the key pair name.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "tfkey")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the public key file (required).
    #[arg(
        long = "publicKeyPath",
        value_name = "PATH",
        default_value = "",
        hide_default_value = true,
        allow_hyphen_values = true
    )]
    pub public_key_path: String,

    /// Key name.
    #[arg(
        long = "keyName",
        value_name = "NAME",
        default_value = "",
        hide_default_value = true,
        allow_hyphen_values = true
    )]
    pub key_name: String,

    /// AWS region for the provider block.
    #[arg(
        long = "awsRegion",
        value_name = "REGION",
        default_value = DEFAULT_REGION,
        allow_hyphen_values = true
    )]
    pub aws_region: String,

    /// Flag parsing stops at the first non-flag argument; it and everything
    /// after it are ignored.
    #[arg(hide = true, trailing_var_arg = true)]
    #[allow(dead_code)]
    pub ignored: Vec<String>,
}

/// A long option known to the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongOption {
    /// Name without leading dashes.
    pub name: String,
    /// Whether the option consumes a value.
    pub takes_value: bool,
}

impl Cli {
    /// Parse the process arguments, accepting single-dash long options.
    pub fn parse_args() -> Self {
        Self::try_parse_args(std::env::args_os()).unwrap_or_else(|err| err.exit())
    }

    /// Parse an explicit argument list (first item is the binary name).
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    /// Rendered usage text listing every recognized option.
    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }

    /// Long options known to the parser, including `help` and `version`.
    pub fn long_options() -> Vec<LongOption> {
        let mut cmd = Self::command();
        cmd.build();
        cmd.get_arguments()
            .filter_map(|arg| {
                arg.get_long().map(|name| LongOption {
                    name: name.to_string(),
                    takes_value: arg.get_action().takes_values(),
                })
            })
            .collect()
    }
}
