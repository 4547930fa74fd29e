//! Exit code constants for the tfkey CLI.
//!
//! - 0: Success
//! - 1: Failure (missing required flag, output file error, template error)
//!
//! Usage errors detected by clap itself (unknown flags, missing values) exit
//! with clap's own code (2) before any of these apply.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Any failure after argument parsing succeeded.
pub const FAILURE: i32 = 1;
