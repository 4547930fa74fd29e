//! Error types for the tfkey CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::template::TemplateError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tfkey operations.
///
/// Every variant is terminal: the process reports it and exits.
#[derive(Error, Debug)]
pub enum TfkeyError {
    /// A required flag was omitted or given an empty value.
    ///
    /// Carries the rendered usage text so the report can list every option.
    #[error("{flag} flag is required\n\n{usage}")]
    MissingRequiredArgument { flag: &'static str, usage: String },

    /// The output file could not be created or truncated.
    #[error("failed to create {}: {source}", .path.display())]
    FileCreateError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the output file failed after it was created.
    #[error("failed to write {}: {source}", .path.display())]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Template substitution failed.
    #[error("failed to execute template: {0}")]
    TemplateExecutionError(#[from] TemplateError),
}

impl TfkeyError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TfkeyError::MissingRequiredArgument { .. } => exit_codes::FAILURE,
            TfkeyError::FileCreateError { .. } => exit_codes::FAILURE,
            TfkeyError::FileWriteError { .. } => exit_codes::FAILURE,
            TfkeyError::TemplateExecutionError(_) => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for tfkey operations.
pub type Result<T> = std::result::Result<T, TfkeyError>;
