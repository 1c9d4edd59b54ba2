//! Error types for the revdiff CLI.
//!
//! The parsing and revision core never fails; these errors only cover the
//! command-line surface around it (reading input, loading config, reporting
//! an invalid revision result to the shell).

use crate::exit_codes;
use thiserror::Error;

/// Main error type for revdiff operations.
#[derive(Error, Debug)]
pub enum RevdiffError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// A revision operation produced no valid result.
    #[error("invalid revision: {0}")]
    InvalidRevision(String),

    /// Reading input failed.
    #[error("I/O failure: {0}")]
    IoError(String),
}

impl RevdiffError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            RevdiffError::UserError(_) => exit_codes::USER_ERROR,
            RevdiffError::InvalidRevision(_) => exit_codes::INVALID_REVISION,
            RevdiffError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for revdiff operations.
pub type Result<T> = std::result::Result<T, RevdiffError>;
