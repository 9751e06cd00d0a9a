use std::fmt;

use apate_core::UnmaskError;
use thiserror::Error;

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Error)]
pub enum CliError {
    #[error(transparent)]
    Unmask(#[from] UnmaskError),

    #[error("Confirmation prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("{failed} file(s) could not be restored")]
    BatchIncomplete { failed: usize },
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // main prints errors with Debug
        write!(f, "{self}")
    }
}
