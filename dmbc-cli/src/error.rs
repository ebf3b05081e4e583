use thiserror::Error;

/// Errors surfaced by the driver binary itself, layered on top of
/// [`dmbc_chain::DmbcError`] the way a thin CLI glue crate wraps its
/// library's errors with its own I/O and parsing failures.
#[derive(Error, Debug)]
pub enum CliError {
    /// Wrong number or shape of command-line arguments.
    #[error("usage error: {0}")]
    Usage(String),
    /// Reading the input file or writing the output file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The input file was not valid JSON, or was missing a required field.
    #[error("invalid input: {0}")]
    Json(#[from] serde_json::Error),
    /// The transaction could not be validated or encoded.
    #[error("transaction error: {0}")]
    Chain(#[from] dmbc_chain::DmbcError),
}

impl CliError {
    /// Maps this error onto the exit-code contract documented for the
    /// driver (§6): -1 on usage error, 1 on everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => -1,
            _ => 1,
        }
    }
}
