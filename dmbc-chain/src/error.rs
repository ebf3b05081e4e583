use thiserror::Error;

/// An error produced while validating or encoding a transaction.
///
/// Every fallible entry point in this crate returns `Result<_, DmbcError>`;
/// there is no panic on a validated-input path and no partial output is ever
/// produced on the `Err` side.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DmbcError {
    /// A hex string was the wrong length or contained non-hex characters.
    #[error("invalid hex: {0}")]
    InvalidHex(String),
    /// A decimal fraction string did not match `D+ ('.' D*)?`.
    #[error("invalid decimal: {0}")]
    InvalidDecimal(String),
    /// `fee_strategy` was outside `1..=4`.
    #[error("invalid fee strategy: {0}")]
    InvalidFeeStrategy(String),
    /// An operation is not legal in the builder's current state.
    #[error("illegal state: {0}")]
    IllegalState(String),
    /// Encoding was requested before a required field was set.
    #[error("missing field: {0}")]
    MissingField(String),
}

pub type Result<T> = std::result::Result<T, DmbcError>;
