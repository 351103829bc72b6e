use thiserror::Error;

/// Errors emitted by the secure random engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RandomError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("secure random engine used after close")]
    Closed,
}
