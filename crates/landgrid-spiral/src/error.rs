//! Error types for landgrid-spiral.

use thiserror::Error;

use crate::TokenId;

/// Result type for spiral operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while minting or looking up land coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A caller-supplied value was rejected before any state changed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No coordinate has been assigned to this token id. Expected for ids
    /// that were never minted.
    #[error("token {0} has not been minted")]
    NotFound(TokenId),

    /// A fixed-width assignment record could not be decoded.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}
