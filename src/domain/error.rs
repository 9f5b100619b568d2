use thiserror::Error;

/// Result alias used across the domain and application layers.
pub type DomainResult<T> = Result<T, DomainError>;

/// Error taxonomy every service operation resolves into.
///
/// The transport layer maps variants to status codes: `Validation` and
/// `Conflict` to 400, `NotFound` to 404, `Internal` to 500.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Internal error: {0}")]
    Internal(String),
}
