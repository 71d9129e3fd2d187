//! Service layer: pure functions over the repository traits.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod campaigns;
pub mod dashboard;
pub mod leads;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// No or invalid tenant identity.
    #[error("unauthorized")]
    Unauthorized,

    /// Caller-input problem (malformed cursor, bad limit, unknown status).
    #[error("{0}")]
    Validation(String),

    #[error("not found")]
    NotFound,

    /// The backing store is unreachable or failing. Reported, never retried
    /// here, and never converted into an empty-but-successful result.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ValidationError(msg) => ServiceError::Validation(msg),
            RepositoryError::ConnectionError(msg) => ServiceError::StoreUnavailable(msg),
            RepositoryError::DatabaseError(msg)
            | RepositoryError::ConstraintViolation(msg)
            | RepositoryError::Unexpected(msg) => ServiceError::Internal(msg),
        }
    }
}
