//! Domain error type for the reservation workflows
//!
//! Three caller-visible kinds, never conflated: a malformed identifier is a
//! `Validation` error, a missing record or role mismatch is `NotFound`, and a
//! violated business rule is `Conflict`. Persistence failures pass through as
//! the opaque `Database` variant.

use crate::db::repository::RepoError;
use crate::utils::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ReservationError {
    /// Malformed or missing caller-supplied input
    #[error("{0}")]
    Validation(String),

    /// No matching record, or a record of the wrong role
    #[error("{0}")]
    NotFound(String),

    /// A business rule was violated (overlap, disallowed transition)
    #[error("{0}")]
    Conflict(String),

    /// Opaque persistence-layer failure
    #[error("{0}")]
    Database(String),
}

/// Result type for reservation workflows
pub type ReservationResult<T> = Result<T, ReservationError>;

impl From<RepoError> for ReservationError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => ReservationError::NotFound(msg),
            RepoError::Validation(msg) => ReservationError::Validation(msg),
            RepoError::Database(msg) => ReservationError::Database(msg),
        }
    }
}

impl From<sqlx::Error> for ReservationError {
    fn from(err: sqlx::Error) -> Self {
        ReservationError::Database(err.to_string())
    }
}

impl From<ReservationError> for AppError {
    fn from(err: ReservationError) -> Self {
        match err {
            ReservationError::Validation(msg) => AppError::Validation(msg),
            ReservationError::NotFound(msg) => AppError::NotFound(msg),
            ReservationError::Conflict(msg) => AppError::Conflict(msg),
            ReservationError::Database(msg) => AppError::Database(msg),
        }
    }
}
