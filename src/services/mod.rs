use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod history;
pub mod images;
pub mod import;
pub mod undo;

/// Errors surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The caller lacks the required role.
    #[error("unauthorized")]
    Unauthorized,
    /// The addressed record does not exist.
    #[error("not found")]
    NotFound,
    /// The submitted payload was rejected before any persistence.
    #[error("invalid input: {0}")]
    Form(String),
    /// A repository call failed.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound,
            other => Self::Repository(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
