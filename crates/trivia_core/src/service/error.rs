//! Typed failures shared by trivia use-case services.

use crate::repo::question_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Use-case level failure taxonomy.
///
/// Detail strings are diagnostic only; boundary layers must not forward them
/// to callers.
#[derive(Debug)]
pub enum ServiceError {
    /// Requested entity, or a required non-empty result set, is absent.
    NotFound(String),
    /// Request was well-formed but cannot be applied (failed mutation,
    /// invalid payload).
    Unprocessable(String),
    /// Unexpected persistence failure on a read path.
    Internal(RepoError),
}

impl ServiceError {
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound(detail.into())
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::Unprocessable(detail.into())
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(detail) => write!(f, "not found: {detail}"),
            Self::Unprocessable(detail) => write!(f, "unprocessable: {detail}"),
            Self::Internal(err) => write!(f, "internal: {err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Internal(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(format!("question {id}")),
            other => Self::Internal(other),
        }
    }
}
