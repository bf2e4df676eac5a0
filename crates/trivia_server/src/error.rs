//! HTTP error envelope and startup failures.
//!
//! # Invariants
//! - Every failed request answers with
//!   `{success: false, error: <status>, message: <fixed string>}`.
//! - Service error details are logged, never returned to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, warn};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use trivia_core::db::DbError;
use trivia_core::{LoggingError, RepoError, ServiceError};

/// Request-level failure mapped onto a fixed HTTP status and message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    BadRequest,
    NotFound,
    MethodNotAllowed,
    Unprocessable,
    Internal,
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    success: bool,
    error: u16,
    message: &'static str,
}

impl ApiError {
    pub fn status(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::BadRequest => "bad request",
            Self::NotFound => "resource not found",
            Self::MethodNotAllowed => "method not allowed",
            Self::Unprocessable => "unprocessable",
            Self::Internal => "internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let envelope = ErrorEnvelope {
            success: false,
            error: status.as_u16(),
            message: self.message(),
        };
        (status, Json(envelope)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(value: ServiceError) -> Self {
        match value {
            ServiceError::NotFound(detail) => {
                warn!("event=request_failed module=api status=404 detail={detail}");
                Self::NotFound
            }
            ServiceError::Unprocessable(detail) => {
                warn!("event=request_failed module=api status=422 detail={detail}");
                Self::Unprocessable
            }
            ServiceError::Internal(err) => {
                error!("event=request_failed module=api status=500 error={err}");
                Self::Internal
            }
        }
    }
}

/// Failure while bringing the server up.
#[derive(Debug)]
pub enum ServerError {
    Logging(LoggingError),
    Db(DbError),
    Schema(RepoError),
    Io(std::io::Error),
    NonUtf8Path(PathBuf),
}

impl Display for ServerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(err) => write!(f, "logging setup failed: {err}"),
            Self::Db(err) => write!(f, "database setup failed: {err}"),
            Self::Schema(err) => write!(f, "database schema check failed: {err}"),
            Self::Io(err) => write!(f, "server I/O failed: {err}"),
            Self::NonUtf8Path(path) => write!(f, "path is not valid UTF-8: {}", path.display()),
        }
    }
}

impl Error for ServerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Schema(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::NonUtf8Path(_) => None,
        }
    }
}

impl From<LoggingError> for ServerError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<DbError> for ServerError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for ServerError {
    fn from(value: RepoError) -> Self {
        Self::Schema(value)
    }
}

impl From<std::io::Error> for ServerError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::http::StatusCode;
    use trivia_core::ServiceError;

    #[test]
    fn service_errors_map_to_fixed_statuses() {
        assert_eq!(
            ApiError::from(ServiceError::not_found("question 9")),
            ApiError::NotFound
        );
        assert_eq!(
            ApiError::from(ServiceError::unprocessable("bad insert")),
            ApiError::Unprocessable
        );
        assert_eq!(ApiError::Unprocessable.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(ApiError::MethodNotAllowed.message(), "method not allowed");
    }
}
