//! Shared server context handed to every request handler.
//!
//! # Invariants
//! - One SQLite connection per process, guarded by a mutex.
//! - The repository schema is verified once in `AppState::try_new`; per-request
//!   repositories are built with `from_verified`.
//! - SQL runs on tokio's blocking pool, so holding the mutex never stalls an
//!   async worker thread.

use crate::error::ApiError;
use log::error;
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};
use trivia_core::{
    verify_schema, QuestionService, QuizService, RepoResult, ServiceResult,
    SqliteCategoryRepository, SqliteQuestionRepository,
};

pub type SqliteQuestionService<'conn> =
    QuestionService<SqliteQuestionRepository<'conn>, SqliteCategoryRepository<'conn>>;
pub type SqliteQuizService<'conn> =
    QuizService<SqliteQuestionRepository<'conn>, SqliteCategoryRepository<'conn>>;

/// Application state constructed once at startup.
pub struct AppState {
    conn: Mutex<Connection>,
}

impl AppState {
    /// Wraps a migrated connection after checking the repository schema.
    pub fn try_new(conn: Connection) -> RepoResult<Self> {
        verify_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Runs `f` against a question service bound to the shared connection.
    pub async fn with_question_service<T, F>(self: &Arc<Self>, f: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&SqliteQuestionService<'_>) -> ServiceResult<T> + Send + 'static,
    {
        self.run_blocking(move |conn| {
            let service = QuestionService::new(
                SqliteQuestionRepository::from_verified(conn),
                SqliteCategoryRepository::from_verified(conn),
            );
            f(&service)
        })
        .await
    }

    /// Runs `f` against a quiz service bound to the shared connection.
    pub async fn with_quiz_service<T, F>(self: &Arc<Self>, f: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&SqliteQuizService<'_>) -> ServiceResult<T> + Send + 'static,
    {
        self.run_blocking(move |conn| {
            let service = QuizService::new(
                SqliteQuestionRepository::from_verified(conn),
                SqliteCategoryRepository::from_verified(conn),
            );
            f(&service)
        })
        .await
    }

    async fn run_blocking<T, F>(self: &Arc<Self>, f: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> ServiceResult<T> + Send + 'static,
    {
        let state = Arc::clone(self);
        let result = tokio::task::spawn_blocking(move || {
            let conn = state.lock()?;
            f(&conn).map_err(ApiError::from)
        })
        .await;

        result.map_err(|err| {
            error!("event=db_task module=api status=error error_code=join_failed error={err}");
            ApiError::Internal
        })?
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, ApiError> {
        self.conn.lock().map_err(|_| {
            error!("event=db_lock module=api status=error error_code=mutex_poisoned");
            ApiError::Internal
        })
    }
}
