//! Core domain logic for the trivia quiz server.
//! This crate is the single source of truth for question selection,
//! pagination and quiz drawing rules.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::{Category, CategoryId};
pub use model::question::{NewQuestion, Question, QuestionId, QuestionValidationError};
pub use repo::category_repo::{CategoryRepository, SqliteCategoryRepository};
pub use repo::question_repo::{
    QuestionListQuery, QuestionRepository, RepoError, RepoResult, SqliteQuestionRepository,
};
pub use repo::verify_schema;
pub use search::resolver::{resolve, QuestionFilter, Resolution, DEFAULT_CURRENT_CATEGORY_ID};
pub use service::category_directory::CategoryDirectory;
pub use service::error::{ServiceError, ServiceResult};
pub use service::pagination::{paginate, PageRequest, QUESTIONS_PER_PAGE};
pub use service::question_service::{QuestionPage, QuestionService};
pub use service::quiz_service::{DrawOutcome, QuizScope, QuizService, ALL_CATEGORIES_ID};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
