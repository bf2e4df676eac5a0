//! Question repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert/get/list/delete APIs over canonical `questions` storage.
//! - Compose category and text filters into one ordered read.
//!
//! # Invariants
//! - Write paths must call `NewQuestion::validate()` before SQL mutations.
//! - Every list read is ordered by `id ASC`; callers rely on it for paging.
//! - Text filters are Unicode case-insensitive substring matches; the term is
//!   matched literally, never as a SQL pattern.

use crate::db::DbError;
use crate::model::category::CategoryId;
use crate::model::question::{NewQuestion, Question, QuestionId, QuestionValidationError};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, ErrorCode, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const QUESTION_SELECT_SQL: &str = "SELECT
    id,
    question,
    answer,
    category,
    difficulty
FROM questions";

const REQUIRED_COLUMNS: &[&str] = &["id", "question", "answer", "category", "difficulty"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for question and category persistence.
#[derive(Debug)]
pub enum RepoError {
    Validation(QuestionValidationError),
    Db(DbError),
    NotFound(QuestionId),
    /// Storage rejected a write (foreign key, check or not-null constraint).
    Constraint(String),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "question not found: {id}"),
            Self::Constraint(message) => write!(f, "constraint violation: {message}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is behind required {expected_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<QuestionValidationError> for RepoError {
    fn from(value: QuestionValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::SqliteFailure(failure, message)
                if failure.code == ErrorCode::ConstraintViolation =>
            {
                Self::Constraint(message.unwrap_or_else(|| failure.to_string()))
            }
            other => Self::Db(DbError::Sqlite(other)),
        }
    }
}

/// Filter options for listing questions. Both filters compose with `AND`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionListQuery {
    pub category_id: Option<CategoryId>,
    /// Case-insensitive substring matched against question text.
    pub search_term: Option<String>,
}

impl QuestionListQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn in_category(category_id: CategoryId) -> Self {
        Self {
            category_id: Some(category_id),
            ..Self::default()
        }
    }

    pub fn matching(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            ..Self::default()
        }
    }
}

/// Repository interface for question persistence.
pub trait QuestionRepository {
    fn create_question(&self, question: &NewQuestion) -> RepoResult<QuestionId>;
    fn get_question(&self, id: QuestionId) -> RepoResult<Option<Question>>;
    fn list_questions(&self, query: &QuestionListQuery) -> RepoResult<Vec<Question>>;
    fn delete_question(&self, id: QuestionId) -> RepoResult<()>;
}

/// SQLite-backed question repository.
pub struct SqliteQuestionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteQuestionRepository<'conn> {
    /// Wraps a connection after checking that the `questions` schema exists.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` on schema drift.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        super::ensure_schema(conn, "questions", REQUIRED_COLUMNS)?;
        Ok(Self { conn })
    }

    /// Wraps a connection that already passed [`super::verify_schema`].
    pub fn from_verified(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl QuestionRepository for SqliteQuestionRepository<'_> {
    fn create_question(&self, question: &NewQuestion) -> RepoResult<QuestionId> {
        question.validate()?;

        self.conn.execute(
            "INSERT INTO questions (
                question,
                answer,
                category,
                difficulty
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                question.text.as_str(),
                question.answer.as_str(),
                question.category_id,
                question.difficulty,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_question(&self, id: QuestionId) -> RepoResult<Option<Question>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{QUESTION_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_question_row(row)?));
        }

        Ok(None)
    }

    fn list_questions(&self, query: &QuestionListQuery) -> RepoResult<Vec<Question>> {
        let mut sql = format!("{QUESTION_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(category_id) = query.category_id {
            sql.push_str(" AND category = ?");
            bind_values.push(Value::Integer(category_id));
        }

        sql.push_str(" ORDER BY id ASC");

        // Unicode case folding; SQLite `LIKE` folds ASCII only.
        let needle = query.search_term.as_deref().map(str::to_lowercase);

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut questions = Vec::new();

        while let Some(row) = rows.next()? {
            let question = parse_question_row(row)?;
            if needle
                .as_deref()
                .map_or(true, |needle| contains_folded(&question.text, needle))
            {
                questions.push(question);
            }
        }

        Ok(questions)
    }

    fn delete_question(&self, id: QuestionId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM questions WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_question_row(row: &Row<'_>) -> RepoResult<Question> {
    let question = Question {
        id: row.get("id")?,
        text: row.get("question")?,
        answer: row.get("answer")?,
        category_id: row.get("category")?,
        difficulty: row.get("difficulty")?,
    };

    if question.text.trim().is_empty() {
        return Err(RepoError::InvalidData(format!(
            "empty text in questions.question for id {}",
            question.id
        )));
    }

    Ok(question)
}

/// Returns whether `text` contains `needle`, where `needle` is already
/// lowercased.
fn contains_folded(text: &str, needle: &str) -> bool {
    text.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::contains_folded;

    #[test]
    fn contains_folded_ignores_unicode_case() {
        assert!(contains_folded("Which TITLE won?", "title"));
        assert!(contains_folded("Who founded the École Normale?", "école"));
        assert!(contains_folded("Straße names", "straße"));
        assert!(contains_folded("100% sure", "100%"));
        assert!(!contains_folded("100 percent", "100%"));
        assert!(!contains_folded("a_b", "a%b"));
    }
}
