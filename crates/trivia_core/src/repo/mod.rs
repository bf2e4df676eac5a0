//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for questions and
//!   categories.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `NewQuestion::validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`, `Constraint`) in
//!   addition to DB transport errors.
//! - Repositories refuse connections whose schema is not fully migrated.

pub mod category_repo;
pub mod question_repo;

use crate::db::migrations::{current_user_version, latest_version};
use category_repo::SqliteCategoryRepository;
use question_repo::{RepoError, RepoResult, SqliteQuestionRepository};
use rusqlite::Connection;

/// Runs every repository schema check once, for callers that later build
/// repositories with `from_verified`.
pub fn verify_schema(conn: &Connection) -> RepoResult<()> {
    SqliteQuestionRepository::try_new(conn)?;
    SqliteCategoryRepository::try_new(conn)?;
    Ok(())
}

/// Verifies that `conn` is migrated and exposes `table` with all `columns`.
pub(crate) fn ensure_schema(
    conn: &Connection,
    table: &'static str,
    columns: &[&'static str],
) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_user_version(conn)?;
    if actual_version < expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let present = stmt
        .query_map([table], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    if present.is_empty() {
        return Err(RepoError::MissingRequiredTable(table));
    }

    if let Some(&column) = columns
        .iter()
        .find(|column| !present.iter().any(|name| name == *column))
    {
        return Err(RepoError::MissingRequiredColumn { table, column });
    }

    Ok(())
}
