//! Category repository contracts and SQLite implementation.
//!
//! Categories are read-only here; rows come from the seed migration.

use super::question_repo::{RepoError, RepoResult};
use crate::model::category::{Category, CategoryId};
use rusqlite::{Connection, Row};

const REQUIRED_COLUMNS: &[&str] = &["id", "type"];

/// Read-only repository interface for categories.
pub trait CategoryRepository {
    /// Returns every category ordered by `id ASC`.
    fn list_categories(&self) -> RepoResult<Vec<Category>>;
    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>>;
}

/// SQLite-backed category repository.
pub struct SqliteCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        super::ensure_schema(conn, "categories", REQUIRED_COLUMNS)?;
        Ok(Self { conn })
    }

    /// Wraps a connection that already passed [`super::verify_schema`].
    pub fn from_verified(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CategoryRepository for SqliteCategoryRepository<'_> {
    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, type FROM categories ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();

        while let Some(row) = rows.next()? {
            categories.push(parse_category_row(row)?);
        }

        Ok(categories)
    }

    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, type FROM categories WHERE id = ?1;")?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_category_row(row)?));
        }

        Ok(None)
    }
}

fn parse_category_row(row: &Row<'_>) -> RepoResult<Category> {
    let id: CategoryId = row.get("id")?;
    let label: String = row.get("type")?;
    if label.trim().is_empty() {
        return Err(RepoError::InvalidData(format!(
            "empty label in categories.type for id {id}"
        )));
    }
    Ok(Category { id, label })
}
