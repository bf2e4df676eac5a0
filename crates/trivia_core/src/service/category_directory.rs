//! Per-request view of category labels.
//!
//! # Invariants
//! - A directory is loaded once and never mutated afterwards.
//! - Loading fails with `NotFound` when no categories exist.

use crate::model::category::{Category, CategoryId};
use crate::repo::category_repo::CategoryRepository;
use crate::service::error::{ServiceError, ServiceResult};
use std::collections::BTreeMap;

/// Immutable `id -> label` mapping, ordered by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDirectory {
    labels: BTreeMap<CategoryId, String>,
}

impl CategoryDirectory {
    /// Reads every category from `repo`.
    ///
    /// # Errors
    /// - `NotFound` when the category table is empty.
    /// - `Internal` on persistence failure.
    pub fn load(repo: &impl CategoryRepository) -> ServiceResult<Self> {
        let labels = repo
            .list_categories()?
            .into_iter()
            .map(|category| (category.id, category.label))
            .collect::<BTreeMap<_, _>>();

        if labels.is_empty() {
            return Err(ServiceError::not_found("no categories"));
        }

        Ok(Self { labels })
    }

    pub fn labels(&self) -> &BTreeMap<CategoryId, String> {
        &self.labels
    }

    pub fn into_labels(self) -> BTreeMap<CategoryId, String> {
        self.labels
    }

    pub fn contains(&self, id: CategoryId) -> bool {
        self.labels.contains_key(&id)
    }

    pub fn label(&self, id: CategoryId) -> ServiceResult<&str> {
        self.labels
            .get(&id)
            .map(String::as_str)
            .ok_or_else(|| ServiceError::not_found(format!("category {id}")))
    }

    pub fn get(&self, id: CategoryId) -> ServiceResult<Category> {
        self.label(id).map(|label| Category::new(id, label))
    }
}
