//! Search/filter resolution over question storage.
//!
//! # Responsibility
//! - Resolve exactly one of list-all, search-by-term or filter-by-category
//!   into an `id ASC` ordered candidate set.
//! - Report the category map and a current-category label with every result.
//!
//! # Invariants
//! - Search is a case-insensitive substring match on question text; no
//!   tokenization, no ranking.
//! - Category results only contain questions of the requested category.
//! - List-all and search report the label of `DEFAULT_CURRENT_CATEGORY_ID`,
//!   not a "no filter" sentinel. Front ends depend on this.

use crate::model::category::CategoryId;
use crate::model::question::Question;
use crate::repo::category_repo::CategoryRepository;
use crate::repo::question_repo::{QuestionListQuery, QuestionRepository};
use crate::service::category_directory::CategoryDirectory;
use crate::service::error::{ServiceError, ServiceResult};
use log::debug;
use std::collections::BTreeMap;

/// Category whose label is reported for unfiltered listings and searches.
pub const DEFAULT_CURRENT_CATEGORY_ID: CategoryId = 4;

/// Mutually exclusive request shapes understood by [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionFilter {
    All,
    SearchTerm(String),
    Category(CategoryId),
}

/// Candidate set plus the labels reported with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Ordered by `id ASC`, not yet paginated.
    pub questions: Vec<Question>,
    pub current_category: String,
    pub categories: BTreeMap<CategoryId, String>,
}

impl Resolution {
    pub fn total(&self) -> usize {
        self.questions.len()
    }
}

/// Builds the candidate set for `filter`.
///
/// # Errors
/// - `NotFound` when no categories exist, when a filtered category is
///   unknown, or when the default current category is missing.
/// - `Unprocessable` for an empty search term.
/// - `Internal` on persistence failure.
pub fn resolve<Q, C>(
    questions: &Q,
    categories: &C,
    filter: &QuestionFilter,
) -> ServiceResult<Resolution>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    let directory = CategoryDirectory::load(categories)?;

    let (query, label_id) = match filter {
        QuestionFilter::All => (QuestionListQuery::all(), DEFAULT_CURRENT_CATEGORY_ID),
        QuestionFilter::SearchTerm(term) => {
            if term.is_empty() {
                return Err(ServiceError::unprocessable("empty search term"));
            }
            (
                QuestionListQuery::matching(term.as_str()),
                DEFAULT_CURRENT_CATEGORY_ID,
            )
        }
        QuestionFilter::Category(id) => (QuestionListQuery::in_category(*id), *id),
    };

    let current_category = directory.label(label_id)?.to_string();
    let candidates = questions.list_questions(&query)?;

    debug!(
        "event=questions_resolve module=search status=ok filter={} candidates={}",
        filter_kind(filter),
        candidates.len()
    );

    Ok(Resolution {
        questions: candidates,
        current_category,
        categories: directory.into_labels(),
    })
}

fn filter_kind(filter: &QuestionFilter) -> &'static str {
    match filter {
        QuestionFilter::All => "all",
        QuestionFilter::SearchTerm(_) => "search",
        QuestionFilter::Category(_) => "category",
    }
}
