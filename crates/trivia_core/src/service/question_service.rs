//! Question listing, search and mutation use-cases.
//!
//! # Responsibility
//! - Compose filter resolution with fixed-size pagination.
//! - Map repository failures onto the service error taxonomy.
//!
//! # Invariants
//! - `total_questions` always counts the resolved candidate set, never the
//!   page.
//! - Insert and delete are single repository calls; nothing is partially
//!   applied.

use crate::model::category::CategoryId;
use crate::model::question::{NewQuestion, Question, QuestionId};
use crate::repo::category_repo::CategoryRepository;
use crate::repo::question_repo::{QuestionRepository, RepoError};
use crate::search::resolver::{resolve, QuestionFilter};
use crate::service::category_directory::CategoryDirectory;
use crate::service::error::{ServiceError, ServiceResult};
use crate::service::pagination::{paginate, PageRequest};
use log::{info, warn};
use std::collections::BTreeMap;

/// One page of a resolved candidate set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
    pub categories: BTreeMap<CategoryId, String>,
}

/// Question use-case service over question and category repositories.
pub struct QuestionService<Q: QuestionRepository, C: CategoryRepository> {
    questions: Q,
    categories: C,
}

impl<Q: QuestionRepository, C: CategoryRepository> QuestionService<Q, C> {
    pub fn new(questions: Q, categories: C) -> Self {
        Self {
            questions,
            categories,
        }
    }

    /// Returns the full `id -> label` category mapping.
    ///
    /// Fails with `NotFound` when no categories exist.
    pub fn list_categories(&self) -> ServiceResult<BTreeMap<CategoryId, String>> {
        CategoryDirectory::load(&self.categories).map(CategoryDirectory::into_labels)
    }

    /// Pages through all questions ordered by id.
    ///
    /// An empty page is `NotFound`, matching the listing contract.
    pub fn list_page(&self, page: PageRequest) -> ServiceResult<QuestionPage> {
        let result = self.page_for(&QuestionFilter::All, page)?;
        if result.questions.is_empty() {
            return Err(ServiceError::not_found(format!(
                "question page {}",
                page.page_number()
            )));
        }
        Ok(result)
    }

    /// Pages through questions whose text contains `term`, ignoring case.
    ///
    /// No hits is a successful, empty page.
    pub fn search_page(&self, term: &str, page: PageRequest) -> ServiceResult<QuestionPage> {
        self.page_for(&QuestionFilter::SearchTerm(term.to_string()), page)
    }

    /// Pages through the questions of one category.
    pub fn category_page(
        &self,
        category_id: CategoryId,
        page: PageRequest,
    ) -> ServiceResult<QuestionPage> {
        self.page_for(&QuestionFilter::Category(category_id), page)
    }

    pub fn get_question(&self, id: QuestionId) -> ServiceResult<Question> {
        self.questions
            .get_question(id)?
            .ok_or_else(|| ServiceError::not_found(format!("question {id}")))
    }

    /// Inserts a new question and returns its id.
    ///
    /// Any validation or storage failure, including an unknown category, is
    /// reported as `Unprocessable`.
    pub fn create(&self, question: &NewQuestion) -> ServiceResult<QuestionId> {
        match self.questions.create_question(question) {
            Ok(id) => {
                info!(
                    "event=question_create module=service status=ok id={id} category={}",
                    question.category_id
                );
                Ok(id)
            }
            Err(err) => {
                warn!(
                    "event=question_create module=service status=error category={} error={err}",
                    question.category_id
                );
                Err(ServiceError::unprocessable(err.to_string()))
            }
        }
    }

    /// Deletes one question by id and echoes the id back.
    ///
    /// Unknown ids are `NotFound`; other storage failures are `Unprocessable`.
    pub fn delete(&self, id: QuestionId) -> ServiceResult<QuestionId> {
        match self.questions.delete_question(id) {
            Ok(()) => {
                info!("event=question_delete module=service status=ok id={id}");
                Ok(id)
            }
            Err(RepoError::NotFound(_)) => {
                Err(ServiceError::not_found(format!("question {id}")))
            }
            Err(err) => {
                warn!("event=question_delete module=service status=error id={id} error={err}");
                Err(ServiceError::unprocessable(err.to_string()))
            }
        }
    }

    fn page_for(&self, filter: &QuestionFilter, page: PageRequest) -> ServiceResult<QuestionPage> {
        let resolution = resolve(&self.questions, &self.categories, filter)?;
        let total_questions = resolution.total();

        Ok(QuestionPage {
            questions: paginate(resolution.questions, page),
            total_questions,
            current_category: resolution.current_category,
            categories: resolution.categories,
        })
    }
}
