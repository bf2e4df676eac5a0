//! Quiz drawing use-case.
//!
//! # Responsibility
//! - Pick the next unseen question of a quiz session at random.
//! - Signal exhaustion explicitly once every question has been seen.
//!
//! # Invariants
//! - A drawn question is never in the caller's exclusion set.
//! - A category-scoped draw only returns questions of that category.
//! - Each draw is independent and uniform over the remaining pool.

use crate::model::category::CategoryId;
use crate::model::question::{Question, QuestionId};
use crate::repo::category_repo::CategoryRepository;
use crate::repo::question_repo::{QuestionListQuery, QuestionRepository};
use crate::service::error::{ServiceError, ServiceResult};
use log::debug;
use rand::Rng;
use std::collections::HashSet;

/// Category id the quiz front end sends for "All".
pub const ALL_CATEGORIES_ID: CategoryId = 0;

/// Which questions a quiz session draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(CategoryId),
}

impl QuizScope {
    /// Maps a front-end category id onto a scope; `0` means all categories.
    pub fn from_category_id(id: CategoryId) -> Self {
        if id == ALL_CATEGORIES_ID {
            Self::All
        } else {
            Self::Category(id)
        }
    }
}

/// Result of one draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOutcome {
    Question(Question),
    /// Every question in scope has already been seen.
    Exhausted,
}

/// Quiz drawer over question and category repositories.
pub struct QuizService<Q: QuestionRepository, C: CategoryRepository> {
    questions: Q,
    categories: C,
}

impl<Q: QuestionRepository, C: CategoryRepository> QuizService<Q, C> {
    pub fn new(questions: Q, categories: C) -> Self {
        Self {
            questions,
            categories,
        }
    }

    /// Draws with the thread-local RNG.
    pub fn draw(
        &self,
        scope: QuizScope,
        previous: &HashSet<QuestionId>,
    ) -> ServiceResult<DrawOutcome> {
        self.draw_with_rng(scope, previous, &mut rand::thread_rng())
    }

    /// Draws one question in `scope` that is not in `previous`.
    ///
    /// # Errors
    /// - `NotFound` when a category scope names an unknown category.
    /// - `Internal` on persistence failure.
    pub fn draw_with_rng<R: Rng + ?Sized>(
        &self,
        scope: QuizScope,
        previous: &HashSet<QuestionId>,
        rng: &mut R,
    ) -> ServiceResult<DrawOutcome> {
        let query = match scope {
            QuizScope::All => QuestionListQuery::all(),
            QuizScope::Category(id) => {
                if self.categories.get_category(id)?.is_none() {
                    return Err(ServiceError::not_found(format!("category {id}")));
                }
                QuestionListQuery::in_category(id)
            }
        };

        let mut pool = self
            .questions
            .list_questions(&query)?
            .into_iter()
            .filter(|question| !previous.contains(&question.id))
            .collect::<Vec<_>>();

        debug!(
            "event=quiz_draw module=service status=ok scope={scope:?} excluded={} pool={}",
            previous.len(),
            pool.len()
        );

        if pool.is_empty() {
            return Ok(DrawOutcome::Exhausted);
        }

        let index = rng.gen_range(0..pool.len());
        Ok(DrawOutcome::Question(pool.swap_remove(index)))
    }
}
