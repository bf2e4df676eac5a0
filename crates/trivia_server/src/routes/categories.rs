//! `/categories` handlers.

use super::PageParams;
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use trivia_core::{CategoryId, Question};

#[derive(Debug, Serialize)]
pub(super) struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<CategoryId, String>,
}

/// Questions of one filter plus the label reported with them.
#[derive(Debug, Serialize)]
pub(super) struct FilteredQuestionsResponse {
    pub(super) success: bool,
    pub(super) questions: Vec<Question>,
    pub(super) total_questions: usize,
    pub(super) current_category: String,
}

pub(super) async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state
        .with_question_service(|service| service.list_categories())
        .await?;
    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

pub(super) async fn category_questions(
    State(state): State<Arc<AppState>>,
    category_id: Result<Path<CategoryId>, PathRejection>,
    params: Option<Query<PageParams>>,
) -> Result<Json<FilteredQuestionsResponse>, ApiError> {
    let Path(category_id) = category_id.map_err(|_| ApiError::NotFound)?;
    let page = PageParams::page_request(params.as_deref());

    let result = state
        .with_question_service(move |service| service.category_page(category_id, page))
        .await?;
    Ok(Json(FilteredQuestionsResponse {
        success: true,
        questions: result.questions,
        total_questions: result.total_questions,
        current_category: result.current_category,
    }))
}
