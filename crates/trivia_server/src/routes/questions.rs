//! `/questions` handlers: listing, search, creation and deletion.

use super::categories::FilteredQuestionsResponse;
use super::{lenient_integer, PageParams};
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use trivia_core::{CategoryId, NewQuestion, PageRequest, Question, QuestionId};

#[derive(Debug, Serialize)]
pub(super) struct QuestionListResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: BTreeMap<CategoryId, String>,
    current_category: String,
}

#[derive(Debug, Serialize)]
pub(super) struct CreatedResponse {
    success: bool,
    created: QuestionId,
}

#[derive(Debug, Serialize)]
pub(super) struct DeletedResponse {
    success: bool,
    deleted: QuestionId,
}

/// `POST /questions` body; either a search or a full creation payload.
#[derive(Debug, Default, Deserialize)]
pub(super) struct QuestionBody {
    question: Option<String>,
    answer: Option<String>,
    category: Option<Value>,
    difficulty: Option<Value>,
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

impl QuestionBody {
    fn into_new_question(self) -> Option<NewQuestion> {
        Some(NewQuestion::new(
            self.question?,
            self.answer?,
            lenient_integer(self.category.as_ref())?,
            lenient_integer(self.difficulty.as_ref())?,
        ))
    }
}

pub(super) async fn list_questions(
    State(state): State<Arc<AppState>>,
    params: Option<Query<PageParams>>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let page = PageParams::page_request(params.as_deref());
    let result = state
        .with_question_service(move |service| service.list_page(page))
        .await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: result.questions,
        total_questions: result.total_questions,
        categories: result.categories,
        current_category: result.current_category,
    }))
}

pub(super) async fn create_or_search(
    State(state): State<Arc<AppState>>,
    params: Option<Query<PageParams>>,
    body: Result<Json<QuestionBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(mut body) = body.map_err(|rejection| {
        warn!("event=request_rejected module=api route=questions reason={rejection}");
        ApiError::Unprocessable
    })?;

    match body.search_term.take().filter(|term| !term.is_empty()) {
        Some(term) => {
            let page = PageParams::page_request(params.as_deref());
            search(&state, term, page)
                .await
                .map(IntoResponse::into_response)
        }
        None => create(&state, body).await.map(IntoResponse::into_response),
    }
}

async fn search(
    state: &Arc<AppState>,
    term: String,
    page: PageRequest,
) -> Result<Json<FilteredQuestionsResponse>, ApiError> {
    let result = state
        .with_question_service(move |service| service.search_page(&term, page))
        .await?;
    Ok(Json(FilteredQuestionsResponse {
        success: true,
        questions: result.questions,
        total_questions: result.total_questions,
        current_category: result.current_category,
    }))
}

async fn create(
    state: &Arc<AppState>,
    body: QuestionBody,
) -> Result<Json<CreatedResponse>, ApiError> {
    let new_question = body.into_new_question().ok_or_else(|| {
        warn!("event=request_rejected module=api route=questions reason=missing_fields");
        ApiError::Unprocessable
    })?;

    let created = state
        .with_question_service(move |service| service.create(&new_question))
        .await?;
    Ok(Json(CreatedResponse {
        success: true,
        created,
    }))
}

pub(super) async fn delete_question(
    State(state): State<Arc<AppState>>,
    question_id: Result<Path<QuestionId>, PathRejection>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let Path(question_id) = question_id.map_err(|_| ApiError::NotFound)?;
    let deleted = state
        .with_question_service(move |service| service.delete(question_id))
        .await?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted,
    }))
}
