//! HTTP routing for the trivia REST API.
//!
//! # Responsibility
//! - Map request shapes onto core use-cases.
//! - Answer unknown paths and unsupported methods with the error envelope.
//! - Apply the CORS policy expected by the browser front end.

mod categories;
mod questions;
mod quizzes;

use crate::error::ApiError;
use crate::state::AppState;
use axum::http::{header, Method};
use axum::routing::{delete, get, post};
use axum::Router;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use trivia_core::PageRequest;

/// Builds the application router over shared state.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/categories",
            get(categories::list_categories).fallback(method_not_allowed),
        )
        .route(
            "/categories/:category_id/questions",
            get(categories::category_questions).fallback(method_not_allowed),
        )
        .route(
            "/questions",
            get(questions::list_questions)
                .post(questions::create_or_search)
                .fallback(method_not_allowed),
        )
        .route(
            "/questions/:question_id",
            delete(questions::delete_question).fallback(method_not_allowed),
        )
        .route(
            "/quizzes",
            post(quizzes::next_question).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(cors_layer())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Raw `?page=` query; parsed leniently by `PageRequest::from_query`.
#[derive(Debug, Default, Deserialize)]
struct PageParams {
    page: Option<String>,
}

impl PageParams {
    fn page_request(params: Option<&Self>) -> PageRequest {
        PageRequest::from_query(params.and_then(|params| params.page.as_deref()))
    }
}

/// Reads an integer that the front end may send as a number or a numeric
/// string.
fn lenient_integer(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
