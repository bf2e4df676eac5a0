//! `/quizzes` handler: next question of a quiz session.

use super::lenient_integer;
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use trivia_core::{DrawOutcome, Question, QuestionId, QuizScope};

#[derive(Debug, Deserialize)]
pub(super) struct QuizCategory {
    id: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub(super) struct QuizBody {
    quiz_category: Option<QuizCategory>,
    previous_questions: Option<Vec<QuestionId>>,
}

/// `question` is `null` and `exhausted` is `true` once the session has seen
/// every question in scope.
#[derive(Debug, Serialize)]
pub(super) struct QuizResponse {
    success: bool,
    question: Option<Question>,
    exhausted: bool,
}

impl QuizBody {
    fn into_request(self) -> Option<(QuizScope, HashSet<QuestionId>)> {
        let category_id = lenient_integer(self.quiz_category?.id.as_ref())?;
        let previous = self.previous_questions?.into_iter().collect();
        Some((QuizScope::from_category_id(category_id), previous))
    }
}

pub(super) async fn next_question(
    State(state): State<Arc<AppState>>,
    body: Result<Json<QuizBody>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let (scope, previous) = body
        .ok()
        .and_then(|Json(body)| body.into_request())
        .ok_or_else(|| {
            warn!("event=request_rejected module=api route=quizzes reason=malformed_body");
            ApiError::Unprocessable
        })?;

    let outcome = state
        .with_quiz_service(move |service| service.draw(scope, &previous))
        .await?;
    let response = match outcome {
        DrawOutcome::Question(question) => QuizResponse {
            success: true,
            question: Some(question),
            exhausted: false,
        },
        DrawOutcome::Exhausted => QuizResponse {
            success: true,
            question: None,
            exhausted: true,
        },
    };
    Ok(Json(response))
}
