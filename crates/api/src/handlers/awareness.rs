//! Handlers for the static awareness content and the phishing quiz.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use ccrp_core::awareness;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /awareness/quiz`.
#[derive(Debug, Deserialize)]
pub struct QuizAnswerRequest {
    pub answer: String,
}

/// GET /api/v1/awareness
///
/// The full awareness page payload: scam types, action steps, resources.
pub async fn get_content(State(_state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: awareness::content(),
    }))
}

/// POST /api/v1/awareness/quiz
///
/// Check the single-question quiz and explain the verdict either way.
pub async fn check_quiz(
    State(_state): State<AppState>,
    Json(body): Json<QuizAnswerRequest>,
) -> AppResult<impl IntoResponse> {
    let verdict = awareness::check_quiz_answer(&body.answer);
    tracing::info!(correct = verdict.correct, "Quiz answer checked");
    Ok(Json(DataResponse { data: verdict }))
}
