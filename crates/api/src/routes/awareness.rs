//! Route definitions for the awareness page and quiz.
//!
//! Mounted at `/awareness` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::awareness;
use crate::state::AppState;

/// Awareness routes.
///
/// ```text
/// GET    /        -> get_content (scam types, action steps, resources)
/// POST   /quiz    -> check_quiz
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(awareness::get_content))
        .route("/quiz", post(awareness::check_quiz))
}
