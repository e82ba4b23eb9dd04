//! Route definitions for report wizard sessions.
//!
//! Mounted at `/reports` by `api_routes()`.

use axum::routing::{delete, post, put};
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Report wizard routes.
///
/// ```text
/// POST   /               -> create_report (new session at the intro)
/// GET    /{id}           -> get_report
/// DELETE /{id}           -> delete_report (discard)
/// POST   /{id}/start     -> start_report (intro -> step 1)
/// PUT    /{id}/draft     -> update_draft (accumulate fields)
/// POST   /{id}/evidence  -> add_evidence (append files)
/// POST   /{id}/advance   -> advance (validates the current step)
/// POST   /{id}/go-back   -> go_back (no-op at step 1)
/// POST   /{id}/submit    -> submit (review step -> submitted)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(reports::create_report))
        .route(
            "/{id}",
            delete(reports::delete_report).get(reports::get_report),
        )
        .route("/{id}/start", post(reports::start_report))
        .route("/{id}/draft", put(reports::update_draft))
        .route("/{id}/evidence", post(reports::add_evidence))
        .route("/{id}/advance", post(reports::advance))
        .route("/{id}/go-back", post(reports::go_back))
        .route("/{id}/submit", post(reports::submit))
}
