pub mod auth;
pub mod awareness;
pub mod health;
pub mod reports;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /reports                              create wizard session (POST)
/// /reports/{id}                         session view, discard (GET, DELETE)
/// /reports/{id}/start                   intro -> step 1 (POST)
/// /reports/{id}/draft                   accumulate draft fields (PUT)
/// /reports/{id}/evidence                append evidence files (POST)
/// /reports/{id}/advance                 next step, gated (POST)
/// /reports/{id}/go-back                 previous step (POST)
/// /reports/{id}/submit                  review -> submitted (POST)
///
/// /auth/sessions                        create login flow (POST)
/// /auth/sessions/{id}                   flow view, discard (GET, DELETE)
/// /auth/sessions/{id}/refresh-captcha   regenerate captcha (POST)
/// /auth/sessions/{id}/request-otp       OTP-requested stage (POST)
/// /auth/sessions/{id}/login             submission gates + sign-in (POST)
/// /auth/sessions/{id}/forgot-login-id   recovery gates + login id (POST)
/// /auth/sessions/{id}/reset             back to credential entry (POST)
///
/// /awareness                            static awareness content (GET)
/// /awareness/quiz                       check quiz answer (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Citizen report wizard sessions.
        .nest("/reports", reports::router())
        // Login and forgot-login-id flows.
        .nest("/auth/sessions", auth::router())
        // Static awareness content and quiz.
        .nest("/awareness", awareness::router())
}
