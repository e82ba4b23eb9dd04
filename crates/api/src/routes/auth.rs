//! Route definitions for login / forgot-login-id sessions.
//!
//! Mounted at `/auth/sessions` by `api_routes()`.

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Auth flow routes.
///
/// ```text
/// POST   /                        -> create_session (fresh captcha)
/// GET    /{id}                    -> get_session
/// DELETE /{id}                    -> delete_session
/// POST   /{id}/refresh-captcha    -> refresh_captcha
/// POST   /{id}/request-otp        -> request_otp
/// POST   /{id}/login              -> login (gates + identity sign-in)
/// POST   /{id}/forgot-login-id    -> forgot_login_id
/// POST   /{id}/reset              -> reset_session
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(auth::create_session))
        .route("/{id}", delete(auth::delete_session).get(auth::get_session))
        .route("/{id}/refresh-captcha", post(auth::refresh_captcha))
        .route("/{id}/request-otp", post(auth::request_otp))
        .route("/{id}/login", post(auth::login))
        .route("/{id}/forgot-login-id", post(auth::forgot_login_id))
        .route("/{id}/reset", post(auth::reset_session))
}
