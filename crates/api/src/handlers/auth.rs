//! Handlers for the login / forgot-login-id flow resource.
//!
//! An auth session holds the flow stage and the current captcha challenge.
//! Submission gates run in the core; on success the synthesized credentials
//! go to the identity collaborator. A captcha challenge is good for one
//! submission attempt: the flow regenerates it whether or not the attempt
//! succeeds.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use ccrp_core::auth::{AuthCredentials, AuthFlow, AuthStage, OtpDispatch, RecoveryRequest};
use ccrp_core::identity::SignInOutcome;
use ccrp_core::notify::Notice;
use ccrp_core::types::SessionId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/sessions/{id}/request-otp`.
#[derive(Debug, Deserialize)]
pub struct RequestOtpRequest {
    pub mobile: String,
}

/// Client view of an auth session.
///
/// The captcha text is part of the view: this is an illustrative challenge
/// the client renders itself, not a security boundary.
#[derive(Debug, Serialize)]
pub struct AuthFlowView {
    pub id: SessionId,
    pub stage: AuthStage,
    pub captcha: String,
}

impl AuthFlowView {
    fn from_session(id: SessionId, flow: &AuthFlow) -> Self {
        Self {
            id,
            stage: flow.stage(),
            captcha: flow.captcha().text().to_string(),
        }
    }
}

/// Response body for `POST /auth/sessions/{id}/request-otp`.
#[derive(Debug, Serialize)]
pub struct OtpResponse {
    pub stage: AuthStage,
    #[serde(flatten)]
    pub dispatch: OtpDispatch,
}

/// Response body for a completed login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub identifier: String,
    /// True when no identity existed yet and one was provisioned in-line.
    pub provisioned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_target: Option<String>,
}

/// Response body for a completed forgot-login-id flow.
#[derive(Debug, Serialize)]
pub struct RecoveryResponse {
    pub login_id: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/sessions
///
/// Create a flow at credential entry with a fresh captcha.
pub async fn create_session(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let flow = AuthFlow::new();
    let view_source = flow.clone();
    let id = state.auth.insert(flow).await;

    tracing::info!(session_id = %id, "Auth session created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: AuthFlowView::from_session(id, &view_source),
        }),
    ))
}

/// GET /api/v1/auth/sessions/{id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> AppResult<impl IntoResponse> {
    let flow = state.auth.get(id).await?;
    Ok(Json(DataResponse {
        data: AuthFlowView::from_session(id, &flow),
    }))
}

/// POST /api/v1/auth/sessions/{id}/refresh-captcha
///
/// Regenerate the captcha; a response typed against the old one is void.
pub async fn refresh_captcha(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> AppResult<impl IntoResponse> {
    let flow = state
        .auth
        .update(id, |flow| {
            flow.refresh_captcha();
            Ok(flow.clone())
        })
        .await?;

    Ok(Json(DataResponse {
        data: AuthFlowView::from_session(id, &flow),
    }))
}

/// POST /api/v1/auth/sessions/{id}/request-otp
///
/// Move the flow to the OTP-requested stage. Dispatch itself is the
/// identity collaborator's concern; here only the target is confirmed.
pub async fn request_otp(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
    Json(body): Json<RequestOtpRequest>,
) -> AppResult<impl IntoResponse> {
    let (stage, dispatch) = state
        .auth
        .update(id, move |flow| {
            let dispatch = flow.request_otp(&body.mobile)?;
            Ok((flow.stage(), dispatch))
        })
        .await?;

    tracing::info!(session_id = %id, destination = %dispatch.destination, "OTP requested");
    state.notifier.notify(Notice::info(
        "OTP Sent",
        format!("OTP sent to {}", dispatch.destination),
    ));

    Ok(Json(DataResponse {
        data: OtpResponse { stage, dispatch },
    }))
}

/// POST /api/v1/auth/sessions/{id}/login
///
/// Run the submission gates and sign in against the identity collaborator.
/// When no identity exists yet, one is provisioned in-line and the login
/// still succeeds. Success clears the flow back to credential entry.
pub async fn login(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
    Json(body): Json<AuthCredentials>,
) -> AppResult<impl IntoResponse> {
    let verification = state
        .auth
        .update(id, move |flow| {
            let result = flow.verify_submission(&body);
            flow.refresh_captcha();
            Ok(result)
        })
        .await?;

    let synthesized = match verification {
        Ok(synthesized) => synthesized,
        Err(err) => {
            state
                .notifier
                .notify(Notice::error("Login Failed", err.to_string()));
            return Err(err.into());
        }
    };

    let outcome = state
        .identity
        .sign_in(&synthesized.identifier, &synthesized.secret)
        .await;

    let provisioned = match outcome {
        Ok(SignInOutcome::Success) => false,
        Ok(SignInOutcome::NotFound) => {
            tracing::info!(
                session_id = %id,
                identifier = %synthesized.identifier,
                "No identity on record, provisioning"
            );
            if let Err(err) = state
                .identity
                .provision(
                    &synthesized.identifier,
                    &synthesized.secret,
                    &state.config.provision_redirect_target,
                )
                .await
            {
                state
                    .notifier
                    .notify(Notice::error("Login Failed", err.to_string()));
                return Err(err.into());
            }
            true
        }
        Err(err) => {
            state
                .notifier
                .notify(Notice::error("Login Failed", err.to_string()));
            return Err(err.into());
        }
    };

    state.auth.update(id, |flow| Ok(flow.reset())).await?;

    tracing::info!(
        session_id = %id,
        identifier = %synthesized.identifier,
        provisioned,
        "Login succeeded"
    );
    state.notifier.notify(Notice::success(
        "Login Successful",
        "Welcome to the National Cyber Crime Reporting Portal",
    ));

    Ok(Json(DataResponse {
        data: LoginResponse {
            identifier: synthesized.identifier,
            provisioned,
            redirect_target: provisioned
                .then(|| state.config.provision_redirect_target.clone()),
        },
    }))
}

/// POST /api/v1/auth/sessions/{id}/forgot-login-id
///
/// Run the recovery gates and hand back the synthesized login id. Success
/// clears the flow back to credential entry, ready for a login attempt.
pub async fn forgot_login_id(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
    Json(body): Json<RecoveryRequest>,
) -> AppResult<impl IntoResponse> {
    let verification = state
        .auth
        .update(id, move |flow| {
            let result = flow.verify_recovery(&body);
            flow.refresh_captcha();
            Ok(result)
        })
        .await?;

    let login_id = match verification {
        Ok(login_id) => login_id,
        Err(err) => {
            state
                .notifier
                .notify(Notice::error("Recovery Failed", err.to_string()));
            return Err(err.into());
        }
    };

    state.auth.update(id, |flow| Ok(flow.reset())).await?;

    tracing::info!(session_id = %id, "Login id recovered");
    state.notifier.notify(Notice::success(
        "Login ID Retrieved",
        format!("Your Login ID is {login_id}"),
    ));

    Ok(Json(DataResponse {
        data: RecoveryResponse { login_id },
    }))
}

/// POST /api/v1/auth/sessions/{id}/reset
///
/// Clear the flow back to credential entry with a new captcha.
pub async fn reset_session(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> AppResult<impl IntoResponse> {
    let flow = state
        .auth
        .update(id, |flow| {
            flow.reset();
            Ok(flow.clone())
        })
        .await?;

    tracing::info!(session_id = %id, "Auth session reset");

    Ok(Json(DataResponse {
        data: AuthFlowView::from_session(id, &flow),
    }))
}

/// DELETE /api/v1/auth/sessions/{id}
///
/// Discard a flow. Returns 204 No Content.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> AppResult<StatusCode> {
    state.auth.remove(id).await?;
    tracing::info!(session_id = %id, "Auth session discarded");
    Ok(StatusCode::NO_CONTENT)
}
