//! Handlers for the report wizard resource.
//!
//! A wizard session is created at the introductory view, accumulates draft
//! fields while the citizen moves through the six steps, and ends in the
//! submitted state. Sessions live in memory only and are discarded on
//! delete or server restart.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use ccrp_core::notify::Notice;
use ccrp_core::report::{EvidenceFile, IncidentType, ReportDraft};
use ccrp_core::types::{SessionId, Timestamp};
use ccrp_core::wizard::{ReportWizard, WizardState, TOTAL_STEPS};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Partial draft update: only fields present in the body are applied, so
/// the draft accumulates across steps.
#[derive(Debug, Deserialize)]
pub struct UpdateDraftRequest {
    pub incident_type: Option<String>,
    pub discovery_date: Option<NaiveDateTime>,
    pub incident_start: Option<NaiveDateTime>,
    pub description: Option<String>,
    pub affected_systems: Option<String>,
    pub reporter_name: Option<String>,
    pub reporter_email: Option<String>,
    pub reporter_phone: Option<String>,
    pub financial_loss: Option<f64>,
}

/// Request body for `POST /reports/{id}/evidence`.
#[derive(Debug, Deserialize)]
pub struct AddEvidenceRequest {
    pub files: Vec<EvidenceFile>,
}

/// Client view of a wizard session.
#[derive(Debug, Serialize)]
pub struct WizardView {
    pub id: SessionId,
    pub state: WizardState,
    pub position: u8,
    pub step_label: Option<&'static str>,
    pub total_steps: u8,
    pub draft: ReportDraft,
    pub created_at: Timestamp,
}

impl WizardView {
    fn from_session(id: SessionId, wizard: &ReportWizard) -> Self {
        Self {
            id,
            state: wizard.state(),
            position: wizard.state().position(),
            step_label: wizard.current_step().map(|s| s.label()),
            total_steps: TOTAL_STEPS,
            draft: wizard.draft.clone(),
            created_at: wizard.created_at,
        }
    }
}

/// Response body for a successful submission.
#[derive(Debug, Serialize)]
pub struct SubmissionReceipt {
    pub acknowledgement_id: SessionId,
    pub submitted_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/reports
///
/// Create a wizard session at the introductory view.
pub async fn create_report(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let wizard = ReportWizard::new();
    let view_source = wizard.clone();
    let id = state.reports.insert(wizard).await;

    tracing::info!(session_id = %id, "Report session created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: WizardView::from_session(id, &view_source),
        }),
    ))
}

/// GET /api/v1/reports/{id}
pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> AppResult<impl IntoResponse> {
    let wizard = state.reports.get(id).await?;
    Ok(Json(DataResponse {
        data: WizardView::from_session(id, &wizard),
    }))
}

/// POST /api/v1/reports/{id}/start
///
/// Begin the report: intro -> step 1.
pub async fn start_report(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> AppResult<impl IntoResponse> {
    let wizard = state
        .reports
        .update(id, |wizard| {
            wizard.start()?;
            Ok(wizard.clone())
        })
        .await?;

    tracing::info!(session_id = %id, "Report started");

    Ok(Json(DataResponse {
        data: WizardView::from_session(id, &wizard),
    }))
}

/// PUT /api/v1/reports/{id}/draft
///
/// Accumulate draft fields. Absent fields are left untouched; present
/// fields overwrite. Only allowed while the session is on a form step.
pub async fn update_draft(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
    Json(body): Json<UpdateDraftRequest>,
) -> AppResult<impl IntoResponse> {
    let incident_type = body
        .incident_type
        .as_deref()
        .map(IncidentType::from_wire)
        .transpose()?;

    let wizard = state
        .reports
        .update(id, move |wizard| {
            wizard.ensure_on_form_step()?;

            let draft = &mut wizard.draft;
            if incident_type.is_some() {
                draft.incident_type = incident_type;
            }
            if body.discovery_date.is_some() {
                draft.discovery_date = body.discovery_date;
            }
            if body.incident_start.is_some() {
                draft.incident_start = body.incident_start;
            }
            if body.description.is_some() {
                draft.description = body.description;
            }
            if body.affected_systems.is_some() {
                draft.affected_systems = body.affected_systems;
            }
            if body.reporter_name.is_some() {
                draft.reporter_name = body.reporter_name;
            }
            if body.reporter_email.is_some() {
                draft.reporter_email = body.reporter_email;
            }
            if body.reporter_phone.is_some() {
                draft.reporter_phone = body.reporter_phone;
            }
            if body.financial_loss.is_some() {
                draft.financial_loss = body.financial_loss;
            }
            Ok(wizard.clone())
        })
        .await?;

    Ok(Json(DataResponse {
        data: WizardView::from_session(id, &wizard),
    }))
}

/// POST /api/v1/reports/{id}/evidence
///
/// Append evidence files to the draft. Uploads accumulate; they never
/// replace earlier files.
pub async fn add_evidence(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
    Json(body): Json<AddEvidenceRequest>,
) -> AppResult<impl IntoResponse> {
    let count = body.files.len();
    let wizard = state
        .reports
        .update(id, move |wizard| {
            wizard.add_evidence(body.files)?;
            Ok(wizard.clone())
        })
        .await?;

    tracing::info!(session_id = %id, count, "Evidence files attached");

    Ok(Json(DataResponse {
        data: WizardView::from_session(id, &wizard),
    }))
}

/// POST /api/v1/reports/{id}/advance
///
/// Advance one step; the current step's required fields gate the move.
/// At the final step this submits the report.
pub async fn advance(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> AppResult<impl IntoResponse> {
    let (from, wizard) = state
        .reports
        .update(id, |wizard| {
            let from = wizard.state().position();
            wizard.next()?;
            Ok((from, wizard.clone()))
        })
        .await?;

    tracing::info!(
        session_id = %id,
        from_step = from,
        to_step = wizard.state().position(),
        "Report session advanced"
    );

    Ok(Json(DataResponse {
        data: WizardView::from_session(id, &wizard),
    }))
}

/// POST /api/v1/reports/{id}/go-back
///
/// Go back one step. A no-op at step 1.
pub async fn go_back(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> AppResult<impl IntoResponse> {
    let wizard = state
        .reports
        .update(id, |wizard| {
            wizard.previous()?;
            Ok(wizard.clone())
        })
        .await?;

    tracing::info!(
        session_id = %id,
        to_step = wizard.state().position(),
        "Report session went back"
    );

    Ok(Json(DataResponse {
        data: WizardView::from_session(id, &wizard),
    }))
}

/// POST /api/v1/reports/{id}/submit
///
/// Submit the report from the review step and hand back an
/// acknowledgement. The draft stays readable until the session is deleted.
pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> AppResult<impl IntoResponse> {
    state.reports.update(id, |wizard| wizard.submit()).await?;

    let receipt = SubmissionReceipt {
        acknowledgement_id: uuid::Uuid::new_v4(),
        submitted_at: chrono::Utc::now(),
    };

    tracing::info!(
        session_id = %id,
        acknowledgement_id = %receipt.acknowledgement_id,
        "Report submitted"
    );
    state.notifier.notify(Notice::success(
        "Report Submitted",
        format!("Acknowledgement number {}", receipt.acknowledgement_id),
    ));

    Ok(Json(DataResponse { data: receipt }))
}

/// DELETE /api/v1/reports/{id}
///
/// Discard a session and its draft. Returns 204 No Content.
pub async fn delete_report(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> AppResult<StatusCode> {
    state.reports.remove(id).await?;
    tracing::info!(session_id = %id, "Report session discarded");
    Ok(StatusCode::NO_CONTENT)
}
