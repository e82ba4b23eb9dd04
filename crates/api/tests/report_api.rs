//! HTTP-level integration tests for the report wizard endpoints.
//!
//! Covers the full six-step walk from intro to submission, the per-step
//! validation gates, append-only evidence uploads, and session lifecycle.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, delete, get, post_empty, post_json, put_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a wizard session and return its ID.
async fn create_session(app: &Router) -> String {
    let response = post_empty(app.clone(), "/api/v1/reports").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"].as_str().unwrap().to_string()
}

/// A description long enough for the step-2 gate, free of the characters
/// the checklist forbids.
fn long_description() -> String {
    "The attacker gained access to my email account and used it to send \
     fraudulent payment requests to several of my contacts. I noticed \
     unfamiliar sent messages and a password reset notice from my bank, \
     after which I was locked out of the account entirely."
        .to_string()
}

/// Drive a fresh session to the given step (1..=6), filling the draft as
/// each gate requires.
async fn session_at_step(app: &Router, target: u8) -> String {
    let id = create_session(app).await;
    let response = post_empty(app.clone(), &format!("/api/v1/reports/{id}/start")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let draft = json!({
        "incident_type": "phishing",
        "discovery_date": "2024-03-14T09:30:00",
        "description": long_description(),
        "affected_systems": "Personal email, savings account",
        "financial_loss": 25000.0,
        "reporter_name": "Asha Verma",
        "reporter_email": "asha.verma@example.com",
        "reporter_phone": "9876543210",
    });
    let response = put_json(app.clone(), &format!("/api/v1/reports/{id}/draft"), draft).await;
    assert_eq!(response.status(), StatusCode::OK);

    for _ in 1..target {
        let response = post_empty(app.clone(), &format!("/api/v1/reports/{id}/advance")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
    id
}

// ---------------------------------------------------------------------------
// Session lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_session_at_intro() {
    let (app, _notifier) = common::build_test_app();
    let response = post_empty(app, "/api/v1/reports").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["state"]["kind"], "intro");
    assert_eq!(data["position"], 0);
    assert_eq!(data["total_steps"], 6);
    assert!(data["step_label"].is_null());
    assert!(data["draft"]["incident_type"].is_null());
}

#[tokio::test]
async fn unknown_session_returns_404() {
    let (app, _notifier) = common::build_test_app();
    let missing = uuid::Uuid::new_v4();

    let response = get(app.clone(), &format!("/api/v1/reports/{missing}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");

    let response = post_empty(app, &format!("/api/v1/reports/{missing}/advance")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_discards_the_session() {
    let (app, _notifier) = common::build_test_app();
    let id = create_session(&app).await;

    let response = delete(app.clone(), &format!("/api/v1/reports/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/reports/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Start and step transitions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn start_moves_intro_to_step_one() {
    let (app, _notifier) = common::build_test_app();
    let id = create_session(&app).await;

    let response = post_empty(app, &format!("/api/v1/reports/{id}/start")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["position"], 1);
    assert_eq!(json["data"]["step_label"], "Incident Type");
}

#[tokio::test]
async fn start_twice_is_a_conflict() {
    let (app, _notifier) = common::build_test_app();
    let id = create_session(&app).await;

    post_empty(app.clone(), &format!("/api/v1/reports/{id}/start")).await;
    let response = post_empty(app, &format!("/api/v1/reports/{id}/start")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn advance_is_gated_by_required_fields() {
    let (app, _notifier) = common::build_test_app();
    let id = create_session(&app).await;
    post_empty(app.clone(), &format!("/api/v1/reports/{id}/start")).await;

    // Step 1 requires an incident type.
    let response = post_empty(app.clone(), &format!("/api/v1/reports/{id}/advance")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let response = put_json(
        app.clone(),
        &format!("/api/v1/reports/{id}/draft"),
        json!({ "incident_type": "financial-fraud" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_empty(app.clone(), &format!("/api/v1/reports/{id}/advance")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["position"], 2);
    assert_eq!(json["data"]["step_label"], "Discovery Details");

    // Step 2 requires a discovery date and a long-enough description.
    let response = post_empty(app, &format!("/api/v1/reports/{id}/advance")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn go_back_is_a_noop_at_step_one() {
    let (app, _notifier) = common::build_test_app();
    let id = session_at_step(&app, 2).await;

    let response = post_empty(app.clone(), &format!("/api/v1/reports/{id}/go-back")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["position"], 1);

    // Already at step 1: still 200, position unchanged.
    let response = post_empty(app, &format!("/api/v1/reports/{id}/go-back")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["position"], 1);
}

// ---------------------------------------------------------------------------
// Draft accumulation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn draft_update_before_start_is_rejected() {
    let (app, _notifier) = common::build_test_app();
    let id = create_session(&app).await;

    let response = put_json(
        app,
        &format!("/api/v1/reports/{id}/draft"),
        json!({ "description": "too early" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn draft_accumulates_across_updates() {
    let (app, _notifier) = common::build_test_app();
    let id = create_session(&app).await;
    post_empty(app.clone(), &format!("/api/v1/reports/{id}/start")).await;

    put_json(
        app.clone(),
        &format!("/api/v1/reports/{id}/draft"),
        json!({ "incident_type": "malware" }),
    )
    .await;
    let response = put_json(
        app.clone(),
        &format!("/api/v1/reports/{id}/draft"),
        json!({ "reporter_name": "Asha Verma" }),
    )
    .await;

    // The second update must not clear the first field.
    let json = body_json(response).await;
    assert_eq!(json["data"]["draft"]["incident_type"], "malware");
    assert_eq!(json["data"]["draft"]["reporter_name"], "Asha Verma");
}

#[tokio::test]
async fn draft_rejects_unknown_incident_type() {
    let (app, _notifier) = common::build_test_app();
    let id = create_session(&app).await;
    post_empty(app.clone(), &format!("/api/v1/reports/{id}/start")).await;

    let response = put_json(
        app,
        &format!("/api/v1/reports/{id}/draft"),
        json!({ "incident_type": "carrier-pigeon" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Evidence uploads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn evidence_uploads_append() {
    let (app, _notifier) = common::build_test_app();
    let id = session_at_step(&app, 5).await;

    let response = post_json(
        app.clone(),
        &format!("/api/v1/reports/{id}/evidence"),
        json!({ "files": [{ "file_name": "statement.pdf", "size_bytes": 120_000 }] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["draft"]["evidence_files"].as_array().unwrap().len(), 1);

    let response = post_json(
        app,
        &format!("/api/v1/reports/{id}/evidence"),
        json!({ "files": [{ "file_name": "screenshot.png", "size_bytes": 48_000 }] }),
    )
    .await;
    let json = body_json(response).await;
    let files = json["data"]["draft"]["evidence_files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["file_name"], "statement.pdf");
    assert_eq!(files[1]["file_name"], "screenshot.png");
}

#[tokio::test]
async fn evidence_rejects_bad_extension_and_oversize_without_partial_append() {
    let (app, _notifier) = common::build_test_app();
    let id = session_at_step(&app, 5).await;

    let response = post_json(
        app.clone(),
        &format!("/api/v1/reports/{id}/evidence"),
        json!({ "files": [{ "file_name": "malware.exe", "size_bytes": 100 }] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // One good file plus one oversize file: the whole batch is refused.
    let response = post_json(
        app.clone(),
        &format!("/api/v1/reports/{id}/evidence"),
        json!({ "files": [
            { "file_name": "ok.pdf", "size_bytes": 1000 },
            { "file_name": "huge.pdf", "size_bytes": 6 * 1024 * 1024 },
        ] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(get(app, &format!("/api/v1/reports/{id}")).await).await;
    assert_eq!(
        json["data"]["draft"]["evidence_files"].as_array().unwrap().len(),
        0
    );
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_from_review_returns_acknowledgement() {
    let (app, notifier) = common::build_test_app();
    let id = session_at_step(&app, 6).await;

    let response = post_empty(app.clone(), &format!("/api/v1/reports/{id}/submit")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["acknowledgement_id"].is_string());
    assert!(json["data"]["submitted_at"].is_string());
    assert!(notifier.titles().contains(&"Report Submitted".to_string()));

    // The session is retained in the submitted state until deleted.
    let json = body_json(get(app.clone(), &format!("/api/v1/reports/{id}")).await).await;
    assert_eq!(json["data"]["state"]["kind"], "submitted");

    let response = post_empty(app, &format!("/api/v1/reports/{id}/submit")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn advance_at_review_step_also_submits() {
    let (app, _notifier) = common::build_test_app();
    let id = session_at_step(&app, 6).await;

    let response = post_empty(app, &format!("/api/v1/reports/{id}/advance")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["state"]["kind"], "submitted");
}

#[tokio::test]
async fn submit_before_review_step_is_rejected() {
    let (app, _notifier) = common::build_test_app();
    let id = session_at_step(&app, 3).await;

    let response = post_empty(app, &format!("/api/v1/reports/{id}/submit")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn draft_is_frozen_after_submission() {
    let (app, _notifier) = common::build_test_app();
    let id = session_at_step(&app, 6).await;
    post_empty(app.clone(), &format!("/api/v1/reports/{id}/submit")).await;

    let response = put_json(
        app.clone(),
        &format!("/api/v1/reports/{id}/draft"),
        json!({ "description": "late edit" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = post_json(
        app,
        &format!("/api/v1/reports/{id}/evidence"),
        json!({ "files": [{ "file_name": "late.pdf", "size_bytes": 10 }] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
