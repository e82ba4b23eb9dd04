//! Citizen login and forgot-login-id flow logic.
//!
//! Both flows share the same shape: a credential-entry stage, an explicit
//! OTP-requested stage gating the OTP field, and a captcha gate on
//! submission. No OTP is ever generated here -- dispatch and verification
//! belong to the external identity collaborator. The credential synthesis
//! below reproduces the portal's placeholder derivation and is not a real
//! authentication contract.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::captcha::CaptchaChallenge;
use crate::error::CoreError;

/// Indian mobile number: first digit 6-9, ten digits total.
pub static MOBILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9]\d{9}$").expect("mobile pattern must compile"));

/// Country-code prefix shown alongside mobile numbers.
pub const COUNTRY_CODE: &str = "+91";

// ---------------------------------------------------------------------------
// Flow stage
// ---------------------------------------------------------------------------

/// Stage of an auth flow.
///
/// An explicit tagged variant rather than an `otp_sent` boolean, so an
/// OTP-gated submission cannot be reached from an inconsistent flag state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStage {
    CredentialEntry,
    OtpRequested,
}

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// Credentials submitted by the login form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AuthCredentials {
    #[validate(length(min = 1, message = "Login ID is required"))]
    pub login_id: String,
    #[validate(regex(path = *MOBILE_PATTERN, message = "Enter valid 10-digit mobile number"))]
    pub mobile: String,
    #[validate(length(min = 4, message = "Enter valid OTP"))]
    pub otp: String,
    #[validate(length(min = 1, message = "Enter captcha"))]
    pub captcha: String,
}

/// Payload submitted by the forgot-login-id form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecoveryRequest {
    #[validate(regex(path = *MOBILE_PATTERN, message = "Enter valid 10-digit mobile number"))]
    pub mobile: String,
    #[validate(length(min = 4, message = "Enter valid OTP"))]
    pub otp: String,
    #[validate(length(min = 1, message = "Enter captcha"))]
    pub captcha: String,
}

/// Identifier/secret pair handed to the identity collaborator.
///
/// Derived deterministically from the form fields; a production rebuild
/// must replace this with genuine credential issuance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedCredentials {
    pub identifier: String,
    pub secret: String,
}

/// Confirmation that an OTP dispatch was requested.
#[derive(Debug, Clone, Serialize)]
pub struct OtpDispatch {
    /// Display form of the target number, e.g. `+91 9876543210`.
    pub destination: String,
}

// ---------------------------------------------------------------------------
// Derivations
// ---------------------------------------------------------------------------

/// Synthesize the collaborator identifier from a mobile number.
pub fn synthesize_identifier(mobile: &str) -> String {
    format!("user{mobile}@cybercrime.gov.in")
}

/// Synthesize the collaborator secret from login id + mobile number.
pub fn synthesize_secret(login_id: &str, mobile: &str) -> String {
    format!("{login_id}{mobile}")
}

/// Synthesize a display login id from the last four digits of the mobile
/// number. A placeholder, not a real lookup.
pub fn recover_login_id(mobile: &str) -> String {
    let tail: String = mobile
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("USER{tail}")
}

/// Collapse a `validator` error set into one user-facing message.
fn first_validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .next()
        .unwrap_or_else(|| "Invalid input".to_string())
}

// ---------------------------------------------------------------------------
// Auth flow
// ---------------------------------------------------------------------------

/// State for one login or forgot-login-id flow instance.
#[derive(Debug, Clone, Serialize)]
pub struct AuthFlow {
    stage: AuthStage,
    captcha: CaptchaChallenge,
}

impl AuthFlow {
    /// New flow at credential entry with a freshly generated captcha.
    pub fn new() -> Self {
        Self {
            stage: AuthStage::CredentialEntry,
            captcha: CaptchaChallenge::generate(),
        }
    }

    pub fn stage(&self) -> AuthStage {
        self.stage
    }

    pub fn captcha(&self) -> &CaptchaChallenge {
        &self.captcha
    }

    /// Request OTP dispatch to the given mobile number.
    ///
    /// The only precondition at this layer is length exactly 10; the
    /// digit-pattern check is the schema gate on submission. On failure the
    /// stage is left unchanged.
    pub fn request_otp(&mut self, mobile: &str) -> Result<OtpDispatch, CoreError> {
        if mobile.chars().count() != 10 {
            return Err(CoreError::Validation(
                "Please enter a valid 10-digit mobile number".to_string(),
            ));
        }
        self.stage = AuthStage::OtpRequested;
        Ok(OtpDispatch {
            destination: format!("{COUNTRY_CODE} {mobile}"),
        })
    }

    /// Regenerate the captcha; any response typed against the old challenge
    /// is void.
    pub fn refresh_captcha(&mut self) {
        self.captcha = CaptchaChallenge::generate();
    }

    /// Clear the flow back to credential entry with a new captcha.
    pub fn reset(&mut self) {
        self.stage = AuthStage::CredentialEntry;
        self.captcha = CaptchaChallenge::generate();
    }

    fn ensure_otp_requested(&self) -> Result<(), CoreError> {
        match self.stage {
            AuthStage::OtpRequested => Ok(()),
            AuthStage::CredentialEntry => Err(CoreError::Validation(
                "Request an OTP before submitting".to_string(),
            )),
        }
    }

    fn verify_captcha(&self, response: &str) -> Result<(), CoreError> {
        if self.captcha.verify(response) {
            Ok(())
        } else {
            Err(CoreError::Validation(
                "Please enter the correct captcha".to_string(),
            ))
        }
    }

    /// Run all submission gates for the login form and synthesize the
    /// collaborator credentials.
    ///
    /// Gates, in order: schema validation, OTP-requested stage, captcha
    /// match. Any failure leaves the flow state unchanged.
    pub fn verify_submission(
        &self,
        credentials: &AuthCredentials,
    ) -> Result<SynthesizedCredentials, CoreError> {
        credentials
            .validate()
            .map_err(|e| CoreError::Validation(first_validation_message(&e)))?;
        self.ensure_otp_requested()?;
        self.verify_captcha(&credentials.captcha)?;

        Ok(SynthesizedCredentials {
            identifier: synthesize_identifier(&credentials.mobile),
            secret: synthesize_secret(&credentials.login_id, &credentials.mobile),
        })
    }

    /// Run the submission gates for the forgot-login-id form and synthesize
    /// the display login id.
    pub fn verify_recovery(&self, request: &RecoveryRequest) -> Result<String, CoreError> {
        request
            .validate()
            .map_err(|e| CoreError::Validation(first_validation_message(&e)))?;
        self.ensure_otp_requested()?;
        self.verify_captcha(&request.captcha)?;

        Ok(recover_login_id(&request.mobile))
    }
}

impl Default for AuthFlow {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
