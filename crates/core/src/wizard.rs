//! Report wizard step machine and advancement validation.
//!
//! Defines the step definitions, the wizard state enumeration, and the
//! per-step required-field gates used by the API layer. The wizard is a
//! strictly linear flow: an introductory view, six form steps navigated by
//! unit increments, and a terminal `Submitted` state.

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::auth::MOBILE_PATTERN;
use crate::error::CoreError;
use crate::report::{validate_description, EvidenceFile, ReportDraft};
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Wizard steps
// ---------------------------------------------------------------------------

/// The six form steps of the report wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    IncidentType,
    DiscoveryDetails,
    ImpactAssessment,
    ReporterInformation,
    EvidenceUpload,
    ReviewSubmit,
}

/// Total number of form steps.
pub const TOTAL_STEPS: u8 = 6;

/// Minimum step number (1-based; 0 is the introductory view).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 6;

impl WizardStep {
    /// Convert a 1-based step number to a `WizardStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::IncidentType),
            2 => Ok(Self::DiscoveryDetails),
            3 => Ok(Self::ImpactAssessment),
            4 => Ok(Self::ReporterInformation),
            5 => Ok(Self::EvidenceUpload),
            6 => Ok(Self::ReviewSubmit),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between {MIN_STEP} and {MAX_STEP}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::IncidentType => 1,
            Self::DiscoveryDetails => 2,
            Self::ImpactAssessment => 3,
            Self::ReporterInformation => 4,
            Self::EvidenceUpload => 5,
            Self::ReviewSubmit => 6,
        }
    }

    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::IncidentType => "Incident Type",
            Self::DiscoveryDetails => "Discovery Details",
            Self::ImpactAssessment => "Impact Assessment",
            Self::ReporterInformation => "Reporter Information",
            Self::EvidenceUpload => "Evidence Upload",
            Self::ReviewSubmit => "Review & Submit",
        }
    }
}

// ---------------------------------------------------------------------------
// Wizard state
// ---------------------------------------------------------------------------

/// Where a wizard session currently is.
///
/// Modeled as a tagged enum rather than a bare index so that "not started"
/// and "already submitted" cannot be confused with form steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "step", rename_all = "snake_case")]
pub enum WizardState {
    Intro,
    Step(WizardStep),
    Submitted,
}

impl WizardState {
    /// Position on the 0..=6 scale: 0 is the intro, 1..6 are the form
    /// steps, and a submitted session reports the last step.
    pub fn position(&self) -> u8 {
        match self {
            Self::Intro => 0,
            Self::Step(step) => step.to_number(),
            Self::Submitted => MAX_STEP,
        }
    }
}

// ---------------------------------------------------------------------------
// Advancement validation
// ---------------------------------------------------------------------------

/// Validate that the draft holds the required fields for a given step.
///
/// Called before advancing past that step. Earlier steps are never
/// re-validated when revisited; each gate fires exactly at its own
/// advancement.
pub fn validate_step_data(step: WizardStep, draft: &ReportDraft) -> Result<(), CoreError> {
    match step {
        WizardStep::IncidentType => {
            if draft.incident_type.is_none() {
                return Err(CoreError::Validation(
                    "Select the type of incident before continuing".to_string(),
                ));
            }
        }
        WizardStep::DiscoveryDetails => {
            if draft.discovery_date.is_none() {
                return Err(CoreError::Validation(
                    "Enter the date and time the incident was discovered".to_string(),
                ));
            }
            match draft.description.as_deref() {
                Some(description) => validate_description(description)?,
                None => {
                    return Err(CoreError::Validation(
                        "Provide a detailed description of the incident".to_string(),
                    ))
                }
            }
        }
        WizardStep::ImpactAssessment => {
            if draft
                .affected_systems
                .as_deref()
                .map_or(true, |s| s.trim().is_empty())
            {
                return Err(CoreError::Validation(
                    "List the affected systems or accounts".to_string(),
                ));
            }
            if let Some(loss) = draft.financial_loss {
                if !loss.is_finite() || loss < 0.0 {
                    return Err(CoreError::Validation(
                        "Estimated financial loss must be a non-negative amount".to_string(),
                    ));
                }
            }
        }
        WizardStep::ReporterInformation => {
            if draft
                .reporter_name
                .as_deref()
                .map_or(true, |s| s.trim().is_empty())
            {
                return Err(CoreError::Validation(
                    "Enter the reporter's full name".to_string(),
                ));
            }
            match draft.reporter_email.as_deref() {
                Some(email) if email.validate_email() => {}
                Some(email) => {
                    return Err(CoreError::Validation(format!(
                        "'{email}' is not a valid email address"
                    )))
                }
                None => {
                    return Err(CoreError::Validation(
                        "Enter the reporter's email address".to_string(),
                    ))
                }
            }
            if let Some(phone) = draft.reporter_phone.as_deref() {
                if !MOBILE_PATTERN.is_match(phone) {
                    return Err(CoreError::Validation(
                        "Reporter phone must be a valid 10-digit mobile number".to_string(),
                    ));
                }
            }
        }
        // Evidence is optional; upload constraints are enforced when files
        // are appended, not at advancement.
        WizardStep::EvidenceUpload => {}
        // Review has no fields of its own; earlier gates already ran.
        WizardStep::ReviewSubmit => {}
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Wizard session
// ---------------------------------------------------------------------------

/// One report wizard session: position plus the accumulated draft.
///
/// Exclusively owned by its session store entry; discarded on delete.
#[derive(Debug, Clone, Serialize)]
pub struct ReportWizard {
    state: WizardState,
    pub draft: ReportDraft,
    pub created_at: Timestamp,
}

impl ReportWizard {
    /// Create a fresh session at the introductory view with an empty draft.
    pub fn new() -> Self {
        Self {
            state: WizardState::Intro,
            draft: ReportDraft::new(),
            created_at: chrono::Utc::now(),
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    /// Current step when the session is on a form step.
    pub fn current_step(&self) -> Option<WizardStep> {
        match self.state {
            WizardState::Step(step) => Some(step),
            _ => None,
        }
    }

    /// Begin the report: `Intro -> Step(1)`.
    pub fn start(&mut self) -> Result<(), CoreError> {
        match self.state {
            WizardState::Intro => {
                self.state = WizardState::Step(WizardStep::IncidentType);
                Ok(())
            }
            WizardState::Step(_) => Err(CoreError::Conflict(
                "Report has already been started".to_string(),
            )),
            WizardState::Submitted => Err(CoreError::Conflict(
                "Report has already been submitted".to_string(),
            )),
        }
    }

    /// Advance one step, gated on the current step's required fields.
    ///
    /// At the final step this performs the submission transition, matching
    /// the single Next/Submit control in the UI.
    pub fn next(&mut self) -> Result<(), CoreError> {
        match self.state {
            WizardState::Intro => Err(CoreError::Validation(
                "Report has not been started yet".to_string(),
            )),
            WizardState::Submitted => Err(CoreError::Conflict(
                "Report has already been submitted".to_string(),
            )),
            WizardState::Step(step) => {
                validate_step_data(step, &self.draft)?;
                self.state = match step.to_number() {
                    n if n < MAX_STEP => {
                        WizardState::Step(WizardStep::from_number(n + 1)?)
                    }
                    _ => WizardState::Submitted,
                };
                Ok(())
            }
        }
    }

    /// Go back one step. A no-op at `Step(1)` and at the intro.
    pub fn previous(&mut self) -> Result<(), CoreError> {
        match self.state {
            WizardState::Intro => Ok(()),
            WizardState::Submitted => Err(CoreError::Conflict(
                "Report has already been submitted".to_string(),
            )),
            WizardState::Step(step) => {
                let n = step.to_number();
                if n > MIN_STEP {
                    self.state = WizardState::Step(WizardStep::from_number(n - 1)?);
                }
                Ok(())
            }
        }
    }

    /// Submit the report: only valid at the final step.
    pub fn submit(&mut self) -> Result<(), CoreError> {
        match self.state {
            WizardState::Step(WizardStep::ReviewSubmit) => {
                self.state = WizardState::Submitted;
                Ok(())
            }
            WizardState::Submitted => Err(CoreError::Conflict(
                "Report has already been submitted".to_string(),
            )),
            _ => Err(CoreError::Validation(format!(
                "Cannot submit: must be on step {MAX_STEP} (Review & Submit)"
            ))),
        }
    }

    /// Append evidence files to the draft (append-only).
    pub fn add_evidence(&mut self, files: Vec<EvidenceFile>) -> Result<(), CoreError> {
        self.ensure_on_form_step()?;
        self.draft.add_evidence(files)
    }

    /// Guard used by draft mutation paths: the session must be on a form
    /// step (not intro, not submitted).
    pub fn ensure_on_form_step(&self) -> Result<WizardStep, CoreError> {
        match self.state {
            WizardState::Step(step) => Ok(step),
            WizardState::Intro => Err(CoreError::Validation(
                "Report has not been started yet".to_string(),
            )),
            WizardState::Submitted => Err(CoreError::Conflict(
                "Report has already been submitted".to_string(),
            )),
        }
    }
}

impl Default for ReportWizard {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
