//! Incident report draft: the mutable record accumulated across wizard steps.
//!
//! The draft is exclusively owned by one wizard session and is destroyed with
//! it; there is no persistence. Fields accumulate monotonically -- setters
//! only ever fill or overwrite individual fields, and evidence uploads
//! append, never replace.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Incident type
// ---------------------------------------------------------------------------

/// The seven incident categories a citizen can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncidentType {
    Phishing,
    Malware,
    UnauthorizedAccess,
    IdentityTheft,
    FinancialFraud,
    Ddos,
    Other,
}

impl IncidentType {
    /// Parse a wire-format incident type string.
    pub fn from_wire(s: &str) -> Result<Self, CoreError> {
        match s {
            "phishing" => Ok(Self::Phishing),
            "malware" => Ok(Self::Malware),
            "unauthorized-access" => Ok(Self::UnauthorizedAccess),
            "identity-theft" => Ok(Self::IdentityTheft),
            "financial-fraud" => Ok(Self::FinancialFraud),
            "ddos" => Ok(Self::Ddos),
            "other" => Ok(Self::Other),
            _ => Err(CoreError::Validation(format!(
                "Unknown incident type '{s}'"
            ))),
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Phishing => "phishing",
            Self::Malware => "malware",
            Self::UnauthorizedAccess => "unauthorized-access",
            Self::IdentityTheft => "identity-theft",
            Self::FinancialFraud => "financial-fraud",
            Self::Ddos => "ddos",
            Self::Other => "other",
        }
    }

    /// Human-readable label shown in the report summary.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Phishing => "Phishing Attack",
            Self::Malware => "Malware/Virus",
            Self::UnauthorizedAccess => "Unauthorized Access",
            Self::IdentityTheft => "Identity Theft",
            Self::FinancialFraud => "Financial Fraud",
            Self::Ddos => "DDoS Attack",
            Self::Other => "Other",
        }
    }
}

// ---------------------------------------------------------------------------
// Evidence files
// ---------------------------------------------------------------------------

/// Accepted evidence file extensions (lowercase).
pub const ALLOWED_EVIDENCE_EXTENSIONS: &[&str] =
    &["pdf", "jpg", "jpeg", "png", "txt", "doc", "docx"];

/// Maximum size of a single evidence file.
pub const MAX_EVIDENCE_FILE_BYTES: u64 = 5 * 1024 * 1024;

/// Reference to an uploaded evidence attachment.
///
/// The portal records file metadata only; the bytes themselves live with the
/// external storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceFile {
    pub file_name: String,
    pub size_bytes: u64,
}

impl EvidenceFile {
    /// Validate the declared type/size constraints for an evidence file.
    pub fn validate(&self) -> Result<(), CoreError> {
        let extension = self
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match extension {
            Some(ext) if ALLOWED_EVIDENCE_EXTENSIONS.contains(&ext.as_str()) => {}
            _ => {
                return Err(CoreError::Validation(format!(
                    "File '{}' is not an accepted evidence type (allowed: {})",
                    self.file_name,
                    ALLOWED_EVIDENCE_EXTENSIONS.join(", ")
                )))
            }
        }

        if self.size_bytes > MAX_EVIDENCE_FILE_BYTES {
            return Err(CoreError::Validation(format!(
                "File '{}' exceeds the {} MB evidence size limit",
                self.file_name,
                MAX_EVIDENCE_FILE_BYTES / (1024 * 1024)
            )));
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Description rules
// ---------------------------------------------------------------------------

/// Minimum incident description length, per the complainant checklist.
pub const MIN_DESCRIPTION_CHARS: usize = 200;

/// Characters the complaint intake rejects in free-text descriptions.
pub const FORBIDDEN_DESCRIPTION_CHARS: &[char] = &['#', '@', '^', '*', '"', '-', '|'];

/// Validate an incident description against the intake rules.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(CoreError::Validation(format!(
            "Incident description must be at least {MIN_DESCRIPTION_CHARS} characters"
        )));
    }
    if let Some(bad) = description
        .chars()
        .find(|c| FORBIDDEN_DESCRIPTION_CHARS.contains(c))
    {
        return Err(CoreError::Validation(format!(
            "Incident description must not contain the character '{bad}'"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Report draft
// ---------------------------------------------------------------------------

/// The accumulated report form data.
///
/// Every field is optional until its step's advancement gate requires it.
/// Dates are naive: the citizen enters local date-times without a zone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportDraft {
    pub incident_type: Option<IncidentType>,
    pub discovery_date: Option<NaiveDateTime>,
    pub incident_start: Option<NaiveDateTime>,
    pub description: Option<String>,
    pub affected_systems: Option<String>,
    pub reporter_name: Option<String>,
    pub reporter_email: Option<String>,
    pub reporter_phone: Option<String>,
    pub financial_loss: Option<f64>,
    pub evidence_files: Vec<EvidenceFile>,
}

impl ReportDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append evidence files to the draft.
    ///
    /// Uploads accumulate: a second upload extends the list rather than
    /// replacing it. Each file is validated before anything is appended, so
    /// a rejected batch leaves the draft untouched.
    pub fn add_evidence(&mut self, files: Vec<EvidenceFile>) -> Result<(), CoreError> {
        for file in &files {
            file.validate()?;
        }
        self.evidence_files.extend(files);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
