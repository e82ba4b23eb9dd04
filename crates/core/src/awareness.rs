//! Static cyber-awareness content and the phishing quiz.
//!
//! Purely informational: the content never changes at runtime and carries
//! no per-citizen state. The single quiz question compares the submitted
//! answer against a fixed expected value.

use serde::Serialize;

/// One scam category shown on the awareness page.
#[derive(Debug, Clone, Serialize)]
pub struct ScamType {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
    pub warning: &'static str,
}

/// One "what to do" step group.
#[derive(Debug, Clone, Serialize)]
pub struct ActionStep {
    pub step: u8,
    pub title: &'static str,
    pub actions: &'static [&'static str],
}

/// Helpline and reporting resources.
#[derive(Debug, Clone, Serialize)]
pub struct Resources {
    pub helpline: &'static str,
    pub portal_url: &'static str,
}

/// The full awareness page payload.
#[derive(Debug, Clone, Serialize)]
pub struct AwarenessContent {
    pub scam_types: Vec<ScamType>,
    pub action_steps: Vec<ActionStep>,
    pub resources: Resources,
}

/// Result of checking a quiz answer.
#[derive(Debug, Clone, Serialize)]
pub struct QuizVerdict {
    pub correct: bool,
    pub explanation: &'static str,
}

/// The expected answer to the phishing email quiz.
const QUIZ_EXPECTED_ANSWER: &str = "scam";

const CORRECT_EXPLANATION: &str = "This is a phishing scam. Red flags include a suspicious \
     sender domain, urgent language creating panic, a request for passwords and OTPs, and an \
     unofficial verification URL.";

const INCORRECT_EXPLANATION: &str =
    "This is a phishing scam. Banks never ask for passwords or OTPs via email.";

/// Check the single-question quiz.
pub fn check_quiz_answer(answer: &str) -> QuizVerdict {
    if answer == QUIZ_EXPECTED_ANSWER {
        QuizVerdict {
            correct: true,
            explanation: CORRECT_EXPLANATION,
        }
    } else {
        QuizVerdict {
            correct: false,
            explanation: INCORRECT_EXPLANATION,
        }
    }
}

/// Build the awareness page content.
pub fn content() -> AwarenessContent {
    AwarenessContent {
        scam_types: vec![
            ScamType {
                id: "phishing",
                title: "Phishing Attacks",
                description: "Fake emails or messages asking for personal information",
                details: "Scammers send emails that look like they're from legitimate \
                          companies to steal your login credentials, credit card numbers, \
                          or other sensitive information.",
                warning: "Never click suspicious links or download attachments from \
                          unknown senders",
            },
            ScamType {
                id: "fake-jobs",
                title: "Fake Job Offers",
                description: "Fraudulent employment opportunities requiring upfront payments",
                details: "Scammers post fake job listings and ask for registration fees, \
                          training costs, or personal documents before offering employment.",
                warning: "Legitimate employers never ask for money upfront",
            },
            ScamType {
                id: "credit-fraud",
                title: "Credit Card Fraud",
                description: "Unauthorized use of your credit/debit card information",
                details: "Criminals use stolen card details to make purchases online or \
                          create duplicate cards for fraudulent transactions.",
                warning: "Monitor your statements regularly and report suspicious \
                          transactions immediately",
            },
            ScamType {
                id: "identity-theft",
                title: "Identity Theft",
                description: "Stealing personal information to impersonate you",
                details: "Fraudsters collect your personal details like Aadhaar, PAN, or \
                          passport information to open accounts or take loans in your name.",
                warning: "Never share personal documents with unverified sources",
            },
            ScamType {
                id: "shopping-fraud",
                title: "Online Shopping Fraud",
                description: "Fake online stores or non-delivery of purchased items",
                details: "Scammers create fake e-commerce websites with attractive deals, \
                          collect payments, but never deliver the products.",
                warning: "Only shop from verified and trusted websites",
            },
            ScamType {
                id: "investment-fraud",
                title: "Investment Scams",
                description: "Fraudulent investment schemes promising high returns",
                details: "Scammers promise unrealistic returns on investments in \
                          cryptocurrency, stocks, or business opportunities.",
                warning: "If it sounds too good to be true, it probably is",
            },
        ],
        action_steps: vec![
            ActionStep {
                step: 1,
                title: "Immediate Response",
                actions: &[
                    "Stop all communication with the scammer",
                    "Do not share any more personal information",
                    "Take screenshots of messages/emails as evidence",
                    "Change passwords of affected accounts immediately",
                ],
            },
            ActionStep {
                step: 2,
                title: "Secure Your Accounts",
                actions: &[
                    "Enable two-factor authentication on all accounts",
                    "Contact your bank to block cards if compromised",
                    "Check and freeze credit reports if identity theft suspected",
                    "Update security questions and recovery information",
                ],
            },
            ActionStep {
                step: 3,
                title: "Report the Crime",
                actions: &[
                    "File a complaint on the National Cyber Crime Portal",
                    "Report to local police cyber cell",
                    "Contact your bank's fraud department",
                    "Report to relevant regulatory authorities",
                ],
            },
            ActionStep {
                step: 4,
                title: "Prevent Future Risks",
                actions: &[
                    "Install updated antivirus software",
                    "Regularly monitor bank and credit card statements",
                    "Be cautious with unsolicited calls and emails",
                    "Keep software and devices up to date",
                ],
            },
        ],
        resources: Resources {
            helpline: "1930",
            portal_url: "https://cybercrime.gov.in",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_accepts_only_the_scam_answer() {
        assert!(check_quiz_answer("scam").correct);
        assert!(!check_quiz_answer("legitimate").correct);
        assert!(!check_quiz_answer("").correct);
        // Comparison is exact, not normalized.
        assert!(!check_quiz_answer("Scam").correct);
    }

    #[test]
    fn content_has_expected_cardinality() {
        let content = content();
        assert_eq!(content.scam_types.len(), 6);
        assert_eq!(content.action_steps.len(), 4);
        assert_eq!(content.resources.helpline, "1930");
    }

    #[test]
    fn scam_type_ids_are_unique() {
        let content = content();
        let mut ids: Vec<_> = content.scam_types.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), content.scam_types.len());
    }
}
