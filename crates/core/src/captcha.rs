//! Simple captcha challenge generation and verification.
//!
//! The challenge is a short random string the citizen types back. It is an
//! anti-automation speed bump only: sampling uses a non-cryptographic RNG
//! and the challenge text is sent to the client in the clear, so this must
//! never be treated as a security boundary.

use serde::Serialize;

use rand::Rng;

/// Characters a challenge is drawn from. Visually ambiguous characters
/// (0/O, 1/I/l, lowercase o) are excluded.
pub const CAPTCHA_ALPHABET: &str = "ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnpqrstuvwxyz23456789";

/// Number of characters in a challenge.
pub const CAPTCHA_LENGTH: usize = 6;

/// The active captcha challenge for one auth flow.
///
/// A challenge lives until the next regeneration; regenerating voids any
/// response entered against the old text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptchaChallenge {
    text: String,
}

impl CaptchaChallenge {
    /// Generate a fresh challenge, sampling each character uniformly.
    pub fn generate() -> Self {
        let alphabet = CAPTCHA_ALPHABET.as_bytes();
        let mut rng = rand::rng();
        let text = (0..CAPTCHA_LENGTH)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
            .collect();
        Self { text }
    }

    /// The challenge text shown to the citizen.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Case-insensitive exact match against the citizen's response.
    pub fn verify(&self, response: &str) -> bool {
        response.to_lowercase() == self.text.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_challenge_has_expected_shape() {
        for _ in 0..50 {
            let challenge = CaptchaChallenge::generate();
            assert_eq!(challenge.text().chars().count(), CAPTCHA_LENGTH);
            assert!(challenge
                .text()
                .chars()
                .all(|c| CAPTCHA_ALPHABET.contains(c)));
        }
    }

    #[test]
    fn alphabet_excludes_ambiguous_characters() {
        for c in ['0', 'O', '1', 'I', 'l', 'o'] {
            assert!(!CAPTCHA_ALPHABET.contains(c), "alphabet must not contain {c}");
        }
    }

    #[test]
    fn verification_is_case_insensitive() {
        let challenge = CaptchaChallenge {
            text: "aB3xY7".to_string(),
        };
        assert!(challenge.verify("ab3xy7"));
        assert!(challenge.verify("AB3XY7"));
        assert!(challenge.verify("aB3xY7"));
    }

    #[test]
    fn verification_rejects_mismatch_and_empty() {
        let challenge = CaptchaChallenge {
            text: "aB3xY7".to_string(),
        };
        assert!(!challenge.verify("ab3xy8"));
        assert!(!challenge.verify(""));
    }

    #[test]
    fn regeneration_invalidates_old_response() {
        // A response matching the old challenge only passes against the new
        // one if the texts happen to collide, which we rule out explicitly.
        let old = CaptchaChallenge {
            text: "aB3xY7".to_string(),
        };
        let new = CaptchaChallenge {
            text: "Qr9ZtK".to_string(),
        };
        assert!(old.verify("ab3xy7"));
        assert!(!new.verify("ab3xy7"));
    }
}
