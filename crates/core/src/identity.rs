//! Interface to the external identity collaborator.
//!
//! The portal does not implement authentication. It hands a synthesized
//! identifier/secret pair to an external service and acts on the outcome;
//! when the identity does not exist yet, it provisions one with the same
//! values, matching the original portal's sign-in-or-sign-up behaviour.

use async_trait::async_trait;

/// Result of a sign-in attempt against the collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInOutcome {
    /// The identity exists and the secret matched.
    Success,
    /// No identity is registered under the identifier.
    NotFound,
}

/// Failures reported by the identity collaborator.
///
/// Never fatal: a failure surfaces as a user-visible notice and blocks
/// progression, leaving flow state unchanged. No retry is attempted.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The service could not be reached or returned a malformed response.
    #[error("Identity service unavailable: {0}")]
    Unavailable(String),

    /// The service rejected the credentials or the provisioning request.
    #[error("Identity service rejected the request: {0}")]
    Rejected(String),
}

/// Opaque capability for identity sign-in and provisioning.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Attempt to sign in with the given identifier and secret.
    async fn sign_in(&self, identifier: &str, secret: &str)
        -> Result<SignInOutcome, IdentityError>;

    /// Provision a new identity. `redirect_target` is where the citizen
    /// lands after the collaborator confirms the identity.
    async fn provision(
        &self,
        identifier: &str,
        secret: &str,
        redirect_target: &str,
    ) -> Result<(), IdentityError>;
}
