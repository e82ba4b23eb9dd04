//! In-memory identity provider for local development and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use ccrp_core::identity::{IdentityError, IdentityProvider, SignInOutcome};
use tokio::sync::RwLock;

/// Identity provider holding accounts in a process-local map.
///
/// Matches the collaborator contract exactly: sign-in distinguishes a
/// missing identity from a rejected secret, and provisioning registers a
/// new identifier/secret pair.
pub struct InMemoryIdentity {
    accounts: RwLock<HashMap<String, String>>,
}

impl InMemoryIdentity {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// Pre-register an account (test setup).
    pub async fn with_account(self, identifier: &str, secret: &str) -> Self {
        self.accounts
            .write()
            .await
            .insert(identifier.to_string(), secret.to_string());
        self
    }

    pub async fn account_count(&self) -> usize {
        self.accounts.read().await.len()
    }
}

impl Default for InMemoryIdentity {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentity {
    async fn sign_in(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<SignInOutcome, IdentityError> {
        let accounts = self.accounts.read().await;
        match accounts.get(identifier) {
            None => Ok(SignInOutcome::NotFound),
            Some(stored) if stored == secret => Ok(SignInOutcome::Success),
            Some(_) => Err(IdentityError::Rejected(
                "Invalid login credentials".to_string(),
            )),
        }
    }

    async fn provision(
        &self,
        identifier: &str,
        secret: &str,
        _redirect_target: &str,
    ) -> Result<(), IdentityError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(identifier) {
            return Err(IdentityError::Rejected(format!(
                "Identity '{identifier}' is already registered"
            )));
        }
        accounts.insert(identifier.to_string(), secret.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn sign_in_distinguishes_missing_from_rejected() {
        let identity = InMemoryIdentity::new()
            .with_account("user9876543210@cybercrime.gov.in", "citizen019876543210")
            .await;

        let outcome = identity
            .sign_in("user9876543210@cybercrime.gov.in", "citizen019876543210")
            .await
            .unwrap();
        assert_eq!(outcome, SignInOutcome::Success);

        let outcome = identity
            .sign_in("unknown@cybercrime.gov.in", "whatever")
            .await
            .unwrap();
        assert_eq!(outcome, SignInOutcome::NotFound);

        let result = identity
            .sign_in("user9876543210@cybercrime.gov.in", "wrong-secret")
            .await;
        assert_matches!(result, Err(IdentityError::Rejected(_)));
    }

    #[tokio::test]
    async fn provision_registers_once() {
        let identity = InMemoryIdentity::new();
        identity
            .provision("new@cybercrime.gov.in", "secret", "http://localhost/")
            .await
            .unwrap();
        assert_eq!(identity.account_count().await, 1);

        let result = identity
            .provision("new@cybercrime.gov.in", "secret", "http://localhost/")
            .await;
        assert_matches!(result, Err(IdentityError::Rejected(_)));
    }
}
