//! Identity provider implementations.
//!
//! [`http::HttpIdentity`] talks to the real external service;
//! [`memory::InMemoryIdentity`] backs local development and tests.

pub mod http;
pub mod memory;

use std::sync::Arc;

use ccrp_core::identity::IdentityProvider;

use crate::config::ServerConfig;

/// Pick the identity provider for this deployment.
///
/// An HTTP provider when `IDENTITY_BASE_URL` is configured, otherwise the
/// in-memory one (local development only; identities vanish on restart).
pub fn provider_from_config(config: &ServerConfig) -> Arc<dyn IdentityProvider> {
    match &config.identity_base_url {
        Some(base_url) => {
            tracing::info!(%base_url, "Using HTTP identity provider");
            Arc::new(http::HttpIdentity::new(base_url.clone()))
        }
        None => {
            tracing::warn!("IDENTITY_BASE_URL not set; using in-memory identity provider");
            Arc::new(memory::InMemoryIdentity::new())
        }
    }
}
