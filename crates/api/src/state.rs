use std::sync::Arc;

use ccrp_core::identity::IdentityProvider;
use ccrp_core::notify::NotificationSink;

use crate::config::ServerConfig;
use crate::sessions::{AuthSessions, ReportSessions};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Report wizard sessions.
    pub reports: Arc<ReportSessions>,
    /// Login / forgot-login-id flow sessions.
    pub auth: Arc<AuthSessions>,
    /// External identity collaborator.
    pub identity: Arc<dyn IdentityProvider>,
    /// Injected notification sink; flows emit user-visible notices here.
    pub notifier: Arc<dyn NotificationSink>,
}
