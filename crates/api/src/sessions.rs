//! In-memory session stores for the report wizard and auth flows.
//!
//! All flow state is per-session and lives only in process memory; deleting
//! a session (or restarting the server) discards it, matching the portal's
//! no-persistence contract. Thread-safe via interior `RwLock`; designed to
//! be wrapped in `Arc` and shared across the application.

use std::collections::HashMap;

use ccrp_core::auth::AuthFlow;
use ccrp_core::error::CoreError;
use ccrp_core::types::SessionId;
use ccrp_core::wizard::ReportWizard;
use tokio::sync::RwLock;

/// Generic keyed store for one kind of flow session.
///
/// No session is ever shared between flows: each entry is exclusively owned
/// by the citizen driving it, so a plain map behind a lock suffices.
pub struct SessionStore<T> {
    entity: &'static str,
    inner: RwLock<HashMap<SessionId, T>>,
}

impl<T> SessionStore<T> {
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Insert a new session under a fresh random ID.
    pub async fn insert(&self, session: T) -> SessionId {
        let id = uuid::Uuid::new_v4();
        self.inner.write().await.insert(id, session);
        id
    }

    /// Run a closure against a session, propagating its result.
    ///
    /// The lock is held for the duration of the closure, which keeps each
    /// session operation atomic.
    pub async fn update<R>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut T) -> Result<R, CoreError>,
    ) -> Result<R, CoreError> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id).ok_or(CoreError::NotFound {
            entity: self.entity,
            id,
        })?;
        f(session)
    }

    /// Remove a session by ID.
    pub async fn remove(&self, id: SessionId) -> Result<(), CoreError> {
        self.inner
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(CoreError::NotFound {
                entity: self.entity,
                id,
            })
    }

    /// Current number of live sessions.
    pub async fn count(&self) -> usize {
        self.inner.read().await.len()
    }
}

impl<T: Clone> SessionStore<T> {
    /// Fetch a snapshot of a session.
    pub async fn get(&self, id: SessionId) -> Result<T, CoreError> {
        self.inner
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(CoreError::NotFound {
                entity: self.entity,
                id,
            })
    }
}

/// Store for report wizard sessions.
pub type ReportSessions = SessionStore<ReportWizard>;

/// Store for login / forgot-login-id flow sessions.
pub type AuthSessions = SessionStore<AuthFlow>;

pub fn report_sessions() -> ReportSessions {
    SessionStore::new("ReportSession")
}

pub fn auth_sessions() -> AuthSessions {
    SessionStore::new("AuthSession")
}
