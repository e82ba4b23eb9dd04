//! Tracing-backed notification sink.

use ccrp_core::notify::{Notice, NotificationSink, Severity};

/// Delivers notices as structured log lines.
///
/// The server has no push channel to the citizen's browser; clients read
/// outcomes from HTTP responses, and this sink gives operators the same
/// notices in the logs.
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Info | Severity::Success => {
                tracing::info!(title = %notice.title, body = %notice.body, "notice");
            }
            Severity::Error => {
                tracing::warn!(title = %notice.title, body = %notice.body, "notice");
            }
        }
    }
}
