/// Flow sessions are keyed by random UUIDs; there is no database identity.
pub type SessionId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
