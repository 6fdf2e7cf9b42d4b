//! Core domain types for sessions, token bundles, and meeting requests

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque server-issued session identifier, carried by the client as a signed
/// cookie value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh identifier (UUID v7, time-ordered).
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Credential material obtained from the provider's token endpoint.
///
/// Owned exclusively by one session, held in process memory only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenBundle {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub token_type: String,
    /// Lifetime in seconds as reported by the provider (0 when absent)
    pub expires_in: i64,
    /// Absolute expiry computed at exchange time
    pub expires_at: Option<DateTime<Utc>>,
    pub scope: Option<String>,
}

impl TokenBundle {
    /// Build a bundle from token-endpoint response fields, computing the
    /// absolute expiry from the relative lifetime.
    #[must_use]
    pub fn new(
        access_token: String,
        refresh_token: Option<String>,
        token_type: String,
        expires_in: i64,
        scope: Option<String>,
    ) -> Self {
        let expires_at = (expires_in > 0).then(|| Utc::now() + Duration::seconds(expires_in));
        Self { access_token, refresh_token, token_type, expires_in, expires_at, scope }
    }
}

/// Server-side session record: one browser, one optional token bundle.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub created_at: DateTime<Utc>,
    pub tokens: Option<TokenBundle>,
}

impl Session {
    /// Create an empty session (no credentials yet).
    #[must_use]
    pub fn new(id: SessionId) -> Self {
        Self { id, created_at: Utc::now(), tokens: None }
    }

    /// Whether this session holds provider credentials.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.tokens.is_some()
    }
}

/// Ephemeral description of the timed resource to create. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingRequest {
    pub summary: String,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// IANA timezone name sent alongside the instants
    pub timezone: String,
    /// Per-call conference-creation idempotency token
    pub request_id: String,
}

/// Result of a successful provider call: the event plus its join link.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedMeeting {
    pub event_id: String,
    pub join_link: String,
}
