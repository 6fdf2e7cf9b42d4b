//! Meeting creation service - core business logic

use std::sync::Arc;

use chrono::{Duration, Utc};
use meetlink_domain::constants::{MEETING_REQUEST_ID_PREFIX, UNAUTHENTICATED_MESSAGE};
use meetlink_domain::{
    CreatedMeeting, MeetLinkError, MeetingConfig, MeetingRequest, Result, SessionId,
};
use tracing::info;
use uuid::Uuid;

use super::ports::MeetingProvider;
use crate::session_ports::SessionStore;

/// Creates instant meetings on behalf of an authorized session
pub struct MeetingService {
    provider: Arc<dyn MeetingProvider>,
    sessions: Arc<dyn SessionStore>,
    settings: MeetingConfig,
}

impl MeetingService {
    /// Create a new meeting service
    pub fn new(
        provider: Arc<dyn MeetingProvider>,
        sessions: Arc<dyn SessionStore>,
        settings: MeetingConfig,
    ) -> Self {
        Self { provider, sessions, settings }
    }

    /// Create an instant meeting for the session and return its join link.
    ///
    /// Precondition: the session must hold a token bundle; a violation fails
    /// with an authorization error before any provider traffic. A single
    /// attempt is made per call, nothing is retried.
    ///
    /// # Errors
    /// Returns an authorization error when the session has no bundle and a
    /// provider error when the creation call fails for any reason.
    pub async fn create_meeting(&self, session_id: &SessionId) -> Result<CreatedMeeting> {
        let bundle = self
            .sessions
            .get(session_id)
            .await?
            .and_then(|session| session.tokens)
            .ok_or_else(|| MeetLinkError::Auth(UNAUTHENTICATED_MESSAGE.to_string()))?;

        let request = self.build_request();
        let created = self.provider.create_event(&bundle.access_token, &request).await?;

        info!(event_id = %created.event_id, "meeting created");
        Ok(created)
    }

    /// Time-box the meeting at now..now+duration with a fresh per-call
    /// idempotency token (UUID v7 embeds the millisecond timestamp, so
    /// overlapping calls never collide at the provider).
    fn build_request(&self) -> MeetingRequest {
        let start = Utc::now();
        let end = start + Duration::minutes(self.settings.duration_minutes);

        MeetingRequest {
            summary: self.settings.summary.clone(),
            description: self.settings.description.clone(),
            start,
            end,
            timezone: self.settings.timezone.clone(),
            request_id: format!("{MEETING_REQUEST_ID_PREFIX}-{}", Uuid::now_v7()),
        }
    }
}
