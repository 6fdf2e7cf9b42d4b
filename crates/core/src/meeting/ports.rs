//! Port interfaces for meeting creation

use async_trait::async_trait;
use meetlink_domain::{CreatedMeeting, MeetingRequest, Result};

/// Trait for the provider's calendar resource-creation API
#[async_trait]
pub trait MeetingProvider: Send + Sync {
    /// Create a conference-enabled event and return its join link
    async fn create_event(
        &self,
        access_token: &str,
        request: &MeetingRequest,
    ) -> Result<CreatedMeeting>;
}
