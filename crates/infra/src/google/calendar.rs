//! Google Calendar event creation
//!
//! `events.insert` with conference data requested (`conferenceDataVersion=1`)
//! so the created event carries a Meet join link.

use std::time::Duration;

use async_trait::async_trait;
use chrono::SecondsFormat;
use meetlink_core::meeting::ports::MeetingProvider;
use meetlink_domain::{CreatedMeeting, MeetLinkError, MeetingConfig, MeetingRequest, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Google Calendar API client
pub struct GoogleCalendarClient {
    api_base: String,
    calendar_id: String,
    client: Client,
}

impl GoogleCalendarClient {
    /// Create a new client from the meeting settings
    #[must_use]
    pub fn new(settings: &MeetingConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            api_base: settings.api_base_url.trim_end_matches('/').to_string(),
            calendar_id: settings.calendar_id.clone(),
            client,
        }
    }

    /// Insert a conference-enabled event and return its id and join link
    ///
    /// # Errors
    /// Every failure mode of the call (transport, non-2xx status, unparseable
    /// body, event without a join link) is a provider error; the caller made
    /// it past authorization, so nothing here maps to 401.
    pub async fn insert_event(
        &self,
        access_token: &str,
        request: &MeetingRequest,
    ) -> Result<CreatedMeeting> {
        let url = format!("{}/calendars/{}/events", self.api_base, self.calendar_id);
        let body = EventResource::from_request(request);

        let response = self
            .client
            .post(&url)
            .bearer_auth(access_token)
            .query(&[("conferenceDataVersion", "1")])
            .json(&body)
            .send()
            .await
            .map_err(|e| MeetLinkError::Provider(format!("Google API request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MeetLinkError::Provider(format!(
                "Google API error ({status}): {error_text}"
            )));
        }

        let event: InsertedEvent = response
            .json()
            .await
            .map_err(|e| MeetLinkError::Provider(format!("Failed to parse event response: {e}")))?;

        let join_link = event.hangout_link.ok_or_else(|| {
            MeetLinkError::Provider("Created event carries no join link".to_string())
        })?;

        Ok(CreatedMeeting { event_id: event.id, join_link })
    }
}

#[async_trait]
impl MeetingProvider for GoogleCalendarClient {
    async fn create_event(
        &self,
        access_token: &str,
        request: &MeetingRequest,
    ) -> Result<CreatedMeeting> {
        self.insert_event(access_token, request).await
    }
}

#[derive(Debug, Serialize)]
struct EventResource {
    summary: String,
    description: String,
    start: EventDateTime,
    end: EventDateTime,
    #[serde(rename = "conferenceData")]
    conference_data: ConferenceData,
}

impl EventResource {
    fn from_request(request: &MeetingRequest) -> Self {
        Self {
            summary: request.summary.clone(),
            description: request.description.clone(),
            start: EventDateTime::new(request.start, &request.timezone),
            end: EventDateTime::new(request.end, &request.timezone),
            conference_data: ConferenceData {
                create_request: CreateConferenceRequest {
                    request_id: request.request_id.clone(),
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct EventDateTime {
    #[serde(rename = "dateTime")]
    date_time: String,
    #[serde(rename = "timeZone")]
    time_zone: String,
}

impl EventDateTime {
    fn new(instant: chrono::DateTime<chrono::Utc>, timezone: &str) -> Self {
        Self {
            date_time: instant.to_rfc3339_opts(SecondsFormat::Secs, true),
            time_zone: timezone.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ConferenceData {
    #[serde(rename = "createRequest")]
    create_request: CreateConferenceRequest,
}

#[derive(Debug, Serialize)]
struct CreateConferenceRequest {
    #[serde(rename = "requestId")]
    request_id: String,
}

#[derive(Debug, Deserialize)]
struct InsertedEvent {
    id: String,
    #[serde(rename = "hangoutLink")]
    hangout_link: Option<String>,
}
