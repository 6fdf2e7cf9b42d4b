use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use meetlink_core::auth::ports::AuthorizationProvider;
use meetlink_core::meeting::ports::MeetingProvider;
use meetlink_core::session_ports::SessionStore;
use meetlink_domain::{
    CreatedMeeting, MeetLinkError, MeetingRequest, Result as DomainResult, Session, SessionId,
    TokenBundle,
};

/// In-memory mock for `AuthorizationProvider`.
///
/// Returns a fixed authorization URL and a scripted exchange outcome while
/// recording every code it sees.
#[derive(Clone)]
pub struct MockAuthorizationProvider {
    outcome: Arc<Mutex<Result<TokenBundle, String>>>,
    codes: Arc<Mutex<Vec<String>>>,
}

impl MockAuthorizationProvider {
    /// Mock whose exchange always yields the given bundle.
    pub fn succeeding(bundle: TokenBundle) -> Self {
        Self { outcome: Arc::new(Mutex::new(Ok(bundle))), codes: Arc::new(Mutex::new(Vec::new())) }
    }

    /// Mock whose exchange always fails with the given message.
    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Arc::new(Mutex::new(Err(message.to_string()))),
            codes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every authorization code the mock has been asked to exchange.
    pub fn seen_codes(&self) -> Vec<String> {
        self.codes.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthorizationProvider for MockAuthorizationProvider {
    fn authorization_url(&self) -> DomainResult<String> {
        Ok("https://auth.example/consent?client_id=test-client".to_string())
    }

    async fn exchange_code(&self, code: &str) -> DomainResult<TokenBundle> {
        self.codes.lock().unwrap().push(code.to_string());
        self.outcome.lock().unwrap().clone().map_err(MeetLinkError::Auth)
    }
}

/// In-memory mock for `MeetingProvider`.
///
/// Records every request (and the bearer token used) so tests can assert the
/// no-traffic-when-unauthenticated invariant and inspect idempotency tokens.
#[derive(Clone)]
pub struct MockMeetingProvider {
    outcome: Arc<Mutex<Result<CreatedMeeting, String>>>,
    requests: Arc<Mutex<Vec<(String, MeetingRequest)>>>,
}

impl MockMeetingProvider {
    /// Mock that always answers with the given created meeting.
    pub fn succeeding(meeting: CreatedMeeting) -> Self {
        Self {
            outcome: Arc::new(Mutex::new(Ok(meeting))),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Mock that always fails with the given message.
    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Arc::new(Mutex::new(Err(message.to_string()))),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of create calls that reached the mock.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Captured (access token, request) pairs in call order.
    pub fn captured(&self) -> Vec<(String, MeetingRequest)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl MeetingProvider for MockMeetingProvider {
    async fn create_event(
        &self,
        access_token: &str,
        request: &MeetingRequest,
    ) -> DomainResult<CreatedMeeting> {
        self.requests.lock().unwrap().push((access_token.to_string(), request.clone()));
        self.outcome.lock().unwrap().clone().map_err(MeetLinkError::Provider)
    }
}

/// Plain HashMap-backed session store for service tests.
#[derive(Default, Clone)]
pub struct MemorySessionStore {
    sessions: Arc<Mutex<HashMap<String, Session>>>,
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, id: &SessionId) -> DomainResult<Option<Session>> {
        Ok(self.sessions.lock().unwrap().get(id.as_str()).cloned())
    }

    async fn set(&self, session: Session) -> DomainResult<()> {
        self.sessions.lock().unwrap().insert(session.id.as_str().to_string(), session);
        Ok(())
    }

    async fn delete(&self, id: &SessionId) -> DomainResult<()> {
        self.sessions.lock().unwrap().remove(id.as_str());
        Ok(())
    }
}

/// Store whose every call fails, for unavailability paths.
#[derive(Default, Clone)]
pub struct FailingSessionStore;

#[async_trait]
impl SessionStore for FailingSessionStore {
    async fn get(&self, _id: &SessionId) -> DomainResult<Option<Session>> {
        Err(MeetLinkError::Session("store offline".to_string()))
    }

    async fn set(&self, _session: Session) -> DomainResult<()> {
        Err(MeetLinkError::Session("store offline".to_string()))
    }

    async fn delete(&self, _id: &SessionId) -> DomainResult<()> {
        Err(MeetLinkError::Session("store offline".to_string()))
    }
}
