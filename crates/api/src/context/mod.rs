//! Application context - dependency injection container

use std::sync::Arc;

use meetlink_core::{AuthFlowService, MeetingService, SessionStore};
use meetlink_domain::Config;
use meetlink_infra::{
    GoogleAuthClient, GoogleCalendarClient, InMemorySessionStore, SessionCookieCodec,
};

/// Application context - holds all services and dependencies
///
/// Cloning is cheap; every service is behind an `Arc`. The context doubles as
/// the axum router state.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    pub sessions: Arc<dyn SessionStore>,
    pub auth_flow: Arc<AuthFlowService>,
    pub meetings: Arc<MeetingService>,
    pub cookie_codec: SessionCookieCodec,
}

impl AppContext {
    /// Create a context with the default in-memory session store
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_store(config, Arc::new(InMemorySessionStore::new()))
    }

    /// Create a context over an explicit session store
    ///
    /// Tests use this to keep a handle on the store and inspect sessions
    /// after driving the router.
    #[must_use]
    pub fn with_store(config: Config, sessions: Arc<dyn SessionStore>) -> Self {
        let auth_client = Arc::new(GoogleAuthClient::new(config.oauth.clone()));
        let calendar_client = Arc::new(GoogleCalendarClient::new(&config.meeting));
        let cookie_codec = SessionCookieCodec::new(&config.session.secret);

        let auth_flow = Arc::new(AuthFlowService::new(auth_client, Arc::clone(&sessions)));
        let meetings = Arc::new(MeetingService::new(
            calendar_client,
            Arc::clone(&sessions),
            config.meeting.clone(),
        ));

        Self { config: Arc::new(config), sessions, auth_flow, meetings, cookie_codec }
    }
}
