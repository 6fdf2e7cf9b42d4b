//! Authorization flow service - core business logic

use std::sync::Arc;

use meetlink_domain::{Result, Session, SessionId};
use tracing::info;

use super::ports::AuthorizationProvider;
use crate::session_ports::SessionStore;

/// Orchestrates the redirect-based OAuth2 authorization-code exchange
pub struct AuthFlowService {
    provider: Arc<dyn AuthorizationProvider>,
    sessions: Arc<dyn SessionStore>,
}

impl AuthFlowService {
    /// Create a new authorization flow service
    pub fn new(provider: Arc<dyn AuthorizationProvider>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { provider, sessions }
    }

    /// Build the provider authorization URL.
    ///
    /// No local state is mutated; the caller answers with a redirect.
    ///
    /// # Errors
    /// Returns a configuration error when the client settings cannot produce
    /// a valid URL.
    pub fn begin_authorization(&self) -> Result<String> {
        self.provider.authorization_url()
    }

    /// Exchange `code` for a token bundle and store it in the session.
    ///
    /// The session is mutated only on a successful exchange; any failure
    /// propagates and leaves the session without a bundle.
    ///
    /// # Errors
    /// Returns an authorization error when the provider rejects the code and
    /// a session error when the store cannot be written.
    pub async fn complete_authorization(&self, session_id: &SessionId, code: &str) -> Result<()> {
        let bundle = self.provider.exchange_code(code).await?;

        let mut session = match self.sessions.get(session_id).await? {
            Some(existing) => existing,
            None => Session::new(session_id.clone()),
        };
        session.tokens = Some(bundle);
        self.sessions.set(session).await?;

        info!(session_id = %session_id, "authorization completed");
        Ok(())
    }

    /// Whether the session currently holds a token bundle.
    ///
    /// # Errors
    /// Returns a session error when the store cannot be read; the status
    /// endpoint maps that to "not logged in".
    pub async fn is_authenticated(&self, session_id: &SessionId) -> Result<bool> {
        Ok(self
            .sessions
            .get(session_id)
            .await?
            .is_some_and(|session| session.is_authenticated()))
    }
}
