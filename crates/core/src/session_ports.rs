//! Port interface for session storage

use async_trait::async_trait;
use meetlink_domain::{Result, Session, SessionId};

/// Trait for the cookie-addressed session store
///
/// One record per browser. A session's token bundle is only ever written by
/// that session's own authorization callback, so implementations need
/// per-entry synchronization but no cross-session coordination.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch a session by id
    async fn get(&self, id: &SessionId) -> Result<Option<Session>>;

    /// Insert or replace a session record
    async fn set(&self, session: Session) -> Result<()>;

    /// Remove a session
    async fn delete(&self, id: &SessionId) -> Result<()>;
}
