//! In-memory session store
//!
//! DashMap-backed implementation of the session store port. Entries live for
//! the process lifetime; cookie expiry is what retires a browser's session,
//! so there is no sweeper.

use async_trait::async_trait;
use dashmap::DashMap;
use meetlink_core::session_ports::SessionStore;
use meetlink_domain::{Result, Session, SessionId};

/// Process-held session store
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<SessionId, Session>,
}

impl InMemorySessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self { sessions: DashMap::new() }
    }

    /// Number of live sessions
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, id: &SessionId) -> Result<Option<Session>> {
        Ok(self.sessions.get(id).map(|entry| entry.clone()))
    }

    async fn set(&self, session: Session) -> Result<()> {
        self.sessions.insert(session.id.clone(), session);
        Ok(())
    }

    async fn delete(&self, id: &SessionId) -> Result<()> {
        self.sessions.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use meetlink_domain::TokenBundle;

    use super::*;

    fn bundle() -> TokenBundle {
        TokenBundle::new("atk".to_string(), None, "Bearer".to_string(), 3600, None)
    }

    /// Validates basic store operations.
    ///
    /// Assertions:
    /// - Unknown ids read as None
    /// - Set/get round-trips the record, delete removes it
    #[tokio::test]
    async fn test_set_get_delete() {
        let store = InMemorySessionStore::new();
        let id = SessionId::generate();

        assert!(store.get(&id).await.unwrap().is_none());

        store.set(Session::new(id.clone())).await.unwrap();
        assert!(store.get(&id).await.unwrap().is_some());
        assert_eq!(store.len(), 1);

        store.delete(&id).await.unwrap();
        assert!(store.get(&id).await.unwrap().is_none());
        assert!(store.is_empty());
    }

    /// Tokens written into one session are invisible to every other session.
    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = InMemorySessionStore::new();
        let alpha = SessionId::generate();
        let beta = SessionId::generate();

        let mut authorized = Session::new(alpha.clone());
        authorized.tokens = Some(bundle());
        store.set(authorized).await.unwrap();
        store.set(Session::new(beta.clone())).await.unwrap();

        assert!(store.get(&alpha).await.unwrap().unwrap().is_authenticated());
        assert!(!store.get(&beta).await.unwrap().unwrap().is_authenticated());
    }

    /// Set replaces in place: completing authorization twice keeps one record.
    #[tokio::test]
    async fn test_set_replaces_existing_record() {
        let store = InMemorySessionStore::new();
        let id = SessionId::generate();

        store.set(Session::new(id.clone())).await.unwrap();
        let mut updated = Session::new(id.clone());
        updated.tokens = Some(bundle());
        store.set(updated).await.unwrap();

        assert_eq!(store.len(), 1);
        assert!(store.get(&id).await.unwrap().unwrap().is_authenticated());
    }
}
