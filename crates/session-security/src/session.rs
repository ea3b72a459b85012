//! Session store: session id -> user id

use dashmap::DashMap;
use uuid::Uuid;

/// Storage behind the session authenticator.
///
/// Implementations must be safe to share between request handlers; every
/// operation completes synchronously.
pub trait SessionStore: Send + Sync {
    fn insert(&self, session_id: String, user_id: String);
    fn get(&self, session_id: &str) -> Option<String>;
    /// Returns the user id the session pointed at, if it was tracked.
    fn remove(&self, session_id: &str) -> Option<String>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local store. Entries never expire and the map is unbounded.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: DashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn insert(&self, session_id: String, user_id: String) {
        self.sessions.insert(session_id, user_id);
    }

    fn get(&self, session_id: &str) -> Option<String> {
        self.sessions.get(session_id).map(|entry| entry.value().clone())
    }

    fn remove(&self, session_id: &str) -> Option<String> {
        self.sessions.remove(session_id).map(|(_, user_id)| user_id)
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}

/// Fresh unguessable session id (UUID v4, 122 random bits).
pub fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}
