//! Concurrent registry of live conversation sessions.
//!
//! Each session maps to its own append-only log; entries are independent,
//! so concurrent requests for different sessions never contend. Logs live
//! in memory only and vanish on process end.

use dashmap::DashMap;
use thiserror::Error;

use crate::responder::GREETING;

use super::ids::SessionId;
use super::types::Message;

/// Errors for session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The session id is unknown (never created, or already removed).
    #[error("unknown session: {0}")]
    NotFound(SessionId),
}

/// The pair of messages appended by one user turn.
#[derive(Clone, Debug)]
pub struct Turn {
    /// The user's question as recorded.
    pub user: Message,
    /// The guide's reply as recorded.
    pub assistant: Message,
}

/// In-memory session store keyed by [`SessionId`].
#[derive(Default)]
pub struct SessionRegistry {
    sessions: DashMap<SessionId, Vec<Message>>,
}

impl SessionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new session seeded with the assistant greeting.
    ///
    /// Returns the fresh id and a snapshot of the seeded log.
    pub fn create(&self) -> (SessionId, Vec<Message>) {
        let id = SessionId::new();
        let log = vec![Message::assistant(GREETING)];
        self.sessions.insert(id, log.clone());
        (id, log)
    }

    /// Snapshot of a session's log.
    ///
    /// # Errors
    /// Returns [`SessionError::NotFound`] for unknown ids.
    pub fn log(&self, id: SessionId) -> Result<Vec<Message>, SessionError> {
        self.sessions
            .get(&id)
            .map(|entry| entry.clone())
            .ok_or(SessionError::NotFound(id))
    }

    /// Record one user turn: exactly one user message followed by exactly
    /// one assistant message carrying the given answer.
    ///
    /// # Errors
    /// Returns [`SessionError::NotFound`] for unknown ids.
    pub fn record_exchange(
        &self,
        id: SessionId,
        question: &str,
        answer: &str,
    ) -> Result<Turn, SessionError> {
        let mut entry = self.sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        let turn = Turn {
            user: Message::user(question),
            assistant: Message::assistant(answer),
        };
        entry.push(turn.user.clone());
        entry.push(turn.assistant.clone());
        Ok(turn)
    }

    /// Empty a session's log (the clear-history action).
    ///
    /// The greeting is only seeded at creation, so a reset log has zero
    /// entries.
    ///
    /// # Errors
    /// Returns [`SessionError::NotFound`] for unknown ids.
    pub fn reset(&self, id: SessionId) -> Result<(), SessionError> {
        let mut entry = self.sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        entry.clear();
        Ok(())
    }

    /// Drop a session entirely. Returns whether it existed.
    pub fn remove(&self, id: SessionId) -> bool {
        self.sessions.remove(&id).is_some()
    }

    /// Number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::types::Role;

    #[test]
    fn test_create_seeds_single_greeting() {
        let registry = SessionRegistry::new();
        let (_, log) = registry.create();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].role, Role::Assistant);
        assert_eq!(log[0].content, GREETING);
    }

    #[test]
    fn test_exchange_appends_user_then_assistant() -> Result<(), SessionError> {
        let registry = SessionRegistry::new();
        let (id, _) = registry.create();

        let turn = registry.record_exchange(id, "How tall is it?", "Very tall.")?;
        assert_eq!(turn.user.role, Role::User);
        assert_eq!(turn.assistant.role, Role::Assistant);

        let log = registry.log(id)?;
        assert_eq!(log.len(), 3);
        assert_eq!(log[1].role, Role::User);
        assert_eq!(log[1].content, "How tall is it?");
        assert_eq!(log[2].role, Role::Assistant);
        assert_eq!(log[2].content, "Very tall.");
        Ok(())
    }

    #[test]
    fn test_reset_empties_log() -> Result<(), SessionError> {
        let registry = SessionRegistry::new();
        let (id, _) = registry.create();
        registry.record_exchange(id, "q", "a")?;

        registry.reset(id)?;
        assert_eq!(registry.log(id)?.len(), 0);
        Ok(())
    }

    #[test]
    fn test_unknown_session_is_not_found() {
        let registry = SessionRegistry::new();
        let id = SessionId::new();
        assert!(matches!(registry.log(id), Err(SessionError::NotFound(_))));
        assert!(matches!(
            registry.record_exchange(id, "q", "a"),
            Err(SessionError::NotFound(_))
        ));
        assert!(matches!(registry.reset(id), Err(SessionError::NotFound(_))));
    }

    #[test]
    fn test_remove_drops_session() {
        let registry = SessionRegistry::new();
        let (id, _) = registry.create();
        assert!(registry.remove(id));
        assert!(!registry.remove(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_sessions_are_isolated() -> Result<(), SessionError> {
        let registry = SessionRegistry::new();
        let (a, _) = registry.create();
        let (b, _) = registry.create();

        registry.record_exchange(a, "q", "a")?;
        assert_eq!(registry.log(a)?.len(), 3);
        assert_eq!(registry.log(b)?.len(), 1);
        Ok(())
    }
}
