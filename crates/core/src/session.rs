//! Conversation sessions.
//!
//! A session owns an append-only history of `(speaker, message)` entries.
//! Entries are never edited or removed; the history lives as long as the
//! session does and is not persisted.

use crate::constants::DEFAULT_MAX_SESSIONS;
use crate::error::{ChatError, ChatResult};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// Who produced a conversation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Speaker {
    You,
    Chatbot,
}

impl Speaker {
    pub fn label(self) -> &'static str {
        match self {
            Speaker::You => "You",
            Speaker::Chatbot => "Chatbot",
        }
    }
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationEntry {
    pub speaker: Speaker,
    pub message: String,
}

/// Append-only conversation history for one session.
#[derive(Debug, Clone, Default)]
pub struct SessionHistory {
    entries: Vec<ConversationEntry>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, speaker: Speaker, message: impl Into<String>) {
        self.entries.push(ConversationEntry {
            speaker,
            message: message.into(),
        });
    }

    /// Record a question and its reply, in that order.
    pub fn push_exchange(&mut self, question: impl Into<String>, reply: impl Into<String>) {
        self.push(Speaker::You, question);
        self.push(Speaker::Chatbot, reply);
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// In-memory store of live sessions, keyed by session id.
///
/// The number of live sessions is capped; callers free slots with
/// [`SessionStore::remove`]. The lock is only held for the duration of a single
/// read or append and is never held across an `.await`.
#[derive(Debug)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, SessionHistory>>,
    max_sessions: usize,
}

impl SessionStore {
    /// A store capped at [`DEFAULT_MAX_SESSIONS`] live sessions.
    pub fn new() -> Self {
        Self::with_max_sessions(DEFAULT_MAX_SESSIONS)
    }

    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions,
        }
    }

    // History entries are plain data; a panic while holding the lock cannot
    // leave them half-written, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<Uuid, SessionHistory>> {
        self.sessions.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Uuid, SessionHistory>> {
        self.sessions.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Start a new, empty session and return its id.
    ///
    /// # Errors
    /// Returns `ChatError::SessionLimitReached` when the store already holds
    /// `max_sessions` live sessions.
    pub fn create(&self) -> ChatResult<Uuid> {
        let mut sessions = self.write();
        if sessions.len() >= self.max_sessions {
            tracing::warn!("session limit of {} reached", self.max_sessions);
            return Err(ChatError::SessionLimitReached {
                max: self.max_sessions,
            });
        }

        let id = Uuid::new_v4();
        sessions.insert(id, SessionHistory::new());
        tracing::debug!("created session {}", id);
        Ok(id)
    }

    /// End a session, dropping its history. Returns `false` if it was unknown.
    pub fn remove(&self, id: Uuid) -> bool {
        let removed = self.write().remove(&id).is_some();
        if removed {
            tracing::debug!("removed session {}", id);
        }
        removed
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.read().contains_key(&id)
    }

    /// Snapshot of a session's history, or `None` if the session is unknown.
    pub fn history(&self, id: Uuid) -> Option<Vec<ConversationEntry>> {
        self.read().get(&id).map(|h| h.entries().to_vec())
    }

    /// Append a question and its reply to a session.
    ///
    /// # Errors
    /// Returns `ChatError::SessionNotFound` if `id` is not a live session.
    pub fn append_exchange(&self, id: Uuid, question: &str, reply: &str) -> ChatResult<()> {
        let mut sessions = self.write();
        let history = sessions.get_mut(&id).ok_or(ChatError::SessionNotFound(id))?;
        history.push_exchange(question, reply);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_exchange_records_question_then_reply() {
        let mut history = SessionHistory::new();
        history.push_exchange("dengue symptoms", "High fever");

        assert_eq!(
            history.entries(),
            &[
                ConversationEntry {
                    speaker: Speaker::You,
                    message: "dengue symptoms".into()
                },
                ConversationEntry {
                    speaker: Speaker::Chatbot,
                    message: "High fever".into()
                },
            ]
        );
    }

    #[test]
    fn test_store_appends_to_the_right_session() {
        let store = SessionStore::new();
        let a = store.create().unwrap();
        let b = store.create().unwrap();

        store.append_exchange(a, "q1", "r1").unwrap();
        store.append_exchange(a, "q2", "r2").unwrap();
        store.append_exchange(b, "q3", "r3").unwrap();

        let history_a = store.history(a).unwrap();
        assert_eq!(history_a.len(), 4);
        assert_eq!(history_a[2].message, "q2");
        assert_eq!(history_a[3].speaker, Speaker::Chatbot);
        assert_eq!(store.history(b).unwrap().len(), 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_unknown_session() {
        let store = SessionStore::new();
        let missing = Uuid::new_v4();

        assert!(store.history(missing).is_none());
        let err = store
            .append_exchange(missing, "q", "r")
            .expect_err("should reject unknown session");
        assert!(matches!(err, ChatError::SessionNotFound(id) if id == missing));
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_fails_once_limit_is_reached() {
        let store = SessionStore::with_max_sessions(3);
        let ids: Vec<_> = (0..3).map(|_| store.create().unwrap()).collect();

        let err = store.create().expect_err("fourth session should be refused");
        assert!(matches!(err, ChatError::SessionLimitReached { max: 3 }));
        assert_eq!(store.len(), 3);

        assert!(store.remove(ids[0]));
        store.create().expect("removing a session frees a slot");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_remove_drops_history() {
        let store = SessionStore::new();
        let id = store.create().unwrap();
        store.append_exchange(id, "q", "r").unwrap();

        assert!(store.remove(id));
        assert!(store.history(id).is_none());
        assert!(!store.remove(id), "second remove should report unknown");
        assert!(matches!(
            store.append_exchange(id, "q", "r"),
            Err(ChatError::SessionNotFound(_))
        ));
    }

    #[test]
    fn test_speaker_labels() {
        assert_eq!(Speaker::You.to_string(), "You");
        assert_eq!(Speaker::Chatbot.to_string(), "Chatbot");
    }
}
