//! Notes demo: a simulated remote API feeding a list store.
//!
//! [`NotesApi`] plays the remote service. Creating a note whose title is
//! already taken returns the stored note with a fresh timestamp, which the
//! store folds in as a replacement rather than a duplicate.

use all_is_list_core::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a note
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Creates a new random `NoteId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A note as returned by the API
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Note title
    pub title: String,
    /// When the API last stored the note
    pub saved_at: DateTime<Utc>,
}

impl Entity for Note {
    type Id = NoteId;

    fn id(&self) -> Option<&NoteId> {
        Some(&self.id)
    }
}

/// Errors from the simulated API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The title was empty or whitespace
    #[error("Note title cannot be empty")]
    EmptyTitle,
}

/// In-memory stand-in for a remote notes service
#[derive(Debug)]
pub struct NotesApi {
    notes: Mutex<Vec<Note>>,
    latency: Duration,
}

impl NotesApi {
    /// Creates a service answering after `latency`
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self {
            notes: Mutex::new(Vec::new()),
            latency,
        }
    }

    /// Create (or re-save) a note
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EmptyTitle`] for a blank title.
    pub async fn create_note(&self, title: String) -> Result<Note, ApiError> {
        tokio::time::sleep(self.latency).await;

        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(ApiError::EmptyTitle);
        }

        let mut notes = self.notes.lock().unwrap_or_else(PoisonError::into_inner);
        let saved_at = Utc::now();

        if let Some(existing) = notes.iter_mut().find(|note| note.title == title) {
            existing.saved_at = saved_at;
            return Ok(existing.clone());
        }

        let note = Note {
            id: NoteId::new(),
            title,
            saved_at,
        };
        notes.push(note.clone());
        Ok(note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use all_is_list_core::{CreateReducer, ListState};
    use all_is_list_runtime::{CreateActionConfig, Store, create_action};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_resaving_a_title_replaces_the_note() {
        let api = Arc::new(NotesApi::new(Duration::ZERO));
        let store = Store::new(ListState::new(), CreateReducer::new());
        let create = create_action(CreateActionConfig::for_list(store.clone(), move |title: String| {
            let api = Arc::clone(&api);
            async move { api.create_note(title).await }
        }));

        let first = create.call("Buy milk".to_string()).await.unwrap();
        let again = create.call("  Buy milk ".to_string()).await.unwrap();

        assert_eq!(first.id, again.id);
        let notes = store.snapshot();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes.items[0], again);
    }

    #[tokio::test]
    async fn test_blank_title_is_rejected() {
        let api = Arc::new(NotesApi::new(Duration::ZERO));
        let store = Store::new(ListState::<Note>::new(), CreateReducer::new());
        let create = create_action(CreateActionConfig::for_list(store.clone(), move |title: String| {
            let api = Arc::clone(&api);
            async move { api.create_note(title).await }
        }));

        assert_eq!(create.call("   ".to_string()).await, Err(ApiError::EmptyTitle));
        assert!(store.state(|s| s.is_creating));
    }
}
