use chrono::{DateTime, Local};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NoteId(u64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out ids in creation order. Ids are never reused within one board.
#[derive(Debug)]
pub(crate) struct NoteIdGen {
    next: u64,
}

impl NoteIdGen {
    pub(crate) fn new() -> Self {
        Self { next: 1 }
    }

    pub(crate) fn next_id(&mut self) -> NoteId {
        let id = NoteId(self.next);
        self.next += 1;
        id
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Note {
    pub(crate) id: NoteId,
    pub(crate) content: String,
    pub(crate) created_at: DateTime<Local>,
    pub(crate) updated_at: DateTime<Local>,
}

impl Note {
    pub(crate) fn new(id: NoteId, content: impl Into<String>) -> Self {
        let now = Local::now();
        Self {
            id,
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns `false` and leaves `updated_at` alone when nothing changed.
    pub(crate) fn replace_content(&mut self, content: impl Into<String>) -> bool {
        let content = content.into();
        if content == self.content {
            return false;
        }
        self.content = content;
        self.updated_at = Local::now();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut ids = NoteIdGen::new();
        let first = ids.next_id();
        let second = ids.next_id();
        let third = ids.next_id();
        assert!(first < second && second < third);
        assert_eq!(first.to_string(), "1");
        assert_eq!(third.to_string(), "3");
    }

    #[test]
    fn replace_content_keeps_identity() {
        let mut ids = NoteIdGen::new();
        let mut note = Note::new(ids.next_id(), "Hello");
        let created_at = note.created_at;
        assert!(note.replace_content("Hello!"));
        assert_eq!(note.id.to_string(), "1");
        assert_eq!(note.content, "Hello!");
        assert_eq!(note.created_at, created_at);
        assert!(note.updated_at >= created_at);
    }

    #[test]
    fn unchanged_content_keeps_updated_at() {
        let mut ids = NoteIdGen::new();
        let mut note = Note::new(ids.next_id(), "Hello");
        assert!(!note.replace_content("Hello"));
        assert_eq!(note.updated_at, note.created_at);
    }
}
