//! The note board: a draft buffer, the saved notes, and the edit / copied
//! markers layered on top of them.
//!
//! Every operation is a single synchronous transition. The clipboard write is
//! the only asynchronous step, so copying is split into [`NoteBoard::copy_request`]
//! and the completion callbacks [`NoteBoard::copy_succeeded`] /
//! [`NoteBoard::copy_failed`].

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::{
    clipboard::ClipboardError,
    config::COPIED_INDICATOR_MS,
    domain::note::{Note, NoteId, NoteIdGen},
};

mod draft;

pub(crate) use draft::Draft;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum SaveOutcome {
    Created(NoteId),
    Updated(NoteId),
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CopyRequest {
    pub(crate) id: NoteId,
    pub(crate) text: String,
}

/// The note whose copy last succeeded, and when its indicator expires.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct CopiedMarker {
    pub(crate) id: NoteId,
    pub(crate) expires_at: Instant,
}

#[derive(Debug)]
pub(crate) struct NoteBoard {
    draft: Draft,
    notes: Vec<Note>,
    editing: Option<NoteId>,
    copied: Option<CopiedMarker>,
    ids: NoteIdGen,
    copied_for: Duration,
}

impl NoteBoard {
    pub(crate) fn new() -> Self {
        Self::with_copied_duration(Duration::from_millis(COPIED_INDICATOR_MS))
    }

    pub(crate) fn with_copied_duration(copied_for: Duration) -> Self {
        Self {
            draft: Draft::new(),
            notes: Vec::new(),
            editing: None,
            copied: None,
            ids: NoteIdGen::new(),
            copied_for,
        }
    }

    pub(crate) fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub(crate) fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub(crate) fn draft(&self) -> &Draft {
        &self.draft
    }

    pub(crate) fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    /// The note under edit. A reference to a note that no longer exists reads
    /// as `None`.
    pub(crate) fn editing(&self) -> Option<NoteId> {
        self.editing.filter(|id| self.note(*id).is_some())
    }

    pub(crate) fn copied(&self) -> Option<NoteId> {
        self.copied.map(|marker| marker.id)
    }

    pub(crate) fn can_save(&self) -> bool {
        !self.draft.is_blank()
    }

    pub(crate) fn update_draft(&mut self, text: &str) {
        self.draft.set_text(text);
    }

    pub(crate) fn save(&mut self) -> SaveOutcome {
        if !self.can_save() {
            return SaveOutcome::Ignored;
        }
        let content = self.draft.text().trim().to_string();
        let target = self.editing.take();
        let outcome = match target.and_then(|id| self.notes.iter_mut().find(|n| n.id == id)) {
            Some(note) => {
                let changed = note.replace_content(content);
                debug!(note_id = %note.id, changed, "note updated");
                SaveOutcome::Updated(note.id)
            }
            None => {
                let id = self.ids.next_id();
                self.notes.push(Note::new(id, content));
                debug!(note_id = %id, "note created");
                SaveOutcome::Created(id)
            }
        };
        self.draft.clear();
        outcome
    }

    pub(crate) fn begin_edit(&mut self, id: NoteId) -> bool {
        let Some(note) = self.note(id) else {
            return false;
        };
        let content = note.content.clone();
        self.draft.set_text(&content);
        self.editing = Some(id);
        debug!(note_id = %id, "edit started");
        true
    }

    pub(crate) fn cancel_edit(&mut self) -> bool {
        let Some(id) = self.editing.take() else {
            return false;
        };
        self.draft.clear();
        debug!(note_id = %id, "edit cancelled");
        true
    }

    /// Removes a note. Deleting the note under edit ends the edit session but
    /// keeps the draft text, so the next save creates a new note.
    pub(crate) fn delete(&mut self, id: NoteId) -> bool {
        let Some(index) = self.notes.iter().position(|note| note.id == id) else {
            return false;
        };
        self.notes.remove(index);
        if self.editing == Some(id) {
            self.editing = None;
        }
        if self.copied() == Some(id) {
            self.copied = None;
        }
        debug!(note_id = %id, "note deleted");
        true
    }

    pub(crate) fn copy_request(&self, id: NoteId) -> Option<CopyRequest> {
        self.note(id).map(|note| CopyRequest {
            id,
            text: note.content.clone(),
        })
    }

    pub(crate) fn copy_succeeded(&mut self, id: NoteId, now: Instant) {
        if self.note(id).is_none() {
            return;
        }
        self.copied = Some(CopiedMarker {
            id,
            expires_at: now + self.copied_for,
        });
        debug!(note_id = %id, "note copied");
    }

    pub(crate) fn copy_failed(&self, id: NoteId, error: &ClipboardError) {
        warn!(note_id = %id, error = %error, "failed to copy note");
    }

    /// Clears the copied marker once its own deadline has passed.
    pub(crate) fn tick(&mut self, now: Instant) {
        if let Some(marker) = self.copied {
            if now >= marker.expires_at {
                self.copied = None;
            }
        }
    }
}
