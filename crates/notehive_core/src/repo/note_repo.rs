//! Note repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide all note create/read/update/delete/search APIs.
//! - Assign note ids from a monotonic counter scoped to one repository
//!   instance.
//!
//! # Invariants
//! - Ids start at 1, grow monotonically and are never reused after deletes.
//! - A failed `add_note` leaves the collection and the counter untouched;
//!   no partial note is ever observable.
//! - Every operation runs under one exclusive lock over the collection, so
//!   a concurrent create and delete cannot interleave into a lost update.

use crate::clock::{Clock, SystemClock};
use crate::model::note::{InvalidArgument, Note, NoteId};
use crate::search::matcher::{tags_intersect, text_contains};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// First id handed out by a fresh repository.
const FIRST_NOTE_ID: NoteId = 1;

/// Result type for repository mutations that validate input.
pub type RepoResult<T> = Result<T, InvalidArgument>;

/// Repository interface for note operations.
///
/// All methods take `&self`; implementations are expected to be usable from
/// multiple threads behind a shared reference.
pub trait NoteRepository {
    /// Creates a note with a newly assigned id and the given tags.
    ///
    /// Absent title/text fall back to the entity defaults. Every tag is
    /// validated and lowercased; one blank tag fails the whole call and the
    /// repository stays exactly as it was.
    fn add_note(
        &self,
        title: Option<String>,
        text: Option<String>,
        tags: &[String],
    ) -> RepoResult<Note>;

    /// Returns a snapshot of the note with `id`, or `None`. Never errors.
    fn get_note_by_id(&self, id: NoteId) -> Option<Note>;

    /// Returns snapshots of every stored note.
    fn get_all_notes(&self) -> Vec<Note>;

    /// Replaces the text of the note with `id`.
    ///
    /// Returns `Ok(false)` when no such note exists; otherwise applies the
    /// entity's `set_text` and returns `Ok(true)`.
    fn update_note_text(&self, id: NoteId, new_text: Option<String>) -> RepoResult<bool>;

    /// Adds one tag to the note with `id`.
    ///
    /// Returns `Ok(false)` when the note is missing or already carried the
    /// tag, `Ok(true)` only when the tag was newly added.
    fn add_tag_to_note(&self, id: NoteId, tag: &str) -> RepoResult<bool>;

    /// Removes one tag from the note with `id`.
    ///
    /// Returns `Ok(false)` when the note is missing or did not carry the
    /// tag, `Ok(true)` when the tag was present and removed.
    fn remove_tag_from_note(&self, id: NoteId, tag: &str) -> RepoResult<bool>;

    /// Deletes the note with `id`. Returns whether a note was removed.
    ///
    /// Deletion is terminal: the id is never handed out again.
    fn delete_note(&self, id: NoteId) -> bool;

    /// Returns all notes whose text contains `query`, case-insensitively.
    ///
    /// An empty query matches every note (empty substring).
    fn find_notes_by_text(&self, query: &str) -> Vec<Note>;

    /// Returns all notes sharing at least one tag with `queried`,
    /// case-insensitively.
    ///
    /// An empty `queried` yields an empty result, not "match everything".
    fn find_notes_by_tags(&self, queried: &[String]) -> Vec<Note>;

    /// Returns the deduplicated union of every note's tag set.
    fn get_all_tags(&self) -> BTreeSet<String>;
}

struct RepoInner {
    notes: BTreeMap<NoteId, Note>,
    next_id: NoteId,
}

/// In-memory note repository guarded by a single exclusive lock.
///
/// Each instance owns its own collection and id counter; constructing two
/// repositories yields fully independent stores.
pub struct InMemoryNoteRepository {
    clock: Box<dyn Clock>,
    inner: Mutex<RepoInner>,
}

impl InMemoryNoteRepository {
    /// Creates an empty repository using the host system clock.
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Creates an empty repository with an injected clock.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            inner: Mutex::new(RepoInner {
                notes: BTreeMap::new(),
                next_id: FIRST_NOTE_ID,
            }),
        }
    }

    /// Number of notes currently stored.
    pub fn len(&self) -> usize {
        self.lock().notes.len()
    }

    /// True when no notes are stored.
    pub fn is_empty(&self) -> bool {
        self.lock().notes.is_empty()
    }

    // Poisoning only means another caller panicked mid-operation; no
    // operation leaves the map in a torn state, so the guard is recovered.
    fn lock(&self) -> MutexGuard<'_, RepoInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryNoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteRepository for InMemoryNoteRepository {
    fn add_note(
        &self,
        title: Option<String>,
        text: Option<String>,
        tags: &[String],
    ) -> RepoResult<Note> {
        let mut inner = self.lock();
        // Tags are applied to the detached note first: a blank tag aborts
        // before the counter advances or the map changes.
        let mut note = Note::new(inner.next_id, title, text, self.clock.today());
        for tag in tags {
            note.add_tag(tag)?;
        }

        let id = note.id();
        inner.next_id += 1;
        inner.notes.insert(id, note.clone());
        debug!(
            "event=note_added module=repo id={id} tags={}",
            note.tags().len()
        );
        Ok(note)
    }

    fn get_note_by_id(&self, id: NoteId) -> Option<Note> {
        self.lock().notes.get(&id).cloned()
    }

    fn get_all_notes(&self) -> Vec<Note> {
        self.lock().notes.values().cloned().collect()
    }

    fn update_note_text(&self, id: NoteId, new_text: Option<String>) -> RepoResult<bool> {
        let mut inner = self.lock();
        let Some(note) = inner.notes.get_mut(&id) else {
            return Ok(false);
        };
        note.set_text(new_text)?;
        debug!("event=note_text_updated module=repo id={id}");
        Ok(true)
    }

    fn add_tag_to_note(&self, id: NoteId, tag: &str) -> RepoResult<bool> {
        let mut inner = self.lock();
        let Some(note) = inner.notes.get_mut(&id) else {
            return Ok(false);
        };
        let added = note.add_tag(tag)?;
        debug!("event=tag_added module=repo id={id} changed={added}");
        Ok(added)
    }

    fn remove_tag_from_note(&self, id: NoteId, tag: &str) -> RepoResult<bool> {
        let mut inner = self.lock();
        let Some(note) = inner.notes.get_mut(&id) else {
            return Ok(false);
        };
        let removed = note.remove_tag(tag)?;
        debug!("event=tag_removed module=repo id={id} changed={removed}");
        Ok(removed)
    }

    fn delete_note(&self, id: NoteId) -> bool {
        let removed = self.lock().notes.remove(&id).is_some();
        if removed {
            debug!("event=note_deleted module=repo id={id}");
        }
        removed
    }

    fn find_notes_by_text(&self, query: &str) -> Vec<Note> {
        self.lock()
            .notes
            .values()
            .filter(|note| text_contains(note.text(), query))
            .cloned()
            .collect()
    }

    fn find_notes_by_tags(&self, queried: &[String]) -> Vec<Note> {
        self.lock()
            .notes
            .values()
            .filter(|note| tags_intersect(note.tags(), queried))
            .cloned()
            .collect()
    }

    fn get_all_tags(&self) -> BTreeSet<String> {
        self.lock()
            .notes
            .values()
            .flat_map(|note| note.tags().iter().cloned())
            .collect()
    }
}
