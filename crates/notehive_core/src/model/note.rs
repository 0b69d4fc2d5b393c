//! Note domain model.
//!
//! # Responsibility
//! - Hold one note's state: title, text, creation date and tag set.
//! - Enforce field-level invariants on every mutation, independent of how
//!   the note is reached.
//!
//! # Invariants
//! - `id` is assigned by the repository at creation and never changes.
//! - `tags` never contains an empty or whitespace-only value; entries are
//!   lowercased on insertion.
//! - `title` and `text` are always present; empty strings are allowed,
//!   absent values are not.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use time::Date;

/// Stable identifier for a note.
///
/// Assigned by the repository from a monotonic counter; never reused, even
/// after the note is deleted.
pub type NoteId = u64;

/// Fallback title applied when a note is created without one.
pub const DEFAULT_TITLE: &str = "title";
/// Fallback text applied when a note is created without one.
pub const DEFAULT_TEXT: &str = "text";

/// Validation error raised synchronously by note mutations.
///
/// "Not found" conditions are never reported through this type; they are
/// signalled by `Option::None` or `false` at the repository layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// A title replacement was absent.
    MissingTitle,
    /// A text replacement was absent.
    MissingText,
    /// A tag value was empty or whitespace-only.
    BlankTag(String),
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "title cannot be absent"),
            Self::MissingText => write!(f, "text cannot be absent"),
            Self::BlankTag(value) => write!(f, "tag cannot be empty or blank: `{value}`"),
        }
    }
}

impl Error for InvalidArgument {}

/// One note record.
///
/// Identity lives in `id` alone: equality and hashing ignore title, text,
/// tags and creation date. Fields are private so every mutation goes
/// through the validating methods below.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
    title: String,
    text: String,
    creation_date: Date,
    tags: BTreeSet<String>,
}

impl Note {
    /// Creates a note with a repository-assigned id.
    ///
    /// Absent title/text fall back to [`DEFAULT_TITLE`] / [`DEFAULT_TEXT`].
    /// The fallback applies only at construction, never on later updates.
    pub(crate) fn new(
        id: NoteId,
        title: Option<String>,
        text: Option<String>,
        creation_date: Date,
    ) -> Self {
        Self {
            id,
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            text: text.unwrap_or_else(|| DEFAULT_TEXT.to_string()),
            creation_date,
            tags: BTreeSet::new(),
        }
    }

    /// Returns the stable note id.
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Returns the current title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the current body text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the calendar date captured at creation time.
    pub fn creation_date(&self) -> Date {
        self.creation_date
    }

    /// Returns a read-only view of the tag set.
    ///
    /// Callers cannot mutate the set through this view; tag changes go
    /// through [`Note::add_tag`] / [`Note::remove_tag`].
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Replaces the title verbatim. Empty strings are accepted.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::MissingTitle`] when `title` is `None`.
    pub fn set_title(&mut self, title: Option<String>) -> Result<(), InvalidArgument> {
        self.title = title.ok_or(InvalidArgument::MissingTitle)?;
        Ok(())
    }

    /// Replaces the body text verbatim. Empty strings are accepted.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::MissingText`] when `text` is `None`.
    pub fn set_text(&mut self, text: Option<String>) -> Result<(), InvalidArgument> {
        self.text = text.ok_or(InvalidArgument::MissingText)?;
        Ok(())
    }

    /// Lowercases `tag` and inserts it into the set.
    ///
    /// Returns `true` when the tag was newly added, `false` when the note
    /// already carried it.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::BlankTag`] for empty or whitespace-only
    /// input.
    pub fn add_tag(&mut self, tag: &str) -> Result<bool, InvalidArgument> {
        Ok(self.tags.insert(normalize_tag(tag)?))
    }

    /// Lowercases `tag` and removes it from the set.
    ///
    /// Returns `true` when the tag was present and removed, `false` when it
    /// was absent.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::BlankTag`] for empty or whitespace-only
    /// input.
    pub fn remove_tag(&mut self, tag: &str) -> Result<bool, InvalidArgument> {
        let normalized = normalize_tag(tag)?;
        Ok(self.tags.remove(&normalized))
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Validates one tag value and lowercases it.
///
/// The stored value is lowercased but not trimmed; only the blank check
/// looks at trimmed content.
fn normalize_tag(tag: &str) -> Result<String, InvalidArgument> {
    if tag.trim().is_empty() {
        return Err(InvalidArgument::BlankTag(tag.to_string()));
    }
    Ok(tag.to_lowercase())
}
