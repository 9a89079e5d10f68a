//! Note collection store with mirror-backed persistence.
//!
//! # Responsibility
//! - Own the in-memory note collection in insertion order.
//! - Persist the full collection to the mirror as one JSON blob.
//! - Provide import/export and quick-add mutation APIs.
//!
//! # Invariants
//! - `save` always writes the whole collection. There are no partial writes.
//! - Import accepts only a bare JSON array. A rejected payload leaves the
//!   current collection untouched.
//! - Quick-added notes are prepended, so the newest capture is first.

use crate::model::note::{slug_id, Note, NoteId, NoteKind};
use crate::repo::mirror_repo::{MirrorRepository, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Mirror key under which the serialized collection is stored.
pub const MIRROR_KEY: &str = "lorebook-notes";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for collection persistence and mutation operations.
#[derive(Debug)]
pub enum StoreError {
    /// Import payload is not a bare JSON array of notes.
    ImportRejected(serde_json::Error),
    /// Collection could not be serialized for persistence.
    Serialize(serde_json::Error),
    /// Mirror persistence failed.
    Mirror(RepoError),
    /// Quick-add input has an empty title.
    BlankTitle,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ImportRejected(err) => {
                write!(f, "import rejected, expected a JSON array of notes: {err}")
            }
            Self::Serialize(err) => write!(f, "failed to serialize note collection: {err}"),
            Self::Mirror(err) => write!(f, "{err}"),
            Self::BlankTitle => write!(f, "quick add requires a non-empty title"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ImportRejected(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::Mirror(err) => Some(err),
            Self::BlankTitle => None,
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Mirror(value)
    }
}

/// Input for the quick-add capture flow.
#[derive(Debug, Clone)]
pub struct QuickAdd {
    /// Display title for the new note.
    pub title: String,
    /// Note category.
    pub kind: NoteKind,
    /// Raw tag values. Blank entries are dropped, case is kept.
    pub tags: Vec<String>,
}

/// Note collection facade over a mirror repository.
pub struct NoteStore<R: MirrorRepository> {
    notes: Vec<Note>,
    mirror: R,
}

impl<R: MirrorRepository> NoteStore<R> {
    /// Creates a store from an already loaded collection.
    pub fn new(notes: Vec<Note>, mirror: R) -> Self {
        Self { notes, mirror }
    }

    /// Returns the collection in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Finds the first note with the given id, if any.
    pub fn find(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Persists the whole collection to the mirror as compact JSON.
    pub fn save(&self) -> StoreResult<()> {
        let blob = serde_json::to_string(&self.notes).map_err(StoreError::Serialize)?;
        self.mirror.write(MIRROR_KEY, &blob)?;
        Ok(())
    }

    /// Replaces the whole collection and persists the result.
    pub fn replace_all(&mut self, notes: Vec<Note>) -> StoreResult<()> {
        self.notes = notes;
        self.save()
    }

    /// Replaces the collection from a JSON payload.
    ///
    /// Only a bare array of notes is accepted. On rejection the current
    /// collection is left untouched. Returns the imported note count.
    pub fn import_json(&mut self, payload: &str) -> StoreResult<usize> {
        let incoming: Vec<Note> =
            serde_json::from_str(payload).map_err(StoreError::ImportRejected)?;
        let count = incoming.len();
        self.replace_all(incoming)?;
        Ok(count)
    }

    /// Serializes the whole collection as pretty-printed JSON.
    pub fn export_json(&self) -> StoreResult<String> {
        serde_json::to_string_pretty(&self.notes).map_err(StoreError::Serialize)
    }

    /// Captures a new note, prepends it and persists the collection.
    ///
    /// The id is derived from kind and title (`rule-fall-damage` style) and
    /// the body starts as a one-heading stub. Returns the new note id.
    pub fn quick_add(&mut self, input: QuickAdd) -> StoreResult<NoteId> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(StoreError::BlankTitle);
        }

        let id = slug_id(&input.kind, title);
        let mut note = Note::new(id.clone(), input.kind, title);
        note.tags = input
            .tags
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();
        note.body = format!("# {title}\n\nWrite your content here...");
        self.notes.insert(0, note);
        self.save()?;
        Ok(id)
    }
}
