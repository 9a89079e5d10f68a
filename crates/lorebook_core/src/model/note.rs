//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical wiki-entry record shared by store, search and
//!   render layers.
//! - Own the slug derivation used for quick-add identifiers.
//!
//! # Invariants
//! - `id` is stable and never regenerated once assigned; lookups resolve the
//!   first match in insertion order, so a prepended duplicate shadows older
//!   entries.
//! - `kind` round-trips through its raw string form: unrecognized category
//!   values are preserved verbatim and only fall back to a default at the
//!   display layer.
//! - Serialized field names (`id`, `title`, `type`, `tags`, `body`, `img`)
//!   are the wire contract for source files, the mirror blob and
//!   import/export.

use serde::{Deserialize, Serialize};

/// Stable identifier for a note, slug-style (`session-01-smoke-over-greyharbor`).
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = String;

/// Wiki-entry category.
///
/// The five known categories match exactly on their lowercase spelling; any
/// other raw value is carried through as [`NoteKind::Other`]. An `Other`
/// kind never satisfies a category filter and never sorts as a session —
/// only the display badge treats it as the default category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NoteKind {
    /// Play-session recap. Always sorted ahead of every other category.
    Session,
    /// Non-player character; the only category that projects an avatar.
    Npc,
    Location,
    Rule,
    Faction,
    /// Unrecognized raw category value, preserved for round-tripping.
    Other(String),
}

impl NoteKind {
    /// Known categories in canonical display order.
    pub const KNOWN: [NoteKind; 5] = [
        NoteKind::Session,
        NoteKind::Npc,
        NoteKind::Location,
        NoteKind::Rule,
        NoteKind::Faction,
    ];

    /// Returns the raw wire string for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Session => "session",
            Self::Npc => "npc",
            Self::Location => "location",
            Self::Rule => "rule",
            Self::Faction => "faction",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this note belongs to the session category (exact match).
    pub fn is_session(&self) -> bool {
        matches!(self, Self::Session)
    }
}

impl From<String> for NoteKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "session" => Self::Session,
            "npc" => Self::Npc,
            "location" => Self::Location,
            "rule" => Self::Rule,
            "faction" => Self::Faction,
            _ => Self::Other(raw),
        }
    }
}

impl From<NoteKind> for String {
    fn from(kind: NoteKind) -> Self {
        match kind {
            NoteKind::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for NoteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical campaign-wiki entry.
///
/// `tags` and `body` tolerate absence in input documents; `img` is omitted
/// from serialized output when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable slug id used for deep links and lookups.
    pub id: NoteId,
    /// Display title; also the sort key within a category.
    pub title: String,
    /// Serialized as `type` to match the external schema naming.
    #[serde(rename = "type")]
    pub kind: NoteKind,
    /// Display-ordered tag set; matching is case-insensitive.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free text with light inline markup.
    #[serde(default)]
    pub body: String,
    /// Image reference, projected only for the npc category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}

impl Note {
    /// Creates a note with empty tags/body and no image.
    pub fn new(id: impl Into<NoteId>, kind: NoteKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            tags: Vec::new(),
            body: String::new(),
            img: None,
        }
    }
}

/// Derives the quick-add identifier from category and title.
///
/// Lowercases `kind-title`, collapses every run of non-ASCII-alphanumeric
/// characters to a single `-`, and trims leading/trailing separators.
///
/// ```
/// use lorebook_core::model::note::{slug_id, NoteKind};
/// assert_eq!(slug_id(&NoteKind::Rule, "Fall Damage"), "rule-fall-damage");
/// ```
pub fn slug_id(kind: &NoteKind, title: &str) -> NoteId {
    let raw = format!("{}-{}", kind.as_str(), title).to_lowercase();
    let mut id = String::with_capacity(raw.len());
    let mut separator_pending = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if separator_pending && !id.is_empty() {
                id.push('-');
            }
            separator_pending = false;
            id.push(ch);
        } else {
            separator_pending = true;
        }
    }
    id
}
