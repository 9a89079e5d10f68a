//! Display projections over browser state.
//!
//! # Responsibility
//! - Turn notes and result views into plain display structures: result
//!   rows, quick links and the reader detail view.
//! - Keep every projection pure. Rendering never mutates state.
//!
//! # Invariants
//! - The results pane appears iff a query or a narrowing filter is active;
//!   otherwise the quick-links pane is shown.
//! - Previews are single-line and capped at [`PREVIEW_MAX_CHARS`] chars.
//! - Only npc notes with an image reference project an avatar.

pub mod markup;

use crate::model::note::{Note, NoteKind};

/// Character cap for result-row previews.
pub const PREVIEW_MAX_CHARS: usize = 140;

/// Category badge with a style class and a display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// Lowercase style slug. Unknown categories fall back to `session`.
    pub class: String,
    /// Raw category value with the first letter uppercased.
    pub label: String,
}

/// Builds the badge for a category.
pub fn badge(kind: &NoteKind) -> Badge {
    let class = match kind {
        NoteKind::Other(_) => "session".to_string(),
        known => known.as_str().to_string(),
    };
    let raw = kind.as_str();
    let label = match raw.chars().next() {
        Some(first) => first.to_uppercase().chain(raw.chars().skip(1)).collect(),
        None => String::new(),
    };
    Badge { class, label }
}

/// One row of the results pane.
#[derive(Debug)]
pub struct ResultRow<'a> {
    pub note: &'a Note,
    pub badge: Badge,
    /// Single-line body preview.
    pub preview: String,
    /// Avatar image reference, npc-only.
    pub avatar: Option<&'a str>,
    /// Whether this row is the active selection.
    pub active: bool,
}

/// Results pane projection.
#[derive(Debug)]
pub struct ResultsPane<'a> {
    /// Total hit count, also shown when zero.
    pub count: usize,
    pub rows: Vec<ResultRow<'a>>,
}

/// One quick-link entry pointing at a note id.
#[derive(Debug, PartialEq, Eq)]
pub struct QuickLink<'a> {
    pub label: &'a str,
    pub id: &'a str,
}

/// Left-hand pane content.
#[derive(Debug)]
pub enum Pane<'a> {
    Results(ResultsPane<'a>),
    QuickLinks(Vec<QuickLink<'a>>),
}

/// Reader detail view for one open note.
#[derive(Debug)]
pub struct ReaderView<'a> {
    pub title: &'a str,
    pub badge: Badge,
    pub tags: &'a [String],
    pub avatar: Option<&'a str>,
    /// Body expanded through the markup dialect.
    pub body_html: String,
}

/// Projects the ordered result view into pane rows.
pub fn results_pane<'a>(hits: &[&'a Note], active_index: usize) -> ResultsPane<'a> {
    let rows = hits
        .iter()
        .enumerate()
        .map(|(index, note)| ResultRow {
            note,
            badge: badge(&note.kind),
            preview: preview(&note.body),
            avatar: avatar(note),
            active: index == active_index,
        })
        .collect();
    ResultsPane {
        count: hits.len(),
        rows,
    }
}

/// Builds quick links: the first note of each known category, in category
/// order. Categories with no note are skipped.
pub fn quick_links(notes: &[Note]) -> Vec<QuickLink<'_>> {
    NoteKind::KNOWN
        .iter()
        .filter_map(|kind| {
            notes.iter().find(|note| note.kind == *kind).map(|note| QuickLink {
                label: &note.title,
                id: &note.id,
            })
        })
        .collect()
}

/// Projects one note into the reader detail view.
pub fn reader_view(note: &Note) -> ReaderView<'_> {
    ReaderView {
        title: &note.title,
        badge: badge(&note.kind),
        tags: &note.tags,
        avatar: avatar(note),
        body_html: markup::to_html(&note.body),
    }
}

/// Flattens a body to one line and caps it at [`PREVIEW_MAX_CHARS`] chars.
/// Appends an ellipsis only when text was cut.
pub fn preview(body: &str) -> String {
    let flat = body.replace('\n', " ");
    let mut chars = flat.chars();
    let mut preview: String = chars.by_ref().take(PREVIEW_MAX_CHARS).collect();
    if chars.next().is_some() {
        preview.push('…');
    }
    preview
}

/// Avatar reference, projected only for npc notes carrying an image.
pub fn avatar(note: &Note) -> Option<&str> {
    if note.kind == NoteKind::Npc {
        note.img.as_deref()
    } else {
        None
    }
}
