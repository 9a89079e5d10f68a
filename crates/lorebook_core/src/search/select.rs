//! Select pipeline: filter, match and order the note collection.
//!
//! # Responsibility
//! - Parse filter strings (`all`, `tag:<name>`, category names).
//! - Produce the ordered result view for a query/filter pair.
//!
//! # Invariants
//! - A note is included iff it passes the filter AND the text predicate.
//! - Ordering is deterministic and stable: session notes first, then title
//!   order, insertion order on full ties. Selection and keyboard traversal
//!   depend on this exact order.

use crate::model::note::Note;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Scope restriction applied before text matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteFilter {
    /// Accept every note.
    All,
    /// Accept notes carrying the tag, compared case-insensitively.
    Tag(String),
    /// Accept notes whose raw category equals the value exactly.
    Kind(String),
}

impl NoteFilter {
    /// Parses a filter string. `all` and `tag:` prefixes are recognized,
    /// anything else is treated as a category name.
    pub fn parse(raw: &str) -> NoteFilter {
        let raw = raw.trim();
        if raw.is_empty() || raw == "all" {
            return NoteFilter::All;
        }
        if let Some(tag) = raw.strip_prefix("tag:") {
            return NoteFilter::Tag(tag.to_lowercase());
        }
        NoteFilter::Kind(raw.to_string())
    }

    /// Whether the note passes this filter.
    pub fn allows(&self, note: &Note) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => note.tags.iter().any(|t| t.to_lowercase() == *tag),
            Self::Kind(kind) => note.kind.as_str() == kind,
        }
    }

    /// Whether this is the unrestricted filter.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl Display for NoteFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Tag(tag) => write!(f, "tag:{tag}"),
            Self::Kind(kind) => f.write_str(kind),
        }
    }
}

/// Returns the ordered subset of `notes` matching `query` and `filter`.
///
/// The query is matched case-insensitively as a substring of title, body or
/// any tag. An empty query matches everything.
pub fn select<'a>(notes: &'a [Note], query: &str, filter: &NoteFilter) -> Vec<&'a Note> {
    let needle = query.to_lowercase();
    let mut hits: Vec<&Note> = notes
        .iter()
        .filter(|note| filter.allows(note) && matches_query(note, &needle))
        .collect();
    hits.sort_by(|a, b| display_order(a, b));
    hits
}

fn matches_query(note: &Note, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    note.title.to_lowercase().contains(needle)
        || note.body.to_lowercase().contains(needle)
        || note.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

/// Session entries precede everything else; ties are broken by
/// case-insensitive title order, then raw title bytes.
fn display_order(a: &Note, b: &Note) -> Ordering {
    match (a.kind.is_session(), b.kind.is_session()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a
            .title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then_with(|| a.title.cmp(&b.title)),
    }
}

#[cfg(test)]
mod tests {
    use super::{select, NoteFilter};
    use crate::model::note::{Note, NoteKind};

    fn note(id: &str, kind: NoteKind, title: &str, tags: &[&str], body: &str) -> Note {
        let mut note = Note::new(id, kind, title);
        note.tags = tags.iter().map(|t| t.to_string()).collect();
        note.body = body.to_string();
        note
    }

    #[test]
    fn parse_recognizes_all_tag_and_kind() {
        assert_eq!(NoteFilter::parse("all"), NoteFilter::All);
        assert_eq!(NoteFilter::parse(""), NoteFilter::All);
        assert_eq!(
            NoteFilter::parse("tag:Allies"),
            NoteFilter::Tag("allies".to_string())
        );
        assert_eq!(
            NoteFilter::parse("npc"),
            NoteFilter::Kind("npc".to_string())
        );
    }

    #[test]
    fn tag_filter_is_case_insensitive_exact() {
        let hit = note("a", NoteKind::Npc, "A", &["Allies"], "");
        let near = note("b", NoteKind::Npc, "B", &["allies-of-old"], "");
        let filter = NoteFilter::parse("tag:ALLIES");
        assert!(filter.allows(&hit));
        assert!(!filter.allows(&near));
    }

    #[test]
    fn kind_filter_matches_raw_category_exactly() {
        let npc = note("a", NoteKind::Npc, "A", &[], "");
        let odd = note("b", NoteKind::Other("NPC".to_string()), "B", &[], "");
        let filter = NoteFilter::parse("npc");
        assert!(filter.allows(&npc));
        assert!(!filter.allows(&odd));
    }

    #[test]
    fn query_matches_title_body_or_tag() {
        let notes = vec![
            note("t", NoteKind::Rule, "Giant Slaying", &[], "short"),
            note("b", NoteKind::Npc, "Harshnag", &[], "a frost giant ally"),
            note("g", NoteKind::Location, "Old Keep", &["giants"], ""),
            note("n", NoteKind::Faction, "Court", &["rivals"], "no match here"),
        ];
        let ids: Vec<&str> = select(&notes, "giant", &NoteFilter::All)
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(ids, vec!["t", "b", "g"]);
    }

    #[test]
    fn empty_query_matches_everything() {
        let notes = vec![
            note("a", NoteKind::Rule, "A", &[], ""),
            note("b", NoteKind::Npc, "B", &[], ""),
        ];
        assert_eq!(select(&notes, "", &NoteFilter::All).len(), 2);
    }

    #[test]
    fn sessions_sort_first_regardless_of_title() {
        let notes = vec![
            note("a", NoteKind::Npc, "Aaa", &[], ""),
            note("z", NoteKind::Session, "Zzz", &[], ""),
        ];
        let ids: Vec<&str> = select(&notes, "", &NoteFilter::All)
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(ids, vec!["z", "a"]);
    }

    #[test]
    fn capitalized_session_category_is_not_the_session_category() {
        let notes = vec![
            note("a", NoteKind::Npc, "Aaa", &[], ""),
            note("z", NoteKind::Other("Session".to_string()), "Zzz", &[], ""),
        ];
        let ids: Vec<&str> = select(&notes, "", &NoteFilter::All)
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "z"]);
    }

    #[test]
    fn ordering_is_stable_for_equal_titles() {
        let notes = vec![
            note("first", NoteKind::Npc, "Same", &[], ""),
            note("second", NoteKind::Npc, "Same", &[], ""),
        ];
        let ids: Vec<&str> = select(&notes, "", &NoteFilter::All)
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(ids, vec!["first", "second"]);
    }
}
