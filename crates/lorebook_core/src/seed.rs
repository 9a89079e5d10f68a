//! Built-in starter collection.
//!
//! # Responsibility
//! - Provide the last-resort note set when neither a source document nor a
//!   mirror copy is available.
//!
//! # Invariants
//! - Exactly one seed note per known category, session entry first.
//! - Seed ids are stable; deep links into the starter set keep working
//!   across releases.

use crate::model::note::{Note, NoteKind};

/// Returns the built-in starter notes.
pub fn seed_notes() -> Vec<Note> {
    vec![
        seed(
            "session-01-smoke-over-greyharbor",
            NoteKind::Session,
            "Session 01: Smoke over Greyharbor",
            &["sessions", "greyharbor", "drowned-coast"],
            "# Recap\n\nThe party slipped into **Greyharbor** as the fish-market burned. \
             The Ember Court denies any hand in it.\n\n### Key Events\n- Met *Warden Essa Brack* \
             at the tide-wall.\n- A ledger pulled from the ashes names the **Sunken Archive**.\n\
             - Maeve offered passage upriver for a favor owed.\n\n### Hooks\n- Decode the \
             salvaged ledger (`folio 9` is missing).\n- Ask **Maeve of the Lantern** about the \
             Archive.",
            None,
        ),
        seed(
            "npc-maeve-of-the-lantern",
            NoteKind::Npc,
            "Maeve of the Lantern (NPC)",
            &["smuggler", "ally", "greyharbor"],
            "A river-smuggler who owes the party one honest favor.\n\n- Runs the lantern-barge \
             *Pale Wick* out of Greyharbor.\n- Knows every flooded stair down to the **Sunken \
             Archive**.\n- Will not cross the **Ember Court** twice.",
            Some("images/maeve.png"),
        ),
        seed(
            "location-the-sunken-archive",
            NoteKind::Location,
            "Location: The Sunken Archive",
            &["ruin", "ancient", "drowned-coast"],
            "Drowned record-hall of the old harbor guild.\n\n- Reading rooms survive in \
             air-pockets below the tide line.\n- The index stones answer only in the guild \
             cant.\n- Somewhere inside lies the deed to the tide-wall itself.",
            None,
        ),
        seed(
            "rule-house-flanking",
            NoteKind::Rule,
            "House Rule: Flanking",
            &["rules", "combat"],
            "**Flanking:** melee attackers on opposite sides gain `+2` to hit instead of \
             advantage. Creatures of Large size or bigger cannot be flanked by Small allies \
             alone.",
            None,
        ),
        seed(
            "faction-the-ember-court",
            NoteKind::Faction,
            "Faction: The Ember Court",
            &["faction", "greyharbor", "rivals"],
            "A guild of lamplighters and arsonists in equal measure. They sell light to the \
             city and darkness to anyone who pays better.",
            None,
        ),
    ]
}

fn seed(
    id: &str,
    kind: NoteKind,
    title: &str,
    tags: &[&str],
    body: &str,
    img: Option<&str>,
) -> Note {
    let mut note = Note::new(id, kind, title);
    note.tags = tags.iter().map(|tag| tag.to_string()).collect();
    note.body = body.to_string();
    note.img = img.map(str::to_string);
    note
}
