use lorebook_core::db::open_db_in_memory;
use lorebook_core::{
    Browser, Intent, Note, NoteFilter, NoteKind, NoteStore, Pane, QuickAdd, SelectionMove,
    SqliteMirrorRepository,
};
use rusqlite::Connection;

fn entry(id: &str, kind: NoteKind, title: &str, tags: &[&str], body: &str) -> Note {
    let mut note = Note::new(id, kind, title);
    note.tags = tags.iter().map(|t| t.to_string()).collect();
    note.body = body.to_string();
    note
}

fn fixture() -> Vec<Note> {
    vec![
        entry("npc-brack", NoteKind::Npc, "Warden Brack", &["greyharbor"], "Keeps the tide-wall."),
        entry("session-01", NoteKind::Session, "Session 01", &["sessions"], "Arrival in the port."),
        entry("location-keep", NoteKind::Location, "Old Keep", &["ruin"], "A drowned watchtower."),
        entry("rule-crit", NoteKind::Rule, "Crits", &["combat"], "Double the dice."),
    ]
}

fn browser_with(conn: &Connection, notes: Vec<Note>) -> Browser<SqliteMirrorRepository<'_>> {
    let repo = SqliteMirrorRepository::try_new(conn).unwrap();
    Browser::new(NoteStore::new(notes, repo))
}

#[test]
fn typing_a_query_resets_the_selection() {
    let conn = open_db_in_memory().unwrap();
    let mut browser = browser_with(&conn, fixture());

    browser.apply(Intent::QueryChanged("o".to_string())).unwrap();
    browser
        .apply(Intent::MoveSelection(SelectionMove::Down))
        .unwrap();
    assert_eq!(browser.active_index(), 1);

    browser.apply(Intent::QueryChanged("ol".to_string())).unwrap();
    assert_eq!(browser.active_index(), 0);
    assert_eq!(browser.query(), "ol");
}

#[test]
fn query_text_is_trimmed_before_matching() {
    let conn = open_db_in_memory().unwrap();
    let mut browser = browser_with(&conn, fixture());

    browser
        .apply(Intent::QueryChanged("  keep  ".to_string()))
        .unwrap();
    assert_eq!(browser.query(), "keep");
    assert_eq!(browser.results().len(), 2);
}

#[test]
fn selection_clamps_at_both_ends_without_wraparound() {
    let conn = open_db_in_memory().unwrap();
    let mut browser = browser_with(&conn, fixture());
    browser.apply(Intent::QueryChanged("e".to_string())).unwrap();
    let len = browser.results().len();
    assert!(len >= 2);

    for _ in 0..len + 3 {
        browser
            .apply(Intent::MoveSelection(SelectionMove::Down))
            .unwrap();
    }
    assert_eq!(browser.active_index(), len - 1);

    for _ in 0..len + 3 {
        browser
            .apply(Intent::MoveSelection(SelectionMove::Up))
            .unwrap();
    }
    assert_eq!(browser.active_index(), 0);
}

#[test]
fn arrow_movement_over_empty_results_pins_selection_at_zero() {
    let conn = open_db_in_memory().unwrap();
    let mut browser = browser_with(&conn, fixture());
    browser
        .apply(Intent::QueryChanged("no such note".to_string()))
        .unwrap();
    assert!(browser.results().is_empty());

    browser
        .apply(Intent::MoveSelection(SelectionMove::Down))
        .unwrap();
    assert_eq!(browser.active_index(), 0);
}

#[test]
fn switching_filter_clears_the_query_and_selection() {
    let conn = open_db_in_memory().unwrap();
    let mut browser = browser_with(&conn, fixture());
    browser.apply(Intent::QueryChanged("keep".to_string())).unwrap();
    browser
        .apply(Intent::MoveSelection(SelectionMove::Down))
        .unwrap();

    browser
        .apply(Intent::FilterChanged(NoteFilter::parse("npc")))
        .unwrap();
    assert_eq!(browser.query(), "");
    assert_eq!(browser.active_index(), 0);
    assert_eq!(browser.filter(), &NoteFilter::Kind("npc".to_string()));

    let ids: Vec<&str> = browser.results().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["npc-brack"]);
}

#[test]
fn enter_opens_the_active_result_only_while_searching() {
    let conn = open_db_in_memory().unwrap();
    let mut browser = browser_with(&conn, fixture());

    // No query: enter is a no-op.
    browser.apply(Intent::OpenActive).unwrap();
    assert_eq!(browser.open_id(), None);

    browser.apply(Intent::QueryChanged("keep".to_string())).unwrap();
    browser
        .apply(Intent::MoveSelection(SelectionMove::Down))
        .unwrap();
    browser.apply(Intent::OpenActive).unwrap();

    // `keep` hits by title order: location-keep, then npc-brack (body hit).
    assert_eq!(browser.open_id(), Some("npc-brack"));
    assert_eq!(browser.deep_link().as_deref(), Some("#npc-brack"));
}

#[test]
fn opening_by_id_recomputes_selection_within_the_current_view() {
    let conn = open_db_in_memory().unwrap();
    let mut browser = browser_with(&conn, fixture());
    browser.apply(Intent::QueryChanged("e".to_string())).unwrap();

    let ids: Vec<String> = browser
        .results()
        .iter()
        .map(|n| n.id.to_string())
        .collect();
    let last = ids.last().unwrap().clone();

    browser.apply(Intent::OpenById(last.clone())).unwrap();
    assert_eq!(browser.open_id(), Some(last.as_str()));
    assert_eq!(browser.active_index(), ids.len() - 1);
}

#[test]
fn opening_a_note_outside_the_view_leaves_selection_at_zero() {
    let conn = open_db_in_memory().unwrap();
    let mut browser = browser_with(&conn, fixture());
    browser
        .apply(Intent::FilterChanged(NoteFilter::parse("session")))
        .unwrap();

    browser
        .apply(Intent::OpenById("rule-crit".to_string()))
        .unwrap();
    assert_eq!(browser.open_id(), Some("rule-crit"));
    assert_eq!(browser.active_index(), 0);
}

#[test]
fn opening_an_unknown_id_is_a_silent_no_op() {
    let conn = open_db_in_memory().unwrap();
    let mut browser = browser_with(&conn, fixture());
    browser
        .apply(Intent::OpenById("npc-nobody".to_string()))
        .unwrap();
    assert_eq!(browser.open_id(), None);
    assert_eq!(browser.deep_link(), None);
}

#[test]
fn boot_prefers_the_deep_link_fragment() {
    let conn = open_db_in_memory().unwrap();
    let mut browser = browser_with(&conn, fixture());

    browser.boot(Some("#rule-crit"));
    assert_eq!(browser.open_id(), Some("rule-crit"));
}

#[test]
fn boot_without_fragment_opens_the_first_result() {
    let conn = open_db_in_memory().unwrap();
    let mut browser = browser_with(&conn, fixture());

    browser.boot(None);
    // Default view orders the session first.
    assert_eq!(browser.open_id(), Some("session-01"));
}

#[test]
fn boot_with_an_unknown_fragment_opens_nothing() {
    let conn = open_db_in_memory().unwrap();
    let mut browser = browser_with(&conn, fixture());

    browser.boot(Some("#npc-nobody"));
    assert_eq!(browser.open_id(), None);
}

#[test]
fn import_intent_opens_the_first_imported_note() {
    let conn = open_db_in_memory().unwrap();
    let mut browser = browser_with(&conn, fixture());

    let payload = serde_json::to_string(&vec![
        entry("location-fen", NoteKind::Location, "Dour Fen", &[], ""),
        entry("session-09", NoteKind::Session, "Session 09", &[], ""),
    ])
    .unwrap();

    browser.apply(Intent::ImportNotes(payload)).unwrap();
    // Insertion order decides, not display order.
    assert_eq!(browser.open_id(), Some("location-fen"));
    assert_eq!(browser.store().notes().len(), 2);
}

#[test]
fn rejected_import_keeps_state_intact() {
    let conn = open_db_in_memory().unwrap();
    let mut browser = browser_with(&conn, fixture());
    browser.boot(None);

    let err = browser
        .apply(Intent::ImportNotes("{\"broken\": true}".to_string()))
        .unwrap_err();
    assert!(err.to_string().contains("import rejected"));
    assert_eq!(browser.store().notes().len(), 4);
    assert_eq!(browser.open_id(), Some("session-01"));
}

#[test]
fn quick_add_intent_opens_the_new_note() {
    let conn = open_db_in_memory().unwrap();
    let mut browser = browser_with(&conn, fixture());

    browser
        .apply(Intent::QuickAddNote(QuickAdd {
            title: "Ember Court".to_string(),
            kind: NoteKind::Faction,
            tags: vec!["rivals".to_string()],
        }))
        .unwrap();

    assert_eq!(browser.open_id(), Some("faction-ember-court"));
    assert_eq!(browser.store().notes()[0].id, "faction-ember-court");
}

#[test]
fn pane_shows_quick_links_until_a_query_or_filter_narrows() {
    let conn = open_db_in_memory().unwrap();
    let mut browser = browser_with(&conn, fixture());

    match browser.pane() {
        Pane::QuickLinks(links) => {
            let ids: Vec<&str> = links.iter().map(|link| link.id).collect();
            assert_eq!(
                ids,
                vec!["session-01", "npc-brack", "location-keep", "rule-crit"]
            );
        }
        Pane::Results(_) => panic!("expected quick links at rest"),
    }

    browser.apply(Intent::QueryChanged("keep".to_string())).unwrap();
    match browser.pane() {
        Pane::Results(pane) => {
            assert_eq!(pane.count, 2);
            assert!(pane.rows[0].active);
            assert!(!pane.rows[1].active);
        }
        Pane::QuickLinks(_) => panic!("expected results while searching"),
    }

    // A narrowing filter forces the results pane even with no query.
    browser
        .apply(Intent::FilterChanged(NoteFilter::parse("rule")))
        .unwrap();
    assert!(matches!(browser.pane(), Pane::Results(_)));
}

#[test]
fn reader_projects_the_open_note() {
    let conn = open_db_in_memory().unwrap();
    let mut browser = browser_with(&conn, fixture());
    assert!(browser.reader().is_none());

    browser
        .apply(Intent::OpenById("rule-crit".to_string()))
        .unwrap();
    let view = browser.reader().expect("open note should project");
    assert_eq!(view.title, "Crits");
    assert_eq!(view.badge.label, "Rule");
    assert_eq!(view.body_html, "<p>Double the dice.</p>");
}
