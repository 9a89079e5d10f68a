//! Browser context: collection, query state and selection.
//!
//! # Responsibility
//! - Own the note store plus the transient view state (query, filter,
//!   active selection, open note).
//! - Map every user intent to one synchronous state transition.
//!
//! # Invariants
//! - The active index resets to 0 whenever the query or filter changes.
//! - Arrow movement clamps to `[0, len-1]` of the current results; an empty
//!   result view pins the index at 0. No wraparound.
//! - Opening a note that is outside the current filtered view leaves the
//!   index at 0. Opening an unknown id is a silent no-op.

pub mod intent;

use crate::model::note::{Note, NoteId};
use crate::render::{self, Pane, ReaderView};
use crate::repo::mirror_repo::MirrorRepository;
use crate::search::select::{select, NoteFilter};
use crate::store::{NoteStore, StoreResult};
use intent::{Intent, SelectionMove};

/// Single-page browser state over a note store.
pub struct Browser<R: MirrorRepository> {
    store: NoteStore<R>,
    query: String,
    filter: NoteFilter,
    active_index: usize,
    open_id: Option<NoteId>,
}

impl<R: MirrorRepository> Browser<R> {
    /// Creates a browser with an empty query, the `all` filter and no open
    /// note.
    pub fn new(store: NoteStore<R>) -> Self {
        Self {
            store,
            query: String::new(),
            filter: NoteFilter::All,
            active_index: 0,
            open_id: None,
        }
    }

    /// Applies the startup navigation: a deep-link fragment opens that note,
    /// otherwise the first result is opened when one exists.
    pub fn boot(&mut self, fragment: Option<&str>) {
        let start_id = fragment
            .map(|raw| raw.strip_prefix('#').unwrap_or(raw))
            .filter(|id| !id.is_empty());

        if let Some(id) = start_id {
            self.open_by_id(id);
            return;
        }

        if let Some(first) = self.results().first() {
            let id = first.id.clone();
            self.open_by_id(&id);
        }
    }

    /// Applies one intent. Only persistence-touching intents can fail.
    pub fn apply(&mut self, intent: Intent) -> StoreResult<()> {
        match intent {
            Intent::QueryChanged(raw) => {
                self.query = raw.trim().to_string();
                self.active_index = 0;
            }
            Intent::FilterChanged(filter) => {
                self.filter = filter;
                self.query.clear();
                self.active_index = 0;
            }
            Intent::ClearQuery => {
                self.query.clear();
                self.active_index = 0;
            }
            Intent::MoveSelection(direction) => self.move_selection(direction),
            Intent::OpenActive => self.open_active(),
            Intent::OpenById(id) => self.open_by_id(&id),
            Intent::ImportNotes(payload) => {
                self.store.import_json(&payload)?;
                if let Some(first_id) = self.store.notes().first().map(|note| note.id.clone()) {
                    self.open_by_id(&first_id);
                }
            }
            Intent::QuickAddNote(input) => {
                let id = self.store.quick_add(input)?;
                self.open_by_id(&id);
            }
        }
        Ok(())
    }

    /// Current ordered result view.
    pub fn results(&self) -> Vec<&Note> {
        select(self.store.notes(), &self.query, &self.filter)
    }

    /// Left-hand pane projection: results while searching or narrowed,
    /// quick links otherwise.
    pub fn pane(&self) -> Pane<'_> {
        if self.query.is_empty() && self.filter.is_all() {
            Pane::QuickLinks(render::quick_links(self.store.notes()))
        } else {
            Pane::Results(render::results_pane(&self.results(), self.active_index))
        }
    }

    /// Reader projection of the open note, if it still exists.
    pub fn reader(&self) -> Option<ReaderView<'_>> {
        let id = self.open_id.as_deref()?;
        self.store.find(id).map(render::reader_view)
    }

    /// Shareable location fragment for the open note.
    pub fn deep_link(&self) -> Option<String> {
        self.open_id.as_deref().map(|id| format!("#{id}"))
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter(&self) -> &NoteFilter {
        &self.filter
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn open_id(&self) -> Option<&str> {
        self.open_id.as_deref()
    }

    pub fn store(&self) -> &NoteStore<R> {
        &self.store
    }

    fn move_selection(&mut self, direction: SelectionMove) {
        let len = self.results().len();
        self.active_index = match direction {
            SelectionMove::Down if len == 0 => 0,
            SelectionMove::Down => (self.active_index + 1).min(len - 1),
            SelectionMove::Up => self.active_index.saturating_sub(1),
        };
    }

    /// Opens from the active selection. Only acts while a query is present.
    fn open_active(&mut self) {
        if self.query.is_empty() {
            return;
        }
        let id = self
            .results()
            .get(self.active_index)
            .map(|note| note.id.clone());
        if let Some(id) = id {
            self.open_by_id(&id);
        }
    }

    /// Opens one note by id. Unknown ids are ignored; a hit recomputes the
    /// active index as the note's position in the current result view.
    fn open_by_id(&mut self, id: &str) {
        if self.store.find(id).is_none() {
            return;
        }
        self.active_index = self
            .results()
            .iter()
            .position(|note| note.id == id)
            .unwrap_or(0);
        self.open_id = Some(id.to_string());
    }
}
