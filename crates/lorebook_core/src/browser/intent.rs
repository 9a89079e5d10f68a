//! User intents dispatched against the browser context.

use crate::model::note::NoteId;
use crate::search::select::NoteFilter;
use crate::store::QuickAdd;

/// Direction of a keyboard selection move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMove {
    Up,
    Down,
}

/// Finite set of user actions the browser understands.
///
/// Every interaction surface (CLI commands, key presses) reduces to one of
/// these before touching state, so the query/selection logic stays headless.
#[derive(Debug, Clone)]
pub enum Intent {
    /// Search text edited. The value replaces the current query.
    QueryChanged(String),
    /// Scope filter switched. Also clears the current query.
    FilterChanged(NoteFilter),
    /// Search cleared (escape / clear button).
    ClearQuery,
    /// Arrow-key traversal over the current results.
    MoveSelection(SelectionMove),
    /// Open the currently selected result (enter).
    OpenActive,
    /// Open one note by id (result click or deep link).
    OpenById(NoteId),
    /// Replace the whole collection from a JSON payload.
    ImportNotes(String),
    /// Capture a new note and open it.
    QuickAddNote(QuickAdd),
}
