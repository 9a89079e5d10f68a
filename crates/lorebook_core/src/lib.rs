//! Core domain logic for Lorebook.
//! This crate is the single source of truth for business invariants.

pub mod browser;
pub mod db;
pub mod loader;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod search;
pub mod seed;
pub mod store;

pub use browser::intent::{Intent, SelectionMove};
pub use browser::Browser;
pub use db::{open_db, open_db_in_memory};
pub use loader::load_collection;
pub use logging::{default_log_level, init_logging};
pub use model::note::{slug_id, Note, NoteId, NoteKind};
pub use render::{Pane, QuickLink, ReaderView, ResultRow, ResultsPane};
pub use repo::mirror_repo::{MirrorRepository, SqliteMirrorRepository};
pub use search::select::{select, NoteFilter};
pub use store::{NoteStore, QuickAdd, StoreError, MIRROR_KEY};
