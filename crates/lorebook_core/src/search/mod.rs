//! Query engine entry points.
//!
//! # Responsibility
//! - Expose the select pipeline that turns query text plus a filter into an
//!   ordered result view.
//! - Keep filter parsing and ordering rules inside core.

pub mod select;

pub use select::{select, NoteFilter};
