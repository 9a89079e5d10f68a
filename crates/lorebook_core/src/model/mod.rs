//! Domain model for campaign-wiki entries.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep one note-centric shape shared by store, query and render layers.
//!
//! # Invariants
//! - Every entry is identified by a stable slug [`note::NoteId`].
//! - Category values round-trip verbatim, including unrecognized ones.

pub mod note;
