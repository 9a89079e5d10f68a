//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from store/browser orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic readiness errors (missing table or
//!   column) in addition to DB transport errors.

pub mod mirror_repo;
