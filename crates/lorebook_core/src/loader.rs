//! Startup resolution of the note collection.
//!
//! # Responsibility
//! - Resolve notes from the source document, then the mirror, then the
//!   built-in seeds.
//!
//! # Invariants
//! - First successful origin wins entirely. Origins are never merged.
//! - A source document read also refreshes the mirror copy.
//! - Resolution never fails. Every error is logged and absorbed by the
//!   fallback chain.

use crate::model::note::Note;
use crate::repo::mirror_repo::MirrorRepository;
use crate::seed::seed_notes;
use crate::store::MIRROR_KEY;
use log::{info, warn};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;
use std::time::Instant;

pub type LoadResult<T> = Result<T, LoadError>;

/// Error reading or decoding the source document.
#[derive(Debug)]
pub enum LoadError {
    /// Source document could not be read.
    Io(std::io::Error),
    /// Source document is not a recognized notes shape.
    Parse(serde_json::Error),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read source document: {err}"),
            Self::Parse(err) => write!(
                f,
                "source document is not an array of notes or a wrapping object: {err}"
            ),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Accepted source document shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SourceDocument {
    /// Bare array of notes.
    Bare(Vec<Note>),
    /// Object wrapping the array under a `notes` field.
    Wrapped { notes: Vec<Note> },
}

impl SourceDocument {
    fn into_notes(self) -> Vec<Note> {
        match self {
            Self::Bare(notes) => notes,
            Self::Wrapped { notes } => notes,
        }
    }
}

/// Reads and decodes the source document at `path`.
pub fn read_source(path: &Path) -> LoadResult<Vec<Note>> {
    let raw = fs::read_to_string(path)?;
    let document: SourceDocument = serde_json::from_str(&raw)?;
    Ok(document.into_notes())
}

/// Resolves the startup collection: source document, mirror copy, seeds.
pub fn load_collection(source: &Path, mirror: &impl MirrorRepository) -> Vec<Note> {
    let started_at = Instant::now();
    info!(
        "event=load_collection module=loader status=start source={}",
        source.display()
    );

    match read_source(source) {
        Ok(notes) => {
            refresh_mirror(mirror, &notes);
            info!(
                "event=load_collection module=loader status=ok origin=source count={} duration_ms={}",
                notes.len(),
                started_at.elapsed().as_millis()
            );
            return notes;
        }
        Err(err) => {
            warn!("event=load_collection module=loader status=fallback origin=source error={err}");
        }
    }

    match mirror.read(MIRROR_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<Vec<Note>>(&raw) {
            Ok(notes) => {
                info!(
                    "event=load_collection module=loader status=ok origin=mirror count={} duration_ms={}",
                    notes.len(),
                    started_at.elapsed().as_millis()
                );
                return notes;
            }
            Err(err) => {
                warn!(
                    "event=load_collection module=loader status=fallback origin=mirror error={err}"
                );
            }
        },
        Ok(None) => {
            info!("event=load_collection module=loader status=fallback origin=mirror error=empty");
        }
        Err(err) => {
            warn!("event=load_collection module=loader status=fallback origin=mirror error={err}");
        }
    }

    let seeds = seed_notes();
    info!(
        "event=load_collection module=loader status=ok origin=seed count={} duration_ms={}",
        seeds.len(),
        started_at.elapsed().as_millis()
    );
    seeds
}

/// Persists a fresh source read to the mirror. Failures only degrade the
/// next offline start, so they are logged and swallowed.
fn refresh_mirror(mirror: &impl MirrorRepository, notes: &[Note]) {
    let blob = match serde_json::to_string(notes) {
        Ok(blob) => blob,
        Err(err) => {
            warn!("event=mirror_refresh module=loader status=error error={err}");
            return;
        }
    };
    if let Err(err) = mirror.write(MIRROR_KEY, &blob) {
        warn!("event=mirror_refresh module=loader status=error error={err}");
    }
}
