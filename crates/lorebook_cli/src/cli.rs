//! Argument definitions for the `lorebook` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "lorebook")]
#[command(about = "Campaign-wiki note browser", version)]
pub struct Cli {
    /// Directory holding the mirror database and logs.
    #[arg(long, default_value = ".lorebook")]
    pub data_dir: PathBuf,

    /// Notes source document read at startup.
    #[arg(long, default_value = "notes.json")]
    pub source: PathBuf,

    /// Log level (trace|debug|info|warn|error). Defaults per build mode.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log directory override. Defaults to `<data-dir>/logs`.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List notes matching a query and filter, in display order.
    List(ListArgs),
    /// Show one note by id.
    Show(ShowArgs),
    /// Capture a new note and print its id.
    Add(AddArgs),
    /// Replace the whole collection from a JSON file.
    Import(ImportArgs),
    /// Write the full collection as pretty JSON.
    Export(ExportArgs),
    /// Print the quick links shown when nothing is searched.
    Links,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Search text, matched against title, body and tags.
    #[arg(long, default_value = "")]
    pub query: String,

    /// Scope filter: `all`, a category name, or `tag:<name>`.
    #[arg(long, default_value = "all")]
    pub filter: String,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Note id, with or without a leading `#`.
    pub id: String,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Display title for the new note.
    pub title: String,

    /// Note category (session|npc|location|rule|faction).
    #[arg(long, default_value = "session")]
    pub kind: String,

    /// Tag to attach. Repeatable.
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// JSON file holding a bare array of notes.
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file. Prints to stdout when omitted.
    pub output: Option<PathBuf>,
}
