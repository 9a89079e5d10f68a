//! Command handlers: wire the browser core to the terminal.
//!
//! Every subcommand boots the same way the single-page surface does: open
//! the mirror, resolve the collection through the loader chain, then drive
//! the browser with intents. Output stays line-oriented and deterministic.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use lorebook_core::db::open_db;
use lorebook_core::{
    default_log_level, init_logging, load_collection, Browser, Intent, NoteFilter, NoteKind,
    NoteStore, Pane, QuickAdd, ReaderView, ResultsPane, SqliteMirrorRepository,
};

use crate::cli::{AddArgs, Cli, Commands, ExportArgs, ImportArgs, ListArgs, ShowArgs};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = prepare_data_dir(&cli.data_dir)?;
    init_cli_logging(&cli, &data_dir)?;

    let conn = open_db(data_dir.join("mirror.db")).context("failed to open mirror database")?;
    let mirror = SqliteMirrorRepository::try_new(&conn).context("mirror schema not ready")?;
    let notes = load_collection(&cli.source, &mirror);
    let mut browser = Browser::new(NoteStore::new(notes, mirror));

    match cli.command {
        Commands::List(args) => list(&mut browser, args),
        Commands::Show(args) => show(&mut browser, args),
        Commands::Add(args) => add(&mut browser, args),
        Commands::Import(args) => import(&mut browser, args),
        Commands::Export(args) => export(&browser, args),
        Commands::Links => links(&browser),
    }
}

fn prepare_data_dir(raw: &Path) -> Result<PathBuf> {
    fs::create_dir_all(raw)
        .with_context(|| format!("failed to create data directory `{}`", raw.display()))?;
    raw.canonicalize()
        .with_context(|| format!("failed to resolve data directory `{}`", raw.display()))
}

fn init_cli_logging(cli: &Cli, data_dir: &Path) -> Result<()> {
    let level = cli.log_level.as_deref().unwrap_or_else(|| default_log_level());
    let log_dir = cli
        .log_dir
        .clone()
        .unwrap_or_else(|| data_dir.join("logs"));
    let log_dir = log_dir
        .to_str()
        .context("log directory path is not valid UTF-8")?;
    init_logging(level, log_dir).map_err(anyhow::Error::msg)
}

fn list(browser: &mut Browser<SqliteMirrorRepository<'_>>, args: ListArgs) -> Result<()> {
    browser.apply(Intent::FilterChanged(NoteFilter::parse(&args.filter)))?;
    browser.apply(Intent::QueryChanged(args.query))?;

    match browser.pane() {
        Pane::Results(pane) => print_results(&pane),
        Pane::QuickLinks(_) => {
            // Unfiltered empty query: the full collection in display order.
            print_results(&lorebook_core::render::results_pane(&browser.results(), 0));
        }
    }
    Ok(())
}

fn print_results(pane: &ResultsPane<'_>) {
    println!("{} result(s)", pane.count);
    for row in &pane.rows {
        println!("[{}] {}  #{}", row.badge.label, row.note.title, row.note.id);
        if !row.preview.is_empty() {
            println!("    {}", row.preview);
        }
        if !row.note.tags.is_empty() {
            println!("    tags: {}", row.note.tags.join(", "));
        }
    }
}

fn show(browser: &mut Browser<SqliteMirrorRepository<'_>>, args: ShowArgs) -> Result<()> {
    let id = args.id.strip_prefix('#').unwrap_or(&args.id);
    browser.apply(Intent::OpenById(id.to_string()))?;
    let Some(view) = browser.reader() else {
        bail!("no note with id `{id}`");
    };
    print_reader(&view);
    if let Some(link) = browser.deep_link() {
        println!("\nlink: {link}");
    }
    Ok(())
}

fn print_reader(view: &ReaderView<'_>) {
    println!("{}  [{}]", view.title, view.badge.label);
    if !view.tags.is_empty() {
        println!("tags: {}", view.tags.join(", "));
    }
    if let Some(avatar) = view.avatar {
        println!("image: {avatar}");
    }
    println!("\n{}", view.body_html);
}

fn add(browser: &mut Browser<SqliteMirrorRepository<'_>>, args: AddArgs) -> Result<()> {
    browser.apply(Intent::QuickAddNote(QuickAdd {
        title: args.title,
        kind: NoteKind::from(args.kind),
        tags: args.tags,
    }))?;
    match browser.open_id() {
        Some(id) => println!("added #{id}"),
        None => bail!("quick add did not open the new note"),
    }
    Ok(())
}

fn import(browser: &mut Browser<SqliteMirrorRepository<'_>>, args: ImportArgs) -> Result<()> {
    let payload = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read `{}`", args.file.display()))?;
    browser.apply(Intent::ImportNotes(payload))?;
    println!("imported {} note(s)", browser.store().notes().len());
    Ok(())
}

fn export(browser: &Browser<SqliteMirrorRepository<'_>>, args: ExportArgs) -> Result<()> {
    let json = browser.store().export_json()?;
    match args.output {
        Some(path) => {
            fs::write(&path, &json)
                .with_context(|| format!("failed to write `{}`", path.display()))?;
            println!(
                "exported {} note(s) to {}",
                browser.store().notes().len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn links(browser: &Browser<SqliteMirrorRepository<'_>>) -> Result<()> {
    let Pane::QuickLinks(entries) = browser.pane() else {
        bail!("quick links are only available for the default view");
    };
    for link in entries {
        println!("{}  #{}", link.label, link.id);
    }
    Ok(())
}
