//! Mirror repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide durable key/value persistence for serialized note collections.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `write` replaces the whole value for a key atomically.
//! - `read` never invents data. A missing key is `Ok(None)`, not an error.

use crate::db::DbError;
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for mirror persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "mirror repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "mirror repository requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for mirror key/value operations.
pub trait MirrorRepository {
    /// Reads the stored value for one key, if any.
    fn read(&self, key: &str) -> RepoResult<Option<String>>;
    /// Inserts or fully replaces the value for one key.
    fn write(&self, key: &str, value: &str) -> RepoResult<()>;
}

/// SQLite-backed mirror repository.
pub struct SqliteMirrorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMirrorRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_mirror_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl MirrorRepository for SqliteMirrorRepository<'_> {
    fn read(&self, key: &str) -> RepoResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM mirror WHERE key = ?1;")?;
        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get("value")?));
        }
        Ok(None)
    }

    fn write(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO mirror (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

fn ensure_mirror_connection_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, "mirror")? {
        return Err(RepoError::MissingRequiredTable("mirror"));
    }

    for column in ["key", "value", "updated_at"] {
        if !table_has_column(conn, "mirror", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "mirror",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
