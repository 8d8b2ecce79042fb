pub mod migrations;
pub mod schema;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Open (or create) the slot database at the given path, with schema
/// initialized and migrations applied.
pub fn open_database(path: impl AsRef<Path>) -> Result<Connection> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let conn = Connection::open(path)
        .with_context(|| format!("failed to open database at {}", path.display()))?;

    // Enable WAL mode for better concurrent read performance
    conn.pragma_update(None, "journal_mode", "WAL")?;

    schema::init_schema(&conn).context("failed to initialize schema")?;
    migrations::run_migrations(&conn).context("failed to run migrations")?;

    tracing::info!(path = %path.display(), "database initialized");
    Ok(conn)
}

/// Read the raw string value of a slot. `None` if the slot was never written.
pub fn read_slot(conn: &Connection, key: &str) -> rusqlite::Result<Option<String>> {
    conn.query_row(
        "SELECT value FROM slots WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
}

/// Write a slot, overwriting any prior value.
pub fn write_slot(conn: &Connection, key: &str, value: &str) -> rusqlite::Result<()> {
    let now = chrono::Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3) \
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, now],
    )?;
    Ok(())
}

/// Read a slot holding a JSON array. An absent or malformed slot yields an
/// empty list — never an error. Malformed data is logged and left in place;
/// the next write overwrites it.
pub fn read_list<T: DeserializeOwned>(
    conn: &Connection,
    key: &str,
) -> crate::error::Result<Vec<T>> {
    match read_slot(conn, key)? {
        None => Ok(Vec::new()),
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(list) => Ok(list),
            Err(err) => {
                tracing::warn!(slot = key, %err, "malformed slot, treating as empty");
                Ok(Vec::new())
            }
        },
    }
}

/// Serialize a list to JSON and overwrite the slot with it.
pub fn write_list<T: Serialize>(
    conn: &Connection,
    key: &str,
    list: &[T],
) -> crate::error::Result<()> {
    let serialized = serde_json::to_string(list)?;
    write_slot(conn, key, &serialized)?;
    Ok(())
}

/// Open an in-memory database for testing.
#[cfg(test)]
pub fn open_memory_database() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
    schema::init_schema(&conn).context("failed to initialize schema")?;
    migrations::run_migrations(&conn).context("failed to run migrations")?;
    Ok(conn)
}
