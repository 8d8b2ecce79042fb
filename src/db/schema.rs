//! SQL DDL for the slot store.
//!
//! Defines the `slots` table (named JSON slots, the persistence model for
//! markers, events, and the chat transcript) and the `schema_meta` table.
//! All DDL uses `IF NOT EXISTS` for idempotent initialization.

use rusqlite::Connection;

/// All schema DDL statements.
const SCHEMA_SQL: &str = r#"
-- Named key-value slots; each value is a JSON document or an opaque blob
CREATE TABLE IF NOT EXISTS slots (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Schema metadata
CREATE TABLE IF NOT EXISTS schema_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Initialize all schema tables. Idempotent (uses IF NOT EXISTS).
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    // Set initial schema version if not already present
    conn.execute(
        "INSERT OR IGNORE INTO schema_meta (key, value) VALUES ('schema_version', '1')",
        [],
    )?;

    Ok(())
}
