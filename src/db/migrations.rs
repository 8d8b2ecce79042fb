//! Forward-only schema migration framework.
//!
//! Tracks the schema version in `schema_meta` and runs sequential migrations
//! to bring the database up to [`CURRENT_SCHEMA_VERSION`].

use rusqlite::Connection;

/// The schema version that the current binary expects.
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

/// Get the current schema version from the database.
pub fn get_schema_version(conn: &Connection) -> rusqlite::Result<u32> {
    conn.query_row(
        "SELECT value FROM schema_meta WHERE key = 'schema_version'",
        [],
        |row| {
            let val: String = row.get(0)?;
            Ok(val.parse::<u32>().unwrap_or(0))
        },
    )
}

/// Update the stored schema version.
fn update_schema_version(conn: &Connection, version: u32) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE schema_meta SET value = ?1 WHERE key = 'schema_version'",
        [version.to_string()],
    )?;
    Ok(())
}

/// Run any pending forward-only migrations.
pub fn run_migrations(conn: &Connection) -> rusqlite::Result<()> {
    let mut version = get_schema_version(conn)?;
    tracing::debug!(schema_version = version, target = CURRENT_SCHEMA_VERSION, "checking migrations");

    while version < CURRENT_SCHEMA_VERSION {
        let next = version + 1;
        tracing::info!(from = version, to = next, "running migration");

        match next {
            2 => migrate_v1_to_v2(conn)?,
            _ => {
                tracing::error!(version = next, "unknown migration target");
                break;
            }
        }

        update_schema_version(conn, next)?;
        version = next;
    }

    Ok(())
}

/// Migration v1 → v2: backfill marker ids.
///
/// v1 regenerated marker ids on every load, so persisted records may lack an
/// `id` field. Assign a fresh id to any such record; ids already present are
/// left untouched.
fn migrate_v1_to_v2(conn: &Connection) -> rusqlite::Result<()> {
    let raw = match super::read_slot(conn, crate::markers::store::MARKERS_SLOT)? {
        Some(raw) => raw,
        None => return Ok(()),
    };

    let mut records: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(serde_json::Value::Array(arr)) => arr,
        // Malformed slots are recovered elsewhere; nothing to migrate here
        _ => return Ok(()),
    };

    let mut backfilled = 0usize;
    for record in &mut records {
        if let Some(obj) = record.as_object_mut() {
            let missing = !matches!(obj.get("id"), Some(serde_json::Value::String(s)) if !s.is_empty());
            if missing {
                obj.insert(
                    "id".to_string(),
                    serde_json::Value::String(crate::markers::id::next_id()),
                );
                backfilled += 1;
            }
        }
    }

    if backfilled > 0 {
        tracing::info!(backfilled, "assigned ids to legacy marker records");
        let serialized = serde_json::Value::Array(records).to_string();
        super::write_slot(conn, crate::markers::store::MARKERS_SLOT, &serialized)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{read_slot, write_slot};
    use crate::markers::store::MARKERS_SLOT;

    fn test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::schema::init_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn get_schema_version_returns_1_on_fresh_db() {
        let conn = test_db();
        assert_eq!(get_schema_version(&conn).unwrap(), 1);
    }

    #[test]
    fn run_migrations_upgrades_to_current() {
        let conn = test_db();
        run_migrations(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn migrations_are_idempotent() {
        let conn = test_db();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap(); // second call should not error
        assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn migration_v1_to_v2_backfills_missing_ids() {
        let conn = test_db();
        write_slot(
            &conn,
            MARKERS_SLOT,
            r#"[{"lat":13.01,"lng":76.12,"name":"Flag","desc":""},{"id":"keep-me","lat":13.02,"lng":76.13,"name":"CSE","desc":""}]"#,
        )
        .unwrap();

        run_migrations(&conn).unwrap();

        let raw = read_slot(&conn, MARKERS_SLOT).unwrap().unwrap();
        let records: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(records.len(), 2);
        let first_id = records[0]["id"].as_str().unwrap();
        assert!(!first_id.is_empty());
        assert_eq!(records[1]["id"].as_str().unwrap(), "keep-me");
    }

    #[test]
    fn migration_leaves_absent_slot_alone() {
        let conn = test_db();
        run_migrations(&conn).unwrap();
        assert!(read_slot(&conn, MARKERS_SLOT).unwrap().is_none());
    }
}
