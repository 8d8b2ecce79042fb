//! Campus event log.
//!
//! Events are `{name, desc}` records with no id, persisted as a JSON array in
//! the `campusEvents` slot and deleted by position. Every operation reads the
//! slot fresh — deletion is positional, so a cached list could point the
//! index at the wrong record after another write.

use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::db;
use crate::error::{Result, WaymarkError};

/// Slot holding the serialized event list.
pub const EVENTS_SLOT: &str = "campusEvents";

/// An ongoing campus event. Referenced only by its position in the
/// persisted list at the moment of deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub name: String,
    pub desc: String,
}

/// All events in posting order, loaded fresh from the slot on every call.
pub fn list(conn: &Connection) -> Result<Vec<EventRecord>> {
    db::read_list(conn, EVENTS_SLOT)
}

/// Append an event. Both fields must be non-empty after trimming.
pub fn add(conn: &Connection, name: &str, desc: &str) -> Result<EventRecord> {
    let name = name.trim();
    let desc = desc.trim();
    if name.is_empty() || desc.is_empty() {
        return Err(WaymarkError::validation("Please fill all fields."));
    }

    let mut events = list(conn)?;
    let record = EventRecord {
        name: name.to_string(),
        desc: desc.to_string(),
    };
    events.push(record.clone());
    db::write_list(conn, EVENTS_SLOT, &events)?;

    tracing::info!(name = %record.name, "event added");
    Ok(record)
}

/// Remove the event at `index` and persist. Out-of-bounds indices are a
/// silent no-op.
///
/// The index must come from the same freshly loaded list the caller is
/// about to mutate. Known limitation: two deletions issued in quick
/// succession against one stale snapshot can remove the wrong record —
/// the record shape carries no id to delete by instead.
pub fn remove_at(conn: &Connection, index: usize) -> Result<()> {
    let mut events = list(conn)?;
    if index >= events.len() {
        return Ok(());
    }

    let removed = events.remove(index);
    db::write_list(conn, EVENTS_SLOT, &events)?;

    tracing::info!(index, name = %removed.name, "event removed");
    Ok(())
}
