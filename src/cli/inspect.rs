//! CLI `inspect` command — display the persisted slots.

use anyhow::Result;

use crate::config::WaymarkConfig;
use crate::events;
use crate::markers::store::MARKERS_SLOT;
use crate::markers::types::Marker;

/// Print every persisted slot in a readable form.
pub fn inspect(config: &WaymarkConfig) -> Result<()> {
    let db_path = config.resolved_db_path();
    let conn = crate::db::open_database(&db_path)?;

    println!("Database: {}", db_path.display());
    println!("{}", "=".repeat(50));
    println!(
        "Schema version: {}",
        crate::db::migrations::get_schema_version(&conn)?
    );
    println!();

    let markers: Vec<Marker> = crate::db::read_list(&conn, MARKERS_SLOT)?;
    println!("Markers ({}):", markers.len());
    for m in &markers {
        println!("  {}  ({:.6}, {:.6})  {}", m.id, m.lat, m.lng, m.name);
        if !m.desc.is_empty() {
            println!("      {}", m.desc);
        }
    }
    println!();

    let events = events::list(&conn)?;
    println!("Events ({}):", events.len());
    for (index, ev) in events.iter().enumerate() {
        println!("  [{index}] {} — {}", ev.name, ev.desc);
    }
    println!();

    let chat = crate::db::read_slot(&conn, crate::chat::transcript::CHAT_SLOT)?;
    match chat {
        Some(blob) => println!("Chat transcript: {} bytes of rendered markup", blob.len()),
        None => println!("Chat transcript: empty"),
    }

    Ok(())
}
