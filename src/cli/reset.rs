//! CLI `reset` command — delete all persisted state after user confirmation.

use anyhow::{bail, Result};
use std::io::Write;

use crate::config::WaymarkConfig;

/// Delete all slots after user confirmation.
pub fn reset(config: &WaymarkConfig) -> Result<()> {
    let db_path = config.resolved_db_path();

    println!("WARNING: This will permanently delete ALL markers, events, and chat history.");
    println!("Database: {}", db_path.display());
    print!("\nType YES to confirm: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    if input.trim() != "YES" {
        bail!("reset cancelled");
    }

    let conn = crate::db::open_database(&db_path)?;
    conn.execute_batch("DELETE FROM slots;")?;

    println!("All slots deleted. Database reset complete.");
    Ok(())
}
