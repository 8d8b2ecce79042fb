//! Marker lifecycle — create, remove, list, persist, restore.
//!
//! [`MarkerStore`] owns the canonical ordered marker list. Every successful
//! create or remove rewrites the `campusMarkers` slot in the same call, so
//! the persisted list and the in-memory list never drift apart; the
//! presenter is asked to (un)render only after both halves agree.

use rusqlite::Connection;

use crate::db;
use crate::error::{Result, WaymarkError};
use crate::markers::id;
use crate::markers::presenter::Presenter;
use crate::markers::types::{Marker, DEFAULT_NAME};

/// Slot holding the serialized marker list.
pub const MARKERS_SLOT: &str = "campusMarkers";

/// In-memory ordered collection of markers, mirrored to [`MARKERS_SLOT`].
#[derive(Debug, Default)]
pub struct MarkerStore {
    markers: Vec<Marker>,
}

impl MarkerStore {
    /// Load the persisted marker list and render every restored marker.
    ///
    /// An absent or malformed slot restores as an empty store. Runs before
    /// any user command is accepted, so restored markers always precede
    /// session additions in the list.
    pub fn restore(conn: &Connection, presenter: &mut dyn Presenter) -> Result<Self> {
        let markers: Vec<Marker> = db::read_list(conn, MARKERS_SLOT)?;
        for marker in &markers {
            presenter.render(marker);
        }
        tracing::debug!(count = markers.len(), "restored markers");
        Ok(Self { markers })
    }

    /// Create a marker at (`lat`, `lng`) with a fresh id, persist the full
    /// list, and render it. A blank name falls back to "Untitled".
    pub fn create(
        &mut self,
        conn: &Connection,
        presenter: &mut dyn Presenter,
        lat: f64,
        lng: f64,
        name: &str,
        desc: &str,
    ) -> Result<Marker> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(WaymarkError::InvalidCoordinate { lat, lng });
        }

        let name = match name.trim() {
            "" => DEFAULT_NAME.to_string(),
            trimmed => trimmed.to_string(),
        };
        let marker = Marker {
            id: id::next_id(),
            lat,
            lng,
            name,
            desc: desc.trim().to_string(),
        };

        self.markers.push(marker.clone());
        if let Err(err) = self.persist(conn) {
            // Keep list and slot consistent if the write fails
            self.markers.pop();
            return Err(err);
        }
        presenter.render(&marker);

        tracing::info!(id = %marker.id, name = %marker.name, "marker created");
        Ok(marker)
    }

    /// Remove the marker with `id`, persist, and un-render its handle.
    ///
    /// Returns whether a removal occurred; an unknown id is a no-op, not an
    /// error.
    pub fn remove(
        &mut self,
        conn: &Connection,
        presenter: &mut dyn Presenter,
        id: &str,
    ) -> Result<bool> {
        let Some(position) = self.markers.iter().position(|m| m.id == id) else {
            return Ok(false);
        };

        let removed = self.markers.remove(position);
        if let Err(err) = self.persist(conn) {
            self.markers.insert(position, removed);
            return Err(err);
        }
        presenter.unrender(id);

        tracing::info!(id, "marker removed");
        Ok(true)
    }

    /// Read-only snapshot in insertion order.
    pub fn list(&self) -> &[Marker] {
        &self.markers
    }

    /// Serialize the full current list to the slot, overwriting prior
    /// contents.
    pub fn persist(&self, conn: &Connection) -> Result<()> {
        db::write_list(conn, MARKERS_SLOT, &self.markers)
    }
}
