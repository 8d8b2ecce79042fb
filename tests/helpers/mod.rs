#![allow(dead_code)]

use rusqlite::Connection;
use waymark::db;
use waymark::markers::presenter::NullPresenter;
use waymark::markers::store::MarkerStore;
use waymark::markers::types::Marker;

/// Open a fresh in-memory database with schema and migrations applied.
pub fn test_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::schema::init_schema(&conn).unwrap();
    db::migrations::run_migrations(&conn).unwrap();
    conn
}

/// Create a marker through the store with no rendering. Returns the marker.
pub fn seed_marker(
    store: &mut MarkerStore,
    conn: &Connection,
    lat: f64,
    lng: f64,
    name: &str,
    desc: &str,
) -> Marker {
    store
        .create(conn, &mut NullPresenter, lat, lng, name, desc)
        .unwrap()
}
