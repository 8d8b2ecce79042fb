mod helpers;

use helpers::test_db;
use rusqlite::Connection;
use tempfile::TempDir;
use waymark::db;
use waymark::markers::presenter::NullPresenter;
use waymark::markers::store::{MarkerStore, MARKERS_SLOT};

#[test]
fn open_creates_new_db_at_nonexistent_path() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("subdir").join("new.db");

    // Should not exist yet
    assert!(!db_path.exists());

    let conn = db::open_database(&db_path).unwrap();

    // Should have been created
    assert!(db_path.exists());

    // Should be functional
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM slots", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn slots_survive_a_reopen() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("campus.db");

    {
        let conn = db::open_database(&db_path).unwrap();
        db::write_slot(&conn, "campusChat", "<div>hello</div>").unwrap();
    }

    let conn = db::open_database(&db_path).unwrap();
    assert_eq!(
        db::read_slot(&conn, "campusChat").unwrap().as_deref(),
        Some("<div>hello</div>")
    );
}

#[test]
fn fresh_db_is_at_current_schema_version() {
    let conn = test_db();
    assert_eq!(
        db::migrations::get_schema_version(&conn).unwrap(),
        db::migrations::CURRENT_SCHEMA_VERSION
    );
}

#[test]
fn legacy_markers_without_ids_are_migrated_then_restorable() {
    // A v1 database: schema only, marker records with no id field
    let conn = Connection::open_in_memory().unwrap();
    db::schema::init_schema(&conn).unwrap();
    db::write_slot(
        &conn,
        MARKERS_SLOT,
        r#"[{"lat":13.0101,"lng":76.1205,"name":"Flag","desc":""},{"lat":13.0112,"lng":76.1198,"name":"CSE","desc":"block"}]"#,
    )
    .unwrap();

    db::migrations::run_migrations(&conn).unwrap();

    let store = MarkerStore::restore(&conn, &mut NullPresenter).unwrap();
    assert_eq!(store.list().len(), 2);
    assert!(store.list().iter().all(|m| !m.id.is_empty()));
    assert_ne!(store.list()[0].id, store.list()[1].id);
    assert_eq!(store.list()[1].desc, "block");
}
