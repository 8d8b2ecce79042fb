mod helpers;

use helpers::test_db;
use waymark::error::WaymarkError;
use waymark::events;

#[test]
fn add_list_remove_scenario() {
    let conn = test_db();

    events::add(&conn, "Tech Fest", "Starts Monday").unwrap();
    let listed = events::list(&conn).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Tech Fest");
    assert_eq!(listed[0].desc, "Starts Monday");

    events::remove_at(&conn, 0).unwrap();
    assert!(events::list(&conn).unwrap().is_empty());
}

#[test]
fn validation_rejects_blank_fields_without_state_change() {
    let conn = test_db();

    for (name, desc) in [("", "desc"), ("name", ""), ("   ", "desc"), ("name", "\t")] {
        let err = events::add(&conn, name, desc).unwrap_err();
        assert!(matches!(err, WaymarkError::Validation(_)), "{name:?}/{desc:?}");
    }
    assert!(events::list(&conn).unwrap().is_empty());
}

#[test]
fn out_of_bounds_delete_is_a_silent_noop() {
    let conn = test_db();
    events::add(&conn, "Tech Fest", "Starts Monday").unwrap();

    events::remove_at(&conn, 1).unwrap();
    events::remove_at(&conn, 99).unwrap();
    assert_eq!(events::list(&conn).unwrap().len(), 1);
}

#[test]
fn every_read_observes_the_latest_persisted_state() {
    let conn = test_db();
    events::add(&conn, "First", "a").unwrap();
    events::add(&conn, "Second", "b").unwrap();

    // A deletion between two list() calls is visible to the second one
    let before = events::list(&conn).unwrap();
    events::remove_at(&conn, 0).unwrap();
    let after = events::list(&conn).unwrap();

    assert_eq!(before.len(), 2);
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].name, "Second");
}

#[test]
fn events_survive_a_reopen() {
    let tmp = tempfile::TempDir::new().unwrap();
    let db_path = tmp.path().join("campus.db");

    {
        let conn = waymark::db::open_database(&db_path).unwrap();
        events::add(&conn, "Sports Day", "On the main ground").unwrap();
    }

    let conn = waymark::db::open_database(&db_path).unwrap();
    let listed = events::list(&conn).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Sports Day");
}
