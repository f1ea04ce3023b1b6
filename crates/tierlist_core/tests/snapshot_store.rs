use rusqlite::params;
use tierlist_core::db::{open_db, open_db_in_memory};
use tierlist_core::{Snapshot, SnapshotStore, SqliteSnapshotStore, STORAGE_KEY};

fn sample() -> Snapshot {
    let mut snapshot = Snapshot::new();
    snapshot.push("A", vec![1, 2]);
    snapshot.push("unranked", vec![3]);
    snapshot
}

#[test]
fn load_returns_none_when_nothing_is_stored() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSnapshotStore::new(&conn);

    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn save_then_load_round_trips() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSnapshotStore::new(&conn);

    let snapshot = sample();
    store.save(&snapshot).unwrap();

    assert_eq!(store.load().unwrap(), Some(snapshot));
}

#[test]
fn save_overwrites_the_previous_document() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSnapshotStore::new(&conn);

    store.save(&sample()).unwrap();

    let mut replacement = Snapshot::new();
    replacement.push("S", vec![9]);
    store.save(&replacement).unwrap();

    assert_eq!(store.load().unwrap(), Some(replacement));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM local_store;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1, "the snapshot is a single overwritten document");
}

#[test]
fn corrupt_stored_value_loads_as_absent() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSnapshotStore::new(&conn);

    for garbage in ["not json", "[1,2]", r#"{"A":"one"}"#, r#"{"A":[1.5]}"#] {
        conn.execute(
            "INSERT INTO local_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![STORAGE_KEY, garbage],
        )
        .unwrap();
        assert_eq!(store.load().unwrap(), None, "`{garbage}` should degrade");
    }
}

#[test]
fn snapshot_survives_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tierlist.db");

    let conn = open_db(&path).unwrap();
    SqliteSnapshotStore::new(&conn).save(&sample()).unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(SqliteSnapshotStore::new(&conn).load().unwrap(), Some(sample()));
}
