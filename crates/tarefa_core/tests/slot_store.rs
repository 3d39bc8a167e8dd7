use rusqlite::Connection;
use tarefa_core::db::migrations::latest_version;
use tarefa_core::db::{open_db, open_db_in_memory};
use tarefa_core::{MemorySlotStore, SlotError, SlotStore, SqliteSlotStore};

#[test]
fn memory_slot_reads_none_before_first_write() {
    let slot = MemorySlotStore::new();
    assert_eq!(slot.read("tasks").unwrap(), None);
}

#[test]
fn memory_slot_write_overwrites_previous_value() {
    let mut slot = MemorySlotStore::new();

    slot.write("tasks", "[]").unwrap();
    slot.write("tasks", r#"[{"text":"Buy milk"}]"#).unwrap();

    assert_eq!(
        slot.read("tasks").unwrap().as_deref(),
        Some(r#"[{"text":"Buy milk"}]"#)
    );
}

#[test]
fn sqlite_slot_roundtrips_and_overwrites() {
    let mut slot = SqliteSlotStore::try_new(open_db_in_memory().unwrap()).unwrap();

    assert_eq!(slot.read("tasks").unwrap(), None);

    slot.write("tasks", "[]").unwrap();
    assert_eq!(slot.read("tasks").unwrap().as_deref(), Some("[]"));

    slot.write("tasks", r#"[{"text":"Buy milk"}]"#).unwrap();
    assert_eq!(
        slot.read("tasks").unwrap().as_deref(),
        Some(r#"[{"text":"Buy milk"}]"#)
    );
}

#[test]
fn sqlite_slots_are_independent_per_key() {
    let mut slot = SqliteSlotStore::try_new(open_db_in_memory().unwrap()).unwrap();

    slot.write("tasks", "[]").unwrap();
    slot.write("settings", "{}").unwrap();

    assert_eq!(slot.read("tasks").unwrap().as_deref(), Some("[]"));
    assert_eq!(slot.read("settings").unwrap().as_deref(), Some("{}"));
}

#[test]
fn sqlite_slot_value_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slots.db");

    {
        let mut slot = SqliteSlotStore::try_new(open_db(&path).unwrap()).unwrap();
        slot.write("tasks", r#"[{"text":"Buy milk"}]"#).unwrap();
    }

    let slot = SqliteSlotStore::try_new(open_db(&path).unwrap()).unwrap();
    assert_eq!(
        slot.read("tasks").unwrap().as_deref(),
        Some(r#"[{"text":"Buy milk"}]"#)
    );
}

#[test]
fn try_new_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteSlotStore::try_new(conn) {
        Err(SlotError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn try_new_rejects_connection_without_slots_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.pragma_update(None, "user_version", latest_version())
        .unwrap();

    assert!(matches!(
        SqliteSlotStore::try_new(conn),
        Err(SlotError::MissingRequiredTable("slots"))
    ));
}
