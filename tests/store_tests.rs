use rhabits::core::store::{HabitMatch, HabitStore};
use rhabits::db::pool::DbPool;
use rhabits::errors::AppError;
use rhabits::models::habit::HabitPatch;
use rhabits::models::habit_type::HabitType;
use rhabits::models::record::{CellState, HabitRecord, RecordStatus};
use rhabits::storage::{HABITS_KEY, MemorySlots, RECORDS_KEY, SlotStorage, SqliteSlots, VERSION_KEY};

mod common;
use common::{day, habit};

const VERSION: &str = "2.0";

fn empty_store() -> HabitStore<MemorySlots> {
    HabitStore::open(MemorySlots::new(), VERSION).expect("open store")
}

fn store_with_habit(id: &str) -> HabitStore<MemorySlots> {
    let mut store = empty_store();
    store.add_habit(habit(id, HabitType::Good)).expect("add habit");
    store
}

#[test]
fn test_open_fresh_storage_writes_version_marker() {
    let store = empty_store();

    assert!(store.habits().is_empty());
    assert!(store.records().is_empty());
    assert!(!store.was_reset_by_version());
    assert_eq!(store.storage().raw(VERSION_KEY), Some(VERSION));
}

#[test]
fn test_version_mismatch_discards_persisted_data() {
    let mut old = empty_store();
    old.add_habit(habit("h1", HabitType::Good)).unwrap();
    old.upsert_record(HabitRecord::success("h1", day("2025-01-10"))).unwrap();

    let mut slots = old.storage().clone();
    slots.set(VERSION_KEY, "1.0").unwrap();

    let store = HabitStore::open(slots, VERSION).unwrap();

    assert!(store.was_reset_by_version());
    assert!(store.habits().is_empty());
    assert!(store.records().is_empty());
    assert_eq!(store.storage().raw(VERSION_KEY), Some(VERSION));
    assert_eq!(store.storage().raw(HABITS_KEY), None);
    assert_eq!(store.storage().raw(RECORDS_KEY), None);
}

#[test]
fn test_corrupt_slot_loads_as_empty() {
    let slots = MemorySlots::with_slots([
        (VERSION_KEY, VERSION),
        (HABITS_KEY, "{not json"),
        (RECORDS_KEY, "[]"),
    ]);

    let store = HabitStore::open(slots, VERSION).unwrap();

    assert!(store.habits().is_empty());
    assert!(!store.was_reset_by_version());
}

#[test]
fn test_reopen_observes_latest_state() {
    let mut store = store_with_habit("h1");
    store.upsert_record(HabitRecord::fail("h1", day("2025-01-10"))).unwrap();

    let reopened = HabitStore::open(store.storage().clone(), VERSION).unwrap();

    assert_eq!(reopened.habits().len(), 1);
    // created_at survives the JSON slot as a timestamp
    assert_eq!(reopened.habits()[0], store.habits()[0]);
    assert_eq!(
        reopened.get_record("h1", day("2025-01-10")).map(|r| r.status),
        Some(RecordStatus::Fail)
    );
}

#[test]
fn test_upsert_is_idempotent() {
    let mut store = store_with_habit("h1");
    let record = HabitRecord::success("h1", day("2025-01-10")).with_note(Some("easy".into()));

    store.upsert_record(record.clone()).unwrap();
    store.upsert_record(record.clone()).unwrap();

    assert_eq!(store.records().len(), 1);
    assert_eq!(store.get_record("h1", day("2025-01-10")), Some(&record));
}

#[test]
fn test_upsert_replaces_same_key() {
    let mut store = store_with_habit("h1");

    store.upsert_record(HabitRecord::success("h1", day("2025-01-10"))).unwrap();
    store
        .upsert_record(HabitRecord::fail("h1", day("2025-01-10")).with_measurement(3.5, None))
        .unwrap();
    store.upsert_record(HabitRecord::fail("h1", day("2025-01-10"))).unwrap();

    assert_eq!(store.records().len(), 1);
    let r = store.get_record("h1", day("2025-01-10")).unwrap();
    assert_eq!(r.status, RecordStatus::Fail);
    // replaced as a whole, the measurement from the previous write is gone
    assert_eq!(r.measurement.value(), None);
}

#[test]
fn test_delete_habit_cascades_records() {
    let mut store = store_with_habit("h1");
    store.add_habit(habit("h2", HabitType::Bad)).unwrap();

    let dates = ["2025-01-01", "2025-01-02", "2025-01-03", "2025-01-04", "2025-01-05"];
    for d in dates {
        store.upsert_record(HabitRecord::success("h1", day(d))).unwrap();
    }
    store.upsert_record(HabitRecord::fail("h2", day("2025-01-01"))).unwrap();

    assert!(store.delete_habit("h1").unwrap());

    for d in dates {
        assert!(store.get_record("h1", day(d)).is_none());
    }
    assert_eq!(store.records().len(), 1);
    assert!(store.get_habit("h1").is_none());

    let reopened = HabitStore::open(store.storage().clone(), VERSION).unwrap();
    assert_eq!(reopened.records().len(), 1);
}

#[test]
fn test_delete_unknown_habit_is_not_an_error() {
    let mut store = store_with_habit("h1");
    assert!(!store.delete_habit("missing").unwrap());
    assert_eq!(store.habits().len(), 1);
}

#[test]
fn test_delete_record_and_cell_state() {
    let mut store = store_with_habit("h1");
    let d = day("2025-01-10");

    assert_eq!(store.cell_state("h1", d), CellState::Pending);

    store.upsert_record(HabitRecord::success("h1", d)).unwrap();
    assert_eq!(store.cell_state("h1", d), CellState::Success);

    assert!(store.delete_record("h1", d).unwrap());
    assert_eq!(store.cell_state("h1", d), CellState::Pending);

    // absent key: no-op
    assert!(!store.delete_record("h1", d).unwrap());
}

#[test]
fn test_update_habit_applies_only_given_fields() {
    let mut store = store_with_habit("h1");
    store
        .update_habit(
            "h1",
            HabitPatch {
                name: Some("  Read  ".into()),
                tags: Some(vec!["books".into()]),
                ..HabitPatch::default()
            },
        )
        .unwrap();

    let h = store.get_habit("h1").unwrap();
    assert_eq!(h.name, "Read");
    assert_eq!(h.tags, vec!["books".to_string()]);
    assert_eq!(h.kind, HabitType::Good);

    assert!(!store.update_habit("nope", HabitPatch::default()).unwrap());
}

#[test]
fn test_replace_habit_swaps_whole_habit() {
    let mut store = store_with_habit("h1");

    let mut replacement = habit("h1", HabitType::Bad);
    replacement.name = "Snacks".into();
    assert!(store.replace_habit(replacement).unwrap());

    let h = store.get_habit("h1").unwrap();
    assert_eq!(h.name, "Snacks");
    assert_eq!(h.kind, HabitType::Bad);

    assert!(!store.replace_habit(habit("other", HabitType::Good)).unwrap());
}

#[test]
fn test_find_habit_by_id_prefix_and_name() {
    let mut store = empty_store();
    store.add_habit(habit("abc123", HabitType::Good)).unwrap();
    store.add_habit(habit("abd456", HabitType::Good)).unwrap();

    let mut named = habit("zzz", HabitType::Bad);
    named.name = "Coffee".into();
    store.add_habit(named).unwrap();

    assert!(matches!(store.find_habit("abc123"), HabitMatch::One(h) if h.id == "abc123"));
    assert!(matches!(store.find_habit("abd"), HabitMatch::One(h) if h.id == "abd456"));
    assert_eq!(store.find_habit("ab"), HabitMatch::Ambiguous);
    assert!(matches!(store.find_habit("coffee"), HabitMatch::One(h) if h.id == "zzz"));
    assert_eq!(store.find_habit("tea"), HabitMatch::NotFound);
    assert_eq!(store.find_habit("  "), HabitMatch::NotFound);
}

#[test]
fn test_failed_write_keeps_memory_state() {
    let mut slots = MemorySlots::with_slots([(VERSION_KEY, VERSION)]);
    slots.set_fail_writes(true);

    let mut store = HabitStore::open(slots, VERSION).unwrap();
    let result = store.add_habit(habit("h1", HabitType::Good));

    assert!(matches!(result, Err(AppError::Storage(_))));
    assert!(store.get_habit("h1").is_some());
    assert_eq!(store.storage().raw(HABITS_KEY), None);
}

#[test]
fn test_reset_all_clears_everything() {
    let mut store = store_with_habit("h1");
    store.upsert_record(HabitRecord::success("h1", day("2025-01-10"))).unwrap();

    store.reset_all().unwrap();

    assert!(store.habits().is_empty());
    assert!(store.records().is_empty());
    assert_eq!(store.storage().raw(HABITS_KEY), Some("[]"));
    assert_eq!(store.storage().raw(RECORDS_KEY), Some("[]"));
}

#[test]
fn test_sqlite_slots_roundtrip() {
    let pool = DbPool::in_memory().unwrap();
    let mut slots = SqliteSlots::from_pool(pool).unwrap();

    assert_eq!(slots.get("habits").unwrap(), None);

    slots.set("habits", "[1]").unwrap();
    slots.set("habits", "[2]").unwrap();
    assert_eq!(slots.get("habits").unwrap().as_deref(), Some("[2]"));

    slots.remove("habits").unwrap();
    assert_eq!(slots.get("habits").unwrap(), None);
}

#[test]
fn test_store_on_sqlite_slots() {
    let pool = DbPool::in_memory().unwrap();
    let slots = SqliteSlots::from_pool(pool).unwrap();

    let mut store = HabitStore::open(slots, VERSION).unwrap();
    store.add_habit(habit("h1", HabitType::Good)).unwrap();
    store.upsert_record(HabitRecord::success("h1", day("2025-01-10"))).unwrap();

    assert_eq!(store.storage().get(VERSION_KEY).unwrap().as_deref(), Some(VERSION));
    let raw = store.storage().get(RECORDS_KEY).unwrap().unwrap();
    assert!(raw.contains("2025-01-10"));
}
