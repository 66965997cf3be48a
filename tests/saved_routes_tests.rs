use arcmaps_planner::core::saved_route::UNNAMED_ROUTE;
use arcmaps_planner::SavedRouteStore;
use chrono::{TimeZone, Utc};

fn store_in(dir: &tempfile::TempDir) -> SavedRouteStore {
    SavedRouteStore::new(dir.path().join("routes.json"))
}

#[test]
fn test_missing_file_lists_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(store_in(&dir).list().is_empty());
}

#[test]
fn test_save_list_get_delete() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir);

    let first = store.save("  Loot run ", "spaceport", "W10").expect("Speichern");
    let second = store.save("", "blue-gate", "W10").expect("Speichern");

    assert_eq!(first.name, "Loot run");
    assert_eq!(second.name, UNNAMED_ROUTE);
    assert_ne!(first.id, second.id);

    let listed = store.list();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0], first);

    assert_eq!(store.get(&second.id).map(|r| r.map_id), Some("blue-gate".to_string()));

    assert!(store.delete(&first.id).expect("Loeschen"));
    assert!(!store.delete(&first.id).expect("Loeschen"));
    assert_eq!(store.list(), vec![second]);
}

#[test]
fn test_colliding_timestamps_get_distinct_ids() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir);
    let at = Utc.with_ymd_and_hms(2025, 11, 2, 18, 30, 0).single().expect("Datum");

    let a = store.save_at("a", "spaceport", "W10", at).expect("Speichern");
    let b = store.save_at("b", "spaceport", "W10", at).expect("Speichern");

    assert_eq!(a.id, at.timestamp_millis().to_string());
    assert_eq!(b.id, (at.timestamp_millis() + 1).to_string());
}

#[test]
fn test_file_uses_camel_case_records() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir);
    store.save("x", "dam-battlegrounds", "tok").expect("Speichern");

    let raw = std::fs::read_to_string(store.path()).expect("Datei");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("JSON");
    assert_eq!(json[0]["mapId"], "dam-battlegrounds");
    assert_eq!(json[0]["state"], "tok");
    assert!(json[0]["savedAt"].is_string());
}

#[test]
fn test_corrupt_file_lists_nothing_and_save_recovers() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir);
    std::fs::write(store.path(), "{ not json").expect("Schreiben");

    assert!(store.list().is_empty());
    store.save("neu", "spaceport", "W10").expect("Speichern");
    assert_eq!(store.list().len(), 1);
}
